use std::collections::HashMap;

use songspace::builder::SimilarityGraphBuilder;
use songspace::cache::GraphCache;
use songspace::record::FeatureRecord;
use songspace::recommend::ranked_neighbours;

// instance_id;artist;track;genre;acousticness,danceability,energy,instrumentalness,liveness,valence
const CATALOG: &str = "
32894;Röyksopp;Röyksopp's Night Out;Electronic;0.00468,0.652,0.941,0.792,0.115,0.759
46652;Thievery Corporation;The Shining Path;Electronic;0.0127,0.622,0.890,0.950,0.124,0.531
30097;Dillon Francis;Hurricane;Electronic;0.00306,0.620,0.755,0.0118,0.534,0.333
62177;Dubloadz;Nitro;Electronic;0.0254,0.774,0.700,0.00253,0.157,0.270
24907;What So Not;Divide & Conquer;Electronic;0.00465,0.638,0.587,0.909,0.157,0.323
89064;Axel Boman;Hello;Electronic;0.523,0.755,0.731,0.854,0.216,0.614
43760;Jordan Comolli;Clash;Electronic;0.00484,0.405,0.730,0.0,0.0789,0.290
30738;Hraach;Delirio;Electronic;0.000225,0.710,0.775,0.902,0.0755,0.0906
84950;Kayzo;NEVER ALONE;Electronic;0.0146,0.405,0.923,0.000045,0.0953,0.167
56950;Shlump;Lazer Beam;Electronic;0.00111,0.770,0.838,0.000864,0.135,0.106
48461;Fleetwood Mac;Dreams;Rock;0.0644,0.828,0.492,0.00428,0.128,0.789
71258;Queen;Under Pressure;Rock;0.428,0.671,0.712,0.0,0.103,0.462
25129;Nirvana;Come As You Are;Rock;0.00016,0.500,0.824,0.00161,0.0916,0.539
57913;The Black Keys;Lonely Boy;Rock;0.00494,0.355,0.941,0.000297,0.0907,0.563
82044;Arctic Monkeys;Do I Wanna Know?;Rock;0.186,0.548,0.532,0.000263,0.217,0.405
39318;Pink Floyd;Wish You Were Here;Rock;0.653,0.478,0.265,0.00317,0.686,0.369
";

struct Song {
    artist: String,
    track: String,
    record: FeatureRecord<u64>,
}

/// Parse `id;artist;track;genre;features` lines.
fn parse_catalog(text: &str) -> Vec<Song> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|line| {
            let parts: Vec<&str> = line.splitn(5, ';').collect();
            let id: u64 = parts[0].parse().unwrap();
            let features: Vec<f64> = parts[4]
                .split(',')
                .map(|s| s.trim().parse::<f64>().unwrap())
                .collect();
            Song {
                artist: parts[1].to_string(),
                track: parts[2].to_string(),
                record: FeatureRecord::new(id, parts[3], features),
            }
        })
        .collect()
}

fn main() {
    songspace::init();

    let songs = parse_catalog(CATALOG);
    let records: Vec<FeatureRecord<u64>> = songs.iter().map(|s| s.record.clone()).collect();
    let names: HashMap<u64, String> = songs
        .iter()
        .map(|s| (s.record.id, format!("{} - {}", s.track, s.artist)))
        .collect();

    let mut cache = GraphCache::new(SimilarityGraphBuilder::new().with_neighbours(5));

    for query in [32894u64, 25129, 89064] {
        let song = songs.iter().find(|s| s.record.id == query).unwrap();
        let graph = cache
            .get_or_build(&records, &song.record.category)
            .unwrap();

        println!("Songs similar to {} ({}):", names[&query], song.record.category);
        for (i, (id, diff)) in ranked_neighbours(graph, &query)
            .unwrap()
            .into_iter()
            .take(5)
            .enumerate()
        {
            println!("  {}. {} (diff {:.4})", i + 1, names[&id], diff);
        }
        println!(
            "  average neighbour diff: {:.4}\n",
            graph.average_edge_weight(&query).unwrap()
        );
    }

    println!("{} category graphs built", cache.len());
}

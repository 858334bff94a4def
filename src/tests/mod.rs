mod test_graph;
mod test_record;

use crate::builder::BuildParams;

pub const SERIAL_PARAMS: BuildParams = BuildParams {
    k: 15,
    parallel: false,
};

pub fn init() {
    crate::init();
}

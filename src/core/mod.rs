pub mod cie_data;
pub mod color;
pub mod colorimetry;
pub mod coord;
pub mod sample_set;
pub mod sample_set2d;
pub mod spectrum;
pub mod util;

mod error;
mod regiongrow;
mod utils;

#[cfg(test)]
mod test_utils;

pub use error::RegionGrowingError;
pub use regiongrow::grow::{RegionGrowingExt, RegionGrowth, StopReason};

pub use imageproc::definitions::Image;

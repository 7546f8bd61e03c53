mod scoring;
mod skip_set;

pub use scoring::*;
pub use skip_set::*;

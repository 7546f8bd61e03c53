mod container;
mod decoder;
mod errors;
mod skip_set;

pub use container::{Container, Interval};
pub use decoder::{decode, decode_base64};
pub use errors::DecodeError;
pub use skip_set::SkipSet;

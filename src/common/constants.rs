/// Target used by every log line this library emits.
pub const LOG_TARGET: &str = "skip_list";

/// Script engine type the host selects this library with.
pub const SCRIPT_ENGINE_TYPE: &str = "skiplist";
/// The only script source this engine compiles.
pub const ROARING_SCRIPT_SOURCE: &str = "roaring";

pub const PARAM_FIELD: &str = "field";
pub const PARAM_DATA: &str = "data";

pub const DEFAULT_SKIP_SCORE: f64 = 0.0;

// Portable roaring bitmap layout.
pub const SERIAL_COOKIE_NO_RUNCONTAINER: u32 = 12346;
pub const SERIAL_COOKIE: u32 = 12347;
pub const NO_OFFSET_THRESHOLD: usize = 4;
pub const MAX_CONTAINERS: u32 = 1 << 16;
pub const ARRAY_CONTAINER_MAX_CARDINALITY: usize = 4096;
pub const BITMAP_CONTAINER_WORDS: usize = 1024;

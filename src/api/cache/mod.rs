mod script_cache;

use once_cell::sync::Lazy;

pub use script_cache::{CachedScript, ScriptCache};

pub static FFI_SCRIPT_CACHE: Lazy<ScriptCache> = Lazy::new(ScriptCache::new);

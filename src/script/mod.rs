mod engine;
mod errors;
mod factory;
mod params;
mod script_context;

pub use engine::SkipListScriptEngine;
pub use errors::{ConfigurationError, ScriptError};
pub use factory::{SkipListFactory, SkipListLeafFactory};
pub use params::SkipListParams;
pub use script_context::ScriptContext;

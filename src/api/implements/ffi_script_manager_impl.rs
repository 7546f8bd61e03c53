use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;

use crate::api::cache::{CachedScript, FFI_SCRIPT_CACHE};
use crate::common::constants::{PARAM_DATA, PARAM_FIELD};
use crate::common::errors::SkipListError;
use crate::core::RawFieldValue;
use crate::info_sl;
use crate::script::{ScriptContext, SkipListScriptEngine};
use crate::skip_list::SkipListConfig;

/// Engine used by scripts compiled over FFI, replaced when a new config is loaded.
static FFI_SCRIPT_ENGINE: Lazy<ArcSwap<SkipListScriptEngine>> =
    Lazy::new(|| ArcSwap::from_pointee(SkipListScriptEngine::default()));

/// Load `skip_list_config.json` from `config_directory` into `engine`.
///
/// Scripts compiled before the swap keep the config they were compiled with.
pub(crate) fn install_engine_config(
    engine: &ArcSwap<SkipListScriptEngine>,
    config_directory: &str,
) -> crate::Result<SkipListConfig> {
    let config = SkipListConfig::load(Path::new(config_directory))?;
    engine.store(Arc::new(SkipListScriptEngine::new(config)));
    info_sl!("[load_config] engine config from [{}] installed: {:?}", config_directory, config);
    Ok(config)
}

pub(crate) fn compile_with_engine(
    engine: &SkipListScriptEngine,
    script_id: &str,
    script_source: &str,
    field: &str,
    data: &str,
) -> crate::Result<()> {
    let factory = engine.compile(script_id, script_source, ScriptContext::Score)?;
    let params: HashMap<String, String> = HashMap::from([
        (PARAM_FIELD.to_string(), field.to_string()),
        (PARAM_DATA.to_string(), data.to_string()),
    ]);
    let leaf_factory = factory.new_factory(&params)?;

    FFI_SCRIPT_CACHE.set_script(script_id.to_string(), Arc::new(CachedScript::new(leaf_factory)));
    info_sl!("[compile] script [{}] cached, field: [{}]", script_id, field);
    Ok(())
}

pub fn ffi_skip_list_load_config_impl(config_directory: &str) -> crate::Result<SkipListConfig> {
    install_engine_config(&FFI_SCRIPT_ENGINE, config_directory)
}

pub fn ffi_skip_list_compile_impl(
    script_id: &str,
    script_source: &str,
    field: &str,
    data: &str,
) -> crate::Result<()> {
    let engine = FFI_SCRIPT_ENGINE.load();
    compile_with_engine(&engine, script_id, script_source, field, data)
}

/// Unknown scripts fall back to the ambient score like every other failure on this path.
pub fn ffi_skip_list_score_impl(
    script_id: &str,
    field_value: Option<i64>,
    ambient_score: f64,
) -> f64 {
    match FFI_SCRIPT_CACHE.get_script(script_id) {
        Some(script) => {
            let doc = RawFieldValue { field: script.context.field(), value: field_value };
            script.context.evaluate(&doc, ambient_score)
        }
        None => ambient_score,
    }
}

pub fn ffi_skip_list_needs_score_impl(script_id: &str) -> crate::Result<bool> {
    FFI_SCRIPT_CACHE
        .get_script(script_id)
        .map(|script| script.leaf_factory.needs_score())
        .ok_or_else(|| {
            SkipListError::InvalidArgument(format!("script [{}] is not compiled", script_id))
        })
}

pub fn ffi_skip_list_free_impl(script_id: &str) -> bool {
    FFI_SCRIPT_CACHE.remove_script(script_id)
}

use crate::common::constants::{ROARING_SCRIPT_SOURCE, SCRIPT_ENGINE_TYPE};
use crate::skip_list::SkipListConfig;
use crate::{debug_sl, error_sl};

use super::{ScriptContext, ScriptError, SkipListFactory};

/// Script engine registered with the host under the `skiplist` type.
#[derive(Debug, Clone, Default)]
pub struct SkipListScriptEngine {
    config: SkipListConfig,
}

impl SkipListScriptEngine {
    pub fn new(config: SkipListConfig) -> Self {
        Self { config }
    }

    pub fn engine_type(&self) -> &'static str {
        SCRIPT_ENGINE_TYPE
    }

    pub fn config(&self) -> &SkipListConfig {
        &self.config
    }

    /// Compile `script_source` for `context`. Only the `roaring` score script exists.
    pub fn compile(
        &self,
        script_name: &str,
        script_source: &str,
        context: ScriptContext,
    ) -> Result<SkipListFactory, ScriptError> {
        if context != ScriptContext::Score {
            let error = ScriptError::UnsupportedContext {
                engine: self.engine_type(),
                context: context.name(),
            };
            error_sl!("[compile] script `{}`: {}", script_name, error);
            return Err(error);
        }
        if script_source != ROARING_SCRIPT_SOURCE {
            let error = ScriptError::UnknownScript(script_source.to_string());
            error_sl!("[compile] script `{}`: {}", script_name, error);
            return Err(error);
        }
        debug_sl!("[compile] script `{}` compiled with source `{}`", script_name, script_source);
        Ok(SkipListFactory::new(self.config))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::SkipListScriptEngine;
    use crate::core::{DocValues, Document};
    use crate::script::{ScriptContext, ScriptError};
    use crate::skip_list::SkipListConfig;

    #[test]
    fn test_engine_type() {
        assert_eq!(SkipListScriptEngine::default().engine_type(), "skiplist");
    }

    #[test]
    fn test_compile_rejects_other_contexts() {
        let engine = SkipListScriptEngine::default();
        let error = engine.compile("skip", "roaring", ScriptContext::Filter).unwrap_err();
        assert_eq!(
            error,
            ScriptError::UnsupportedContext { engine: "skiplist", context: "filter" }
        );
        assert_eq!(error.to_string(), "skiplist scripts cannot be used for context [filter]");
    }

    #[test]
    fn test_compile_rejects_unknown_source() {
        let engine = SkipListScriptEngine::default();
        let error = engine.compile("skip", "bloom", ScriptContext::Score).unwrap_err();
        assert_eq!(error.to_string(), "Unknown script name bloom");
    }

    #[test]
    fn test_compile_and_score() {
        let engine = SkipListScriptEngine::new(SkipListConfig::default());
        let factory =
            engine.compile("skip", "roaring", ScriptContext::Score).expect("compile roaring");

        // bitmap {42} in the no-run layout
        let params: HashMap<String, String> =
            [("field", "doc_id"), ("data", "OjAAAAEAAAAAAAAAEAAAACoA")]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
        let leaf_factory = factory.new_factory(&params).expect("valid params");
        let context = leaf_factory.new_instance();

        let member = Document::new().with_field("doc_id", DocValues::Longs(vec![42]));
        let other = Document::new().with_field("doc_id", DocValues::Longs(vec![43]));
        assert_eq!(context.evaluate(&member, 7.5), 0.0);
        assert_eq!(context.evaluate(&other, 7.5), 7.5);
    }
}

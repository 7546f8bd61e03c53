mod api;
mod common;
mod core;
mod macros;
mod script;
mod skip_list;

pub use crate::api::*;
pub use crate::common::constants;
pub use crate::common::errors::SkipListError;
pub use crate::core::{
    decode, decode_base64, DecodeError, DocValues, Document, EvaluationOutcome, FieldAccessor,
    FieldReadError, RawFieldValue, ScoreScript, ScoringContext, SkipSet, SkipSetState,
};
pub use crate::script::{
    ConfigurationError, ScriptContext, ScriptError, SkipListFactory, SkipListLeafFactory,
    SkipListParams, SkipListScriptEngine,
};
pub use crate::skip_list::SkipListConfig;

pub type Result<T> = std::result::Result<T, SkipListError>;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use roaring::RoaringBitmap;

    use crate::{DocValues, Document, ScriptContext, SkipListConfig, SkipListScriptEngine};

    fn get_logger() -> env_logger::Builder {
        let mut builder = env_logger::Builder::from_default_env();
        builder.filter(None, log::LevelFilter::Debug).is_test(true);
        builder
    }

    fn mock_params(field: &str, values: &[u32]) -> HashMap<String, String> {
        let bitmap: RoaringBitmap = values.iter().copied().collect();
        let mut bytes = vec![];
        bitmap.serialize_into(&mut bytes).expect("serialize roaring bitmap");
        HashMap::from([
            ("field".to_string(), field.to_string()),
            ("data".to_string(), STANDARD.encode(bytes)),
        ])
    }

    #[test]
    fn test_query_lifecycle() {
        let _ = get_logger().try_init();

        let engine = SkipListScriptEngine::new(SkipListConfig::default());
        let factory =
            engine.compile("soft_exclude", "roaring", ScriptContext::Score).expect("compile");
        let leaf_factory =
            factory.new_factory(&mock_params("doc_id", &[0, 42, u32::MAX])).expect("params");
        assert!(leaf_factory.needs_score());

        // two partitions of the same query
        let segments = [vec![0i64, 1, 42], vec![43, 4294967295, 4294967294]];
        let mut scores = Vec::new();
        for segment in segments.iter() {
            let context = leaf_factory.new_instance();
            for id in segment {
                let doc = Document::new().with_field("doc_id", DocValues::Longs(vec![*id]));
                scores.push(context.evaluate(&doc, 7.5));
            }
        }
        assert_eq!(scores, vec![0.0, 7.5, 0.0, 7.5, 0.0, 7.5]);
    }

    #[test]
    fn test_missing_params_fail_compilation() {
        let engine = SkipListScriptEngine::default();
        let factory =
            engine.compile("soft_exclude", "roaring", ScriptContext::Score).expect("compile");

        let mut only_field = mock_params("doc_id", &[1]);
        only_field.remove("data");
        let error = factory.new_factory(&only_field).unwrap_err();
        assert!(error.to_string().contains("data"));

        let mut only_data = mock_params("doc_id", &[1]);
        only_data.remove("field");
        let error = factory.new_factory(&only_data).unwrap_err();
        assert!(error.to_string().contains("field"));
    }

    #[test]
    fn test_log_macros_use_public_target() {
        let _ = get_logger().try_init();
        assert_eq!(crate::constants::LOG_TARGET, "skip_list");

        crate::trace_sl!("trace from {}", "lib tests");
        crate::debug_sl!("debug from {}", "lib tests");
        crate::info_sl!("info from {}", "lib tests");
        crate::warn_sl!("warn from {}", "lib tests");
        crate::error_sl!("error from {}", "lib tests");
    }
}

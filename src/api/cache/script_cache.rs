use std::sync::Arc;

use flurry::HashMap;

use crate::core::ScoringContext;
use crate::script::SkipListLeafFactory;
use crate::warn_sl;

/// A script compiled over FFI, with the scoring context documents are evaluated against.
#[derive(Debug)]
pub struct CachedScript {
    pub leaf_factory: SkipListLeafFactory,
    pub context: ScoringContext,
}

impl CachedScript {
    pub fn new(leaf_factory: SkipListLeafFactory) -> Self {
        let context = leaf_factory.new_instance();
        Self { leaf_factory, context }
    }
}

/// Compiled scripts kept alive between FFI calls, keyed by script id.
pub struct ScriptCache {
    cache: HashMap<String, Arc<CachedScript>>,
}

impl Default for ScriptCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptCache {
    pub fn new() -> Self {
        Self { cache: HashMap::new() }
    }

    pub fn set_script(&self, key: String, value: Arc<CachedScript>) {
        let pinned = self.cache.pin();
        if pinned.insert(key.clone(), value).is_some() {
            warn_sl!("script already exists with given key: [{}], it has been overwritten.", key);
        }
    }

    pub fn get_script(&self, key: &str) -> Option<Arc<CachedScript>> {
        let pinned = self.cache.pin();
        pinned.get(key).cloned()
    }

    pub fn remove_script(&self, key: &str) -> bool {
        let pinned = self.cache.pin();
        pinned.remove(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{CachedScript, ScriptCache};
    use crate::script::{ScriptContext, SkipListParams, SkipListScriptEngine};

    fn mock_script() -> Arc<CachedScript> {
        let factory = SkipListScriptEngine::default()
            .compile("s", "roaring", ScriptContext::Score)
            .expect("compile");
        Arc::new(CachedScript::new(factory.new_leaf_factory(SkipListParams::new("doc_id", ""))))
    }

    #[test]
    fn test_set_get_remove() {
        let cache = ScriptCache::new();

        cache.set_script("q1".to_string(), mock_script());
        cache.set_script("q1".to_string(), mock_script());
        let script = cache.get_script("q1").expect("cached");
        assert_eq!(script.context.field(), "doc_id");
        assert!(!script.context.skip_set_state().is_available());
        assert!(cache.get_script("q2").is_none());

        assert!(cache.remove_script("q1"));
        assert!(!cache.remove_script("q1"));
        assert!(cache.get_script("q1").is_none());
    }
}

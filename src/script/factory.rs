use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::core::{ScoringContext, SkipSetState};
use crate::skip_list::SkipListConfig;
use crate::{debug_sl, info_sl};

use super::{ConfigurationError, SkipListParams};

/// Query level factory handed out by
/// [`SkipListScriptEngine::compile`](super::SkipListScriptEngine::compile).
#[derive(Debug, Clone)]
pub struct SkipListFactory {
    config: SkipListConfig,
}

impl SkipListFactory {
    pub(super) fn new(config: SkipListConfig) -> Self {
        Self { config }
    }

    /// Validate raw script parameters, failing fast on a missing `field` or `data`.
    pub fn new_factory(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<SkipListLeafFactory, ConfigurationError> {
        Ok(self.new_leaf_factory(SkipListParams::from_map(params)?))
    }

    pub fn new_leaf_factory(&self, params: SkipListParams) -> SkipListLeafFactory {
        SkipListLeafFactory::new(params, self.config)
    }
}

/// Builds one [`ScoringContext`] per partition of a query.
///
/// The skip set is decoded by the first `new_instance` call and shared with every later one.
#[derive(Debug)]
pub struct SkipListLeafFactory {
    field: Arc<str>,
    data: String,
    config: SkipListConfig,
    skip_set: OnceCell<Arc<SkipSetState>>,
}

impl SkipListLeafFactory {
    fn new(params: SkipListParams, config: SkipListConfig) -> Self {
        Self {
            field: Arc::from(params.field),
            data: params.data,
            config,
            skip_set: OnceCell::new(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn needs_score(&self) -> bool {
        self.config.needs_score
    }

    /// Decoded skip set, `None` until the first partition was instantiated.
    pub fn skip_set_state(&self) -> Option<&Arc<SkipSetState>> {
        self.skip_set.get()
    }

    pub fn new_instance(&self) -> ScoringContext {
        let skip_set = self.skip_set.get_or_init(|| {
            let state = SkipSetState::from_base64(&self.data);
            if let SkipSetState::Available(skip_set) = &state {
                info_sl!(
                    "decoded skip set for field [{}], containers: {}, values: {}",
                    self.field,
                    skip_set.container_count(),
                    skip_set.len()
                );
            }
            Arc::new(state)
        });
        debug_sl!("new scoring context for field [{}]", self.field);
        ScoringContext::new(skip_set.clone(), self.field.clone(), self.config.skip_score)
    }
}

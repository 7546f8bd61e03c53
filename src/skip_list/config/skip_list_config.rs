use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::common::constants::DEFAULT_SKIP_SCORE;
use crate::common::errors::SkipListError;

pub const SKIP_LIST_CONFIG_FILE: &str = "skip_list_config.json";

fn default_skip_score() -> f64 {
    DEFAULT_SKIP_SCORE
}

fn default_needs_score() -> bool {
    true
}

/// Engine wide settings, shared by every script the engine compiles.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub struct SkipListConfig {
    /// Score assigned to documents found in the skip set.
    #[serde(default = "default_skip_score")]
    pub skip_score: f64,

    /// Whether the host must compute the real relevance score before calling us.
    /// Fallback paths return that score, so turning this off lets the host hand over a placeholder.
    #[serde(default = "default_needs_score")]
    pub needs_score: bool,
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self { skip_score: default_skip_score(), needs_score: default_needs_score() }
    }
}

impl SkipListConfig {
    pub fn new(skip_score: f64, needs_score: bool) -> Self {
        SkipListConfig { skip_score, needs_score }
    }

    pub fn from_json(json: &str) -> Result<Self, SkipListError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(config_directory: &Path) -> Result<Self, SkipListError> {
        let file_path = config_directory.join(SKIP_LIST_CONFIG_FILE);
        let content = std::fs::read_to_string(file_path)?;
        Self::from_json(&content)
    }

    pub fn save(&self, config_directory: &Path) -> Result<(), SkipListError> {
        if !config_directory.exists() {
            std::fs::create_dir_all(config_directory)?;
        }
        let file_path = config_directory.join(SKIP_LIST_CONFIG_FILE);
        std::fs::write(file_path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

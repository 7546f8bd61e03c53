use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::common::constants::{PARAM_DATA, PARAM_FIELD};

use super::ConfigurationError;

/// Validated `field` and `data` script parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipListParams {
    /// Integer field holding the document id tested against the skip set.
    pub field: String,
    /// Base64 encoded roaring bitmap.
    pub data: String,
}

impl SkipListParams {
    pub fn new(field: &str, data: &str) -> Self {
        Self { field: field.to_string(), data: data.to_string() }
    }

    /// `field` is checked before `data`, the error names the first absent one.
    pub fn from_map(params: &HashMap<String, String>) -> Result<Self, ConfigurationError> {
        let field =
            params.get(PARAM_FIELD).ok_or(ConfigurationError::MissingParameter(PARAM_FIELD))?;
        let data = params.get(PARAM_DATA).ok_or(ConfigurationError::MissingParameter(PARAM_DATA))?;
        Ok(Self { field: field.clone(), data: data.clone() })
    }

    /// Parse a JSON params object.
    /// Non-string values are taken by their JSON text, `null` counts as absent.
    pub fn from_json(params: &str) -> Result<Self, ConfigurationError> {
        let value: Value = serde_json::from_str(params)
            .map_err(|e| ConfigurationError::InvalidParameters(e.to_string()))?;
        match value {
            Value::Object(object) => Self::from_json_object(&object),
            other => Err(ConfigurationError::InvalidParameters(other.to_string())),
        }
    }

    pub fn from_json_object(params: &Map<String, Value>) -> Result<Self, ConfigurationError> {
        let field = json_param(params, PARAM_FIELD)?;
        let data = json_param(params, PARAM_DATA)?;
        Ok(Self { field, data })
    }
}

fn json_param(
    params: &Map<String, Value>,
    name: &'static str,
) -> Result<String, ConfigurationError> {
    match params.get(name) {
        None | Some(Value::Null) => Err(ConfigurationError::MissingParameter(name)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Ok(other.to_string()),
    }
}

use std::collections::HashMap;

use super::FieldReadError;

/// Host capability giving access to the current document's fields.
pub trait FieldAccessor {
    /// Read `field` as one integer. Multi-valued fields yield their first value.
    fn read_integer(&self, field: &str) -> Result<i64, FieldReadError>;
}

/// Doc values of one field, as handed over by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum DocValues {
    Longs(Vec<i64>),
    Doubles(Vec<f64>),
    Keywords(Vec<String>),
}

impl DocValues {
    fn type_name(&self) -> &'static str {
        match self {
            DocValues::Longs(_) => "long",
            DocValues::Doubles(_) => "double",
            DocValues::Keywords(_) => "keyword",
        }
    }
}

/// In-memory document made of named doc values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: HashMap<String, DocValues>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: &str, values: DocValues) -> Self {
        self.fields.insert(name.to_string(), values);
        self
    }

    pub fn insert(&mut self, name: &str, values: DocValues) {
        self.fields.insert(name.to_string(), values);
    }
}

impl FieldAccessor for Document {
    fn read_integer(&self, field: &str) -> Result<i64, FieldReadError> {
        match self.fields.get(field) {
            None => Err(FieldReadError::Missing(field.to_string())),
            Some(DocValues::Longs(values)) => {
                values.first().copied().ok_or_else(|| FieldReadError::Empty(field.to_string()))
            }
            Some(other) => Err(FieldReadError::NotInteger {
                field: field.to_string(),
                found: other.type_name(),
            }),
        }
    }
}

/// A single optional value, the shape doc values take when crossing the C ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFieldValue<'a> {
    pub field: &'a str,
    pub value: Option<i64>,
}

impl FieldAccessor for RawFieldValue<'_> {
    fn read_integer(&self, field: &str) -> Result<i64, FieldReadError> {
        if field != self.field {
            return Err(FieldReadError::Missing(field.to_string()));
        }
        self.value.ok_or_else(|| FieldReadError::Empty(field.to_string()))
    }
}

mod errors;
mod field_accessor;
mod scoring_context;

pub use errors::FieldReadError;
pub use field_accessor::{DocValues, Document, FieldAccessor, RawFieldValue};
pub use scoring_context::{EvaluationOutcome, ScoreScript, ScoringContext, SkipSetState};

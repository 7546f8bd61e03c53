use std::sync::Arc;

use crate::core::skip_set::{decode_base64, DecodeError, SkipSet};
use crate::{trace_sl, warn_sl};

use super::{FieldAccessor, FieldReadError};

/// Outcome of decoding the `data` parameter, decided once per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipSetState {
    Available(SkipSet),
    Unavailable(DecodeError),
}

impl SkipSetState {
    /// Decode a base64 skip set, recording failure instead of returning it.
    pub fn from_base64(data: &str) -> Self {
        let state = SkipSetState::from(decode_base64(data));
        if let SkipSetState::Unavailable(e) = &state {
            warn_sl!("skip set is unavailable, every document keeps its score: {}", e);
        }
        state
    }

    pub fn skip_set(&self) -> Option<&SkipSet> {
        match self {
            SkipSetState::Available(skip_set) => Some(skip_set),
            SkipSetState::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.skip_set().is_some()
    }
}

impl From<Result<SkipSet, DecodeError>> for SkipSetState {
    fn from(value: Result<SkipSet, DecodeError>) -> Self {
        match value {
            Ok(skip_set) => SkipSetState::Available(skip_set),
            Err(e) => SkipSetState::Unavailable(e),
        }
    }
}

/// Path a single document took through evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationOutcome {
    SkipSetUnavailable,
    FieldError(FieldReadError),
    Member,
    NonMember,
}

/// Per-document scoring entry point, called by the host once per matched document.
pub trait ScoreScript {
    fn execute(&self, doc: &dyn FieldAccessor, ambient_score: f64) -> f64;
}

/// Evaluation state for one partition (segment) of a query.
///
/// Every context of a query shares the same [`SkipSetState`].
#[derive(Debug, Clone)]
pub struct ScoringContext {
    skip_set: Arc<SkipSetState>,
    field: Arc<str>,
    skip_score: f64,
}

impl ScoringContext {
    pub fn new(skip_set: Arc<SkipSetState>, field: Arc<str>, skip_score: f64) -> Self {
        Self { skip_set, field, skip_score }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn skip_score(&self) -> f64 {
        self.skip_score
    }

    pub fn skip_set_state(&self) -> &SkipSetState {
        &self.skip_set
    }

    pub fn classify<A: FieldAccessor + ?Sized>(&self, doc: &A) -> EvaluationOutcome {
        let skip_set = match self.skip_set.skip_set() {
            Some(skip_set) => skip_set,
            None => return EvaluationOutcome::SkipSetUnavailable,
        };
        let value = match doc.read_integer(&self.field) {
            Ok(value) => value,
            Err(e) => return EvaluationOutcome::FieldError(e),
        };
        // document ids are 32 bits wide, only the low half of the long is significant.
        match skip_set.contains(value as u32) {
            true => EvaluationOutcome::Member,
            false => EvaluationOutcome::NonMember,
        }
    }

    pub fn evaluate<A: FieldAccessor + ?Sized>(&self, doc: &A, ambient_score: f64) -> f64 {
        match self.classify(doc) {
            EvaluationOutcome::Member => self.skip_score,
            EvaluationOutcome::FieldError(e) => {
                trace_sl!("fall back to ambient score: {}", e);
                ambient_score
            }
            EvaluationOutcome::SkipSetUnavailable | EvaluationOutcome::NonMember => ambient_score,
        }
    }
}

impl ScoreScript for ScoringContext {
    fn execute(&self, doc: &dyn FieldAccessor, ambient_score: f64) -> f64 {
        self.evaluate(doc, ambient_score)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use rand::Rng;
    use roaring::RoaringBitmap;

    use super::{EvaluationOutcome, ScoreScript, ScoringContext, SkipSetState};
    use crate::core::scoring::{DocValues, Document, FieldReadError};
    use crate::core::skip_set::DecodeError;

    fn encode(values: &[u32]) -> String {
        let bitmap: RoaringBitmap = values.iter().copied().collect();
        let mut bytes = vec![];
        bitmap.serialize_into(&mut bytes).expect("serialize roaring bitmap");
        STANDARD.encode(bytes)
    }

    fn mock_context(data: &str) -> ScoringContext {
        ScoringContext::new(Arc::new(SkipSetState::from_base64(data)), Arc::from("doc_id"), 0.0)
    }

    fn doc_with_id(id: i64) -> Document {
        Document::new().with_field("doc_id", DocValues::Longs(vec![id]))
    }

    #[test]
    fn test_member_gets_skip_score() {
        let context = mock_context(&encode(&[42]));
        assert_eq!(context.evaluate(&doc_with_id(42), 7.5), 0.0);
        assert_eq!(context.evaluate(&doc_with_id(42), 1000.0), 0.0);
        assert_eq!(context.classify(&doc_with_id(42)), EvaluationOutcome::Member);
    }

    #[test]
    fn test_non_member_keeps_ambient_score() {
        let context = mock_context(&encode(&[42]));
        assert_eq!(context.evaluate(&doc_with_id(43), 7.5), 7.5);
        assert_eq!(context.classify(&doc_with_id(43)), EvaluationOutcome::NonMember);
    }

    #[test]
    fn test_field_error_keeps_ambient_score() {
        let context = mock_context(&encode(&[42]));

        let missing = Document::new();
        assert_eq!(context.evaluate(&missing, 7.5), 7.5);
        assert_eq!(
            context.classify(&missing),
            EvaluationOutcome::FieldError(FieldReadError::Missing("doc_id".to_string()))
        );

        let empty = Document::new().with_field("doc_id", DocValues::Longs(vec![]));
        assert_eq!(context.evaluate(&empty, 3.25), 3.25);

        let keyword =
            Document::new().with_field("doc_id", DocValues::Keywords(vec!["42".to_string()]));
        assert_eq!(context.evaluate(&keyword, 3.25), 3.25);
    }

    #[test]
    fn test_unavailable_skip_set_keeps_ambient_score() {
        let mut rng = rand::thread_rng();
        let mut payloads = vec!["".to_string(), "%%%".to_string(), STANDARD.encode([0u8, 1, 2])];
        for _ in 0..200 {
            let bytes: Vec<u8> = (0..rng.gen_range(0..32)).map(|_| rng.gen()).collect();
            payloads.push(STANDARD.encode(bytes));
        }

        for payload in payloads {
            let context = mock_context(&payload);
            if context.skip_set_state().is_available() {
                // random bytes may still form a valid bitmap, those are covered elsewhere.
                continue;
            }
            for id in [0, 42, -1, i64::MAX] {
                let ambient = rng.gen_range(0.0..100.0);
                assert_eq!(context.evaluate(&doc_with_id(id), ambient), ambient);
                assert_eq!(
                    context.classify(&doc_with_id(id)),
                    EvaluationOutcome::SkipSetUnavailable
                );
            }
        }
    }

    #[test]
    fn test_state_from_decode_result() {
        assert_eq!(
            SkipSetState::from(Err(DecodeError::Truncated("cookie"))),
            SkipSetState::Unavailable(DecodeError::Truncated("cookie"))
        );
        assert_eq!(
            SkipSetState::from_base64(""),
            SkipSetState::Unavailable(DecodeError::Truncated("cookie"))
        );

        let state = SkipSetState::from_base64(&encode(&[42]));
        assert!(state.is_available());
        assert_eq!(state.skip_set().map(|s| s.contains(42)), Some(true));
    }

    #[test]
    fn test_long_values_are_truncated_to_u32() {
        let context = mock_context(&encode(&[u32::MAX, 5]));
        assert_eq!(context.evaluate(&doc_with_id(-1), 2.0), 0.0);
        assert_eq!(context.evaluate(&doc_with_id((1i64 << 32) + 5), 2.0), 0.0);
        assert_eq!(context.evaluate(&doc_with_id(6), 2.0), 2.0);
    }

    #[test]
    fn test_custom_skip_score_and_dyn_dispatch() {
        let state = Arc::new(SkipSetState::from_base64(&encode(&[1])));
        let context = ScoringContext::new(state.clone(), Arc::from("doc_id"), -1.0);
        let script: &dyn ScoreScript = &context;
        assert_eq!(script.execute(&doc_with_id(1), 5.0), -1.0);
        assert_eq!(script.execute(&doc_with_id(2), 5.0), 5.0);
        assert_eq!(Arc::strong_count(&state), 2);
    }
}

//! Consistency-evaluation result, produced by an external evaluator.

use crate::schema::SchemaModel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Externally computed quality/coherence scores for a finished dialogue.
///
/// The evaluator owns the shape of this record; this crate stores and
/// round-trips it as-is without interpreting its contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ConsistencyEvaluation(pub serde_json::Value);

impl SchemaModel for ConsistencyEvaluation {}

impl From<serde_json::Value> for ConsistencyEvaluation {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trips_arbitrary_shape() {
        let evaluation = ConsistencyEvaluation(json!({
            "overall_score": 0.87,
            "dimensions": {"coherence": 0.9, "persona": 0.84},
            "notes": ["role_2 drifts in turn 5"],
        }));

        let text = evaluation.to_json(false).unwrap();
        let restored = ConsistencyEvaluation::from_json(&text).unwrap();
        assert_eq!(restored, evaluation);
        assert_eq!(restored.0["dimensions"]["coherence"], 0.9);
    }
}

//! The aggregate dialogue record.

use crate::dialogue::evaluation::ConsistencyEvaluation;
use crate::dialogue::metadata::Metadata;
use crate::dialogue::scenario::DialogueScenario;
use crate::dialogue::turn::ConversationTurn;
use crate::schema::SchemaModel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete dialogue package: scenario, metadata, script, turns, evaluation.
///
/// Producers fill the fields in incrementally as the pipeline progresses,
/// so every field is optional and the record imposes no stage ordering of
/// its own. Absent fields serialize as explicit `null`s, which keeps
/// partially built checkpoints readable by external tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dialogue {
    /// High-level parameters the dialogue is generated from.
    #[serde(default)]
    pub scenario: Option<DialogueScenario>,

    /// Complete metadata for the dialogue.
    #[serde(default)]
    pub metadata: Option<Metadata>,

    /// Script outline for the dialogue.
    #[serde(default)]
    pub script: Option<String>,

    /// The actual conversation turns, in speaking order.
    #[serde(default)]
    pub conversation: Option<Vec<ConversationTurn>>,

    /// Evaluation results for the dialogue's consistency.
    #[serde(default)]
    pub consistency_evaluation: Option<ConsistencyEvaluation>,
}

impl SchemaModel for Dialogue {}

impl Dialogue {
    /// Creates an empty dialogue with no sections populated.
    pub fn new() -> Self {
        Self::default()
    }
}

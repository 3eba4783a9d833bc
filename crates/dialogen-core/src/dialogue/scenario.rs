//! High-level generation brief for a dialogue.

use crate::schema::SchemaModel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_dialogue_language() -> String {
    "English".to_string()
}

/// The high-level parameters a dialogue is generated from.
///
/// A scenario exists before any concrete content does; downstream stages
/// (metadata, script, conversation) are all derived from it.
///
/// `dialogue_language` and `custom_prompt` are control inputs rather than
/// scenario content, so they are excluded from the generated schema view
/// that prompt construction presents to a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DialogueScenario {
    /// Type or purpose of the dialogue, such as "interview", "debate", "negotiation".
    pub dialogue_type: String,

    /// Temporal background, such as "21st century", "modern day", "information age".
    pub temporal_context: String,

    /// Spatial or geographical background, such as "urban", "corporate", "academic".
    pub spatial_context: String,

    /// Cultural background, such as "Western", "Eastern", "Global".
    pub cultural_background: String,

    /// Language the dialogue should be written in.
    #[serde(default = "default_dialogue_language")]
    #[schemars(skip)]
    pub dialogue_language: String,

    /// User-supplied prompt providing additional guidance or constraints.
    #[serde(default)]
    #[schemars(skip)]
    pub custom_prompt: String,
}

impl SchemaModel for DialogueScenario {}

//! Scene, speaker, and conversation-context metadata.
//!
//! `Metadata` is the fixed description shared by every turn of a dialogue:
//! one scene, exactly two speakers, and the conversational frame they talk
//! within. It is produced once, after the scenario and before any turns.

use crate::schema::SchemaModel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The scene a conversation takes place in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Setting {
    /// Physical location where the conversation takes place.
    pub location: String,
    /// Time of day when the conversation occurs.
    pub time_of_day: String,
    /// Brief description of the situational context.
    pub context: String,
    /// Mood or feeling of the environment.
    pub atmosphere: String,
}

impl SchemaModel for Setting {}

/// One of the two speakers in a dialogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Role {
    /// Full name of the speaker.
    pub name: String,
    /// Gender of the speaker.
    pub gender: String,
    /// Age of the speaker in years.
    pub age: u32,
    /// Current occupation or role.
    pub occupation: String,
    /// Nationality of the speaker.
    pub nationality: String,
    /// Key personality traits that define the speaker, in presentation order.
    pub personality_traits: Vec<String>,
    /// The speaker's relationship or role in the current context.
    pub relationship_context: String,
    /// Detailed description of the speaker's characteristics and background.
    pub self_introduction: String,
}

impl SchemaModel for Role {}

/// The conversational frame: topic, dynamic, tone, and expected shape.
///
/// `expected_turns` is a generation target, not a constraint; it is never
/// checked against the number of turns actually produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConversationContext {
    /// Type or category of the conversation.
    #[serde(rename = "type")]
    pub kind: String,
    /// Primary topic or purpose of the conversation.
    pub main_topic: String,
    /// Nature of the relationship between the speakers.
    pub relationship_dynamic: String,
    /// Overall emotional tone of the conversation.
    pub emotional_tone: String,
    /// Expected length of the conversation.
    pub expected_duration: String,
    /// Expected number of conversation turns.
    pub expected_turns: u32,
    /// Key points or events expected in the conversation, in order.
    pub key_points: Vec<String>,
}

impl SchemaModel for ConversationContext {}

/// Complete metadata for a dialogue: setting, both speakers, and context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    /// Details about the conversation setting.
    pub setting: Setting,
    /// Details about the first speaker.
    pub role_1: Role,
    /// Details about the second speaker.
    pub role_2: Role,
    /// Details about the conversation context and structure.
    pub conversation_context: ConversationContext,
}

impl SchemaModel for Metadata {}

//! Conversation turn types.

use crate::schema::SchemaModel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single utterance by one speaker.
///
/// `speaker_id` identifies which of the two metadata roles is talking
/// ("role_1" or "role_2"). The correspondence is a convention between
/// producers and consumers, not a structural guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConversationTurn {
    /// Identifier for the speaker (role_1 or role_2).
    pub speaker_id: String,
    /// Name of the speaker.
    pub speaker_name: String,
    /// The actual dialogue text.
    pub text: String,
    /// Emotional state of the speaker during this turn.
    pub emotion: String,
    /// Rate of speech for this turn.
    pub speech_rate: String,
    /// Length of the pause after this turn.
    pub pause_after: String,
    /// Natural-language prompt describing how a TTS model should speak the text.
    pub tts_prompt: String,
}

impl SchemaModel for ConversationTurn {}

/// An ordered sequence of turns.
///
/// This is the schema view turn generation targets; a finished `Dialogue`
/// stores the turns directly rather than through this wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Conversation {
    /// The conversation utterances, in speaking order.
    pub utterances: Vec<ConversationTurn>,
}

impl SchemaModel for Conversation {}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn sample_turn(speaker_id: &str, text: &str) -> ConversationTurn {
        ConversationTurn {
            speaker_id: speaker_id.to_string(),
            speaker_name: "Ana".to_string(),
            text: text.to_string(),
            emotion: "calm".to_string(),
            speech_rate: "medium".to_string(),
            pause_after: "short".to_string(),
            tts_prompt: "calm, even delivery".to_string(),
        }
    }

    #[test]
    fn test_turn_requires_tts_prompt() {
        let err = ConversationTurn::from_value(json!({
            "speaker_id": "role_1",
            "speaker_name": "Ana",
            "text": "Hello.",
            "emotion": "calm",
            "speech_rate": "medium",
            "pause_after": "short",
        }))
        .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn test_conversation_preserves_turn_order() {
        let conversation = Conversation {
            utterances: vec![
                sample_turn("role_1", "Hello."),
                sample_turn("role_2", "Hi there."),
                sample_turn("role_1", "How was the night shift?"),
            ],
        };

        let restored =
            Conversation::from_json(&conversation.to_json(true).unwrap()).unwrap();
        assert_eq!(restored, conversation);
        assert_eq!(restored.utterances[1].text, "Hi there.");
    }
}

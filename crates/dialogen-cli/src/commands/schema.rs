use anyhow::Result;
use clap::ValueEnum;
use dialogen_core::dialogue::{
    Conversation, ConversationContext, ConversationTurn, Dialogue, DialogueScenario, Metadata,
    Role, Setting,
};
use dialogen_core::schema::SchemaModel;

/// Record types whose generated JSON schema can be printed.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RecordKind {
    Scenario,
    Setting,
    Role,
    Context,
    Metadata,
    Turn,
    Conversation,
    Dialogue,
}

/// Prints the generated JSON schema for the requested record to stdout.
pub fn run(record: RecordKind) -> Result<()> {
    let schema = match record {
        RecordKind::Scenario => DialogueScenario::json_schema(),
        RecordKind::Setting => Setting::json_schema(),
        RecordKind::Role => Role::json_schema(),
        RecordKind::Context => ConversationContext::json_schema(),
        RecordKind::Metadata => Metadata::json_schema(),
        RecordKind::Turn => ConversationTurn::json_schema(),
        RecordKind::Conversation => Conversation::json_schema(),
        RecordKind::Dialogue => Dialogue::json_schema(),
    };

    println!("{}", serde_json::to_string_pretty(schema.as_value())?);
    Ok(())
}

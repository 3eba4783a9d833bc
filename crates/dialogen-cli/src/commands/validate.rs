use anyhow::{Context, Result};
use dialogen_core::dialogue::Dialogue;
use std::path::Path;

fn presence(present: bool) -> &'static str {
    if present { "present" } else { "absent" }
}

/// Loads a dialogue JSON file and reports which sections are populated.
pub fn run(file: &Path) -> Result<()> {
    let dialogue = Dialogue::load_from_json(file)
        .with_context(|| format!("{} is not a valid dialogue", file.display()))?;

    println!("{}: valid dialogue", file.display());
    println!("  scenario:               {}", presence(dialogue.scenario.is_some()));
    println!("  metadata:               {}", presence(dialogue.metadata.is_some()));
    println!("  script:                 {}", presence(dialogue.script.is_some()));
    match &dialogue.conversation {
        Some(turns) => println!("  conversation:           {} turns", turns.len()),
        None => println!("  conversation:           absent"),
    }
    println!(
        "  consistency_evaluation: {}",
        presence(dialogue.consistency_evaluation.is_some())
    );

    Ok(())
}

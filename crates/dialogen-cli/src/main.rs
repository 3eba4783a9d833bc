use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::schema::RecordKind;

#[derive(Parser)]
#[command(name = "dialogen")]
#[command(about = "Dialogen CLI - inspect and convert dialogue records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a dialogue JSON file and report which sections are present
    Validate {
        /// Path to the dialogue JSON file
        file: PathBuf,
    },
    /// Convert a dialogue between JSON and blob checkpoint form
    Convert {
        /// Input file (.json is read as JSON, anything else as a blob)
        input: PathBuf,
        /// Output file (.json is written as JSON, anything else as a blob)
        output: PathBuf,
        /// Write compact JSON instead of the indented form
        #[arg(long)]
        compact: bool,
    },
    /// Print the generated JSON schema for a record type
    Schema {
        /// Record to print the schema for
        #[arg(value_enum)]
        record: RecordKind,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file } => commands::validate::run(&file)?,
        Commands::Convert {
            input,
            output,
            compact,
        } => commands::convert::run(&input, &output, compact)?,
        Commands::Schema { record } => commands::schema::run(record)?,
    }

    Ok(())
}

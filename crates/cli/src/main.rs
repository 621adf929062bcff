//! Plank CLI - command-line interface for the project board
//!
//! Usage:
//!   plank                                  - Start the interactive board
//!   plank add --title <t> --description <d> --people <n>
//!   plank check --field <name> --value <v> - Validate a single value
//!   plank rules                            - Show the constraint sets

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{AddCommand, CheckCommand, RulesCommand};
use cli::interactive::BoardSession;
use shared::BoardConfig;

#[derive(Parser)]
#[command(name = "plank")]
#[command(about = "Plank - validated project board with an observable store")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load field rules from a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a project to a fresh board
    Add(AddCommand),
    /// Validate a single field value
    Check(CheckCommand),
    /// Show the constraint sets in force
    Rules(RulesCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => BoardConfig::from_file(path)?,
        None => BoardConfig::default(),
    };

    match cli.command {
        Some(Commands::Add(cmd)) => cmd.run(&config, cli.json),
        Some(Commands::Check(cmd)) => cmd.run(&config, cli.json),
        Some(Commands::Rules(cmd)) => cmd.run(&config, cli.json),
        None => {
            // No subcommand - start the interactive board
            let mut session = BoardSession::new(config);
            session.run()
        }
    }
}

//! plank rules command

use clap::Args;
use console::style;
use shared::BoardConfig;

/// Show the constraint sets in force
#[derive(Debug, Args)]
pub struct RulesCommand {}

impl RulesCommand {
    pub fn run(&self, config: &BoardConfig, json: bool) -> anyhow::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(config)?);
            return Ok(());
        }

        println!("{}", style("Board rules").bold());
        for field in config.field_names() {
            if let Some(rule) = config.rule(field) {
                println!("  {:<12} {}", field, rule.summary());
            }
        }
        Ok(())
    }
}

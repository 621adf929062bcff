//! plank check command

use clap::Args;
use console::style;
use shared::{BoardConfig, UnknownFieldError};
use validation::{validate, FieldValue, ValidationRule};

/// Validate a single value against one field's constraint set
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Form field whose rule to check against
    #[arg(short, long)]
    pub field: String,

    /// Value to check
    #[arg(short, long)]
    pub value: String,
}

impl CheckCommand {
    pub fn run(&self, config: &BoardConfig, json: bool) -> anyhow::Result<()> {
        let rule = config.rule(&self.field).ok_or_else(|| UnknownFieldError {
            field: self.field.clone(),
            known_fields: config
                .field_names()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })?;

        // the people field is numeric; everything else is text
        let value = if self.field == "people" {
            self.value.trim().parse::<i64>().map(FieldValue::Number).ok()
        } else {
            Some(FieldValue::Text(self.value.clone()))
        };

        let valid = match value {
            Some(value) => validate(&ValidationRule::new(value, rule.clone())),
            // a non-numeric entry can never satisfy the numeric bounds
            None => false,
        };

        if json {
            println!(
                "{}",
                serde_json::json!({ "field": self.field, "value": self.value, "valid": valid })
            );
        } else if valid {
            println!(
                "{} '{}' is a valid {}",
                style("ok").green().bold(),
                self.value,
                self.field
            );
        } else {
            println!(
                "{} '{}' is not a valid {} (rule: {})",
                style("invalid").red().bold(),
                self.value,
                self.field,
                rule.summary()
            );
        }

        if valid {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "validation failed for field '{}'",
                self.field
            ))
        }
    }
}

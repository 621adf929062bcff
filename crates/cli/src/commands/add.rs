//! plank add command

use clap::Args;
use console::style;
use shared::BoardConfig;
use store::{ProjectStatus, ProjectStore};

use crate::form::ProjectForm;
use crate::views::StatusListView;

/// One-shot validated project intake
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Project title
    #[arg(short, long)]
    pub title: String,

    /// Project description
    #[arg(short, long)]
    pub description: String,

    /// Team size
    #[arg(short, long)]
    pub people: String,
}

impl AddCommand {
    pub fn run(&self, config: &BoardConfig, json: bool) -> anyhow::Result<()> {
        let store = ProjectStore::new();

        // board views render through the store's fan-out, not in JSON mode
        let _views = if json {
            Vec::new()
        } else {
            vec![
                StatusListView::attach(&store, ProjectStatus::Active),
                StatusListView::attach(&store, ProjectStatus::Finished),
            ]
        };

        let form = ProjectForm::new(config.clone())
            .with_title(self.title.as_str())
            .with_description(self.description.as_str())
            .with_people(self.people.as_str());

        let project = match form.submit(&store) {
            Ok(project) => project,
            Err(err) => {
                if json {
                    println!(
                        "{}",
                        serde_json::json!({ "added": false, "fields": err.fields })
                    );
                }
                return Err(err.into());
            }
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&project)?);
        } else {
            println!("{} {}", style("Added").green().bold(), project.title());
        }
        Ok(())
    }
}

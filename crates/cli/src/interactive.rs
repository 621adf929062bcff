//! Interactive board session

use std::io::{self, Write};

use console::style;
use dialoguer::Input;
use shared::BoardConfig;
use store::{ProjectStatus, ProjectStore};

use crate::form::ProjectForm;
use crate::views::{render_section, StatusListView};

/// Interactive REPL for the project board
///
/// Owns the store for the session and keeps one rendering view attached per
/// status, so every accepted submission redraws the board.
pub struct BoardSession {
    config: BoardConfig,
    store: ProjectStore,
    views: Vec<StatusListView>,
}

impl BoardSession {
    pub fn new(config: BoardConfig) -> Self {
        let store = ProjectStore::new();
        let views = vec![
            StatusListView::attach(&store, ProjectStatus::Active),
            StatusListView::attach(&store, ProjectStatus::Finished),
        ];
        Self {
            config,
            store,
            views,
        }
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Plank Interactive Board");
        println!("Type help for commands, quit to exit");
        println!();

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                // EOF
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_command(input) {
                Ok(should_exit) if should_exit => break,
                Ok(_) => continue,
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            }
        }

        Ok(())
    }

    /// Dispatch one command line. Returns whether the session should exit.
    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "help" | "h" => {
                println!("Commands:");
                println!("  add    - Add a project (prompts for each field)");
                println!("  list   - Show the board");
                println!("  rules  - Show the constraint sets in force");
                println!("  quit   - Exit");
            }
            "add" => self.prompt_add()?,
            "list" => self.print_board(),
            "rules" => self.print_rules(),
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }

    fn prompt_add(&mut self) -> anyhow::Result<()> {
        let title: String = Input::<String>::new()
            .with_prompt("Title")
            .allow_empty(true)
            .interact_text()?;
        let description: String = Input::<String>::new()
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?;
        let people: String = Input::<String>::new()
            .with_prompt("People")
            .allow_empty(true)
            .interact_text()?;

        let form = ProjectForm::new(self.config.clone())
            .with_title(title)
            .with_description(description)
            .with_people(people);

        match form.submit(&self.store) {
            Ok(project) => {
                println!("{} {}", style("Added").green().bold(), project.title());
            }
            Err(err) => {
                println!("{} {}", style("Rejected").red().bold(), err);
            }
        }
        Ok(())
    }

    fn print_board(&self) {
        let snapshot = self.store.snapshot();
        for view in &self.views {
            println!("{}", render_section(view.status(), &snapshot));
        }
    }

    fn print_rules(&self) {
        println!("Board rules:");
        for field in self.config.field_names() {
            if let Some(rule) = self.config.rule(field) {
                println!("  {:<12} {}", field, rule.summary());
            }
        }
    }
}

impl Default for BoardSession {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

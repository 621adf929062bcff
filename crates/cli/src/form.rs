//! Project intake form
//!
//! Gathers the raw entered values, validates each field against its
//! configured constraint set, and hands valid submissions to the store.

use shared::{BoardConfig, FieldRule, InvalidSubmissionError};
use store::{Project, ProjectStore};
use tracing::debug;
use validation::{validate, ValidationRule};

/// Raw form input for one project submission
#[derive(Debug, Clone)]
pub struct ProjectForm {
    config: BoardConfig,
    title: String,
    description: String,
    people: String,
}

impl ProjectForm {
    /// Empty form bound to a constraint configuration
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            title: String::new(),
            description: String::new(),
            people: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Raw team-size entry; parsed as an integer at submission time
    pub fn with_people(mut self, people: impl Into<String>) -> Self {
        self.people = people.into();
        self
    }

    fn field_passes(&self, value: &str, rule: &FieldRule) -> bool {
        validate(&ValidationRule::new(value, rule.clone()))
    }

    /// Team size, when the entry parses and satisfies the configured bounds
    fn validated_people(&self) -> Option<u32> {
        let count: i64 = self.people.trim().parse().ok()?;
        if !validate(&ValidationRule::new(count, self.config.people.clone())) {
            return None;
        }
        u32::try_from(count).ok()
    }

    /// Validate every field and add the project on success
    ///
    /// The store is only touched when all fields pass; on failure the error
    /// names every failing field, in form order.
    pub fn submit(&self, store: &ProjectStore) -> Result<Project, InvalidSubmissionError> {
        let title_ok = self.field_passes(&self.title, &self.config.title);
        let description_ok = self.field_passes(&self.description, &self.config.description);
        let people = self.validated_people();

        match (title_ok, description_ok, people) {
            (true, true, Some(people)) => {
                Ok(store.add_project(self.title.as_str(), self.description.as_str(), people))
            }
            (title_ok, description_ok, people) => {
                let mut fields = Vec::new();
                if !title_ok {
                    fields.push("title".to_string());
                }
                if !description_ok {
                    fields.push("description".to_string());
                }
                if people.is_none() {
                    fields.push("people".to_string());
                }
                debug!(?fields, "submission rejected");
                Err(InvalidSubmissionError { fields })
            }
        }
    }
}

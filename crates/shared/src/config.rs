//! Configuration types for Plank

use serde::{Deserialize, Serialize};

/// Constraint set attached to a single form field
///
/// Absent constraints are skipped at validation time. The numeric bounds are
/// exclusive: a value passes `min` only when strictly greater than it, and
/// passes `max` only when strictly less than it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    /// Reject values whose trimmed text form is empty
    #[serde(default)]
    pub required: bool,

    /// Minimum character count (text values only)
    pub min_length: Option<usize>,

    /// Maximum character count (text values only)
    pub max_length: Option<usize>,

    /// Exclusive lower bound (numeric values only)
    pub min: Option<i64>,

    /// Exclusive upper bound (numeric values only)
    pub max: Option<i64>,
}

impl FieldRule {
    /// Rule with no constraints; every check is skipped
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Short human-readable summary of the declared constraints
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.required {
            parts.push("required".to_string());
        }
        if let Some(n) = self.min_length {
            parts.push(format!("min length {}", n));
        }
        if let Some(n) = self.max_length {
            parts.push(format!("max length {}", n));
        }
        if let Some(n) = self.min {
            parts.push(format!("greater than {}", n));
        }
        if let Some(n) = self.max {
            parts.push(format!("less than {}", n));
        }
        if parts.is_empty() {
            "no constraints".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Board configuration: the constraint set for each form field
///
/// A field omitted from a configuration file keeps its default rule; a
/// constraint omitted from a supplied rule means that check is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    /// Constraints for the project title
    pub title: FieldRule,

    /// Constraints for the project description
    pub description: FieldRule,

    /// Constraints for the team size
    pub people: FieldRule,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: FieldRule::new().required(),
            description: FieldRule::new().required().with_min_length(5),
            people: FieldRule::new().required().with_min(1).with_max(5),
        }
    }
}

impl BoardConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Rule for a field, by form field name
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        match field {
            "title" => Some(&self.title),
            "description" => Some(&self.description),
            "people" => Some(&self.people),
            _ => None,
        }
    }

    /// Field names, in form order
    pub fn field_names(&self) -> Vec<&'static str> {
        vec!["title", "description", "people"]
    }
}

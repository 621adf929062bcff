//! CLI Commands

pub mod add;
pub mod check;
pub mod rules;

pub use add::AddCommand;
pub use check::CheckCommand;
pub use rules::RulesCommand;

//! Validation engine - decides whether a single field value satisfies its
//! declared constraint set
//!
//! Every check here is pure: no side effects, no errors, always a boolean.
//! Callers build one [`ValidationRule`] per field, ask [`validate`], and
//! discard it.

use shared::FieldRule;

/// A field value under validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    /// True when the value's text form, trimmed, is empty
    ///
    /// A number always renders as non-empty text, so only text values can
    /// be blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(_) => false,
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Number(n) => Some(*n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(i64::from(value))
    }
}

/// One value paired with the constraint set to check it against
///
/// Ephemeral: built per validation call, discarded after.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    value: FieldValue,
    rule: FieldRule,
}

impl ValidationRule {
    pub fn new(value: impl Into<FieldValue>, rule: FieldRule) -> Self {
        Self {
            value: value.into(),
            rule,
        }
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn rule(&self) -> &FieldRule {
        &self.rule
    }
}

/// Check a value against its declared constraints
///
/// All declared constraints must pass. An absent constraint is skipped, and
/// so is a constraint whose type does not match the value (length bounds on
/// a number, numeric bounds on text). The numeric bounds are strict: a value
/// passes only when strictly greater than `min` and strictly less than
/// `max`. Character counts (not bytes) decide the length bounds.
pub fn validate(input: &ValidationRule) -> bool {
    let rule = input.rule();
    let mut is_valid = true;

    if rule.required {
        is_valid = is_valid && !input.value().is_blank();
    }

    if let (Some(min_length), Some(text)) = (rule.min_length, input.value().as_text()) {
        is_valid = is_valid && text.chars().count() >= min_length;
    }

    if let (Some(max_length), Some(text)) = (rule.max_length, input.value().as_text()) {
        is_valid = is_valid && text.chars().count() <= max_length;
    }

    if let (Some(min), Some(number)) = (rule.min, input.value().as_number()) {
        is_valid = is_valid && number > min;
    }

    if let (Some(max), Some(number)) = (rule.max, input.value().as_number()) {
        is_valid = is_valid && number < max;
    }

    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: impl Into<FieldValue>, rule: FieldRule) -> bool {
        validate(&ValidationRule::new(value, rule))
    }

    // ============== Required Tests ==============

    #[test]
    fn test_required_rejects_empty_text() {
        assert!(!check("", FieldRule::new().required()));
    }

    #[test]
    fn test_required_rejects_whitespace_only_text() {
        assert!(!check("   \t ", FieldRule::new().required()));
    }

    #[test]
    fn test_required_accepts_non_empty_text() {
        assert!(check("Build API", FieldRule::new().required()));
    }

    #[test]
    fn test_required_always_passes_for_numbers() {
        assert!(check(0, FieldRule::new().required()));
        assert!(check(-3, FieldRule::new().required()));
    }

    #[test]
    fn test_empty_text_passes_without_required() {
        assert!(check("", FieldRule::new()));
    }

    // ============== Length Tests ==============

    #[test]
    fn test_min_length_rejects_short_text() {
        assert!(!check("Hi", FieldRule::new().with_min_length(5)));
    }

    #[test]
    fn test_min_length_accepts_exact_length() {
        assert!(check("12345", FieldRule::new().with_min_length(5)));
    }

    #[test]
    fn test_min_length_accepts_longer_text() {
        assert!(check("Design and build REST API", FieldRule::new().with_min_length(5)));
    }

    #[test]
    fn test_min_length_counts_raw_whitespace() {
        // length checks see the raw text; only `required` trims
        assert!(check("  a  ", FieldRule::new().with_min_length(5)));
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        // four characters, six bytes
        assert!(!check("géré", FieldRule::new().with_min_length(5)));
        assert!(check("géré", FieldRule::new().with_min_length(4)));
    }

    #[test]
    fn test_max_length_accepts_exact_length() {
        assert!(check("12345", FieldRule::new().with_max_length(5)));
    }

    #[test]
    fn test_max_length_rejects_longer_text() {
        assert!(!check("123456", FieldRule::new().with_max_length(5)));
    }

    #[test]
    fn test_length_bounds_skipped_for_numbers() {
        assert!(check(7, FieldRule::new().with_min_length(5).with_max_length(1)));
    }

    // ============== Numeric Bound Tests ==============

    #[test]
    fn test_min_is_strict() {
        let rule = FieldRule::new().with_min(1);
        assert!(!check(0, rule.clone()));
        assert!(!check(1, rule.clone()));
        assert!(check(2, rule));
    }

    #[test]
    fn test_max_is_strict() {
        let rule = FieldRule::new().with_max(5);
        assert!(check(4, rule.clone()));
        assert!(!check(5, rule.clone()));
        assert!(!check(6, rule));
    }

    #[test]
    fn test_bounded_range_accepts_interior_values() {
        let rule = FieldRule::new().with_min(1).with_max(5);
        for n in 2..=4 {
            assert!(check(n, rule.clone()), "{} should pass", n);
        }
    }

    #[test]
    fn test_bounded_range_rejects_both_bounds() {
        let rule = FieldRule::new().with_min(1).with_max(5);
        assert!(!check(1, rule.clone()));
        assert!(!check(5, rule));
    }

    #[test]
    fn test_negative_numbers_against_bounds() {
        assert!(check(-2, FieldRule::new().with_min(-5)));
        assert!(!check(-5, FieldRule::new().with_min(-5)));
        assert!(check(-10, FieldRule::new().with_max(0)));
    }

    #[test]
    fn test_numeric_bounds_skipped_for_text() {
        assert!(check("3", FieldRule::new().with_min(1).with_max(5)));
    }

    #[test]
    fn test_extreme_bounds() {
        assert!(!check(i64::MAX, FieldRule::new().with_min(i64::MAX)));
        assert!(check(i64::MAX, FieldRule::new().with_min(i64::MAX - 1)));
    }

    // ============== Combined Constraint Tests ==============

    #[test]
    fn test_all_declared_constraints_must_pass() {
        // non-empty but too short: required passes, min length fails
        assert!(!check("Hi", FieldRule::new().required().with_min_length(5)));
    }

    #[test]
    fn test_passing_combination() {
        assert!(check("Build API", FieldRule::new().required().with_min_length(5)));
    }

    #[test]
    fn test_required_and_bounds_for_number() {
        let rule = FieldRule::new().required().with_min(1).with_max(5);
        assert!(check(3, rule.clone()));
        assert!(!check(0, rule.clone()));
        assert!(!check(6, rule));
    }

    #[test]
    fn test_length_window() {
        let rule = FieldRule::new().with_min_length(2).with_max_length(4);
        assert!(!check("a", rule.clone()));
        assert!(check("ab", rule.clone()));
        assert!(check("abcd", rule.clone()));
        assert!(!check("abcde", rule));
    }

    #[test]
    fn test_no_constraints_always_passes() {
        assert!(check("", FieldRule::new()));
        assert!(check("anything", FieldRule::new()));
        assert!(check(42, FieldRule::new()));
    }

    // ============== Value Conversion Tests ==============

    #[test]
    fn test_text_values_from_str_and_string() {
        assert_eq!(FieldValue::from("x"), FieldValue::Text("x".to_string()));
        assert_eq!(
            FieldValue::from("x".to_string()),
            FieldValue::Text("x".to_string())
        );
    }

    #[test]
    fn test_number_values_from_integers() {
        assert_eq!(FieldValue::from(7i64), FieldValue::Number(7));
        assert_eq!(FieldValue::from(7i32), FieldValue::Number(7));
    }

    #[test]
    fn test_blank_detection() {
        assert!(FieldValue::from("").is_blank());
        assert!(FieldValue::from("  ").is_blank());
        assert!(!FieldValue::from("x").is_blank());
        assert!(!FieldValue::from(0).is_blank());
    }

    #[test]
    fn test_rule_accessors() {
        let input = ValidationRule::new("Hi", FieldRule::new().with_min_length(5));
        assert_eq!(input.value(), &FieldValue::Text("Hi".to_string()));
        assert_eq!(input.rule().min_length, Some(5));
    }
}

//! Password strength rules shared by the register and reset-password forms.
//!
//! Rules are evaluated in declaration order so the requirements checklist
//! renders them the same way every time. The underscore rule is displayed as
//! a warning rather than a blocking error, but it still counts against
//! overall validity: a password containing `_` is never accepted.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// A single password requirement.
pub struct PasswordRule {
    pub id: &'static str,
    pub label: &'static str,
    pub test: fn(&str) -> bool,
    /// Rendered as a soft warning in the checklist, but still required.
    pub is_warning: bool,
}

/// Outcome of checking one rule against a candidate password.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleResult {
    pub id: &'static str,
    pub label: &'static str,
    pub passed: bool,
    pub is_warning: bool,
}

/// The fixed rule set, in display order.
pub const RULES: &[PasswordRule] = &[
    PasswordRule {
        id: "min_length",
        label: "At least 12 characters",
        test: |pw| pw.chars().count() >= 12,
        is_warning: false,
    },
    PasswordRule {
        id: "uppercase",
        label: "At least 1 uppercase letter",
        test: |pw| pw.chars().any(|c| c.is_ascii_uppercase()),
        is_warning: false,
    },
    PasswordRule {
        id: "lowercase",
        label: "At least 1 lowercase letter",
        test: |pw| pw.chars().any(|c| c.is_ascii_lowercase()),
        is_warning: false,
    },
    PasswordRule {
        id: "special_char",
        label: "At least 1 special character (e.g. !@#$%^&*)",
        test: |pw| pw.chars().any(|c| !c.is_ascii_alphanumeric() && c != '_'),
        is_warning: false,
    },
    PasswordRule {
        id: "no_underscore",
        label: "Underscores are not allowed",
        test: |pw| !pw.contains('_'),
        is_warning: true,
    },
];

/// Check every rule against `password`, in declaration order.
pub fn evaluate(password: &str) -> Vec<RuleResult> {
    RULES
        .iter()
        .map(|rule| RuleResult {
            id: rule.id,
            label: rule.label,
            passed: (rule.test)(password),
            is_warning: rule.is_warning,
        })
        .collect()
}

/// True when every rule passes, the warning rule included.
pub fn is_valid(password: &str) -> bool {
    RULES.iter().all(|rule| (rule.test)(password))
}

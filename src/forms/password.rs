//! Password strength meter shown on registration.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const MIN_LENGTH: usize = 6;

static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").expect("static regex"));
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("static regex"));
static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[!@#$%^&*]").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    #[must_use]
    pub const fn text(&self) -> &'static str {
        match self {
            Self::Weak => "Weak password",
            Self::Medium => "Medium password",
            Self::Strong => "Strong password",
        }
    }
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Individual requirements, each shown as a checklist entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChecks {
    pub min_length: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordChecks {
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_LENGTH,
            uppercase: UPPERCASE.is_match(password),
            digit: DIGIT.is_match(password),
            special: SPECIAL.is_match(password),
        }
    }

    /// Number of satisfied requirements, 0-4.
    #[must_use]
    pub fn score(&self) -> usize {
        [self.min_length, self.uppercase, self.digit, self.special]
            .into_iter()
            .filter(|passed| *passed)
            .count()
    }
}

/// Rate a password; an empty one gets no rating.
#[must_use]
pub fn password_strength(password: &str) -> Option<PasswordStrength> {
    if password.is_empty() {
        return None;
    }
    let strength = match PasswordChecks::evaluate(password).score() {
        0 | 1 => PasswordStrength::Weak,
        2 | 3 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    };
    Some(strength)
}

//! Password validator - runs the rule sections and scores the result.

use std::fmt;

use secrecy::SecretString;

use super::sections::SECTIONS;

/// Environment variable overriding [`PasswordPolicy::min_length`].
pub const MIN_LENGTH_ENV: &str = "PURE_UTILS_PASSWORD_MIN_LENGTH";

/// Minimum length used when no policy is configured.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Rules applied by [`validate_password`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Builds a policy from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `PURE_UTILS_PASSWORD_MIN_LENGTH`
    /// 2. [`DEFAULT_MIN_LENGTH`]
    ///
    /// A value that does not parse as an unsigned integer is ignored.
    pub fn from_env() -> Self {
        let min_length = match std::env::var(MIN_LENGTH_ENV) {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(n) => n,
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Ignoring {}={:?}: {}", MIN_LENGTH_ENV, raw, _e);
                    DEFAULT_MIN_LENGTH
                }
            },
            Err(_) => DEFAULT_MIN_LENGTH,
        };
        Self { min_length }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

/// Strength label, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Maps the number of passed rules (0 to 5) to a label.
    pub fn from_score(score: usize) -> Self {
        match score {
            0..=2 => PasswordStrength::Weak,
            3 | 4 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`validate_password`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordValidation {
    pub is_valid: bool,
    pub strength: PasswordStrength,
    /// One message per failed rule, in rule order.
    pub issues: Vec<String>,
}

/// Validates a password against a policy.
///
/// Five rules are checked: minimum length, a lowercase letter, an uppercase
/// letter, a digit and a special character. Each passed rule adds one point
/// to the score that picks the [`PasswordStrength`]; each failed rule adds an
/// issue message.
///
/// # Arguments
/// * `password` - The password to validate
/// * `policy` - Rules to apply, see [`PasswordPolicy::default`]
///
/// # Example
///
/// ```rust
/// use pure_utils::{PasswordPolicy, PasswordStrength, validation::validate_password};
/// use secrecy::SecretString;
///
/// let password = SecretString::new("StrongPass123!".to_string().into());
/// let result = validate_password(&password, &PasswordPolicy::default());
/// assert!(result.is_valid);
/// assert_eq!(result.strength, PasswordStrength::Strong);
/// ```
pub fn validate_password(password: &SecretString, policy: &PasswordPolicy) -> PasswordValidation {
    let mut issues = Vec::new();
    let mut score = 0;

    for (_section_name, section_fn) in SECTIONS {
        match section_fn(password, policy) {
            Some(issue) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password rule failed: {}", _section_name);
                issues.push(issue);
            }
            None => score += 1,
        }
    }

    PasswordValidation {
        is_valid: issues.is_empty(),
        strength: PasswordStrength::from_score(score),
        issues,
    }
}

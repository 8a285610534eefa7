//! Character variety sections - lowercase, uppercase, numbers, special chars.
//!
//! Letters and digits are matched in the ASCII range only.

use secrecy::{ExposeSecret, SecretString};

use super::{SPECIAL_CHARACTERS, SectionResult};
use crate::validation::PasswordPolicy;

fn require(
    password: &SecretString,
    predicate: impl Fn(char) -> bool,
    issue: &str,
) -> SectionResult {
    if password.expose_secret().chars().any(predicate) {
        None
    } else {
        Some(issue.to_string())
    }
}

/// Checks for at least one `a-z` letter.
pub fn lowercase_section(password: &SecretString, _policy: &PasswordPolicy) -> SectionResult {
    require(
        password,
        |c| c.is_ascii_lowercase(),
        "Password must contain at least one lowercase letter",
    )
}

/// Checks for at least one `A-Z` letter.
pub fn uppercase_section(password: &SecretString, _policy: &PasswordPolicy) -> SectionResult {
    require(
        password,
        |c| c.is_ascii_uppercase(),
        "Password must contain at least one uppercase letter",
    )
}

/// Checks for at least one `0-9` digit.
pub fn digit_section(password: &SecretString, _policy: &PasswordPolicy) -> SectionResult {
    require(
        password,
        |c| c.is_ascii_digit(),
        "Password must contain at least one number",
    )
}

/// Checks for at least one character of [`SPECIAL_CHARACTERS`].
pub fn special_section(password: &SecretString, _policy: &PasswordPolicy) -> SectionResult {
    require(
        password,
        |c| SPECIAL_CHARACTERS.contains(c),
        "Password must contain at least one special character",
    )
}

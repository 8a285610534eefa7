//! Password rule sections
//!
//! Each section checks one rule of a [`PasswordPolicy`] and reports the
//! issue message when the rule is not met.

mod length;
mod variety;

use secrecy::SecretString;

use super::PasswordPolicy;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Result type for section evaluation functions.
/// - `Some(issue)` - Section failed with issue message
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// Signature shared by every section.
pub type Section = fn(&SecretString, &PasswordPolicy) -> SectionResult;

/// Sections in the order their issues are reported.
pub const SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("digit", digit_section),
    ("special", special_section),
];

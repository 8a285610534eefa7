//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::validation::PasswordPolicy;

/// Checks if the password meets the policy's minimum length.
///
/// Length is counted in characters, not bytes.
///
/// # Returns
/// - `Some(issue)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString, policy: &PasswordPolicy) -> SectionResult {
    if password.expose_secret().chars().count() < policy.min_length {
        return Some(format!(
            "Password must be at least {} characters long",
            policy.min_length
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let result = length_section(&pwd, &PasswordPolicy::default());
        assert_eq!(
            result,
            Some("Password must be at least 8 characters long".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        let result = length_section(&pwd, &PasswordPolicy::default());
        assert_eq!(result, None);
    }

    #[test]
    fn test_length_section_custom_minimum() {
        let pwd = SecretString::new("LongEnough123!".to_string().into());
        let policy = PasswordPolicy::new(16);
        let result = length_section(&pwd, &policy);
        assert_eq!(
            result,
            Some("Password must be at least 16 characters long".to_string())
        );
    }

    #[test]
    fn test_length_section_counts_characters() {
        // 8 characters, 16 bytes
        let pwd = SecretString::new("ääääääää".to_string().into());
        let result = length_section(&pwd, &PasswordPolicy::default());
        assert_eq!(result, None);

        let pwd = SecretString::new("äääää".to_string().into());
        assert!(length_section(&pwd, &PasswordPolicy::default()).is_some());
    }
}

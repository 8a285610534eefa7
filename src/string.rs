//! String case conversion and truncation.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Suffix appended by [`truncate`] in the common case.
pub const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

static CAMEL_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-_\s]+(.)?").unwrap());

static KEBAB_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Converts `-`, `_` and whitespace separated words to camelCase.
///
/// Only the character following a separator run changes case; the rest of
/// the input is kept as is.
pub fn to_camel_case(s: &str) -> String {
    CAMEL_SEPARATORS
        .replace_all(s, |caps: &Captures| {
            caps.get(1)
                .map(|m| m.as_str().to_uppercase())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Converts camelCase or PascalCase to kebab-case.
pub fn to_kebab_case(s: &str) -> String {
    KEBAB_BOUNDARY.replace_all(s, "$1-$2").to_lowercase()
}

/// Removes leading and trailing whitespace, byte order marks included.
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Shortens `s` to at most `max_len` characters, ending with `suffix`.
///
/// Strings that already fit are returned unchanged. Otherwise the result
/// has exactly `max_len` characters, the last of which are `suffix` (or
/// only a prefix of `suffix` when it is longer than `max_len`).
///
/// ```rust
/// use pure_utils::string::{truncate, DEFAULT_TRUNCATE_SUFFIX};
///
/// assert_eq!(truncate("hello world", 5, DEFAULT_TRUNCATE_SUFFIX), "he...");
/// assert_eq!(truncate("hello world", 8, "***"), "hello***");
/// ```
pub fn truncate(s: &str, max_len: usize, suffix: &str) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let suffix_len = suffix.chars().count();
    if suffix_len >= max_len {
        return suffix.chars().take(max_len).collect();
    }
    s.chars()
        .take(max_len - suffix_len)
        .chain(suffix.chars())
        .collect()
}

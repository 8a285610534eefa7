//! Format validation
//!
//! Regex predicates for common input formats, a password validator and an
//! emptiness check. The patterns are compiled once on first use.
//!
//! Digit classes and word boundaries are ASCII-only, so `is_phone` rejects
//! e.g. full-width or Arabic-Indic digits.

mod empty;
mod password;
mod sections;

use once_cell::sync::Lazy;
use regex::Regex;

pub use empty::{IsEmpty, is_empty};
pub use password::{
    DEFAULT_MIN_LENGTH, MIN_LENGTH_ENV, PasswordPolicy, PasswordStrength, PasswordValidation,
    validate_password,
};
pub use sections::SPECIAL_CHARACTERS;

// `\s` in JavaScript also covers U+FEFF, Rust's Unicode `\s` does not.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap()
});

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[3-9][0-9]{9}$").unwrap());

static ID_CARD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]{15}|[0-9]{18}|[0-9]{17}[0-9Xx])$").unwrap());

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}(?-u:\b)([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .unwrap()
});

static IP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .unwrap()
});

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot after it.
pub fn is_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Mainland China mobile number: 11 digits, `1` then `3`-`9`.
pub fn is_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

/// Mainland China ID number: 15 digits, 18 digits, or 17 digits and a
/// trailing `X`/`x` check character.
pub fn is_id_card(id_card: &str) -> bool {
    ID_CARD.is_match(id_card)
}

/// `http(s)://` URL with an optional `www.`, a domain with TLD and an
/// optional path or query.
pub fn is_url(url: &str) -> bool {
    URL.is_match(url)
}

/// Dotted-quad IPv4 address with every octet in `0..=255`.
pub fn is_ip(ip: &str) -> bool {
    IP.is_match(ip)
}

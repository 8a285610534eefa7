//! Pure utility functions
//!
//! Small, independent helpers for sequences, strings, dates, numbers,
//! JSON-like objects, URLs and input validation. No function keeps state
//! or performs I/O; `object::merge` and `object::set` mutate the value they
//! are handed through `&mut`.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PURE_UTILS_PASSWORD_MIN_LENGTH`: Minimum length read by
//!   [`PasswordPolicy::from_env`] (default: `8`)
//!
//! # Example
//!
//! ```rust
//! use pure_utils::{PasswordPolicy, PasswordStrength};
//! use pure_utils::{array, string, url, validation};
//! use secrecy::SecretString;
//!
//! assert_eq!(array::unique(&[1, 2, 2, 3]), vec![1, 2, 3]);
//! assert_eq!(string::to_camel_case("hello-world"), "helloWorld");
//! assert_eq!(url::normalize_path("/a/b/../c"), "/a/c");
//! assert!(validation::is_phone("13812345678"));
//!
//! let password = SecretString::new("Password123".to_string().into());
//! let result = validation::validate_password(&password, &PasswordPolicy::default());
//! assert_eq!(result.strength, PasswordStrength::Medium);
//! ```

pub mod array;
pub mod date;
pub mod number;
pub mod object;
pub mod string;
pub mod url;
pub mod validation;

pub use crate::array::Nested;
pub use crate::date::DateError;
pub use crate::url::UrlError;
pub use crate::validation::{IsEmpty, PasswordPolicy, PasswordStrength, PasswordValidation};

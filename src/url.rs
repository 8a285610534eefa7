//! URL and path helpers
//!
//! Query strings use `application/x-www-form-urlencoded` encoding. Path
//! helpers work on `/`-separated text only and never touch the filesystem.

use std::collections::HashMap;

use ::url::Url;
use ::url::form_urlencoded;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("Invalid URL: {0}")]
    Parse(#[from] ::url::ParseError),
}

/// Text form of a parameter value, `None` for `null`.
///
/// Strings are taken verbatim, sequences are comma-joined and mappings are
/// rendered as JSON. Floats print without a trailing `.0`.
fn param_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(num) if num.is_f64() => num.as_f64().map(|f| f.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| param_value(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

/// Collects the query parameters of `url`.
///
/// Names and values are percent-decoded; when a name repeats, its last
/// value wins.
///
/// # Errors
///
/// Returns [`UrlError::Parse`] if `url` is not an absolute URL.
pub fn parse_url_params(url: &str) -> Result<HashMap<String, String>, UrlError> {
    let parsed = Url::parse(url)?;
    Ok(parsed.query_pairs().into_owned().collect())
}

/// Serializes `params` to a query string, skipping `null` values.
///
/// ```rust
/// use pure_utils::url::build_query_string;
/// use serde_json::json;
///
/// let params = json!({ "q": "rust lang", "page": 2, "draft": null });
/// assert_eq!(build_query_string(params.as_object().unwrap()), "q=rust+lang&page=2");
/// ```
pub fn build_query_string(params: &Map<String, Value>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if let Some(value) = param_value(value) {
            serializer.append_pair(key, &value);
        }
    }
    serializer.finish()
}

/// Joins `segments` onto `base` with single slashes.
///
/// Trailing slashes of `base` and surrounding slashes of every segment are
/// stripped; segments left empty are skipped.
pub fn join_path<I, S>(base: &str, segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = base.trim_end_matches('/').to_string();
    for segment in segments {
        let clean = segment.as_ref().trim_matches('/');
        if !clean.is_empty() {
            result.push('/');
            result.push_str(clean);
        }
    }
    result
}

/// Lowercased text after the last `.`, or `""` when there is none.
pub fn get_file_extension(path: &str) -> String {
    match path.rfind('.') {
        Some(dot) if dot + 1 < path.len() => path[dot + 1..].to_lowercase(),
        _ => String::new(),
    }
}

/// Last path segment without its extension.
pub fn get_file_name(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or_default();
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

/// Resolves `.` and `..` segments and collapses repeated slashes.
///
/// `..` removes the previous segment; at the start of the path, or after
/// another `..`, it is kept. A leading `/` is preserved and a trailing one
/// dropped.
///
/// ```rust
/// use pure_utils::url::normalize_path;
///
/// assert_eq!(normalize_path("/a/b/../c"), "/a/c");
/// assert_eq!(normalize_path("../a/./b//"), "../a/b");
/// ```
pub fn normalize_path(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&prev) if prev != ".." => {
                    stack.pop();
                }
                _ => stack.push(part),
            },
            _ => stack.push(part),
        }
    }

    let joined = stack.join("/");
    if path.starts_with('/') {
        format!("/{joined}")
    } else {
        joined
    }
}

/// `true` for `http://` and `https://` URLs, in any letter case.
pub fn is_absolute_url(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Host name of `url`, or `""` if it does not parse or has no host.
pub fn get_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().unwrap_or_default().to_string(),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("get_domain: cannot parse {:?}: {}", url, _e);
            String::new()
        }
    }
}

/// Sets or removes query parameters of `url`.
///
/// A `null` value removes every occurrence of its key. Any other value
/// replaces the first occurrence (dropping later ones) or is appended.
/// The original text is returned unchanged if `url` does not parse.
pub fn update_url_params(url: &str, params: &Map<String, Value>) -> String {
    let mut parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("update_url_params: cannot parse {:?}: {}", url, _e);
            return url.to_string();
        }
    };
    if params.is_empty() {
        return parsed.into();
    }

    let mut pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    for (key, value) in params {
        match param_value(value) {
            None => pairs.retain(|(name, _)| name != key),
            Some(value) => match pairs.iter().position(|(name, _)| name == key) {
                Some(first) => {
                    pairs[first].1 = value;
                    let mut idx = 0;
                    pairs.retain(|(name, _)| {
                        let keep = name != key || idx == first;
                        idx += 1;
                        keep
                    });
                }
                None => pairs.push((key.clone(), value)),
            },
        }
    }

    if pairs.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(&pairs);
    }
    parsed.into()
}

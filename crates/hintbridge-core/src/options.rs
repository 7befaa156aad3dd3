//! Option resolution for engine invocations
//!
//! Merges caller-requested options over the fixed default set and carries
//! the caller-declared globals through untouched.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single engine option value. Most JSHint options are booleans, but some
/// take numbers (`maxlen`) or strings (`es3` variants), so values stay
/// loosely typed and are handed to the engine as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl OptionValue {
    /// Parses a string literal the way property-file hosts supply option
    /// values: number first, then boolean, anything else stays a string.
    pub fn parse(raw: &str) -> OptionValue {
        if let Ok(n) = raw.parse::<i64>() {
            return OptionValue::Int(n);
        }
        if let Ok(n) = raw.parse::<f64>() {
            return OptionValue::Float(n);
        }
        if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("false") {
            return OptionValue::Bool(raw.eq_ignore_ascii_case("true"));
        }
        OptionValue::Str(raw.to_string())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(v) => write!(f, "{v}"),
            OptionValue::Int(v) => write!(f, "{v}"),
            OptionValue::Float(v) => write!(f, "{v}"),
            OptionValue::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

/// Options keyed by engine option name.
pub type OptionMap = BTreeMap<String, OptionValue>;

/// Identifiers the engine should treat as pre-declared; the boolean marks
/// the identifier as writable.
pub type GlobalMap = BTreeMap<String, bool>;

/// The stricter-analysis flags every invocation starts from.
const DEFAULT_FLAGS: &[&str] = &[
    "bitwise", "browser", "curly", "eqeqeq", "forin", "noarg", "noempty", "nonew", "strict",
    "undef",
];

/// The fixed default option set: every flag in [`DEFAULT_FLAGS`] enabled.
pub fn default_options() -> OptionMap {
    DEFAULT_FLAGS
        .iter()
        .map(|name| (name.to_string(), OptionValue::Bool(true)))
        .collect()
}

/// Merges `requested` over the default set. Every key present in either map
/// appears in the result, and a requested value always beats the default.
/// Option names are not validated; unknown keys pass through unchanged.
pub fn resolve_options(requested: &OptionMap) -> OptionMap {
    let mut effective = default_options();
    for (name, value) in requested {
        effective.insert(name.clone(), value.clone());
    }
    effective
}

//! Engine boundary for JSHint-compatible analyzers
//!
//! The engine is consumed as a black box: one call per source unit returning
//! a pass flag, a possibly sparse error list, and usage metadata. Engines
//! embedded through a JavaScript runtime surface their native output as
//! JSON, so the raw shapes here decode from `serde_json` values.

use serde::Deserialize;

use crate::options::{GlobalMap, OptionMap};

/// A fault in invoking the engine itself. Lint findings are never errors;
/// this type covers the engine being unavailable or handing back output the
/// raw shapes cannot decode.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine invocation failed: {message}")]
    Invocation { message: String },
    #[error("engine returned malformed output: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

/// A line reference as the engine reports it: a single line for most
/// findings, a list when one identifier was seen on several lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LineValue {
    One(i64),
    Many(Vec<i64>),
}

impl Default for LineValue {
    fn default() -> Self {
        LineValue::One(0)
    }
}

impl LineValue {
    /// Collapses the reference into the form diagnostics carry: scalars
    /// stringify, sequences join with commas.
    pub fn flatten(&self) -> String {
        match self {
            LineValue::One(line) => line.to_string(),
            LineValue::Many(lines) => lines
                .iter()
                .map(|line| line.to_string())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<i64> for LineValue {
    fn from(line: i64) -> Self {
        LineValue::One(line)
    }
}

impl From<Vec<i64>> for LineValue {
    fn from(lines: Vec<i64>) -> Self {
        LineValue::Many(lines)
    }
}

/// One engine-native hard error record. `evidence` and `character` are
/// absent on some records (end-of-file errors, fatal aborts) and default
/// rather than failing decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawError {
    #[serde(default)]
    pub line: LineValue,
    #[serde(default)]
    pub character: u32,
    pub reason: String,
    pub evidence: Option<String>,
    #[serde(default)]
    pub code: String,
}

/// An identifier the engine flagged together with the lines it appeared on.
/// Both the implied-globals and unused-variables lists use this shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdentifierHit {
    pub name: String,
    #[serde(default)]
    pub line: LineValue,
}

/// The metadata the engine attaches to a failed run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineData {
    pub implieds: Vec<IdentifierHit>,
    pub unused: Vec<IdentifierHit>,
}

/// Everything one engine call yields.
///
/// `errors` keeps the engine's sparse layout: a fatal abort terminates the
/// list with an absent record, and entries past it are unreliable.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineOutcome {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<Option<RawError>>,
    #[serde(default)]
    pub data: EngineData,
}

impl EngineOutcome {
    /// An outcome for a unit the engine found nothing wrong with.
    pub fn clean() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            data: EngineData::default(),
        }
    }

    /// Decodes the engine's native JSON shape.
    pub fn from_json(value: serde_json::Value) -> Result<Self, EngineError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// The single call this system makes per source unit.
///
/// Implementations decide how the engine actually runs (embedded JavaScript
/// runtime, external process, in-process reimplementation); any engine
/// satisfying this contract is interchangeable. Faults must be returned as
/// [`EngineError`], never encoded as findings.
pub trait LintEngine {
    fn lint(
        &self,
        source: &str,
        options: &OptionMap,
        globals: &GlobalMap,
    ) -> Result<EngineOutcome, EngineError>;
}

impl<F> LintEngine for F
where
    F: Fn(&str, &OptionMap, &GlobalMap) -> Result<EngineOutcome, EngineError>,
{
    fn lint(
        &self,
        source: &str,
        options: &OptionMap,
        globals: &GlobalMap,
    ) -> Result<EngineOutcome, EngineError> {
        self(source, options, globals)
    }
}

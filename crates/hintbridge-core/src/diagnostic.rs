//! Normalized diagnostic output types
//!
//! Every finding, whatever category the engine reported it under, is
//! flattened into this one shape before the host sees it.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        f.write_str(label)
    }
}

/// One normalized finding.
///
/// `line` is always a string: the engine reports scalar lines for hard
/// errors but may report several lines for one identifier, and the flattened
/// comma-joined form has to fit the same field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub reason: String,
    pub line: String,
    pub character: u32,
    pub evidence: String,
    pub code: String,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn new(
        code: impl Into<String>,
        severity: Severity,
        reason: impl Into<String>,
        file: impl Into<String>,
        line: impl Into<String>,
        character: u32,
    ) -> Self {
        Self {
            file: file.into(),
            reason: reason.into(),
            line: line.into(),
            character,
            evidence: String::new(),
            code: code.into(),
            severity,
        }
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = evidence.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_evidence_to_empty() {
        let diag = Diagnostic::new(
            "jshint.W033",
            Severity::Error,
            "Missing semicolon.",
            "app.js",
            "3",
            10,
        );

        assert_eq!(diag.evidence, "");
        assert_eq!(diag.file, "app.js");
        assert_eq!(diag.line, "3");
        assert_eq!(diag.character, 10);
    }

    #[test]
    fn with_evidence_sets_source_snippet() {
        let diag = Diagnostic::new("jshint.W033", Severity::Error, "msg", "a.js", "1", 0)
            .with_evidence("var x = 1");

        assert_eq!(diag.evidence, "var x = 1");
    }

    #[test]
    fn severity_serializes_lowercase() {
        let error = serde_json::to_value(Severity::Error).unwrap();
        let warning = serde_json::to_value(Severity::Warning).unwrap();

        assert_eq!(error, "error");
        assert_eq!(warning, "warning");
    }

    #[test]
    fn severity_display_matches_wire_form() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn diagnostic_serializes_all_fields() {
        let diag = Diagnostic::new(
            "jshint.W098",
            Severity::Warning,
            "'x' is defined but never used.",
            "lib/util.js",
            "4,9",
            0,
        );

        let value = serde_json::to_value(&diag).unwrap();

        assert_eq!(value["file"], "lib/util.js");
        assert_eq!(value["line"], "4,9");
        assert_eq!(value["character"], 0);
        assert_eq!(value["evidence"], "");
        assert_eq!(value["code"], "jshint.W098");
        assert_eq!(value["severity"], "warning");
    }
}

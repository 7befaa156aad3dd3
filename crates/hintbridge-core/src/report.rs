//! Summary aggregation over accumulated diagnostics
//!
//! Hosts that batch several units against one output list use this to
//! decide overall pass/fail without walking the list themselves.

use std::collections::HashSet;

use serde::Serialize;

use crate::diagnostic::{Diagnostic, Severity};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub error: usize,
    pub warning: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_units: usize,
    pub units_with_findings: usize,
    pub total_diagnostics: usize,
    pub by_severity: SeverityCounts,
}

impl Report {
    pub fn from_diagnostics(diagnostics: &[Diagnostic], total_units: usize) -> Self {
        let mut by_severity = SeverityCounts::default();
        let mut units_with_findings = HashSet::new();

        for diag in diagnostics {
            match diag.severity {
                Severity::Error => by_severity.error += 1,
                Severity::Warning => by_severity.warning += 1,
            }
            units_with_findings.insert(diag.file.as_str());
        }

        Self {
            total_units,
            units_with_findings: units_with_findings.len(),
            total_diagnostics: diagnostics.len(),
            by_severity,
        }
    }

    /// A session passes when nothing error-severity was recorded; warnings
    /// alone do not fail it.
    pub fn passed(&self) -> bool {
        self.by_severity.error == 0
    }
}

//! Per-unit analysis invocation
//!
//! Resolves the effective option set, calls the engine exactly once, and
//! routes the outcome through the translator into the caller-owned
//! diagnostic list.

use tracing::{debug, info};

use crate::diagnostic::Diagnostic;
use crate::engine::{EngineError, LintEngine};
use crate::options::{GlobalMap, OptionMap, resolve_options};
use crate::translate;

/// Label attached to diagnostics when the caller supplies no file name.
pub const DEFAULT_FILE_LABEL: &str = "No file";

/// Inputs for one analysis invocation.
///
/// Everything the engine needs travels in the request; there is no ambient
/// per-process state shared between invocations.
#[derive(Debug, Clone, Default)]
pub struct LintRequest {
    pub file: Option<String>,
    pub source: String,
    pub options: OptionMap,
    pub globals: GlobalMap,
}

impl LintRequest {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_options(mut self, options: OptionMap) -> Self {
        self.options = options;
        self
    }

    pub fn with_globals(mut self, globals: GlobalMap) -> Self {
        self.globals = globals;
        self
    }

    pub fn file_label(&self) -> &str {
        self.file.as_deref().unwrap_or(DEFAULT_FILE_LABEL)
    }
}

/// Drives one engine through the resolve / invoke / translate pipeline.
pub struct Analyzer<E> {
    engine: E,
}

impl<E: LintEngine> Analyzer<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Runs one source unit to completion, appending any findings to
    /// `diagnostics`, and returns how many were appended. Engine faults
    /// propagate untouched; they are never recorded as findings.
    pub fn analyze(
        &self,
        request: &LintRequest,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<usize, EngineError> {
        let effective = resolve_options(&request.options);
        let outcome = self
            .engine
            .lint(&request.source, &effective, &request.globals)?;

        let file = request.file_label();
        let appended = translate::translate(file, &outcome, diagnostics);
        if appended == 0 {
            debug!(file = %file, "analysis clean");
        } else {
            info!(file = %file, appended, "analysis produced findings");
        }
        Ok(appended)
    }
}

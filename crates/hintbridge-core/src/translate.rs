//! Category translation from engine-native results to diagnostics
//!
//! A failed engine run carries three independent result categories. Each is
//! mapped onto the flat [`Diagnostic`] shape with its own severity and code
//! rules, in a fixed category order: hard errors, implied globals, unused
//! variables.

use crate::diagnostic::{Diagnostic, Severity};
use crate::engine::EngineOutcome;

/// Namespace prefixed onto the engine's own error codes.
pub const CODE_PREFIX: &str = "jshint.";

/// Fixed code for the implied-globals warning category.
pub const IMPLIED_GLOBALS_CODE: &str = "jshint.implied-globals";

/// Fixed code for the unused-variables warning category.
pub const UNUSED_VARIABLES_CODE: &str = "jshint.implied-unuseds";

/// Message prefix for the unused-variables category. The tool this output
/// format originated in spelled it "Unsed variable"; consumers matching on
/// `code` are unaffected by the corrected spelling here.
const UNUSED_VARIABLE_LABEL: &str = "Unused variable";

/// Appends normalized diagnostics for `outcome` to `out`, returning how
/// many were added. A successful outcome appends nothing, whatever the
/// metadata contains. All three categories are processed unconditionally
/// once `success` is false; none is skipped based on another's results.
pub fn translate(file: &str, outcome: &EngineOutcome, out: &mut Vec<Diagnostic>) -> usize {
    if outcome.success {
        return 0;
    }

    let before = out.len();
    translate_errors(file, outcome, out);
    translate_implieds(file, outcome, out);
    translate_unused(file, outcome, out);
    out.len() - before
}

fn translate_errors(file: &str, outcome: &EngineOutcome, out: &mut Vec<Diagnostic>) {
    // The engine null-terminates the list after a fatal abort; everything
    // past the first absent record is unreliable.
    for err in outcome.errors.iter().map_while(|slot| slot.as_ref()) {
        let mut diagnostic = Diagnostic::new(
            format!("{CODE_PREFIX}{}", err.code),
            Severity::Error,
            err.reason.clone(),
            file,
            err.line.flatten(),
            err.character,
        );
        if let Some(evidence) = &err.evidence {
            diagnostic = diagnostic.with_evidence(evidence.clone());
        }
        out.push(diagnostic);
    }
}

fn translate_implieds(file: &str, outcome: &EngineOutcome, out: &mut Vec<Diagnostic>) {
    for hit in &outcome.data.implieds {
        out.push(Diagnostic::new(
            IMPLIED_GLOBALS_CODE,
            Severity::Warning,
            format!("Implied global '{}'", hit.name),
            file,
            hit.line.flatten(),
            0,
        ));
    }
}

fn translate_unused(file: &str, outcome: &EngineOutcome, out: &mut Vec<Diagnostic>) {
    for hit in &outcome.data.unused {
        out.push(Diagnostic::new(
            UNUSED_VARIABLES_CODE,
            Severity::Warning,
            format!("{UNUSED_VARIABLE_LABEL} '{}'", hit.name),
            file,
            hit.line.flatten(),
            0,
        ));
    }
}

//! Executes programs in a constrained, indentation-delimited scripting
//! subset (assignment, printing, conditionals, while-loops, arithmetic,
//! comparisons), capturing everything they print.
//!
//! The programs arrive from an upstream translation step that turns
//! natural-language-flavored source into this subset; nothing about that
//! text is validated here. Malformed or unsupported constructs degrade
//! silently to skipped lines and default values. The lenient behavior is
//! contractual: callers rely on a run never raising.

pub mod runtime;
pub mod scan;

pub use runtime::value::Value;

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::debug;

use runtime::env::{Env, OutputBuffer};
use runtime::interpreter::Interpreter;

// ─── Public API types ─────────────────────────────────────────────────────────

/// Failure surfaced by the run boundary. The language itself never raises
/// (soft conditions degrade to defaults), so this only carries genuinely
/// unexpected aborts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExecError {
    pub message: String,
}

/// Outcome of one run: everything the program printed, joined by newlines,
/// and the abort description when the run did not complete. Output printed
/// before an abort is preserved, never discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub output: String,
    pub error: Option<ExecError>,
}

// ─── Run boundary ─────────────────────────────────────────────────────────────

/// Execute a program with fresh state and capture its printed output.
///
/// Every call owns its own environment and output buffer; nothing persists
/// across runs, so concurrent calls never share state.
pub fn execute(source: &str) -> RunResult {
    let output = OutputBuffer::default();

    debug!(lines = source.lines().count(), "run started");

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut interp = Interpreter::new(source, Env::new(output.clone()));
        interp.run();
    }));

    let printed = output.borrow().join("\n");
    match outcome {
        Ok(()) => {
            debug!(printed_lines = output.borrow().len(), "run finished");
            RunResult { output: printed, error: None }
        }
        Err(payload) => {
            let message = panic_message(payload);
            debug!(%message, "run aborted");
            RunResult { output: printed, error: Some(ExecError { message }) }
        }
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "execution aborted".to_string()
    }
}

//! Diagnostic queue for batching load-time problems.
//!
//! The builder keeps going after a malformed top-level form so that one run of
//! `kin check` reports every broken form. The queue caps how many errors are
//! kept and hands them back ordered by source line.

use crate::Diagnostic;

/// Default maximum number of errors kept (0 = unlimited).
const DEFAULT_ERROR_LIMIT: usize = 100;

/// Ordered collection of diagnostics from one phase.
#[derive(Clone, Debug)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    error_limit: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_ERROR_LIMIT)
    }

    /// Create a queue that keeps at most `error_limit` errors (0 = unlimited).
    pub fn with_limit(error_limit: usize) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            error_limit,
        }
    }

    /// Add a diagnostic. Returns `false` once the error limit is reached.
    pub fn push(&mut self, diagnostic: Diagnostic) -> bool {
        if diagnostic.is_error() {
            if self.limit_reached() {
                return false;
            }
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
        true
    }

    pub fn limit_reached(&self) -> bool {
        self.error_limit != 0 && self.error_count >= self.error_limit
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Drain the queue, ordered by line (diagnostics without a line last).
    ///
    /// The sort is stable, so problems on the same line keep detection order.
    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.diagnostics
            .sort_by_key(|d| (d.line.is_none(), d.line.unwrap_or(0)));
        self.diagnostics
    }
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;

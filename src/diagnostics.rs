//! Operator-facing diagnostic channel.
//!
//! Document load failures are reported here exactly once per page load and
//! never surfaced to visitors.

use crate::loader::LoadError;

pub trait Diagnostics: Send + Sync {
    fn document_load_failed(&self, source: &str, error: &LoadError);
}

/// Reports through `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn document_load_failed(&self, source: &str, error: &LoadError) {
        tracing::error!(source = %source, "Error loading site document: {}", error);
    }
}

//! Diagnostic event sink injected into the classifiers and driver.

use std::fmt;

use crate::cli;

/// A non-fatal anomaly observed while normalizing records.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent {
    /// A copy-number type tag outside the classification table.
    UnrecognizedCopyType {
        copy_type: Option<String>,
        equivocal: bool,
    },
    /// An interpretation-status tag outside the classification table.
    UnrecognizedInterpretation { status: String },
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEvent::UnrecognizedCopyType {
                copy_type,
                equivocal,
            } => write!(
                f,
                "failed to resolve copy type: {}, equivocal: {equivocal}",
                copy_type.as_deref().unwrap_or("<absent>")
            ),
            DiagnosticEvent::UnrecognizedInterpretation { status } => {
                write!(f, "failed to resolve interpretation status: {status}")
            }
        }
    }
}

/// Receives diagnostic events from the extraction pipeline.
pub trait DiagnosticSink {
    fn record(&mut self, event: DiagnosticEvent);
}

/// Renders each event as a warning line on stderr.
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn record(&mut self, event: DiagnosticEvent) {
        cli::warning(&event.to_string());
    }
}

/// Collects events in memory so tests can assert on exact emission.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<DiagnosticEvent>,
}

impl DiagnosticSink for MemorySink {
    fn record(&mut self, event: DiagnosticEvent) {
        self.events.push(event);
    }
}

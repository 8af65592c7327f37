//! Error types for the foundation-cnv library.

use thiserror::Error;

/// Errors that can occur while converting a report.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The XML document could not be parsed or lacks a required section.
    #[error("{0}")]
    Parse(String),

    /// A field value did not match its expected format.
    #[error("{0}")]
    Format(String),

    /// A copy-number record is missing a required field.
    /// One malformed record aborts the whole run.
    #[error("malformed copy-number record: {0}")]
    MalformedRecord(String),

    /// Writing the CSV output failed.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Serializing the attributes column failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

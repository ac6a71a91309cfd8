//! Error types for ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading delimited input.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input file could not be opened.
    #[error("cannot open input file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be parsed from the input.
    #[error("cannot read record from input")]
    Record {
        #[source]
        source: csv::Error,
    },
}

//! Error types for output writing.

use thiserror::Error;

/// Errors from writing delimited output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A row could not be written to the output stream.
    #[error("cannot write row to output")]
    Write {
        #[source]
        source: csv::Error,
    },

    /// The output stream could not be flushed.
    #[error("cannot flush output")]
    Flush {
        #[source]
        source: std::io::Error,
    },
}

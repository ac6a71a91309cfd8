//! Error types for record transformation.

use thiserror::Error;

/// Errors from transforming a single record.
///
/// All variants are fatal: the pipeline aborts on the first occurrence
/// and never retries or skips a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A column spec references a field past the end of the record.
    #[error(
        "record {record}: column index {index} is out of range for a record with {field_count} fields"
    )]
    ColumnOutOfRange {
        /// 1-based ordinal of the offending input record.
        record: usize,
        /// The out-of-range `from` index.
        index: usize,
        /// Number of fields the record actually has.
        field_count: usize,
    },

    /// A column spec names a filter that is not registered.
    #[error("unknown filter {name:?} (available filters: {available})")]
    UnknownFilter { name: String, available: String },

    /// A generated column spec names a generator that is not registered.
    #[error("unknown generator {name:?} (available generators: {available})")]
    UnknownGenerator { name: String, available: String },
}

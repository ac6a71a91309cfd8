//! Delimited-text ingestion.
//!
//! Reads a whole input file into memory as ordered records of ordered
//! string fields. The pipeline transforms nothing until the entire input
//! has been materialized, matching the reference behavior.

pub mod error;
pub mod reader;

pub use error::IngestError;
pub use reader::{read_records, read_records_from};

//! Record transformation engine.
//!
//! Applies a [`remap_model::Config`] to input records: plain columns are
//! selected, rewritten and filtered field by field; generated columns are
//! synthesized from the whole record by named generator functions. The
//! filter and generator registries are closed sets built once at startup
//! and passed by reference, so tests can substitute their own.

pub mod engine;
pub mod error;
pub mod filters;
pub mod generators;
pub mod header;

pub use engine::RecordTransformer;
pub use error::TransformError;
pub use filters::{Filter, FilterRegistry};
pub use generators::{Generator, GeneratorRegistry};
pub use header::build_header;

//! Declarative configuration model for the remap pipeline.

pub mod config;
pub mod error;

pub use config::{ColumnSpec, Config, GeneratedColumnSpec, Separators};
pub use error::ConfigError;

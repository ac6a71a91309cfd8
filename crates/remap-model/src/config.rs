//! Column mapping configuration.
//!
//! A configuration declares how output columns are derived from an input
//! table: plain columns select (and optionally rewrite) one input field
//! each, generated columns synthesize a value from the whole record.
//!
//! # Format
//!
//! Configurations are JSON documents:
//!
//! ```json
//! {
//!   "input-separator": ";",
//!   "output-separator": ";",
//!   "split-separator": ";",
//!   "columns": [
//!     { "from": 0, "title": "Name" },
//!     { "from": 1, "discard": true, "title": "x" },
//!     { "from": 2, "title": "Year", "filters": ["trim"] }
//!   ],
//!   "new-columns": [
//!     { "title": "Full", "generator": "joinAll" }
//!   ]
//! }
//! ```
//!
//! Separators default to `;` when absent or empty and must be exactly one
//! ASCII character. Multi-byte delimiters are not supported.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default separator used when a separator field is absent or empty.
pub const DEFAULT_SEPARATOR: char = ';';

/// One output column sourced from a single input field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ColumnSpec {
    /// Zero-based index of the source field in the input record.
    pub from: usize,
    /// When true the column occupies a slot in the declaration but
    /// produces no output and its source field is never read.
    #[serde(default)]
    pub discard: bool,
    /// Output column title.
    pub title: String,
    /// When non-empty, every occurrence of this substring in the source
    /// field is replaced with the configured split separator before any
    /// filters run.
    #[serde(default)]
    pub split_by: String,
    /// Filter names applied left to right to the sourced value.
    #[serde(default)]
    pub filters: Vec<String>,
}

/// One output column synthesized from the whole input record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneratedColumnSpec {
    /// Output column title.
    pub title: String,
    /// Name of the registered generator producing the value.
    pub generator: String,
}

/// A complete pipeline configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Field delimiter of the input file. Empty means `;`.
    #[serde(default)]
    pub input_separator: String,
    /// Field delimiter of the output. Empty means `;`.
    #[serde(default)]
    pub output_separator: String,
    /// Replacement character for `split-by` substitutions. Empty means `;`.
    #[serde(default)]
    pub split_separator: String,
    /// Output columns sourced from input fields, in output order.
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
    /// Generated output columns, appended after `columns`.
    #[serde(default)]
    pub new_columns: Vec<GeneratedColumnSpec>,
}

/// Resolved single-character separators for one run.
#[derive(Debug, Clone, Copy)]
pub struct Separators {
    /// Input field delimiter.
    pub input: u8,
    /// Output field delimiter.
    pub output: u8,
    /// Replacement character for `split-by` substitutions.
    pub split: char,
}

impl Config {
    /// Loads a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves and validates the three separators.
    ///
    /// Absent or empty separators fall back to `;`. Anything other than a
    /// single ASCII character is rejected rather than silently truncated.
    pub fn separators(&self) -> Result<Separators, ConfigError> {
        let input = resolve_separator(&self.input_separator, "input-separator")?;
        let output = resolve_separator(&self.output_separator, "output-separator")?;
        let split = resolve_separator(&self.split_separator, "split-separator")?;
        Ok(Separators {
            input: input as u8,
            output: output as u8,
            split,
        })
    }

    /// Number of fields every output row will have, derived from the
    /// configuration alone.
    pub fn output_width(&self) -> usize {
        let kept = self.columns.iter().filter(|column| !column.discard).count();
        kept + self.new_columns.len()
    }
}

fn resolve_separator(raw: &str, field: &'static str) -> Result<char, ConfigError> {
    if raw.is_empty() {
        return Ok(DEFAULT_SEPARATOR);
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch),
        _ => Err(ConfigError::Separator {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config: Config = serde_json::from_str("{}").unwrap();
        let separators = config.separators().unwrap();
        assert_eq!(separators.input, b';');
        assert_eq!(separators.output, b';');
        assert_eq!(separators.split, ';');
        assert!(config.columns.is_empty());
        assert!(config.new_columns.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "input-separator": ",",
            "output-separator": "|",
            "split-separator": ";",
            "columns": [
                { "from": 0, "title": "Name" },
                { "from": 1, "discard": true, "title": "x" },
                { "from": 2, "title": "Year", "split-by": "||", "filters": ["trim"] }
            ],
            "new-columns": [
                { "title": "Full", "generator": "joinAll" }
            ]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let separators = config.separators().unwrap();
        assert_eq!(separators.input, b',');
        assert_eq!(separators.output, b'|');
        assert_eq!(config.columns.len(), 3);
        assert!(!config.columns[0].discard);
        assert!(config.columns[1].discard);
        assert_eq!(config.columns[2].split_by, "||");
        assert_eq!(config.columns[2].filters, vec!["trim".to_string()]);
        assert_eq!(config.new_columns[0].generator, "joinAll");
        assert_eq!(config.output_width(), 3);
    }

    #[test]
    fn test_multibyte_separator_rejected() {
        let config: Config = serde_json::from_str(r#"{ "input-separator": ";;" }"#).unwrap();
        let error = config.separators().unwrap_err();
        assert!(matches!(
            error,
            ConfigError::Separator {
                field: "input-separator",
                ..
            }
        ));
    }

    #[test]
    fn test_non_ascii_separator_rejected() {
        let config: Config = serde_json::from_str(r#"{ "output-separator": "→" }"#).unwrap();
        assert!(config.separators().is_err());
    }

    #[test]
    fn test_output_width_counts_discards_out() {
        let json = r#"{
            "columns": [
                { "from": 0, "title": "A" },
                { "from": 1, "discard": true, "title": "B" }
            ],
            "new-columns": [
                { "title": "C", "generator": "joinAll" },
                { "title": "D", "generator": "fieldCount" }
            ]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.output_width(), 3);
    }
}

//! Output header construction.

use remap_model::{ColumnSpec, GeneratedColumnSpec};

/// Builds the output header row from the configuration alone.
///
/// Titles appear in declaration order: plain columns first with discarded
/// entries skipped in place, then generated columns. This mirrors the
/// record transformer exactly, so header and data columns always align.
/// Duplicate or empty titles are passed through as declared.
pub fn build_header(columns: &[ColumnSpec], new_columns: &[GeneratedColumnSpec]) -> Vec<String> {
    let mut header = Vec::with_capacity(columns.len() + new_columns.len());
    for column in columns {
        if column.discard {
            continue;
        }
        header.push(column.title.clone());
    }
    for column in new_columns {
        header.push(column.title.clone());
    }
    header
}

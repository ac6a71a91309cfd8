//! The per-record transformation algorithm.

use tracing::trace;

use remap_model::{ColumnSpec, GeneratedColumnSpec};

use crate::error::TransformError;
use crate::filters::FilterRegistry;
use crate::generators::GeneratorRegistry;
use crate::header::build_header;

/// Applies one configuration to input records, one at a time.
///
/// Records are independent: the transformer carries no state between
/// calls, so input order is the only ordering the caller has to preserve.
pub struct RecordTransformer<'a> {
    columns: &'a [ColumnSpec],
    new_columns: &'a [GeneratedColumnSpec],
    split_separator: String,
    filters: &'a FilterRegistry,
    generators: &'a GeneratorRegistry,
}

impl<'a> RecordTransformer<'a> {
    pub fn new(
        columns: &'a [ColumnSpec],
        new_columns: &'a [GeneratedColumnSpec],
        split_separator: char,
        filters: &'a FilterRegistry,
        generators: &'a GeneratorRegistry,
    ) -> Self {
        Self {
            columns,
            new_columns,
            split_separator: split_separator.to_string(),
            filters,
            generators,
        }
    }

    /// The output header this transformer's rows align with.
    pub fn header(&self) -> Vec<String> {
        build_header(self.columns, self.new_columns)
    }

    /// Transforms one input record into one output row.
    ///
    /// `ordinal` is the 1-based position of the record in the input,
    /// used only for diagnostics. The result always has one field per
    /// non-discarded column plus one per generated column.
    ///
    /// # Errors
    ///
    /// Fails on an out-of-range column index or an unregistered filter
    /// or generator name; all are fatal to the whole run.
    pub fn transform(
        &self,
        record: &[String],
        ordinal: usize,
    ) -> Result<Vec<String>, TransformError> {
        let mut target = Vec::with_capacity(self.columns.len() + self.new_columns.len());

        for column in self.columns {
            // Discarded columns are skipped before the bounds check, so a
            // stale index in a discarded spec is not an error.
            if column.discard {
                continue;
            }

            let sourced =
                record
                    .get(column.from)
                    .ok_or(TransformError::ColumnOutOfRange {
                        record: ordinal,
                        index: column.from,
                        field_count: record.len(),
                    })?;

            // Normalize the internal delimiter before any filters run.
            let mut value = if column.split_by.is_empty() {
                sourced.clone()
            } else {
                sourced.replace(&column.split_by, &self.split_separator)
            };

            for name in &column.filters {
                let filter =
                    self.filters
                        .get(name)
                        .ok_or_else(|| TransformError::UnknownFilter {
                            name: name.clone(),
                            available: self.filters.names().join(", "),
                        })?;
                value = (filter.apply)(&value);
            }

            target.push(value);
        }

        for generated in &self.new_columns {
            let generator = self.generators.get(&generated.generator).ok_or_else(|| {
                TransformError::UnknownGenerator {
                    name: generated.generator.clone(),
                    available: self.generators.names().join(", "),
                }
            })?;
            // Generators see the original record, not the row built so far.
            target.push((generator.apply)(record));
        }

        trace!(ordinal, fields_in = record.len(), fields_out = target.len(), "record transformed");
        Ok(target)
    }
}

//! The prepare pipeline driver.
//!
//! Stages, in order:
//! 1. **Ingest**: materialize every input record
//! 2. **Header**: build the output header from the configuration alone
//! 3. **Transform**: map each record in input order, writing as we go
//!
//! The whole input is read before anything is written. The first failing
//! record aborts the run; rows already written stay in the sink.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use remap_ingest::read_records;
use remap_model::Config;
use remap_output::RowWriter;
use remap_transform::{FilterRegistry, GeneratorRegistry, RecordTransformer};

/// Result of a completed prepare run.
#[derive(Debug)]
pub struct PrepareOutcome {
    /// Number of input records transformed.
    pub records: usize,
    /// Output column titles, in output order.
    pub columns: Vec<String>,
}

/// Runs the whole pipeline for one configuration and input file.
pub fn run<W: Write>(config: &Config, input: &Path, sink: W) -> Result<PrepareOutcome> {
    let span = info_span!("prepare", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let separators = config.separators()?;
    let records = read_records(input, separators.input)?;

    let filters = FilterRegistry::builtin();
    let generators = GeneratorRegistry::builtin();
    let transformer = RecordTransformer::new(
        &config.columns,
        &config.new_columns,
        separators.split,
        &filters,
        &generators,
    );
    let header = transformer.header();
    debug!(column_count = header.len(), "header built");

    let mut writer = RowWriter::new(sink, separators.output);
    writer.write_row(&header).context("write header")?;
    for (index, record) in records.iter().enumerate() {
        let row = transformer
            .transform(record, index + 1)
            .with_context(|| format!("transform record {}", index + 1))?;
        writer
            .write_row(&row)
            .with_context(|| format!("write record {}", index + 1))?;
    }
    writer.flush()?;

    info!(
        record_count = records.len(),
        column_count = header.len(),
        duration_ms = start.elapsed().as_millis(),
        "prepare complete"
    );
    Ok(PrepareOutcome {
        records: records.len(),
        columns: header,
    })
}

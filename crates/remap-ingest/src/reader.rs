//! Whole-file delimited reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::IngestError;

/// Reads every record from a delimited file.
///
/// Every row is treated as data; the transformed output gets its header
/// from the configuration, never from the input. Records may have varying
/// field counts and malformed quoting is tolerated rather than rejected.
pub fn read_records(path: &Path, delimiter: u8) -> Result<Vec<Vec<String>>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records_from(file, delimiter)?;
    debug!(
        path = %path.display(),
        record_count = records.len(),
        "input materialized"
    );
    Ok(records)
}

/// Reads every record from any delimited byte source.
pub fn read_records_from<R: Read>(
    source: R,
    delimiter: u8,
) -> Result<Vec<Vec<String>>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(source);
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Record { source })?;
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}

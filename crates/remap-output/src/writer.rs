//! Row-at-a-time delimited writing.

use std::io::Write;

use csv::WriterBuilder;

use crate::error::OutputError;

/// Writes output rows with a configured delimiter.
///
/// The caller is expected to write the header row first, then every data
/// row in input order, then call [`RowWriter::flush`] exactly once after
/// the last row.
pub struct RowWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> RowWriter<W> {
    pub fn new(sink: W, delimiter: u8) -> Self {
        let inner = WriterBuilder::new().delimiter(delimiter).from_writer(sink);
        Self { inner }
    }

    /// Writes one row.
    pub fn write_row<I, F>(&mut self, row: I) -> Result<(), OutputError>
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        self.inner
            .write_record(row)
            .map_err(|source| OutputError::Write { source })
    }

    /// Flushes the underlying stream.
    pub fn flush(&mut self) -> Result<(), OutputError> {
        self.inner
            .flush()
            .map_err(|source| OutputError::Flush { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(delimiter: u8, rows: &[Vec<&str>]) -> String {
        let mut sink = Vec::new();
        {
            let mut writer = RowWriter::new(&mut sink, delimiter);
            for row in rows {
                writer.write_row(row).unwrap();
            }
            writer.flush().unwrap();
        }
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_rows_in_order_with_delimiter() {
        let output = written(b';', &[vec!["Name", "Year"], vec!["Ada", "1990"]]);
        assert_eq!(output, "Name;Year\nAda;1990\n");
    }

    #[test]
    fn test_field_containing_delimiter_is_quoted() {
        let output = written(b';', &[vec!["a;b", "c"]]);
        assert_eq!(output, "\"a;b\";c\n");
    }

    #[test]
    fn test_alternate_delimiter() {
        let output = written(b'|', &[vec!["a", "b"]]);
        assert_eq!(output, "a|b\n");
    }
}

//! CSV reader producing one [`RawRow`] per data row.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use tracing::{debug, warn};

use crate::error::SourceError;

/// A data row keyed by header name. Cells are kept exactly as read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Returns the cell under `column`, or `""` when the header has no such column
    /// or the row is too short to reach it.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    /// A repeated header keeps the cell of its first column.
    fn from_record(headers: &StringRecord, record: &StringRecord) -> Self {
        let mut cells = HashMap::with_capacity(headers.len());
        for (h, v) in headers.iter().zip(record.iter()) {
            cells.entry(h.to_string()).or_insert_with(|| v.to_string());
        }
        Self { cells }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Lazy iterator over the data rows of one CSV source. The header row is consumed
/// on construction.
pub struct RecordReader<R: io::Read> {
    headers: StringRecord,
    records: StringRecordsIntoIter<R>,
}

impl RecordReader<File> {
    /// Opens the CSV file at `path`.
    ///
    /// # Errors
    ///
    /// [`SourceError::NotFound`] if the file does not exist.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
            _ => SourceError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Self::from_reader(file)
    }
}

impl<R: io::Read> RecordReader<R> {
    pub fn from_reader(rdr: R) -> Result<Self, SourceError> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(rdr);
        let headers = reader.headers()?.clone();
        debug!(columns = headers.len(), "CSV header read");

        Ok(Self {
            headers,
            records: reader.into_records(),
        })
    }
}

impl<R: io::Read> Iterator for RecordReader<R> {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        loop {
            match self.records.next()? {
                Ok(record) => return Some(RawRow::from_record(&self.headers, &record)),
                Err(e) if e.is_io_error() => {
                    warn!(error = %e, "I/O error while reading CSV, stopping source");
                    return None;
                }
                Err(e) => {
                    warn!(error = %e, "Undecodable CSV record skipped");
                }
            }
        }
    }
}

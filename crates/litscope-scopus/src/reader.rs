//! Header-keyed CSV rows
//!
//! No schema checks happen here: whatever columns the header names become
//! keys, and rows shorter than the header simply lack the trailing keys.

use std::io::Read;

use csv::{ReaderBuilder, StringRecordsIntoIter};
use rustc_hash::FxHashMap;

use crate::error::LoadError;

/// One CSV data row as column name → cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    row: usize,
    fields: FxHashMap<String, String>,
}

impl RawRecord {
    /// Build a record from (column, value) pairs. The first value seen for a
    /// column wins.
    pub fn from_pairs<I, K, V>(row: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = FxHashMap::default();
        for (column, value) in pairs {
            fields.entry(column.into()).or_insert_with(|| value.into());
        }
        Self { row, fields }
    }

    /// 1-based position among data rows (header excluded)
    pub fn row(&self) -> usize {
        self.row
    }

    /// Raw cell text, `None` when the column is missing from this row.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Lazily yields [`RawRecord`]s in file order.
pub struct RowReader<R> {
    headers: Vec<String>,
    records: StringRecordsIntoIter<R>,
    row: usize,
}

impl<R: Read> RowReader<R> {
    /// Read the header row and prepare to iterate the data rows.
    pub fn new(reader: R) -> Result<Self, LoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(String::from).collect();

        Ok(Self {
            headers,
            records: rdr.into_records(),
            row: 0,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<RawRecord, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        self.row += 1;

        // Extra cells beyond the header have no name and are dropped by zip
        let pairs = self
            .headers
            .iter()
            .map(String::as_str)
            .zip(record.iter());
        Some(Ok(RawRecord::from_pairs(self.row, pairs)))
    }
}

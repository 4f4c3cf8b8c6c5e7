//! In-memory representation of a CSV file

use crate::error::{Error, Result};
use crate::lookup::header_index;
use serde::{Deserialize, Serialize};

/// One data row, a field per header column
pub type Record = Vec<String>;

/// A header row plus its data rows
///
/// Construction performs no validation. Record widths are checked by
/// [`Document::validate`], which the writer calls before touching the
/// destination.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Column names; position defines the column index
    pub header: Vec<String>,
    /// Data rows in file order
    pub records: Vec<Record>,
}

impl Document {
    /// Create a document from an explicit header and records
    pub fn new<H, S>(header: H, records: Vec<Record>) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            records,
        }
    }

    /// Create an empty document to be populated field by field
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Get the number of records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// True when the document has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record without checking its width
    pub fn push_record<R, S>(&mut self, record: R)
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.records
            .push(record.into_iter().map(Into::into).collect());
    }

    /// Index of the first header field named `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        header_index(&self.header, name)
    }

    /// Check the header is non-empty and every record has exactly one field
    /// per header column
    pub fn validate(&self) -> Result<()> {
        if self.header.is_empty() {
            return Err(Error::EmptyHeader);
        }

        let expected = self.header.len();
        match self
            .records
            .iter()
            .position(|record| record.len() != expected)
        {
            Some(record) => Err(Error::LengthMismatch {
                record,
                expected,
                found: self.records[record].len(),
            }),
            None => Ok(()),
        }
    }
}

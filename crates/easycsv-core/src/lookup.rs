//! Equality lookups over a parsed [`Document`]
//!
//! All lookups are linear scans that compare fields exactly (case-sensitive,
//! no trimming). Matches are returned as borrows into the document, in
//! record order; callers that need owned rows can clone them.

use crate::document::{Document, Record};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A column selector, by position or by header name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    Index(usize),
    Name(String),
}

impl Column {
    /// Resolve the selector to a column index in `document`
    pub fn resolve(&self, document: &Document) -> Result<usize> {
        match self {
            Column::Index(index) => check_index(document, *index),
            Column::Name(name) => document
                .column_index(name)
                .ok_or_else(|| Error::ColumnNotFound(name.clone())),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Index(index) => write!(f, "#{}", index),
            Column::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Index of the first header field equal to `name`
pub fn header_index(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|h| h == name)
}

/// Find every record whose field at `index` equals `value`
pub fn find_records<'a>(document: &'a Document, index: usize, value: &str) -> Result<Vec<&'a Record>> {
    let index = check_index(document, index)?;
    Ok(scan(document, index, value))
}

/// Find every record whose field under the column `name` equals `value`
///
/// Duplicate header names resolve to the leftmost column.
pub fn find_records_by_name<'a>(
    document: &'a Document,
    name: &str,
    value: &str,
) -> Result<Vec<&'a Record>> {
    let index = document
        .column_index(name)
        .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;
    Ok(scan(document, index, value))
}

/// Find every record matching `value` in the selected column
pub fn find_records_in<'a>(
    document: &'a Document,
    column: &Column,
    value: &str,
) -> Result<Vec<&'a Record>> {
    let index = column.resolve(document)?;
    Ok(scan(document, index, value))
}

fn check_index(document: &Document, index: usize) -> Result<usize> {
    if index < document.column_count() {
        Ok(index)
    } else {
        Err(Error::IndexOutOfRange {
            index,
            columns: document.column_count(),
        })
    }
}

// Ragged rows too short to reach `index` never match.
fn scan<'a>(document: &'a Document, index: usize, value: &str) -> Vec<&'a Record> {
    document
        .records
        .iter()
        .filter(|record| record.get(index).map(String::as_str) == Some(value))
        .collect()
}

//! CSV parser producing a [`Document`]

use crate::document::{Document, Record};
use crate::error::{Error, Result};
use crate::format::Format;
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a CSV file into a Document using the default format
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<Document> {
    parse_csv_with(path, &Format::default())
}

/// Parse a CSV file into a Document
///
/// The first line is the header. Rows whose width differs from the header
/// are kept as they are; the writer is where widths are enforced. The whole
/// file is read into memory before decoding.
pub fn parse_csv_with<P: AsRef<Path>>(path: P, format: &Format) -> Result<Document> {
    let path = path.as_ref();
    format.validate()?;
    let content = fs::read(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document = read_document(&content, path, format)?;
    tracing::debug!(
        "parsed {} record(s) from {}",
        document.record_count(),
        path.display()
    );
    Ok(document)
}

/// Parse CSV from a string using the default format
pub fn parse_csv_str(content: &str, source_name: &str) -> Result<Document> {
    parse_csv_str_with(content, source_name, &Format::default())
}

/// Parse CSV from a string; `source_name` only labels errors
pub fn parse_csv_str_with(content: &str, source_name: &str, format: &Format) -> Result<Document> {
    format.validate()?;
    read_document(content.as_bytes(), Path::new(source_name), format)
}

fn read_document(content: &[u8], path: &Path, format: &Format) -> Result<Document> {
    // The csv crate closes an open quote at end of input instead of failing.
    if let Some(line) = unterminated_quote(content, format) {
        return Err(Error::CsvParse {
            path: path.to_path_buf(),
            message: format!("unterminated quoted field starting on line {}", line),
        });
    }

    let mut csv_reader = format.reader_builder().from_reader(content);

    let header: Vec<String> = csv_reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    if header.is_empty() {
        return Err(Error::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| csv_error(path, e))?;
        let fields: Record = record.iter().map(str::to_string).collect();

        if fields.len() != header.len() {
            tracing::warn!(
                "row {} in {} has {} fields, header has {}",
                row_idx + 1,
                path.display(),
                fields.len(),
                header.len()
            );
        }

        records.push(fields);
    }

    Ok(Document { header, records })
}

/// Line (1-based) of a quote still open at end of input
///
/// Follows the csv crate's rules: a quote opens a quoted field only as the
/// first byte of a field, and a doubled quote inside one is a literal.
fn unterminated_quote(content: &[u8], format: &Format) -> Option<usize> {
    let mut line = 1;
    let mut field_start = true;
    let mut open_line = None;
    let mut bytes = content.iter().peekable();

    while let Some(&b) = bytes.next() {
        if open_line.is_some() {
            if b == format.quote {
                if bytes.peek() == Some(&&format.quote) {
                    bytes.next();
                } else {
                    open_line = None;
                }
            }
        } else {
            if b == format.quote && field_start {
                open_line = Some(line);
            }
            field_start = b == format.delimiter || b == b'\n' || b == b'\r';
        }

        if b == b'\n' {
            line += 1;
        }
    }

    open_line
}

fn csv_error(path: &Path, source: csv::Error) -> Error {
    Error::Csv {
        path: PathBuf::from(path),
        source,
    }
}

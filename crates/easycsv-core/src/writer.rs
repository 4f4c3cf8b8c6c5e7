//! CSV writer for [`Document`]s

use crate::document::Document;
use crate::error::{Error, Result};
use crate::format::Format;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write a Document to a CSV file using the default format
pub fn write_csv<P: AsRef<Path>>(path: P, document: &Document) -> Result<()> {
    write_csv_with(path, document, &Format::default())
}

/// Write a Document to a CSV file, truncating any existing content
///
/// The header and record widths are validated before the file is opened, so
/// an empty header or a length mismatch leaves the destination untouched.
/// An I/O failure part way through can still leave a partially written file.
pub fn write_csv_with<P: AsRef<Path>>(path: P, document: &Document, format: &Format) -> Result<()> {
    let path = path.as_ref();
    format.validate()?;
    document.validate()?;

    let file = File::create(path).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut csv_writer = format.writer_builder().from_writer(file);
    write_document(&mut csv_writer, document, path)?;
    csv_writer.flush().map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(
        "wrote {} record(s) to {}",
        document.record_count(),
        path.display()
    );
    Ok(())
}

/// Encode a Document as a CSV string using the default format
pub fn write_csv_string(document: &Document) -> Result<String> {
    write_csv_string_with(document, &Format::default())
}

/// Encode a Document as a CSV string
pub fn write_csv_string_with(document: &Document, format: &Format) -> Result<String> {
    format.validate()?;
    document.validate()?;

    let mut csv_writer = format.writer_builder().from_writer(Vec::new());
    write_document(&mut csv_writer, document, Path::new("<memory>"))?;
    let bytes = csv_writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::InvalidFormat(format!("encoded output is not UTF-8: {}", e)))
}

fn write_document<W: Write>(
    csv_writer: &mut csv::Writer<W>,
    document: &Document,
    path: &Path,
) -> Result<()> {
    let csv_error = |source: csv::Error| Error::Csv {
        path: PathBuf::from(path),
        source,
    };

    csv_writer
        .write_record(&document.header)
        .map_err(csv_error)?;
    for record in &document.records {
        csv_writer.write_record(record).map_err(csv_error)?;
    }
    Ok(())
}

//! CSV dialect settings shared by the reader and writer

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Dialect used when reading and writing
///
/// Delimiter and quote must be distinct ASCII bytes; the reader and writer
/// reject anything else with [`Error::InvalidFormat`] before doing any I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    /// Field separator
    pub delimiter: u8,
    /// Quote character for fields that need escaping
    pub quote: u8,
    /// Trim leading/trailing whitespace from parsed fields
    pub trim: bool,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: true,
        }
    }
}

impl Format {
    /// Set the field separator (must be ASCII)
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character (must be ASCII)
    pub fn quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Enable or disable whitespace trimming on read
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set the delimiter from a character, which must be a single ASCII byte
    pub fn with_delimiter_char(self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(Error::InvalidFormat(format!(
                "delimiter '{}' is not an ASCII character",
                delimiter
            )));
        }
        Ok(self.delimiter(delimiter as u8))
    }

    /// Check delimiter and quote are distinct ASCII bytes
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(Error::InvalidFormat(format!(
                "delimiter byte 0x{:02x} is not ASCII",
                self.delimiter
            )));
        }
        if !self.quote.is_ascii() {
            return Err(Error::InvalidFormat(format!(
                "quote byte 0x{:02x} is not ASCII",
                self.quote
            )));
        }
        if self.delimiter == self.quote {
            return Err(Error::InvalidFormat(
                "delimiter and quote must differ".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            });
        builder
    }

    pub(crate) fn writer_builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder.delimiter(self.delimiter).quote(self.quote);
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_comma_with_trim() {
        let format = Format::default();
        assert_eq!(format.delimiter, b',');
        assert_eq!(format.quote, b'"');
        assert!(format.trim);
    }

    #[test]
    fn test_builder_setters() {
        let format = Format::default().delimiter(b';').quote(b'\'').trim(false);
        assert_eq!(format.delimiter, b';');
        assert_eq!(format.quote, b'\'');
        assert!(!format.trim);
    }

    #[test]
    fn test_delimiter_char() {
        let format = Format::default().with_delimiter_char('\t').unwrap();
        assert_eq!(format.delimiter, b'\t');

        let err = Format::default().with_delimiter_char('§').unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn test_validate_rejects_non_ascii_bytes() {
        assert!(Format::default().validate().is_ok());
        assert!(matches!(
            Format::default().delimiter(0xa7).validate(),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            Format::default().quote(0xff).validate(),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            Format::default().delimiter(b'"').validate(),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_format_serialization() {
        let format = Format::default().delimiter(b'|');
        let json = serde_json::to_string(&format).unwrap();
        let loaded: Format = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, format);
    }
}

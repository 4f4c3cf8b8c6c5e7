//! easycsv-core: Core library for reading, writing and querying CSV files
//!
//! This library provides functionality to:
//! - Represent a CSV file as a header plus ordered records
//! - Write a document to disk, rejecting records whose width differs from the header
//! - Parse a CSV file back into a document, trimming surrounding whitespace
//! - Find the records whose value in a given column equals a given string

pub mod document;
pub mod error;
pub mod format;
pub mod lookup;
pub mod reader;
pub mod writer;

pub use document::{Document, Record};
pub use error::{Error, Result};
pub use format::Format;
pub use lookup::{find_records, find_records_by_name, find_records_in, header_index, Column};
pub use reader::{parse_csv, parse_csv_str, parse_csv_str_with, parse_csv_with};
pub use writer::{write_csv, write_csv_string, write_csv_string_with, write_csv_with};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ROWS: usize = 10;
    const COLS: usize = 4;

    fn records() -> Vec<Record> {
        (0..ROWS)
            .map(|i| (0..COLS).map(|j| format!("record[{}][{}]", i, j)).collect())
            .collect()
    }

    #[test]
    fn test_write_parse_find_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scenario.csv");
        let mut expected = records();

        write_csv(&path, &Document::new(["a", "b", "c", "d"], expected.clone())).unwrap();
        let doc = parse_csv(&path).unwrap();
        assert_eq!(doc.header, vec!["a", "b", "c", "d"]);
        assert_eq!(doc.records, expected);

        assert!(find_records(&doc, 2, "").unwrap().is_empty());
        let found = find_records(&doc, 2, "record[3][2]").unwrap();
        assert_eq!(found, vec![&expected[3]]);

        // Duplicate the value into the next row and persist again
        expected[4][2] = "record[3][2]".to_string();
        write_csv(&path, &Document::new(["a", "b", "c", "d"], expected.clone())).unwrap();
        let doc = parse_csv(&path).unwrap();
        assert_eq!(doc.records, expected);

        let found = find_records_by_name(&doc, "c", "record[3][2]").unwrap();
        assert_eq!(found, vec![&expected[3], &expected[4]]);
    }

    #[test]
    fn test_found_records_can_be_cloned_out() {
        let doc = Document::new(["a", "b", "c", "d"], records());
        let mut owned: Vec<Record> = find_records(&doc, 0, "record[1][0]")
            .unwrap()
            .into_iter()
            .cloned()
            .collect();

        owned[0][0] = "changed".to_string();
        assert_eq!(doc.records[1][0], "record[1][0]");
    }
}

//! easycsv CLI
//!
//! Command-line tool for inspecting, querying and creating CSV files.

use clap::{Args, Parser, Subcommand};
use easycsv_core::{find_records_in, parse_csv_with, write_csv_with, Column, Document, Format, Record};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "easycsv")]
#[command(about = "Read, write and query CSV files", long_about = None)]
#[command(version)]
struct Cli {
    /// Field delimiter (single ASCII character)
    #[arg(short, long, global = true, default_value_t = ',')]
    delimiter: char,

    /// Keep whitespace around parsed fields
    #[arg(long, global = true)]
    no_trim: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and display a CSV file
    Parse {
        /// Path to CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Maximum number of rows to display
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Print the whole document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the records whose value in a column equals the given string
    Find {
        /// Path to CSV file
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        column: ColumnArgs,

        /// Value to match exactly
        #[arg(long)]
        value: String,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a JSON document ({"header": [...], "records": [[...]]}) as CSV
    Create {
        /// Path to the JSON document
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ColumnArgs {
    /// Column name (first matching header)
    #[arg(short, long)]
    column: Option<String>,

    /// Column index (0-based)
    #[arg(short, long)]
    index: Option<usize>,
}

impl ColumnArgs {
    fn selector(self) -> easycsv_core::Result<Column> {
        self.column
            .map(Column::Name)
            .or(self.index.map(Column::Index))
            .ok_or_else(|| easycsv_core::Error::ColumnNotFound("no column selected".to_string()))
    }
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> easycsv_core::Result<()> {
    let cli = Cli::parse();
    let format = Format::default()
        .with_delimiter_char(cli.delimiter)?
        .trim(!cli.no_trim);

    match cli.command {
        Commands::Parse { file, limit, json } => cmd_parse(&file, &format, limit, json),
        Commands::Find {
            file,
            column,
            value,
            json,
        } => cmd_find(&file, &format, &column.selector()?, &value, json),
        Commands::Create { input, output } => cmd_create(&input, &output, &format),
    }
}

fn cmd_parse(file: &PathBuf, format: &Format, limit: usize, json: bool) -> easycsv_core::Result<()> {
    let doc = parse_csv_with(file, format)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("File: {}", file.display());
    println!("Columns: {}", doc.column_count());
    println!("Rows: {}", doc.record_count());
    println!();

    print_table(&doc.header, doc.records.iter().take(limit));

    if doc.record_count() > limit {
        println!("... ({} more rows)", doc.record_count() - limit);
    }

    Ok(())
}

fn cmd_find(
    file: &PathBuf,
    format: &Format,
    column: &Column,
    value: &str,
    json: bool,
) -> easycsv_core::Result<()> {
    let doc = parse_csv_with(file, format)?;
    let found = find_records_in(&doc, column, value)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    print_table(&doc.header, found.iter().copied());
    println!();
    println!("{} record(s) with {} = '{}'", found.len(), column, value);

    Ok(())
}

fn cmd_create(input: &PathBuf, output: &PathBuf, format: &Format) -> easycsv_core::Result<()> {
    let content = fs::read_to_string(input).map_err(|e| easycsv_core::Error::FileRead {
        path: input.clone(),
        source: e,
    })?;
    let doc: Document = serde_json::from_str(&content)?;

    write_csv_with(output, &doc, format)?;
    println!("Wrote {} rows to {}", doc.record_count(), output.display());

    Ok(())
}

fn print_table<'a>(header: &[String], rows: impl Iterator<Item = &'a Record>) {
    println!("{}", header.join("\t"));
    println!("{}", "-".repeat(header.len() * 12));
    for row in rows {
        println!("{}", row.join("\t"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_by_name_or_index() {
        let by_name = ColumnArgs {
            column: Some("c".to_string()),
            index: None,
        };
        assert_eq!(by_name.selector().unwrap(), Column::Name("c".to_string()));

        let by_index = ColumnArgs {
            column: None,
            index: Some(2),
        };
        assert_eq!(by_index.selector().unwrap(), Column::Index(2));
    }

    #[test]
    fn test_selector_without_column_is_an_error() {
        let none = ColumnArgs {
            column: None,
            index: None,
        };
        assert!(matches!(
            none.selector(),
            Err(easycsv_core::Error::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_find_requires_a_column() {
        let result = Cli::try_parse_from(["easycsv", "find", "--file", "x.csv", "--value", "v"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "easycsv", "find", "--file", "x.csv", "--column", "a", "--index", "0", "--value", "v",
        ]);
        assert!(result.is_err());
    }
}

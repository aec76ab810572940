//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use status_report_core::{CellValue, Table};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Table> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a table
    pub fn read<R: Read>(mut reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let data = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

        let delimiter = options
            .delimiter
            .unwrap_or_else(|| Self::detect_delimiter(data));

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(data);

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            // the csv crate skips blank lines, so take the line from the record
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(rows.len() + 1);
            let row: Vec<CellValue> = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::string(field)
                    }
                })
                .collect();
            rows.push((line, row));
        }

        log::debug!(
            "read {} CSV records with delimiter {:?}",
            rows.len(),
            delimiter as char
        );
        Table::from_numbered_rows(rows).ok_or(CsvError::Empty)
    }

    /// Semicolon when the first line has one, comma otherwise
    fn detect_delimiter(data: &[u8]) -> u8 {
        let first_line = data.split(|&b| b == b'\n').next().unwrap_or_default();
        if first_line.contains(&b';') {
            b';'
        } else {
            b','
        }
    }

    /// Detect the type of a field value; text keeps its spacing
    fn detect_type(field: &str) -> CellValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return CellValue::Number(n);
            }
        }

        CellValue::string(field)
    }
}

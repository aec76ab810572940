//! # status-report-csv
//!
//! CSV reader for status-report. A CSV file is a workbook with a single
//! sheet whose first non-empty record is the header.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;

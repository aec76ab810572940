//! # status-report-xlsx
//!
//! XLSX (Office Open XML) reader for status-report.
//!
//! The workbook index (sheet names, shared strings) is read once when the
//! package is opened; each worksheet is parsed on demand into a
//! [`Table`](status_report_core::Table).

pub mod error;
pub mod reader;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxWorkbook;

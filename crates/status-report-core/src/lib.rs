//! # status-report-core
//!
//! Core data structures for the status-report tool.
//!
//! This crate provides:
//! - [`CellValue`] and [`Table`] - A sheet's header and rows
//! - [`aggregate`] - Status category counts for one sheet
//! - [`highlight_row`] - Alert styling for overdue rows
//! - [`ReportConfig`] - Palette, sheet sets and menu labels
//!
//! ## Example
//!
//! ```rust
//! use status_report_core::{aggregate, CellValue, Table};
//!
//! let mut table = Table::new(["status", "observação"]);
//! table.push_row(vec!["Conforme".into(), CellValue::Empty]).unwrap();
//! table.push_row(vec!["Vencido".into(), "EM OPERAÇÃO".into()]).unwrap();
//!
//! let outcome = aggregate(&table, "Extintores").unwrap();
//! assert_eq!(outcome.total(), 2);
//! assert_eq!(outcome.overdue_in_operation, 1);
//! ```

pub mod aggregate;
pub mod color;
pub mod config;
pub mod error;
pub mod highlight;
pub mod table;
pub mod value;

pub use aggregate::{aggregate, AggregateOutcome, CategoryCount, SkipReason};
pub use color::Color;
pub use config::{ChartOptions, HighlightStyle, Palette, ReportConfig};
pub use error::{Error, Result};
pub use highlight::{highlight_row, highlight_table, CellStyle, RowStyle};
pub use table::{RowRef, Table};
pub use value::{CellError, CellValue};

/// Column holding the status category
pub const STATUS_COLUMN: &str = "status";

/// Column holding the free-text observation
pub const OBSERVATION_COLUMN: &str = "observação";

/// Status label for compliant assets
pub const COMPLIANT: &str = "Conforme";

/// Status label for assets that need attention
pub const ATTENTION: &str = "Atenção";

/// Status label for overdue assets
pub const OVERDUE: &str = "Vencido";

/// Observation value for assets still in operation
pub const IN_OPERATION: &str = "EM OPERAÇÃO";

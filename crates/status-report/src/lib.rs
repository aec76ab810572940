//! # status-report
//!
//! Status distribution charts and highlighted tables from spreadsheets.
//!
//! Every sheet with a `status` column becomes a donut chart of its status
//! categories, annotated with per-category totals and the number of overdue
//! assets still in operation. Rows whose status is overdue are highlighted
//! in the table view.
//!
//! ## Features
//!
//! - XLSX/XLSM and CSV sources, read one sheet at a time
//! - Per-sheet chart, table-only sheets and an all-charts grid
//! - Text and HTML rendering; JSON with the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use status_report::prelude::*;
//!
//! let mut table = Table::new(["status", "observação"]);
//! table.push_row(vec!["Conforme".into(), CellValue::Empty]).unwrap();
//! table.push_row(vec!["Vencido".into(), "EM OPERAÇÃO".into()]).unwrap();
//!
//! let source = MemorySource::new().with_sheet("Extintores", table);
//! let mut report = Report::new(source, ReportConfig::default());
//!
//! let view = report.render("Extintores").unwrap();
//! print!("{}", render_text(&view));
//! ```

pub mod error;
pub mod prelude;
pub mod render;
pub mod report;
pub mod source;

pub use error::{ReportError, ReportResult};
pub use report::{Notice, NoticeLevel, Panel, Report, SheetView, TableView, View};
pub use source::{MemorySource, SheetSource, Source};

// Re-export core types
pub use status_report_core::{
    aggregate, highlight_row, highlight_table, AggregateOutcome, CategoryCount, CellError,
    CellStyle, CellValue, ChartOptions, Color, HighlightStyle, Palette, ReportConfig, RowRef,
    RowStyle, SkipReason, Table,
};

// Re-export chart types
pub use status_report_chart::{
    annotate, chart_for_sheet, Annotation, ChartKind, ChartSpec, PieSlice, SliceText,
};

//! Prelude module - common imports for status-report users
//!
//! ```rust
//! use status_report::prelude::*;
//! ```

pub use crate::render::{render_html, render_text, Format};
pub use crate::{
    CellValue, ChartSpec, MemorySource, Notice, NoticeLevel, Panel, Report, ReportConfig,
    ReportError, ReportResult, SheetSource, Source, Table, View,
};

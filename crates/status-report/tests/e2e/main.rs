//! End-to-end tests for status-report.
//!
//! Each test builds the exact workbook it needs as an XLSX package in a temp
//! directory, opens it through [`status_report::Source`], and asserts on the
//! rendered view.

mod all_charts;
mod common;
mod selection;
mod sources;

pub use common::*;

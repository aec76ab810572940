//! Error types for status-report-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in status-report-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row has more cells than the header has columns
    #[error("Row {row} has {width} cells but the header has {columns} columns")]
    RowTooWide {
        row: usize,
        width: usize,
        columns: usize,
    },

    /// Color literal is not `#RRGGBB`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration file could not be read or parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

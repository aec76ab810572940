//! CSV options

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter; `None` picks `;` when the first line contains one,
    /// comma otherwise
    pub delimiter: Option<u8>,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Turn numeric and TRUE/FALSE fields into typed values
    pub auto_detect_types: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            auto_detect_types: true,
        }
    }
}

//! Error types for the report pipeline

use std::path::PathBuf;

use status_report_csv::CsvError;
use status_report_xlsx::XlsxError;
use thiserror::Error;

/// Result type for report operations
pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Errors surfaced to the user while loading or rendering a selection.
///
/// The messages are the user-facing texts.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The spreadsheet file does not exist
    #[error("Arquivo {} não encontrado. Certifique-se de que o arquivo existe.", .0.display())]
    SourceNotFound(PathBuf),

    /// The selected sheet has no data at all
    #[error("A aba selecionada ({sheet}) não contém dados.")]
    SourceEmpty { sheet: String },

    /// The selection names no sheet of the source
    #[error("A aba '{0}' não existe no arquivo.")]
    SheetNotFound(String),

    /// The file extension is not a supported spreadsheet format
    #[error("Formato de arquivo não suportado: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// XLSX reading failed
    #[error("Erro durante a leitura do arquivo Excel: {0}")]
    Xlsx(#[source] XlsxError),

    /// CSV reading failed
    #[error("Erro durante a leitura do arquivo CSV: {0}")]
    Csv(#[source] CsvError),
}

impl From<XlsxError> for ReportError {
    fn from(e: XlsxError) -> Self {
        match e {
            XlsxError::EmptySheet(sheet) => ReportError::SourceEmpty { sheet },
            XlsxError::SheetNotFound(sheet) => ReportError::SheetNotFound(sheet),
            other => ReportError::Xlsx(other),
        }
    }
}

impl From<CsvError> for ReportError {
    fn from(e: CsvError) -> Self {
        ReportError::Csv(e)
    }
}

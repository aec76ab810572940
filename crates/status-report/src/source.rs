//! Spreadsheet sources

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use status_report_core::Table;
use status_report_csv::{CsvReadOptions, CsvReader};
use status_report_xlsx::XlsxWorkbook;

use crate::error::{ReportError, ReportResult};

/// Anything that exposes named sheets convertible to tables
pub trait SheetSource {
    /// Sheet names in source order
    fn sheet_names(&self) -> Vec<String>;

    /// Load one sheet. Called once per render; implementations do not cache.
    fn load_sheet(&mut self, name: &str) -> ReportResult<Table>;
}

enum SourceKind {
    Xlsx(XlsxWorkbook<BufReader<File>>),
    Csv { sheet: String, options: CsvReadOptions },
}

/// A spreadsheet file on disk
pub struct Source {
    path: PathBuf,
    kind: SourceKind,
}

impl Source {
    /// Open a spreadsheet, picking the format from the file extension.
    ///
    /// XLSX/XLSM files expose their worksheets; a CSV file exposes a single
    /// sheet named after the file stem.
    pub fn open<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ReportError::SourceNotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let kind = match extension.as_deref() {
            Some("xlsx") | Some("xlsm") => SourceKind::Xlsx(XlsxWorkbook::open(path)?),
            Some("csv") => SourceKind::Csv {
                sheet: path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "Sheet1".to_string()),
                options: CsvReadOptions::default(),
            },
            _ => return Err(ReportError::UnsupportedFormat(path.to_path_buf())),
        };

        log::debug!("opened source '{}'", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            kind,
        })
    }
}

impl SheetSource for Source {
    fn sheet_names(&self) -> Vec<String> {
        match &self.kind {
            SourceKind::Xlsx(workbook) => workbook
                .sheet_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            SourceKind::Csv { sheet, .. } => vec![sheet.clone()],
        }
    }

    fn load_sheet(&mut self, name: &str) -> ReportResult<Table> {
        match &mut self.kind {
            SourceKind::Xlsx(workbook) => Ok(workbook.read_sheet(name)?),
            SourceKind::Csv { sheet, options } => {
                if sheet.as_str() != name {
                    return Err(ReportError::SheetNotFound(name.to_string()));
                }
                match CsvReader::read_file(&self.path, options) {
                    Ok(table) => Ok(table),
                    Err(status_report_csv::CsvError::Empty) => Err(ReportError::SourceEmpty {
                        sheet: name.to_string(),
                    }),
                    Err(e) => Err(e.into()),
                }
            }
        }
    }
}

/// Sheets held in memory, for embedding and tests
#[derive(Debug, Default)]
pub struct MemorySource {
    sheets: Vec<(String, Option<Table>)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet with data
    pub fn with_sheet<S: Into<String>>(mut self, name: S, table: Table) -> Self {
        self.sheets.push((name.into(), Some(table)));
        self
    }

    /// Add a sheet without any data
    pub fn with_empty_sheet<S: Into<String>>(mut self, name: S) -> Self {
        self.sheets.push((name.into(), None));
        self
    }
}

impl SheetSource for MemorySource {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn load_sheet(&mut self, name: &str) -> ReportResult<Table> {
        let (_, table) = self
            .sheets
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| ReportError::SheetNotFound(name.to_string()))?;
        table.clone().ok_or_else(|| ReportError::SourceEmpty {
            sheet: name.to_string(),
        })
    }
}

//! Selection handling: from a menu entry to a renderable view

use status_report_chart::{chart_for_sheet, ChartSpec};
use status_report_core::{aggregate, highlight_table, ReportConfig, RowStyle, SkipReason, Table};

use crate::error::{ReportError, ReportResult};
use crate::source::{SheetSource, Source};

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A message shown next to (or instead of) a chart
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning<S: Into<String>>(message: S) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// A sheet's rows with their highlight styles
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableView {
    pub sheet: String,
    pub table: Table,
    /// One style per row, same order as the table
    pub styles: Vec<RowStyle>,
}

impl TableView {
    fn new(sheet: &str, table: Table, config: &ReportConfig) -> Self {
        let styles = highlight_table(&table, &config.highlight);
        Self {
            sheet: sheet.to_string(),
            table,
            styles,
        }
    }

    /// Caption shown above the table
    pub fn caption(&self) -> String {
        format!("Dados carregados da aba '{}':", self.sheet)
    }

    /// Number of highlighted rows
    pub fn highlighted_rows(&self) -> usize {
        self.styles.iter().filter(|s| s.is_highlighted()).count()
    }
}

/// A single chart sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SheetView {
    pub sheet: String,
    /// Present only when aggregation succeeded
    pub chart: Option<ChartSpec>,
    /// Shown only together with a chart
    pub table: Option<TableView>,
    pub notices: Vec<Notice>,
}

/// One cell of the all-charts grid
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Panel {
    Chart(ChartSpec),
    Failed { sheet: String, notice: Notice },
}

/// What a selection renders to
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "view", rename_all = "snake_case"))]
pub enum View {
    Sheet(SheetView),
    Table(TableView),
    AllCharts { panels: Vec<Panel> },
}

/// A status report over one spreadsheet source
pub struct Report<S> {
    source: S,
    config: ReportConfig,
}

impl Report<Source> {
    /// Open a spreadsheet file
    pub fn open<P: AsRef<std::path::Path>>(path: P, config: ReportConfig) -> ReportResult<Self> {
        Ok(Self::new(Source::open(path)?, config))
    }
}

impl<S: SheetSource> Report<S> {
    pub fn new(source: S, config: ReportConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Sheet names followed by the all-charts entry
    pub fn menu(&self) -> Vec<String> {
        let mut entries = self.source.sheet_names();
        entries.push(self.config.all_charts_label.clone());
        entries
    }

    /// Build the view for one menu entry.
    ///
    /// Load failures of a single selected sheet are returned as errors. In
    /// the all-charts view they are contained in a [`Panel::Failed`].
    pub fn render(&mut self, selection: &str) -> ReportResult<View> {
        if selection == self.config.all_charts_label {
            return Ok(View::AllCharts {
                panels: self.all_charts(),
            });
        }

        if !self.source.sheet_names().iter().any(|s| s == selection) {
            return Err(ReportError::SheetNotFound(selection.to_string()));
        }

        let table = self.source.load_sheet(selection)?;
        log::debug!(
            "loaded sheet '{}' ({} rows)",
            selection,
            table.row_count()
        );

        if self.config.is_table_sheet(selection) {
            return Ok(View::Table(TableView::new(selection, table, &self.config)));
        }

        Ok(View::Sheet(self.sheet_view(selection, table)))
    }

    fn sheet_view(&self, sheet: &str, table: Table) -> SheetView {
        match aggregate(&table, sheet) {
            Ok(outcome) => SheetView {
                sheet: sheet.to_string(),
                chart: Some(chart_for_sheet(&outcome, &self.config.chart)),
                table: Some(TableView::new(sheet, table, &self.config)),
                notices: Vec::new(),
            },
            Err(reason) => {
                log_skip(&reason);
                SheetView {
                    sheet: sheet.to_string(),
                    chart: None,
                    table: None,
                    notices: reason
                        .warning(&self.config)
                        .map(Notice::warning)
                        .into_iter()
                        .collect(),
                }
            }
        }
    }

    fn all_charts(&mut self) -> Vec<Panel> {
        let mut panels = Vec::new();

        for sheet in self.source.sheet_names() {
            let table = match self.source.load_sheet(&sheet) {
                Ok(table) => table,
                Err(ReportError::SourceEmpty { .. }) => continue,
                Err(e) => {
                    log::warn!("sheet '{}' failed to load: {}", sheet, e);
                    panels.push(Panel::Failed {
                        notice: Notice::error(e.to_string()),
                        sheet,
                    });
                    continue;
                }
            };

            match aggregate(&table, &sheet) {
                Ok(outcome) => panels.push(Panel::Chart(chart_for_sheet(
                    &outcome,
                    &self.config.chart,
                ))),
                Err(SkipReason::NoStatusColumn { .. }) => {}
                Err(reason) => {
                    log_skip(&reason);
                    panels.push(Panel::Failed {
                        notice: Notice::warning(reason.to_string()),
                        sheet,
                    });
                }
            }
        }

        panels
    }
}

fn log_skip(reason: &SkipReason) {
    match reason {
        SkipReason::NoStatusColumn { sheet } => {
            log::debug!("sheet '{}' has no status column", sheet)
        }
        SkipReason::InvalidLabel { .. } => log::warn!("{}", reason),
    }
}

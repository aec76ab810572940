//! Status aggregation
//!
//! Counts how many rows of a sheet fall into each status category and how
//! many overdue assets are still in operation.

use ahash::AHashMap;
use thiserror::Error;

use crate::config::ReportConfig;
use crate::table::Table;
use crate::value::CellValue;
use crate::{IN_OPERATION, OBSERVATION_COLUMN, OVERDUE, STATUS_COLUMN};

/// Number of rows carrying one status label
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new<S: Into<String>>(label: S, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Result of aggregating one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AggregateOutcome {
    pub sheet: String,
    /// Categories in first-seen order
    pub categories: Vec<CategoryCount>,
    /// Rows with status "Vencido" whose observation is "EM OPERAÇÃO"
    pub overdue_in_operation: usize,
}

impl AggregateOutcome {
    /// Sum of all category counts
    pub fn total(&self) -> usize {
        self.categories.iter().map(|c| c.count).sum()
    }

    /// Count for an exact label, zero when absent
    pub fn count_of(&self, label: &str) -> usize {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .map_or(0, |c| c.count)
    }
}

/// Why a sheet produced no chart
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The sheet has no `status` column
    #[error("A coluna 'status' não foi encontrada na aba '{sheet}'. Ignorando a aba.")]
    NoStatusColumn { sheet: String },

    /// A status cell is empty or holds something other than text
    #[error(
        "Ocorreu um erro ao tentar obter os rótulos da aba '{sheet}' \
         (linha {line}: valor do tipo {found}). Verifique se os dados estão corretos."
    )]
    InvalidLabel {
        sheet: String,
        /// 1-based line of the row in its source sheet
        line: usize,
        found: &'static str,
    },
}

impl SkipReason {
    /// Sheet the reason applies to
    pub fn sheet(&self) -> &str {
        match self {
            SkipReason::NoStatusColumn { sheet } | SkipReason::InvalidLabel { sheet, .. } => sheet,
        }
    }

    /// Whether the user should see a warning for this skip
    pub fn should_warn(&self, config: &ReportConfig) -> bool {
        match self {
            SkipReason::NoStatusColumn { sheet } => !config.is_chart_exempt(sheet),
            SkipReason::InvalidLabel { .. } => true,
        }
    }

    /// The warning text, or `None` when the skip is expected
    pub fn warning(&self, config: &ReportConfig) -> Option<String> {
        self.should_warn(config).then(|| self.to_string())
    }
}

/// Count status categories of a sheet.
///
/// Every data row must carry a text status. An empty status cell or any other
/// non-text value fails the whole sheet, so a chart is never built from
/// partial data. Rows that are blank in every column never reach this point.
pub fn aggregate(table: &Table, sheet_name: &str) -> Result<AggregateOutcome, SkipReason> {
    let status_idx = table
        .column_index(STATUS_COLUMN)
        .ok_or_else(|| SkipReason::NoStatusColumn {
            sheet: sheet_name.to_string(),
        })?;
    let observation_idx = table.column_index_trimmed(OBSERVATION_COLUMN);

    let mut categories: Vec<CategoryCount> = Vec::new();
    let mut index: AHashMap<&str, usize> = AHashMap::new();
    let mut overdue_in_operation = 0;

    for row in table.rows() {
        let label = match &row.values()[status_idx] {
            CellValue::String(s) => s.as_str(),
            other => {
                return Err(SkipReason::InvalidLabel {
                    sheet: sheet_name.to_string(),
                    line: row.line(),
                    found: other.type_name(),
                })
            }
        };

        match index.get(label) {
            Some(&i) => categories[i].count += 1,
            None => {
                index.insert(label, categories.len());
                categories.push(CategoryCount::new(label, 1));
            }
        }

        if label == OVERDUE {
            let in_operation = observation_idx
                .and_then(|i| row.values()[i].as_str())
                .is_some_and(|obs| obs.trim_end() == IN_OPERATION);
            if in_operation {
                overdue_in_operation += 1;
            }
        }
    }

    log::debug!(
        "sheet '{}': {} categories, {} overdue in operation",
        sheet_name,
        categories.len(),
        overdue_in_operation
    );

    Ok(AggregateOutcome {
        sheet: sheet_name.to_string(),
        categories,
        overdue_in_operation,
    })
}

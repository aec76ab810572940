//! In-memory sheet tables

use crate::error::{Error, Result};
use crate::value::CellValue;

/// A sheet's data: a header row of column names and the rows below it.
///
/// Every row has exactly one value per column, so a row can be read as a
/// mapping from column name to value through [`RowRef`]. Each row also
/// remembers the 1-based line it came from in the source sheet.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    header_line: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    lines: Vec<usize>,
}

impl Table {
    /// Create an empty table with the given header.
    ///
    /// The header sits on line 1 and pushed rows follow it.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            header_line: 1,
            lines: Vec::new(),
        }
    }

    /// Build a table from raw sheet rows, numbering them from line 1.
    ///
    /// See [`Table::from_numbered_rows`].
    pub fn from_rows<I>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec<CellValue>>,
    {
        Self::from_numbered_rows(rows.into_iter().enumerate().map(|(i, row)| (i + 1, row)))
    }

    /// Build a table from raw sheet rows paired with their 1-based source line.
    ///
    /// Rows with only empty cells are dropped. The first remaining row
    /// becomes the header; blank header cells are named `Unnamed: {index}`
    /// and repeated names get a `.{n}` suffix. Returns `None` when there is
    /// no header row at all.
    pub fn from_numbered_rows<I>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = (usize, Vec<CellValue>)>,
    {
        let mut rows = rows
            .into_iter()
            .filter(|(_, row)| row.iter().any(|v| !v.is_empty()));
        let (header_line, header) = rows.next()?;
        let (lines, body): (Vec<usize>, Vec<Vec<CellValue>>) = rows.unzip();

        let width = body
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        let mut columns: Vec<String> = Vec::with_capacity(width);
        for i in 0..width {
            let base = match header.get(i) {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => format!("Unnamed: {}", i),
            };
            let mut name = base.clone();
            let mut n = 1;
            while columns.contains(&name) {
                name = format!("{}.{}", base, n);
                n += 1;
            }
            columns.push(name);
        }

        let rows = body
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();

        Some(Self {
            columns,
            rows,
            header_line,
            lines,
        })
    }

    /// Append a row on the line after the previous one.
    ///
    /// Short rows are padded with [`CellValue::Empty`]; rows longer than the
    /// header are rejected.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) -> Result<()> {
        if row.len() > self.columns.len() {
            return Err(Error::RowTooWide {
                row: self.rows.len(),
                width: row.len(),
                columns: self.columns.len(),
            });
        }
        row.resize(self.columns.len(), CellValue::Empty);
        let line = self.lines.last().copied().unwrap_or(self.header_line) + 1;
        self.rows.push(row);
        self.lines.push(line);
        Ok(())
    }

    /// Source line of the header row
    pub fn header_line(&self) -> usize {
        self.header_line
    }

    /// Column names in sheet order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows (the header is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column with exactly this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of the column whose name matches after trimming trailing whitespace.
    ///
    /// Spreadsheet headers often carry a stray line break (`"observação\n"`).
    pub fn column_index_trimmed(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.trim_end() == name)
    }

    /// Check whether a column with exactly this name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Borrow one row
    pub fn row(&self, index: usize) -> Option<RowRef<'_>> {
        let values = self.rows.get(index)?;
        Some(RowRef {
            columns: &self.columns,
            values,
            line: self.lines.get(index).copied().unwrap_or_default(),
        })
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> + '_ {
        self.rows
            .iter()
            .zip(&self.lines)
            .map(move |(values, &line)| RowRef {
                columns: &self.columns,
                values,
                line,
            })
    }
}

/// A borrowed view of one table row
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    columns: &'a [String],
    values: &'a [CellValue],
    line: usize,
}

impl<'a> RowRef<'a> {
    /// Value of the named column, if the column exists
    pub fn get(&self, column: &str) -> Option<&'a CellValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.values.get(i))
    }

    /// 1-based line of the row in its source sheet
    pub fn line(&self) -> usize {
        self.line
    }

    /// Cell values in column order
    pub fn values(&self) -> &'a [CellValue] {
        self.values
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

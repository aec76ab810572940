//! Row highlighting for the table view

use crate::color::Color;
use crate::config::HighlightStyle;
use crate::table::{RowRef, Table};
use crate::{OVERDUE, STATUS_COLUMN};

/// Style directive for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellStyle {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
}

impl CellStyle {
    /// Check if the style changes nothing
    pub fn is_plain(&self) -> bool {
        self.background.is_none() && self.foreground.is_none()
    }

    /// Inline CSS declarations, empty for a plain cell
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(bg) = self.background {
            css.push_str(&format!("background-color: {};", bg));
        }
        if let Some(fg) = self.foreground {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(&format!("color: {};", fg));
        }
        css
    }
}

/// Style directives for every cell of one row
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RowStyle {
    pub cells: Vec<CellStyle>,
}

impl RowStyle {
    /// Check whether the row is highlighted
    pub fn is_highlighted(&self) -> bool {
        self.cells.iter().any(|c| !c.is_plain())
    }
}

/// Style one row: every cell gets the alert style when the row's status
/// text contains "Vencido".
pub fn highlight_row(row: RowRef<'_>, style: &HighlightStyle) -> RowStyle {
    let overdue = row
        .get(STATUS_COLUMN)
        .and_then(|v| v.as_str())
        .is_some_and(|s| s.contains(OVERDUE));

    let cell = if overdue {
        CellStyle {
            background: Some(style.background),
            foreground: Some(style.foreground),
        }
    } else {
        CellStyle::default()
    };

    RowStyle {
        cells: vec![cell; row.len()],
    }
}

/// Style every row of a table, in row order
pub fn highlight_table(table: &Table, style: &HighlightStyle) -> Vec<RowStyle> {
    table.rows().map(|row| highlight_row(row, style)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::CellValue;
    use proptest::prelude::*;

    #[test]
    fn test_overdue_row_is_highlighted() {
        let mut t = Table::new(["placa", "status"]);
        t.push_row(vec!["ABC1D23".into(), "Vencido".into()]).unwrap();
        t.push_row(vec!["XYZ9K87".into(), "Conforme".into()]).unwrap();

        let styles = highlight_table(&t, &HighlightStyle::default());
        assert!(styles[0].is_highlighted());
        assert_eq!(styles[0].cells.len(), 2);
        assert_eq!(
            styles[0].cells[1].to_css(),
            "background-color: #E74C3C; color: #FFFFFF;"
        );
        assert!(!styles[1].is_highlighted());
        assert_eq!(styles[1].cells[0].to_css(), "");
    }

    #[test]
    fn test_substring_match() {
        let mut t = Table::new(["status"]);
        t.push_row(vec!["Vencido há 10 dias".into()]).unwrap();
        let style = highlight_row(t.row(0).unwrap(), &HighlightStyle::default());
        assert!(style.is_highlighted());
    }

    #[test]
    fn test_non_text_or_missing_status_is_plain() {
        let mut t = Table::new(["status"]);
        t.push_row(vec![CellValue::Number(1.0)]).unwrap();
        assert!(!highlight_row(t.row(0).unwrap(), &HighlightStyle::default()).is_highlighted());

        let mut t = Table::new(["placa"]);
        t.push_row(vec!["Vencido".into()]).unwrap();
        assert!(!highlight_row(t.row(0).unwrap(), &HighlightStyle::default()).is_highlighted());
    }

    proptest! {
        #[test]
        fn prop_highlight_is_per_row(
            statuses in prop::collection::vec(
                prop_oneof![Just("Vencido"), Just("Conforme"), Just("Atenção"), Just("")],
                1..20,
            ),
            rotate in 0usize..20,
        ) {
            let build = |rows: &[&str]| {
                let mut t = Table::new(["status"]);
                for s in rows {
                    t.push_row(vec![CellValue::from(*s)]).unwrap();
                }
                highlight_table(&t, &HighlightStyle::default())
            };

            let original = build(&statuses);
            let mut rotated_rows = statuses.clone();
            let k = rotate % rotated_rows.len();
            rotated_rows.rotate_left(k);
            let mut rotated = build(&rotated_rows);
            rotated.rotate_right(k);

            prop_assert_eq!(original, rotated);
        }
    }
}

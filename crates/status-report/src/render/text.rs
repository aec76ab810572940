//! Plain text rendering

use std::fmt::Write;

use status_report_chart::ChartSpec;

use super::format_percent;
use crate::report::{Notice, NoticeLevel, Panel, SheetView, TableView, View};

const BAR_WIDTH: usize = 20;

/// Render a view as plain text
pub fn render_text(view: &View) -> String {
    let mut out = String::new();
    match view {
        View::Sheet(sheet) => write_sheet(&mut out, sheet),
        View::Table(table) => write_table(&mut out, table),
        View::AllCharts { panels } => {
            for (i, panel) in panels.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                match panel {
                    Panel::Chart(chart) => write_chart(&mut out, chart),
                    Panel::Failed { sheet, notice } => {
                        let _ = writeln!(out, "{}", sheet);
                        write_notice(&mut out, notice);
                    }
                }
            }
        }
    }
    out
}

fn write_sheet(out: &mut String, view: &SheetView) {
    for notice in &view.notices {
        write_notice(out, notice);
    }
    if let Some(chart) = &view.chart {
        write_chart(out, chart);
    }
    if let Some(table) = &view.table {
        out.push('\n');
        write_table(out, table);
    }
}

fn write_notice(out: &mut String, notice: &Notice) {
    let prefix = match notice.level {
        NoticeLevel::Warning => "Aviso",
        NoticeLevel::Error => "Erro",
    };
    let _ = writeln!(out, "{}: {}", prefix, notice.message);
}

/// Title, one line per slice, then the annotation
fn write_chart(out: &mut String, chart: &ChartSpec) {
    if let Some(title) = &chart.title {
        let _ = writeln!(out, "{}", title);
    }

    let label_width = chart
        .slices
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);
    let count_width = chart
        .slices
        .iter()
        .map(|s| s.count.to_string().len())
        .max()
        .unwrap_or(0);

    for slice in &chart.slices {
        let percent = chart.percent(slice);
        let bar = "#".repeat((percent / 100.0 * BAR_WIDTH as f64).round() as usize);
        let _ = writeln!(
            out,
            "{} {:<lw$}  {:>cw$}  {:>6}  {}",
            if slice.is_pulled() { '>' } else { ' ' },
            slice.label,
            slice.count,
            format_percent(percent),
            bar,
            lw = label_width,
            cw = count_width,
        );
    }

    for line in &chart.annotation.lines {
        let _ = writeln!(out, "{}", line);
    }
}

/// Caption and aligned table; `!` marks highlighted rows
fn write_table(out: &mut String, view: &TableView) {
    let _ = writeln!(out, "{}", view.caption());

    let columns = view.table.columns();
    let rows: Vec<Vec<String>> = view
        .table
        .rows()
        .map(|row| row.values().iter().map(|v| v.to_string()).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_row(out, ' ', columns.iter().map(String::as_str), &widths);
    for (i, row) in rows.iter().enumerate() {
        let highlighted = view.styles.get(i).is_some_and(|s| s.is_highlighted());
        let marker = if highlighted { '!' } else { ' ' };
        write_row(out, marker, row.iter().map(String::as_str), &widths);
    }
}

fn write_row<'a>(
    out: &mut String,
    marker: char,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) {
    let mut line = String::new();
    line.push(marker);
    for (cell, width) in cells.zip(widths) {
        line.push(' ');
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad + 1));
    }
    let _ = writeln!(out, "{}", line.trim_end());
}

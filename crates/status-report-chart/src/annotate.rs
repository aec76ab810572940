//! Chart construction from aggregated counts

use status_report_core::{
    AggregateOutcome, CategoryCount, ChartOptions, Color, Palette, ATTENTION, COMPLIANT, OVERDUE,
};

use crate::annotation::Annotation;
use crate::chart::ChartSpec;
use crate::slice::PieSlice;

/// Pick a slice color by substring, first match wins:
/// "Atenção", then "Conforme", then "Vencido", then the default.
pub fn color_for_label(label: &str, palette: &Palette) -> Color {
    if label.contains(ATTENTION) {
        palette.attention
    } else if label.contains(COMPLIANT) {
        palette.compliant
    } else if label.contains(OVERDUE) {
        palette.overdue
    } else {
        palette.default
    }
}

/// Radial offset for a label: overdue slices are pulled out
pub fn pull_for_label(label: &str, options: &ChartOptions) -> f64 {
    if label.contains(OVERDUE) {
        options.pull
    } else {
        0.0
    }
}

/// Summary lines: one per category, then the overdue-in-operation line
pub fn annotation_lines(categories: &[CategoryCount], overdue_in_operation: usize) -> Vec<String> {
    categories
        .iter()
        .map(|c| format!("{}: {}", c.label, c.count))
        .chain(std::iter::once(format!(
            "Vencido em operação: {}",
            overdue_in_operation
        )))
        .collect()
}

/// Decorate category counts with colors, pulls and the summary annotation
pub fn annotate(
    categories: &[CategoryCount],
    overdue_in_operation: usize,
    options: &ChartOptions,
) -> ChartSpec {
    let slices = categories
        .iter()
        .map(|c| PieSlice {
            label: c.label.clone(),
            count: c.count,
            color: color_for_label(&c.label, &options.palette),
            pull: pull_for_label(&c.label, options),
        })
        .collect();

    let annotation = Annotation::below(annotation_lines(categories, overdue_in_operation));
    ChartSpec::new(options.hole, slices, annotation)
}

/// Build the titled chart for one aggregated sheet
pub fn chart_for_sheet(outcome: &AggregateOutcome, options: &ChartOptions) -> ChartSpec {
    annotate(&outcome.categories, outcome.overdue_in_operation, options)
        .with_title(format!("Distribuição de Status - {}", outcome.sheet))
}

//! # status-report-chart
//!
//! Status chart model for status-report: turns category counts into
//! colored, annotated pie slices.

mod annotate;
mod annotation;
mod chart;
mod slice;

pub use annotate::{annotate, annotation_lines, chart_for_sheet, color_for_label, pull_for_label};
pub use annotation::Annotation;
pub use chart::{ChartKind, ChartSpec, SliceText};
pub use slice::PieSlice;

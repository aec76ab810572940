//! Chart types

use crate::annotation::Annotation;
use crate::slice::PieSlice;

/// Chart kinds a status chart can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ChartKind {
    /// Full pie
    Pie,
    /// Pie with a hole in the middle
    Doughnut,
}

/// Where slice text is placed and what it shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SliceText {
    /// No text on slices
    None,
    /// Label and percentage, drawn inside the slice
    #[default]
    PercentAndLabel,
}

/// A fully decorated status chart, ready for a renderer.
///
/// Built fresh for every render and never cached.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartSpec {
    /// Chart title
    pub title: Option<String>,
    /// Chart kind
    pub kind: ChartKind,
    /// Inner radius as a fraction of the outer radius
    pub hole: f64,
    /// Slice text mode
    pub slice_text: SliceText,
    /// Slices in category order
    pub slices: Vec<PieSlice>,
    /// Summary text shown under the chart
    pub annotation: Annotation,
}

impl ChartSpec {
    /// Create an untitled chart
    pub fn new(hole: f64, slices: Vec<PieSlice>, annotation: Annotation) -> Self {
        let kind = if hole > 0.0 {
            ChartKind::Doughnut
        } else {
            ChartKind::Pie
        };
        Self {
            title: None,
            kind,
            hole,
            slice_text: SliceText::default(),
            slices,
            annotation,
        }
    }

    /// Set chart title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sum of all slice counts
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Share of one slice in percent, 0 for an empty chart
    pub fn percent(&self, slice: &PieSlice) -> f64 {
        match self.total() {
            0 => 0.0,
            total => slice.count as f64 * 100.0 / total as f64,
        }
    }

    /// Check whether the chart has nothing to draw
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

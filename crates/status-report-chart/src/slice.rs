//! Pie slice types

use status_report_core::Color;

/// One category of a status chart
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PieSlice {
    /// Status label
    pub label: String,
    /// Number of rows with this status
    pub count: usize,
    /// Fill color
    pub color: Color,
    /// Radial offset as a fraction of the radius; zero keeps the slice in place
    pub pull: f64,
}

impl PieSlice {
    /// Check whether the slice is drawn pulled out of the pie
    pub fn is_pulled(&self) -> bool {
        self.pull > 0.0
    }
}

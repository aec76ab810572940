//! Chart annotation types

/// Free text attached to a chart, outside the legend
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Annotation {
    /// Text lines, top to bottom
    pub lines: Vec<String>,
    /// Horizontal position in chart-relative units (0 left, 1 right)
    pub x: f64,
    /// Vertical position in chart-relative units; negative is below the plot
    pub y: f64,
    /// Font size in points
    pub font_size: u32,
}

impl Annotation {
    /// Create an annotation centered below the plot
    pub fn below(lines: Vec<String>) -> Self {
        Self {
            lines,
            x: 0.5,
            y: -0.2,
            font_size: 12,
        }
    }

    /// Lines joined with `\n`
    pub fn text(&self) -> String {
        self.joined("\n")
    }

    /// Lines joined with an arbitrary separator (`<br>` for HTML)
    pub fn joined(&self, separator: &str) -> String {
        self.lines.join(separator)
    }
}

//! Report configuration
//!
//! Everything the renderers need that is not data: the chart palette, the
//! alert style for overdue rows, and which sheets get special treatment.
//! Defaults match the stock status dashboard.

use crate::color::Color;

/// Slice colors, one per status family
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    /// Labels containing "Atenção"
    pub attention: Color,
    /// Labels containing "Conforme"
    pub compliant: Color,
    /// Labels containing "Vencido"
    pub overdue: Color,
    /// Everything else
    pub default: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            attention: Color::rgb(0x11, 0x8D, 0xFF),
            compliant: Color::rgb(0x16, 0x48, 0x88),
            overdue: Color::rgb(0xEF, 0x48, 0x24),
            default: Color::rgb(0x34, 0x98, 0xDB),
        }
    }
}

/// Chart construction options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartOptions {
    pub palette: Palette,
    /// Inner radius as a fraction of the outer radius (0 draws a full pie)
    pub hole: f64,
    /// Radial offset of pulled slices, as a fraction of the radius
    pub pull: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            hole: 0.5,
            pull: 0.1,
        }
    }
}

/// Alert style applied to every cell of an overdue row
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HighlightStyle {
    pub background: Color,
    pub foreground: Color,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xE7, 0x4C, 0x3C),
            foreground: Color::rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

/// Top-level configuration passed into the report pipeline
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportConfig {
    pub chart: ChartOptions,
    pub highlight: HighlightStyle,
    /// Sheets that are expected to have no `status` column
    pub chart_exempt_sheets: Vec<String>,
    /// Sheets shown as a highlighted table instead of a chart
    pub table_sheets: Vec<String>,
    /// Synthetic menu entry that selects every chart at once
    pub all_charts_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart: ChartOptions::default(),
            highlight: HighlightStyle::default(),
            chart_exempt_sheets: vec!["CIV".to_string(), "Opacidade".to_string()],
            table_sheets: vec!["Veículos Bloqueados".to_string(), "Data".to_string()],
            all_charts_label: "Todos os Gráficos".to_string(),
        }
    }
}

impl ReportConfig {
    /// Check whether a missing `status` column on this sheet is expected
    pub fn is_chart_exempt(&self, sheet: &str) -> bool {
        self.chart_exempt_sheets.iter().any(|s| s == sheet)
    }

    /// Check whether this sheet is rendered as a table only
    pub fn is_table_sheet(&self, sheet: &str) -> bool {
        self.table_sheets.iter().any(|s| s == sheet)
    }
}

#[cfg(feature = "serde")]
impl ReportConfig {
    /// Parse a JSON configuration; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Read and parse a JSON configuration file
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}

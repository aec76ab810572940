//! View renderers
//!
//! - [`text`] - Plain text for terminals
//! - [`html`] - Self-contained HTML page with inline SVG charts
//! - [`svg`] - Donut chart drawing used by the HTML page
//!
//! JSON output is the serde serialization of [`View`](crate::View).

pub mod html;
pub mod svg;
pub mod text;

pub use html::render_html;
pub use text::render_text;

use std::fmt;
use std::str::FromStr;

/// Output formats for a rendered view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Html,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Text => "text",
            Format::Html => "html",
            Format::Json => "json",
        })
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "html" | "htm" => Ok(Format::Html),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format: {}", other)),
        }
    }
}

/// Percentage with one decimal, as shown on slices
pub(crate) fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

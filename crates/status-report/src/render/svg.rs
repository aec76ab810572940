//! SVG donut charts

use std::f64::consts::{PI, TAU};

use status_report_chart::{ChartSpec, PieSlice, SliceText};

use super::format_percent;
use super::html::html_escape;

/// Drawing dimensions
#[derive(Debug, Clone, Copy)]
pub struct SvgLayout {
    /// Width and height of the square canvas
    pub size: f64,
    /// Outer radius as a fraction of half the canvas
    pub radius_ratio: f64,
}

impl Default for SvgLayout {
    fn default() -> Self {
        Self {
            size: 360.0,
            radius_ratio: 0.8,
        }
    }
}

impl SvgLayout {
    fn center(&self) -> f64 {
        self.size / 2.0
    }

    fn radius(&self) -> f64 {
        self.center() * self.radius_ratio
    }
}

/// Draw a chart as an inline `<svg>` element.
///
/// Slices start at twelve o'clock and run clockwise. Pulled slices are
/// shifted outward along their middle angle.
pub fn render_svg(chart: &ChartSpec, layout: &SvgLayout) -> String {
    let c = layout.center();
    let r = layout.radius();
    let inner = r * chart.hole.clamp(0.0, 0.95);
    let total = chart.total();

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart" viewBox="0 0 {s} {s}" width="{s}" height="{s}" role="img">"#,
        s = layout.size
    ));

    if total == 0 {
        svg.push_str(&format!(
            r##"<circle cx="{c:.2}" cy="{c:.2}" r="{r:.2}" fill="none" stroke="#d1d5db" stroke-width="2"/>"##,
        ));
        svg.push_str("</svg>");
        return svg;
    }

    let mut start = -PI / 2.0;
    let mut labels = String::new();
    for slice in &chart.slices {
        let sweep = TAU * slice.count as f64 / total as f64;
        let end = start + sweep;
        let mid = start + sweep / 2.0;
        let (dx, dy) = polar(0.0, 0.0, slice.pull * r, mid);

        svg.push_str(&format!(
            r##"<path d="{}" fill="{}" fill-rule="evenodd" stroke="#ffffff" stroke-width="1"{}><title>{}: {}</title></path>"##,
            slice_path(c + dx, c + dy, r, inner, start, end),
            slice.color,
            if slice.is_pulled() {
                r#" class="pulled""#
            } else {
                ""
            },
            html_escape(&slice.label),
            slice.count
        ));

        if chart.slice_text == SliceText::PercentAndLabel && slice.count > 0 {
            labels.push_str(&slice_label(chart, slice, c + dx, c + dy, (r + inner) / 2.0, mid));
        }

        start = end;
    }
    svg.push_str(&labels);
    svg.push_str("</svg>");
    svg
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Path for one ring sector; a full turn becomes two concentric circles
fn slice_path(cx: f64, cy: f64, r: f64, inner: f64, start: f64, end: f64) -> String {
    if end - start >= TAU - 1e-9 {
        let mut d = circle_path(cx, cy, r);
        if inner > 0.0 {
            d.push(' ');
            d.push_str(&circle_path(cx, cy, inner));
        }
        return d;
    }

    let large = if end - start > PI { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, r, start);
    let (x1, y1) = polar(cx, cy, r, end);

    if inner > 0.0 {
        let (ix1, iy1) = polar(cx, cy, inner, end);
        let (ix0, iy0) = polar(cx, cy, inner, start);
        format!(
            "M {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large} 1 {x1:.2} {y1:.2} \
             L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
        )
    } else {
        format!(
            "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large} 1 {x1:.2} {y1:.2} Z"
        )
    }
}

fn circle_path(cx: f64, cy: f64, r: f64) -> String {
    format!(
        "M {:.2} {cy:.2} a {r:.2} {r:.2} 0 1 0 {:.2} 0 a {r:.2} {r:.2} 0 1 0 {:.2} 0 Z",
        cx - r,
        2.0 * r,
        -2.0 * r
    )
}

fn slice_label(
    chart: &ChartSpec,
    slice: &PieSlice,
    cx: f64,
    cy: f64,
    radius: f64,
    angle: f64,
) -> String {
    let (x, y) = polar(cx, cy, radius, angle);
    format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" class="slice-label"><tspan x="{x:.2}" dy="-0.2em">{}</tspan><tspan x="{x:.2}" dy="1.2em">{}</tspan></text>"#,
        format_percent(chart.percent(slice)),
        html_escape(&slice.label)
    )
}

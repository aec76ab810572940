//! HTML report generation
//!
//! Produces a self-contained page: inline CSS, charts as inline SVG, and
//! tables with per-cell inline styles for highlighted rows.

use chrono::{DateTime, Local};

use status_report_chart::ChartSpec;

use super::svg::{render_svg, SvgLayout};
use crate::report::{Notice, NoticeLevel, Panel, SheetView, TableView, View};

const PAGE_TITLE: &str = "Análise de Dados";

/// Render a view as an HTML page
pub fn render_html(view: &View) -> String {
    render_page(view, Local::now())
}

fn render_page(view: &View, generated_at: DateTime<Local>) -> String {
    let body = match view {
        View::Sheet(sheet) => render_sheet(sheet),
        View::Table(table) => render_table(table),
        View::AllCharts { panels } => render_grid(panels),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        {body}
        {footer}
    </div>
</body>
</html>"#,
        title = PAGE_TITLE,
        css = inline_css(),
        body = body,
        footer = render_footer(generated_at),
    )
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; line-height: 1.5; color: #111827; background: #ffffff; }
.container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
h1 { font-size: 1.75rem; margin-bottom: 1.5rem; }
h2 { font-size: 1.15rem; margin-bottom: 0.75rem; }
.grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 1.5rem; }
.panel { border: 1px solid #e5e7eb; border-radius: 6px; padding: 1rem; }
figure { text-align: center; margin-bottom: 1.5rem; }
svg.chart { max-width: 100%; height: auto; }
.slice-label { font-size: 12px; fill: #ffffff; }
.annotation { font-size: 12px; margin-top: 0.5rem; }
.notice { padding: 0.75rem 1rem; border-radius: 4px; margin-bottom: 1rem; }
.notice.warning { background: #fef3c7; color: #92400e; }
.notice.error { background: #fee2e2; color: #991b1b; }
.caption { margin-bottom: 0.5rem; }
table { border-collapse: collapse; width: 100%; font-size: 0.875rem; }
th, td { border: 1px solid #e5e7eb; padding: 0.25rem 0.5rem; text-align: left; }
th { background: #f9fafb; }
footer { margin-top: 2rem; color: #6b7280; font-size: 0.75rem; }
"#
}

fn render_sheet(view: &SheetView) -> String {
    let mut html = String::new();
    for notice in &view.notices {
        html.push_str(&render_notice(notice));
    }
    if let Some(chart) = &view.chart {
        html.push_str(&render_chart(chart));
    }
    if let Some(table) = &view.table {
        html.push_str(&render_table(table));
    }
    html
}

fn render_grid(panels: &[Panel]) -> String {
    let mut html = String::from(r#"<div class="grid">"#);
    for panel in panels {
        html.push_str(r#"<div class="panel">"#);
        match panel {
            Panel::Chart(chart) => html.push_str(&render_chart(chart)),
            Panel::Failed { sheet, notice } => {
                html.push_str(&format!("<h2>{}</h2>", html_escape(sheet)));
                html.push_str(&render_notice(notice));
            }
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn render_notice(notice: &Notice) -> String {
    let class = match notice.level {
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    format!(
        r#"<div class="notice {}">{}</div>"#,
        class,
        html_escape(&notice.message)
    )
}

fn render_chart(chart: &ChartSpec) -> String {
    let title = chart
        .title
        .as_deref()
        .map(|t| format!("<h2>{}</h2>", html_escape(t)))
        .unwrap_or_default();
    let annotation = chart
        .annotation
        .lines
        .iter()
        .map(|line| html_escape(line))
        .collect::<Vec<_>>()
        .join("<br>");

    format!(
        r#"<figure>{title}{svg}<figcaption class="annotation" style="font-size: {size}pt;">{annotation}</figcaption></figure>"#,
        title = title,
        svg = render_svg(chart, &SvgLayout::default()),
        size = chart.annotation.font_size,
        annotation = annotation,
    )
}

fn render_table(view: &TableView) -> String {
    let mut html = format!(
        r#"<p class="caption">{}</p><table><thead><tr>"#,
        html_escape(&view.caption())
    );
    for column in view.table.columns() {
        html.push_str(&format!("<th>{}</th>", html_escape(column)));
    }
    html.push_str("</tr></thead><tbody>");

    for (i, row) in view.table.rows().enumerate() {
        let style = view.styles.get(i);
        html.push_str("<tr>");
        for (j, value) in row.values().iter().enumerate() {
            let css = style
                .and_then(|s| s.cells.get(j))
                .map(|c| c.to_css())
                .unwrap_or_default();
            let text = html_escape(&value.to_string());
            if css.is_empty() {
                html.push_str(&format!("<td>{}</td>", text));
            } else {
                html.push_str(&format!(r#"<td style="{}">{}</td>"#, css, text));
            }
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}

fn render_footer(generated_at: DateTime<Local>) -> String {
    format!(
        "<footer><p>Gerado em {}</p></footer>",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Escape text for HTML element content and attribute values
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

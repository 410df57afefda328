// File: crates/chart-core/src/legend.rs
// Summary: Legend markup for a set of selected points at one x-value.

use crate::axis::{format_number, Axis};
use crate::theme::{css_color, Theme};

/// A point picked out of the data for legend display.
/// `canvas_x`/`canvas_y` are kept for callers that place markers; the legend ignores them.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedPoint {
    pub canvas_x: f64,
    pub canvas_y: f64,
    pub x_value: f64,
    pub y_value: Option<f64>,
    pub name: String,
}

/// Build legend markup: `X: <b><span style='color: C;'>name</span></b>:&#160;value ...`.
/// The i-th point takes the color of data column i + 1.
pub fn generate_legend_html(x_axis: &Axis, theme: &Theme, x: f64, points: &[SelectedPoint]) -> String {
    let mut html = format!("{}:", x_axis.format_value(x));
    for (i, p) in points.iter().enumerate() {
        let color = css_color(theme.series_color(i + 1));
        let value = p.y_value.map(format_number).unwrap_or_default();
        html.push_str(&format!(
            " <b><span style='color: {};'>{}</span></b>:&#160;{}",
            color,
            escape(&p.name),
            value
        ));
    }
    html
}

/// Reduce legend markup to plain text (tags dropped, entities decoded).
pub fn to_plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

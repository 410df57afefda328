// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer for hairlines: draws each attached line and its info panel, back to front.

use anyhow::Result;
use skia_safe as skia;

use chart_core::chart::{encode_png, write_png};
use chart_core::legend::to_plain_text;
use chart_core::{Chart, RenderOptions, Theme};
use chart_hairlines::{Hairline, InfoPanel, LineBox};

const PANEL_PADDING: f32 = 4.0;
const LINE_HEIGHT: f32 = 16.0;
/// Rough advance per character for sizing panels without shaping text.
const CHAR_WIDTH: f32 = 7.0;

pub struct SkiaRenderer {
    pub opts: RenderOptions,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self { Self { opts } }

    /// Draw `hairlines` (render order, back to front) onto `canvas`. Unattached ones are skipped.
    pub fn draw_hairlines(&self, canvas: &skia::Canvas, theme: &Theme, hairlines: &[Hairline]) {
        for h in hairlines.iter().filter(|h| h.visual().attached) {
            self.draw_info_panel(canvas, theme, &h.visual().info);
            draw_line(canvas, theme, &h.visual().line);
        }
    }

    /// Render `chart` with `hairlines` over it and encode as PNG.
    pub fn render_png(&self, chart: &Chart, hairlines: &[Hairline]) -> Result<Vec<u8>> {
        let mut surface = chart.render_surface(&self.opts)?;
        self.draw_hairlines(surface.canvas(), &chart.theme, hairlines);
        encode_png(&mut surface)
    }

    pub fn render_to_png(
        &self,
        chart: &Chart,
        hairlines: &[Hairline],
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_png(chart, hairlines)?;
        write_png(output_png_path, &bytes)
    }

    fn draw_info_panel(&self, canvas: &skia::Canvas, theme: &Theme, info: &InfoPanel) {
        let text = to_plain_text(&info.html);
        let rect = panel_rect(info, &text);

        let mut fill = skia::Paint::default();
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.info_background);
        canvas.draw_rect(rect, &fill);

        let mut border = skia::Paint::default();
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.info_border);
        canvas.draw_rect(rect, &border);

        if self.opts.draw_labels {
            let mut paint_text = skia::Paint::default();
            paint_text.set_color(theme.info_text);
            let mut font = skia::Font::default();
            font.set_size(12.0);
            canvas.draw_str(&text, (rect.left + PANEL_PADDING, rect.top + LINE_HEIGHT - 2.0), &font, &paint_text);
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

/// Panel box anchored at the line's top, to its right.
pub fn panel_rect(info: &InfoPanel, text: &str) -> skia::Rect {
    let w = text.chars().count() as f32 * CHAR_WIDTH + PANEL_PADDING * 2.0;
    let h = LINE_HEIGHT + PANEL_PADDING * 2.0;
    // start one pixel right of the line so the line stays visible
    skia::Rect::from_xywh(info.left as f32 + 1.0, info.top as f32, w, h)
}

fn draw_line(canvas: &skia::Canvas, theme: &Theme, line: &LineBox) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.hairline);
    paint.set_anti_alias(false);
    paint.set_stroke_width(1.0);

    // centre of the pixel column so the 1px line is crisp
    let x = line.left.floor() as f32 + 0.5;
    let top = line.top as f32;
    canvas.draw_line((x, top), (x, top + line.height as f32), &paint);
}

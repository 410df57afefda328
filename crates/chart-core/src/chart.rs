// File: crates/chart-core/src/chart.rs
// Summary: Chart struct, data<->pixel transforms, row lookup, and headless PNG rendering using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::grid::linspace;
use crate::legend::{generate_legend_html, SelectedPoint};
use crate::series::Series;
use crate::types::Viewport;
use crate::view::ViewState;
use crate::{Area, Axis, Theme};

pub struct RenderOptions {
    /// Draw axis labels. Off for pixel-exact snapshots (font variance).
    pub draw_labels: bool,
    pub draw_grid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true, draw_grid: true }
    }
}

/// Line chart whose data forms a table: column 0 is x (from the first series),
/// columns 1.. are the series' y values on that shared grid.
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub viewport: Viewport,
    pub theme: Theme,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            viewport: Viewport::default(),
            theme: Theme::default(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Replace all data, keeping axes and layout.
    pub fn replace_series(&mut self, series: Vec<Series>) {
        self.series = series;
    }

    /// Fit both axes to the data, padding y by `y_margin` of its span.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        ViewState::from_chart(self, y_margin).apply_to_chart(self);
    }

    // ---- table view --------------------------------------------------------

    /// Column labels: x axis label, then one per series.
    pub fn labels(&self) -> Vec<String> {
        std::iter::once(self.x_axis.label.clone())
            .chain(self.series.iter().map(|s| s.label.clone()))
            .collect()
    }

    pub fn num_columns(&self) -> usize {
        1 + self.series.len()
    }

    pub fn num_rows(&self) -> usize {
        self.series.first().map_or(0, Series::len)
    }

    pub fn x_at(&self, row: usize) -> Option<f64> {
        self.series.first().and_then(|s| s.data_xy.get(row)).map(|p| p.0)
    }

    /// Value at (`row`, `col`); column 0 is x.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        match col {
            0 => self.x_at(row),
            c => self.series.get(c - 1).and_then(|s| s.y_at(row)),
        }
    }

    // ---- transforms --------------------------------------------------------

    pub fn plot_area(&self) -> Area {
        self.viewport.plot_area()
    }

    pub fn to_dom_x(&self, x: f64) -> f64 {
        let a = self.plot_area();
        a.x + (x - self.x_axis.min) / self.x_axis.span() * a.w
    }

    pub fn to_data_x(&self, px: f64) -> f64 {
        let a = self.plot_area();
        self.x_axis.min + (px - a.x) / a.w * self.x_axis.span()
    }

    pub fn to_dom_y(&self, y: f64) -> f64 {
        let a = self.plot_area();
        a.bottom() - (y - self.y_axis.min) / self.y_axis.span() * a.h
    }

    /// Row whose x lands closest to the pixel `dom_x`. First row wins ties.
    pub fn find_closest_row(&self, dom_x: f64) -> Option<usize> {
        let first = self.series.first()?;
        let mut best: Option<(usize, f64)> = None;
        for (row, &(x, _)) in first.data_xy.iter().enumerate() {
            if !x.is_finite() { continue; }
            let d = (self.to_dom_x(x) - dom_x).abs();
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((row, d));
            }
        }
        best.map(|(row, _)| row)
    }

    pub fn legend_html(&self, x: f64, points: &[SelectedPoint]) -> String {
        generate_legend_html(&self.x_axis, &self.theme, x, points)
    }

    // ---- rendering ---------------------------------------------------------

    /// Draw background, grid, axes and series onto `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(self.theme.background);

        let a = self.plot_area();
        if opts.draw_grid {
            draw_grid(canvas, &a, self.theme.grid);
        }
        draw_axes(canvas, &a, &self.theme);
        if opts.draw_labels {
            draw_labels(canvas, &a, &self.x_axis, &self.y_axis, self.theme.axis_label);
        }

        for (i, s) in self.series.iter().enumerate() {
            self.draw_line_series(canvas, s, self.theme.series_color(i + 1));
        }
    }

    /// Render the chart into a new raster surface.
    pub fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((self.viewport.width, self.viewport.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        encode_png(&mut surface)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path, &bytes)
    }

    fn draw_line_series(&self, canvas: &skia::Canvas, series: &Series, color: skia::Color) {
        let data = &series.data_xy;
        if data.len() < 2 {
            return;
        }

        let mut path = skia::PathBuilder::new();
        let (x0, y0) = data[0];
        path.move_to((self.to_dom_x(x0) as f32, self.to_dom_y(y0) as f32));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((self.to_dom_x(x) as f32, self.to_dom_y(y) as f32));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(color);

        canvas.save();
        canvas.clip_rect(to_rect(&self.plot_area()), skia::ClipOp::Intersect, true);
        canvas.draw_path(&path.detach(), &stroke);
        canvas.restore();
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

/// Snapshot `surface` and encode it as PNG.
pub fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

pub fn write_png(output_png_path: impl AsRef<std::path::Path>, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

pub fn to_rect(a: &Area) -> skia::Rect {
    skia::Rect::from_xywh(a.x as f32, a.y as f32, a.w as f32, a.h as f32)
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, a: &Area, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (a.x as f32, a.y as f32, a.right() as f32, a.bottom() as f32);
    // verticals
    for x in linspace(a.x, a.right(), 10) {
        canvas.draw_line((x as f32, t), (x as f32, b), &paint);
    }
    // horizontals
    for y in linspace(a.y, a.bottom(), 6) {
        canvas.draw_line((l, y as f32), (r, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, a: &Area, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (a.x as f32, a.y as f32, a.right() as f32, a.bottom() as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

fn draw_labels(canvas: &skia::Canvas, a: &Area, x: &Axis, y: &Axis, color: skia::Color) {
    let mut paint_text = skia::Paint::default();
    paint_text.set_color(color);
    let mut font = skia::Font::default();
    font.set_size(14.0);

    let (l, t, r, b) = (a.x as f32, a.y as f32, a.right() as f32, a.bottom() as f32);
    canvas.draw_str(&x.label, (r - 80.0, b + 24.0), &font, &paint_text);
    canvas.draw_str(&y.label, (l - 56.0, t + 14.0), &font, &paint_text);
}

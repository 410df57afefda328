// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart and overlay colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub hairline: skia::Color,
    pub info_background: skia::Color,
    pub info_border: skia::Color,
    pub info_text: skia::Color,
    /// Series colors, cycled by column.
    pub palette: [skia::Color; 4],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            hairline: skia::Color::from_argb(255, 255, 230, 70),
            info_background: skia::Color::from_argb(230, 32, 32, 38),
            info_border: skia::Color::from_argb(255, 120, 120, 130),
            info_text: skia::Color::from_argb(255, 235, 235, 245),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 200, 140, 255),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            hairline: skia::Color::from_argb(255, 0, 0, 0),
            info_background: skia::Color::from_argb(235, 255, 255, 255),
            info_border: skia::Color::from_argb(255, 60, 60, 70),
            info_text: skia::Color::from_argb(255, 20, 20, 30),
            palette: [
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 200, 60, 60),
                skia::Color::from_argb(255, 120, 60, 200),
            ],
        }
    }

    /// Color for data column `col` (1-based; column 0 is x).
    pub fn series_color(&self, col: usize) -> skia::Color {
        self.palette[col.saturating_sub(1) % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// CSS-style `rgb(r,g,b)` string for legend markup.
pub fn css_color(c: skia::Color) -> String {
    format!("rgb({},{},{})", c.r(), c.g(), c.b())
}

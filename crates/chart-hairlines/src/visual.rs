// File: crates/chart-hairlines/src/visual.rs
// Summary: Presentation handle owned by each hairline: the line, its info panel, and attachment state.

use chart_core::Area;

/// Vertical line spanning the plot area, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineBox {
    pub left: f64,
    pub top: f64,
    pub height: f64,
}

/// Info panel anchored at the top of the line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InfoPanel {
    pub left: f64,
    pub top: f64,
    /// Legend markup from the host chart.
    pub html: String,
    /// Drags are confined to this rectangle.
    pub containment: Area,
}

/// Created with its record and dropped with it. Not drawn until attached.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HairlineVisual {
    pub line: LineBox,
    pub info: InfoPanel,
    pub attached: bool,
}

impl HairlineVisual {
    /// Whether pixel `px` falls on the grab handle of width `handle_width` centred on the line.
    pub fn handle_contains(&self, px: f64, handle_width: f64) -> bool {
        (px - self.line.left).abs() <= handle_width * 0.5
    }
}

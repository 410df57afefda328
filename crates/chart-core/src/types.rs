// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, viewport).

use crate::geometry::Area;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Canvas size plus margins; the plot area is what remains inside the insets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Viewport {
    pub const fn new(width: i32, height: i32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    pub fn plot_area(&self) -> Area {
        let w = (self.width - self.insets.hsum() as i32).max(1);
        let h = (self.height - self.insets.vsum() as i32).max(1);
        Area::new(self.insets.left as f64, self.insets.top as f64, w as f64, h as f64)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}

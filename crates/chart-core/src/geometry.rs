// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Axis-aligned rectangle in canvas pixels (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Area {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Area {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
    pub fn right(&self) -> f64 { self.x + self.w }
    pub fn bottom(&self) -> f64 { self.y + self.h }
    /// Clamp a horizontal pixel into `[x, right]`.
    pub fn clamp_x(&self, px: f64) -> f64 { clamp(px, self.x, self.right()) }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

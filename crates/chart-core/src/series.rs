// File: crates/chart-core/src/series.rs
// Summary: Line series model. Series in one chart share the x grid of the first series.

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data_xy: Vec::new() }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data }
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Y value at `row`, if present and finite.
    pub fn y_at(&self, row: usize) -> Option<f64> {
        self.data_xy.get(row).map(|p| p.1).filter(|y| y.is_finite())
    }
}

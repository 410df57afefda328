// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and value formatting.

use chrono::{DateTime, Utc};

/// How values on an axis are printed in legends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    Number,
    /// Values are milliseconds since the Unix epoch (UTC).
    EpochMillis,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: ValueFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: ValueFormat::Number }
    }

    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }

    /// Span of the axis, never zero.
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    /// Format a value the way legends show it.
    pub fn format_value(&self, v: f64) -> String {
        match self.format {
            ValueFormat::Number => format_number(v),
            ValueFormat::EpochMillis => match DateTime::<Utc>::from_timestamp_millis(v.round() as i64) {
                Some(dt) => dt.format("%Y/%m/%d %H:%M:%S").to_string(),
                None => format_number(v),
            },
        }
    }
}

/// Round to two decimals and drop trailing zeros.
pub fn format_number(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    // avoid "-0"
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{}", r)
}

// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the host chart API used by overlay plugins.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod view;
pub mod theme;
pub mod legend;
pub mod plugin;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::{Axis, ValueFormat};
pub use geometry::Area;
pub use types::{Insets, Viewport};
pub use view::ViewState;
pub use theme::Theme;
pub use legend::{generate_legend_html, SelectedPoint};
pub use plugin::{ChartEvent, ChartHook, Plugin};

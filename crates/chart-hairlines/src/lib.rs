// File: crates/chart-hairlines/src/lib.rs
// Summary: Hairline overlay plugin entry point.
//
// A hairline is a vertical marker tied to a data x-value. Clicking the chart
// creates one (after a short delay, so a double-click can cancel it), dragging
// moves it, and each one carries an info panel with the values of the nearest
// data row. The records are kept back-to-front; the last one is on top.

pub mod config;
pub mod debounce;
pub mod error;
pub mod event;
pub mod host;
pub mod manager;
pub mod visual;

pub use config::{HairlineConfig, NearestMode};
pub use debounce::ClickDebounce;
pub use error::HairlineError;
pub use event::{HairlineEvent, HairlineListener};
pub use host::HairlineHost;
pub use manager::{Hairline, HairlineId, HairlineManager, PublicHairline};
pub use visual::{HairlineVisual, InfoPanel, LineBox};

// File: crates/chart-core/src/plugin.rs
// Summary: Plugin protocol between the chart and its overlays: lifecycle hooks and events.

use std::time::Instant;

/// Chart lifecycle points a plugin can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartHook {
    DidDrawChart,
    Click,
    DblClick,
    DataWillUpdate,
}

/// Event delivered to plugins. Pixel values are canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartEvent {
    /// The chart finished drawing with its current data and layout.
    DidDrawChart,
    Click { canvas_x: f64, at: Instant },
    DblClick { canvas_x: f64, at: Instant },
    /// New data is about to replace the current data.
    DataWillUpdate,
}

impl ChartEvent {
    pub fn hook(&self) -> ChartHook {
        match self {
            ChartEvent::DidDrawChart => ChartHook::DidDrawChart,
            ChartEvent::Click { .. } => ChartHook::Click,
            ChartEvent::DblClick { .. } => ChartHook::DblClick,
            ChartEvent::DataWillUpdate => ChartHook::DataWillUpdate,
        }
    }
}

/// Whether a plugin that returned `hooks` from `activate` should see `evt`.
pub fn wants(hooks: &[ChartHook], evt: &ChartEvent) -> bool {
    hooks.contains(&evt.hook())
}

/// Overlay plugin bound to a host `H` that provides chart capabilities.
pub trait Plugin<H> {
    fn id(&self) -> &'static str;
    /// Bind to `host`, reset state, and return the hooks to deliver.
    fn activate(&mut self, host: H) -> &'static [ChartHook];
    fn handle_event(&mut self, evt: &ChartEvent);
    /// Advance timers to `now`. Called from the host's event loop.
    fn poll(&mut self, _now: Instant) {}
    /// Drop everything the plugin placed on the chart.
    fn destroy(&mut self);
}

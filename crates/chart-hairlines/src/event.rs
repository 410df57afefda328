// File: crates/chart-hairlines/src/event.rs
// Summary: Notifications emitted by the hairline manager and the listener trait.

/// Something changed in the set of hairlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HairlineEvent {
    Created { x_value: f64 },
    Deleted { x_value: f64 },
    Moved { old_x_value: f64, new_x_value: f64 },
    /// Emitted after every structural or positional change, and on every `set`.
    Changed,
}

pub trait HairlineListener {
    fn on_event(&mut self, event: &HairlineEvent);
}

impl<F: FnMut(&HairlineEvent)> HairlineListener for F {
    fn on_event(&mut self, event: &HairlineEvent) {
        self(event)
    }
}

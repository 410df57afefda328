// File: crates/chart-hairlines/tests/common/mod.rs
// Purpose: Shared fixtures: a small chart with a known pixel mapping and an event recorder.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use chart_core::{Axis, Chart, Insets, Series, Viewport};
use chart_hairlines::{HairlineEvent, HairlineHost, HairlineManager};
use chart_core::plugin::Plugin;

/// Plot area spans x 100..500 px; x axis 0..10, so px = 100 + 40 * x.
pub fn chart() -> Chart {
    let mut chart = Chart::new();
    chart.viewport = Viewport::new(520, 260, Insets::new(100, 20, 10, 50));
    chart.x_axis = Axis::new("x", 0.0, 10.0);
    chart.y_axis = Axis::new("y", 0.0, 20.0);
    chart.add_series(Series::with_data("up", (0..=10).map(|i| (i as f64, 2.0 * i as f64)).collect()));
    chart.add_series(Series::with_data("down", (0..=10).map(|i| (i as f64, 10.0 - i as f64)).collect()));
    chart
}

pub fn px(x: f64) -> f64 {
    100.0 + 40.0 * x
}

pub type EventLog = Rc<RefCell<Vec<HairlineEvent>>>;

pub fn record<H: HairlineHost>(manager: &mut HairlineManager<H>) -> EventLog {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    manager.subscribe(move |e: &HairlineEvent| sink.borrow_mut().push(*e));
    log
}

/// Manager activated on an owned chart, with a recorder attached.
pub fn active_manager() -> (HairlineManager<Chart>, EventLog) {
    let mut manager = HairlineManager::default();
    manager.activate(chart());
    let log = record(&mut manager);
    (manager, log)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

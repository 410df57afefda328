// File: crates/chart-hairlines/tests/data_update.rs
// Purpose: Hairlines keep their screen position across data updates that rescale the x axis.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use chart_core::plugin::{ChartEvent, Plugin};
use chart_core::{Chart, Series};
use chart_hairlines::{HairlineManager, PublicHairline};
use common::{approx, chart};

#[test]
fn screen_position_survives_rescaling_update() {
    let shared = Rc::new(RefCell::new(chart()));
    let mut m: HairlineManager<Rc<RefCell<Chart>>> = HairlineManager::default();
    m.activate(shared.clone());
    m.set(&[PublicHairline::new(2.5), PublicHairline::new(7.5)]);
    let before: Vec<f64> = m.hairlines().iter().map(|h| h.visual().line.left).collect();

    m.handle_event(&ChartEvent::DataWillUpdate);
    {
        let mut c = shared.borrow_mut();
        c.replace_series(vec![Series::with_data("up", (0..=40).map(|i| (i as f64, i as f64)).collect())]);
        c.autoscale_axes(0.02);
        assert!(approx(c.x_axis.max, 40.0));
    }
    m.handle_event(&ChartEvent::DidDrawChart);

    let after: Vec<f64> = m.hairlines().iter().map(|h| h.visual().line.left).collect();
    for (b, a) in before.iter().zip(&after) {
        assert!(approx(*a, *b), "moved from {b} to {a}");
    }
    // x-values were re-resolved against the new axis
    assert!(approx(m.get()[0].x_value, 10.0));
    assert!(approx(m.get()[1].x_value, 30.0));
}

#[test]
fn redraw_without_update_keeps_values() {
    let shared = Rc::new(RefCell::new(chart()));
    let mut m: HairlineManager<Rc<RefCell<Chart>>> = HairlineManager::default();
    m.activate(shared.clone());
    m.set(&[PublicHairline::new(4.0)]);

    shared.borrow_mut().x_axis.max = 20.0;
    m.handle_event(&ChartEvent::DidDrawChart);

    // no pending pixel marker, so the value holds and the line moves
    assert!(approx(m.get()[0].x_value, 4.0));
    assert!(approx(m.hairlines()[0].visual().line.left, 180.0));
}

#[test]
fn redraw_with_no_hairlines_is_a_noop() {
    let mut m: HairlineManager<Chart> = HairlineManager::default();
    m.activate(chart());
    m.handle_event(&ChartEvent::DataWillUpdate);
    m.handle_event(&ChartEvent::DidDrawChart);
    assert!(m.is_empty());
}

#[test]
fn set_during_data_update_survives_redraw() {
    let shared = Rc::new(RefCell::new(chart()));
    let mut m: HairlineManager<Rc<RefCell<Chart>>> = HairlineManager::default();
    m.activate(shared.clone());
    m.set(&[PublicHairline::new(2.5)]);

    m.handle_event(&ChartEvent::DataWillUpdate);
    let wanted = [PublicHairline { x_value: 6.0, interpolated: false }];
    m.set(&wanted);
    shared.borrow_mut().x_axis.max = 20.0;
    m.handle_event(&ChartEvent::DidDrawChart);

    assert_eq!(m.get(), wanted);
    assert!(approx(m.hairlines()[0].visual().line.left, 220.0));
}

// File: crates/chart-core/tests/transforms.rs
// Purpose: Data<->pixel transforms, table view, and closest-row lookup.

use chart_core::{Axis, Chart, Insets, Series, Viewport};

fn chart() -> Chart {
    let mut chart = Chart::new();
    // plot area: x 100..500, y 10..210
    chart.viewport = Viewport::new(520, 260, Insets::new(100, 20, 10, 50));
    chart.x_axis = Axis::new("t", 0.0, 10.0);
    chart.y_axis = Axis::new("v", 0.0, 4.0);
    chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (2.0, 2.0), (4.0, 3.0), (6.0, 2.5)]));
    chart.add_series(Series::with_data("b", vec![(0.0, 0.5), (2.0, f64::NAN), (4.0, 1.0), (6.0, 1.5)]));
    chart
}

#[test]
fn plot_area_is_inside_insets() {
    let a = chart().plot_area();
    assert_eq!((a.x, a.y, a.w, a.h), (100.0, 10.0, 400.0, 200.0));
}

#[test]
fn x_transforms_are_inverse() {
    let c = chart();
    assert!((c.to_dom_x(0.0) - 100.0).abs() < 1e-9);
    assert!((c.to_dom_x(10.0) - 500.0).abs() < 1e-9);
    assert!((c.to_dom_x(2.5) - 200.0).abs() < 1e-9);
    for x in [-3.0, 0.0, 1.25, 7.0, 12.0] {
        assert!((c.to_data_x(c.to_dom_x(x)) - x).abs() < 1e-9);
    }
}

#[test]
fn y_grows_upward() {
    let c = chart();
    assert!((c.to_dom_y(0.0) - 210.0).abs() < 1e-9);
    assert!((c.to_dom_y(4.0) - 10.0).abs() < 1e-9);
}

#[test]
fn table_view_columns() {
    let c = chart();
    assert_eq!(c.labels(), vec!["t".to_string(), "a".into(), "b".into()]);
    assert_eq!(c.num_columns(), 3);
    assert_eq!(c.num_rows(), 4);
    assert_eq!(c.value(2, 0), Some(4.0));
    assert_eq!(c.value(2, 1), Some(3.0));
    assert_eq!(c.value(1, 2), None);
    assert_eq!(c.value(9, 1), None);
    assert_eq!(c.value(0, 7), None);
}

#[test]
fn closest_row_snaps_to_nearest_sample() {
    let c = chart();
    assert_eq!(c.find_closest_row(c.to_dom_x(2.9)), Some(1));
    assert_eq!(c.find_closest_row(c.to_dom_x(3.1)), Some(2));
    assert_eq!(c.find_closest_row(0.0), Some(0));
    assert_eq!(c.find_closest_row(10_000.0), Some(3));
    assert_eq!(Chart::new().find_closest_row(200.0), None);
}

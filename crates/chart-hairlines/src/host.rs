// File: crates/chart-hairlines/src/host.rs
// Summary: Chart capabilities the hairline manager needs, and their implementation for `chart_core::Chart`.

use std::cell::RefCell;
use std::rc::Rc;

use chart_core::{Area, Chart, SelectedPoint};

/// What the host chart provides. Pixel values are canvas coordinates.
pub trait HairlineHost {
    fn to_dom_x(&self, x: f64) -> f64;
    fn to_data_x(&self, px: f64) -> f64;
    fn plot_area(&self) -> Area;
    /// Row closest to the pixel `dom_x`, or `None` without data.
    fn find_closest_row(&self, dom_x: f64) -> Option<usize>;
    /// Column labels; index 0 is the x column.
    fn labels(&self) -> Vec<String>;
    fn num_columns(&self) -> usize;
    fn value(&self, row: usize, col: usize) -> Option<f64>;
    fn legend_html(&self, x: f64, points: &[SelectedPoint]) -> String;
}

impl HairlineHost for Chart {
    fn to_dom_x(&self, x: f64) -> f64 { Chart::to_dom_x(self, x) }
    fn to_data_x(&self, px: f64) -> f64 { Chart::to_data_x(self, px) }
    fn plot_area(&self) -> Area { Chart::plot_area(self) }
    fn find_closest_row(&self, dom_x: f64) -> Option<usize> { Chart::find_closest_row(self, dom_x) }
    fn labels(&self) -> Vec<String> { Chart::labels(self) }
    fn num_columns(&self) -> usize { Chart::num_columns(self) }
    fn value(&self, row: usize, col: usize) -> Option<f64> { Chart::value(self, row, col) }
    fn legend_html(&self, x: f64, points: &[SelectedPoint]) -> String { Chart::legend_html(self, x, points) }
}

// Allow the application to keep mutating a chart the plugin is bound to
impl<T: HairlineHost + ?Sized> HairlineHost for Rc<RefCell<T>> {
    fn to_dom_x(&self, x: f64) -> f64 { self.borrow().to_dom_x(x) }
    fn to_data_x(&self, px: f64) -> f64 { self.borrow().to_data_x(px) }
    fn plot_area(&self) -> Area { self.borrow().plot_area() }
    fn find_closest_row(&self, dom_x: f64) -> Option<usize> { self.borrow().find_closest_row(dom_x) }
    fn labels(&self) -> Vec<String> { self.borrow().labels() }
    fn num_columns(&self) -> usize { self.borrow().num_columns() }
    fn value(&self, row: usize, col: usize) -> Option<f64> { self.borrow().value(row, col) }
    fn legend_html(&self, x: f64, points: &[SelectedPoint]) -> String { self.borrow().legend_html(x, points) }
}

impl<T: HairlineHost + ?Sized> HairlineHost for &T {
    fn to_dom_x(&self, x: f64) -> f64 { (**self).to_dom_x(x) }
    fn to_data_x(&self, px: f64) -> f64 { (**self).to_data_x(px) }
    fn plot_area(&self) -> Area { (**self).plot_area() }
    fn find_closest_row(&self, dom_x: f64) -> Option<usize> { (**self).find_closest_row(dom_x) }
    fn labels(&self) -> Vec<String> { (**self).labels() }
    fn num_columns(&self) -> usize { (**self).num_columns() }
    fn value(&self, row: usize, col: usize) -> Option<f64> { (**self).value(row, col) }
    fn legend_html(&self, x: f64, points: &[SelectedPoint]) -> String { (**self).legend_html(x, points) }
}

// File: crates/chart-hairlines/tests/reconcile.rs
// Purpose: Bulk get/set reconciliation, removal and z-order.

mod common;

use chart_hairlines::{HairlineEvent, PublicHairline};
use common::{active_manager, approx, px};

fn ph(x_value: f64, interpolated: bool) -> PublicHairline {
    PublicHairline { x_value, interpolated }
}

#[test]
fn set_empty_then_get_is_empty() {
    let (mut m, _log) = active_manager();
    m.set(&[]);
    assert!(m.get().is_empty());

    m.set(&[ph(1.0, true)]);
    m.set(&[]);
    assert!(m.get().is_empty());
}

#[test]
fn set_then_get_round_trips() {
    let (mut m, _log) = active_manager();
    let want = vec![ph(3.0, true), ph(1.5, false), ph(7.25, true)];
    m.set(&want);
    assert_eq!(m.get(), want);

    let want = vec![ph(9.0, false), ph(2.0, false)];
    m.set(&want);
    assert_eq!(m.get(), want);
}

#[test]
fn set_always_emits_exactly_one_changed() {
    let (mut m, log) = active_manager();
    let s = vec![ph(2.0, true), ph(4.0, true)];
    m.set(&s);
    assert_eq!(*log.borrow(), vec![HairlineEvent::Changed]);

    // identical state still notifies
    m.set(&s);
    assert_eq!(*log.borrow(), vec![HairlineEvent::Changed, HairlineEvent::Changed]);
}

#[test]
fn longer_set_reuses_prefix_and_appends() {
    let (mut m, _log) = active_manager();
    m.set(&[ph(1.0, true), ph(2.0, true)]);
    let before: Vec<_> = m.hairlines().iter().map(|h| h.id()).collect();

    m.set(&[ph(5.0, true), ph(6.0, true), ph(7.0, false), ph(8.0, true)]);
    let after: Vec<_> = m.hairlines().iter().map(|h| h.id()).collect();

    assert_eq!(after.len(), 4);
    assert_eq!(&after[..2], &before[..]);
    assert!(!before.contains(&after[2]) && !before.contains(&after[3]));
    assert!(m.hairlines().iter().all(|h| h.visual().attached));
    assert!(approx(m.hairlines()[0].visual().line.left, px(5.0)));
}

#[test]
fn shorter_set_drops_trailing_records() {
    let (mut m, _log) = active_manager();
    m.set(&[ph(1.0, true), ph(2.0, true), ph(3.0, true)]);
    let ids: Vec<_> = m.hairlines().iter().map(|h| h.id()).collect();

    m.set(&[ph(1.0, true)]);
    assert_eq!(m.len(), 1);
    assert_eq!(m.hairlines()[0].id(), ids[0]);
    assert!(!m.remove_hairline(ids[1]));
    assert!(!m.remove_hairline(ids[2]));
}

#[test]
fn removing_unknown_hairline_is_a_noop() {
    let (mut m, log) = active_manager();
    m.set(&[ph(1.0, true), ph(2.0, true)]);
    let stray = m.create_hairline(5.0);

    assert!(!m.remove_hairline(stray.id()));
    assert_eq!(m.get(), vec![ph(1.0, true), ph(2.0, true)]);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn create_hairline_does_not_insert_or_place() {
    let (mut m, _log) = active_manager();
    let h = m.create_hairline(4.0);
    assert!(h.interpolated());
    assert!(!h.visual().attached);
    assert_eq!(h.visual().line.left, 0.0);
    assert!(m.is_empty());
}

#[test]
fn move_to_top_reorders() {
    let (mut m, _log) = active_manager();
    m.set(&[ph(1.0, true), ph(2.0, true), ph(3.0, true)]);
    let first = m.hairlines()[0].id();

    assert!(m.move_hairline_to_top(first));
    let xs: Vec<_> = m.get().iter().map(|h| h.x_value).collect();
    assert_eq!(xs, vec![2.0, 3.0, 1.0]);
    assert_eq!(m.hairlines().last().map(|h| h.id()), Some(first));
}

#[test]
fn positions_follow_plot_area() {
    let (mut m, _log) = active_manager();
    m.set(&[ph(2.5, true)]);
    let v = m.hairlines()[0].visual();
    assert!(approx(v.line.left, 200.0));
    assert!(approx(v.line.top, 10.0));
    assert!(approx(v.line.height, 200.0));
    assert!(approx(v.info.left, 200.0));
    assert!(approx(v.info.top, 10.0));
    assert!(approx(v.info.containment.x, 100.0) && approx(v.info.containment.w, 400.0));
}

#[test]
fn hit_test_prefers_topmost() {
    let (mut m, _log) = active_manager();
    m.set(&[ph(5.0, true), ph(5.05, true)]);
    let top = m.hairlines()[1].id();
    assert_eq!(m.hit_test(px(5.0) + 1.0), Some(top));
    assert_eq!(m.hit_test(px(5.0) - 3.0), Some(m.hairlines()[0].id()));
    assert_eq!(m.hit_test(px(8.0)), None);
}

#[test]
fn destroy_clears_everything() {
    use chart_core::plugin::Plugin;
    let (mut m, _log) = active_manager();
    m.set(&[ph(1.0, true), ph(2.0, true)]);
    m.destroy();
    assert!(m.is_empty());
    assert!(m.get().is_empty());
}

#[test]
fn borrowed_chart_can_host() {
    use chart_core::plugin::Plugin;
    use chart_hairlines::HairlineManager;

    let chart = common::chart();
    let mut m: HairlineManager<&chart_core::Chart> = HairlineManager::default();
    m.activate(&chart);
    m.set(&[ph(2.5, false)]);
    assert!(approx(m.hairlines()[0].visual().line.left, 200.0));
}

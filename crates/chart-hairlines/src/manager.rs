// File: crates/chart-hairlines/src/manager.rs
// Summary: HairlineManager: owns hairline records in z-order and wires them to chart events, drags and listeners.

use std::fmt;
use std::time::Instant;

use chart_core::plugin::{ChartEvent, ChartHook, Plugin};
use chart_core::SelectedPoint;
use tracing::{debug, trace, warn};

use crate::config::{HairlineConfig, NearestMode};
use crate::debounce::ClickDebounce;
use crate::error::HairlineError;
use crate::event::{HairlineEvent, HairlineListener};
use crate::host::HairlineHost;
use crate::visual::HairlineVisual;

const HOOKS: &[ChartHook] = &[
    ChartHook::DidDrawChart,
    ChartHook::Click,
    ChartHook::DblClick,
    ChartHook::DataWillUpdate,
];

/// Identifies a hairline for as long as it lives in one manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HairlineId(u64);

impl fmt::Display for HairlineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Caller-facing view of a hairline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PublicHairline {
    /// Data x-value (epoch millis or a raw number).
    pub x_value: f64,
    /// False means values snap to the closest row.
    pub interpolated: bool,
}

impl PublicHairline {
    pub fn new(x_value: f64) -> Self {
        Self { x_value, interpolated: true }
    }
}

#[derive(Clone, Debug)]
pub struct Hairline {
    id: HairlineId,
    x_value: f64,
    interpolated: bool,
    visual: HairlineVisual,
    /// Pixel position captured before a data update, resolved after the redraw.
    dom_x: Option<f64>,
}

impl Hairline {
    pub fn id(&self) -> HairlineId { self.id }
    pub fn x_value(&self) -> f64 { self.x_value }
    pub fn interpolated(&self) -> bool { self.interpolated }
    pub fn visual(&self) -> &HairlineVisual { &self.visual }
    pub fn to_public(&self) -> PublicHairline {
        PublicHairline { x_value: self.x_value, interpolated: self.interpolated }
    }
}

/// Hairlines bound to one chart host `H`. The record order is the render order, back to front.
pub struct HairlineManager<H> {
    host: Option<H>,
    hairlines: Vec<Hairline>,
    listeners: Vec<Box<dyn HairlineListener>>,
    debounce: ClickDebounce,
    config: HairlineConfig,
    next_id: u64,
}

impl<H: HairlineHost> HairlineManager<H> {
    pub fn new(config: HairlineConfig) -> Result<Self, HairlineError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: HairlineConfig) -> Self {
        Self {
            host: None,
            hairlines: Vec::new(),
            listeners: Vec::new(),
            debounce: ClickDebounce::new(config.click_delay),
            config,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &HairlineConfig { &self.config }

    pub fn host(&self) -> Option<&H> { self.host.as_ref() }

    pub fn subscribe<L: HairlineListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    /// Records in render order, back to front.
    pub fn hairlines(&self) -> &[Hairline] { &self.hairlines }

    pub fn len(&self) -> usize { self.hairlines.len() }

    pub fn is_empty(&self) -> bool { self.hairlines.is_empty() }

    pub fn is_creation_pending(&self) -> bool { self.debounce.is_pending() }

    pub fn pending_deadline(&self) -> Option<Instant> { self.debounce.deadline() }

    // ---- public API ---------------------------------------------------------

    /// Current hairlines, back to front.
    pub fn get(&self) -> Vec<PublicHairline> {
        self.hairlines.iter().map(Hairline::to_public).collect()
    }

    /// Replace the hairlines with `hairlines` (back to front). Existing records are reused
    /// by position so their z-order holds; extra entries are appended, surplus ones dropped.
    /// Always emits `Changed`.
    pub fn set(&mut self, hairlines: &[PublicHairline]) {
        let mut any_created = false;
        for (i, p) in hairlines.iter().enumerate() {
            if let Some(h) = self.hairlines.get_mut(i) {
                h.x_value = p.x_value;
                h.interpolated = p.interpolated;
                // the new value wins over a pixel captured before a data update
                h.dom_x = None;
            } else {
                let mut h = self.create_hairline(p.x_value);
                h.interpolated = p.interpolated;
                self.hairlines.push(h);
                any_created = true;
            }
        }

        if self.hairlines.len() > hairlines.len() {
            let removed = self.hairlines.len() - hairlines.len();
            self.hairlines.truncate(hairlines.len());
            debug!(removed, "dropped surplus hairlines");
        }

        self.update_hairline_div_positions();
        self.update_hairline_info();
        if any_created {
            self.attach_hairlines_to_chart();
        }
        debug!(count = self.hairlines.len(), "hairlines set");
        self.emit(HairlineEvent::Changed);
    }

    // ---- record management --------------------------------------------------

    /// Build a record with an unattached, unpositioned visual. Not inserted.
    pub fn create_hairline(&mut self, x_value: f64) -> Hairline {
        let id = HairlineId(self.next_id);
        self.next_id += 1;
        Hairline {
            id,
            x_value,
            interpolated: true,
            visual: HairlineVisual::default(),
            dom_x: None,
        }
    }

    /// Remove a hairline and drop its visual. Unknown ids are logged and ignored.
    pub fn remove_hairline(&mut self, id: HairlineId) -> bool {
        match self.take_hairline(id) {
            Ok(h) => {
                debug!(%id, x_value = h.x_value, "removed hairline");
                true
            }
            Err(e) => {
                warn!("{e}");
                false
            }
        }
    }

    fn take_hairline(&mut self, id: HairlineId) -> Result<Hairline, HairlineError> {
        let idx = self.index_of(id).ok_or(HairlineError::UnknownHairline(id))?;
        Ok(self.hairlines.remove(idx))
    }

    /// Move a hairline to the end of the render order.
    pub fn move_hairline_to_top(&mut self, id: HairlineId) -> bool {
        let Some(idx) = self.index_of(id) else {
            warn!("{}", HairlineError::UnknownHairline(id));
            return false;
        };
        let mut h = self.hairlines.remove(idx);
        h.visual.attached = true;
        self.hairlines.push(h);
        true
    }

    fn index_of(&self, id: HairlineId) -> Option<usize> {
        self.hairlines.iter().position(|h| h.id == id)
    }

    /// Topmost hairline whose grab handle covers pixel `px`.
    pub fn hit_test(&self, px: f64) -> Option<HairlineId> {
        let width = self.config.handle_width;
        self.hairlines
            .iter()
            .rev()
            .find(|h| h.visual.handle_contains(px, width))
            .map(|h| h.id)
    }

    // ---- layout -------------------------------------------------------------

    /// Place every line and info panel at its x-value and confine drags to the plot area.
    pub fn update_hairline_div_positions(&mut self) {
        let Some(host) = self.host.as_ref() else { return };
        let area = host.plot_area();
        for h in self.hairlines.iter_mut() {
            let left = host.to_dom_x(h.x_value);
            h.visual.line.left = left;
            h.visual.line.top = area.y;
            h.visual.line.height = area.h;
            h.visual.info.left = left;
            h.visual.info.top = area.y;
            h.visual.info.containment = area;
        }
        trace!(count = self.hairlines.len(), "repositioned hairlines");
    }

    /// Refill every info panel from the data row nearest its hairline.
    pub fn update_hairline_info(&mut self) {
        let Some(host) = self.host.as_ref() else { return };
        let mode = self.config.nearest_mode;
        let labels = host.labels();
        let columns = host.num_columns();
        for h in self.hairlines.iter_mut() {
            let row = match mode {
                NearestMode::Closest => host.find_closest_row(host.to_dom_x(h.x_value)),
                NearestMode::Interpolate => None,
            };

            // One synthetic selected point per data column.
            let points = (1..columns)
                .map(|col| SelectedPoint {
                    canvas_x: 1.0,
                    canvas_y: 1.0,
                    x_value: h.x_value,
                    y_value: row.and_then(|r| host.value(r, col)),
                    name: labels.get(col).cloned().unwrap_or_default(),
                })
                .collect::<Vec<_>>();

            h.visual.info.html = host.legend_html(h.x_value, &points);
        }
    }

    /// Mark every visual as attached to the chart (after creation and each redraw).
    pub fn attach_hairlines_to_chart(&mut self) {
        for h in self.hairlines.iter_mut() {
            h.visual.attached = true;
        }
    }

    // ---- gestures -----------------------------------------------------------

    /// A drag moved hairline `id`'s handle to pixel `left_px`.
    pub fn hairline_dragged(&mut self, id: HairlineId, left_px: f64) {
        let Some(host) = self.host.as_ref() else {
            debug!(%id, "drag ignored; plugin not active");
            return;
        };
        let new_x_value = host.to_data_x(host.plot_area().clamp_x(left_px));
        let Some(idx) = self.index_of(id) else {
            warn!("{}", HairlineError::UnknownHairline(id));
            return;
        };

        let old_x_value = self.hairlines[idx].x_value;
        self.hairlines[idx].x_value = new_x_value;
        self.move_hairline_to_top(id);
        self.update_hairline_div_positions();
        self.update_hairline_info();

        self.emit(HairlineEvent::Moved { old_x_value, new_x_value });
        self.emit(HairlineEvent::Changed);
    }

    /// The delete button on hairline `id`'s info panel was clicked.
    pub fn delete_clicked(&mut self, id: HairlineId) {
        match self.take_hairline(id) {
            Ok(h) => {
                debug!(%id, x_value = h.x_value, "deleted hairline");
                self.emit(HairlineEvent::Deleted { x_value: h.x_value });
                self.emit(HairlineEvent::Changed);
            }
            Err(e) => warn!("{e}"),
        }
    }

    fn click(&mut self, canvas_x: f64, at: Instant) {
        if self.debounce.is_pending() {
            // another click is in progress
            return;
        }
        let Some(host) = self.host.as_ref() else { return };
        let x_value = host.to_data_x(canvas_x);
        self.debounce.arm(x_value, at);
    }

    fn dblclick(&mut self) {
        if self.debounce.cancel() {
            debug!("double-click cancelled pending hairline");
        }
    }

    fn create_pending(&mut self, x_value: f64) {
        let h = self.create_hairline(x_value);
        debug!(id = %h.id, x_value, "created hairline");
        self.hairlines.push(h);

        self.update_hairline_div_positions();
        self.update_hairline_info();
        self.attach_hairlines_to_chart();

        self.emit(HairlineEvent::Created { x_value });
        self.emit(HairlineEvent::Changed);
    }

    // ---- chart lifecycle ----------------------------------------------------

    /// Remember where each line sits on screen so the redraw after new data can keep it there.
    fn data_will_update(&mut self) {
        let Some(host) = self.host.as_ref() else { return };
        for h in self.hairlines.iter_mut() {
            h.dom_x = Some(host.to_dom_x(h.x_value));
        }
    }

    fn did_draw_chart(&mut self) {
        if self.hairlines.is_empty() {
            return;
        }
        let Some(host) = self.host.as_ref() else { return };
        for h in self.hairlines.iter_mut() {
            if let Some(px) = h.dom_x.take() {
                h.x_value = host.to_data_x(px);
                debug!(id = %h.id, dom_x = px, x_value = h.x_value, "resolved hairline after data update");
            }
        }

        self.update_hairline_div_positions();
        self.attach_hairlines_to_chart();
        self.update_hairline_info();
    }

    fn detach_labels(&mut self) {
        self.hairlines.clear();
    }

    fn emit(&mut self, event: HairlineEvent) {
        for l in self.listeners.iter_mut() {
            l.on_event(&event);
        }
    }
}

impl<H: HairlineHost> Default for HairlineManager<H> {
    fn default() -> Self {
        Self::with_valid_config(HairlineConfig::default())
    }
}

impl<H: HairlineHost> Plugin<H> for HairlineManager<H> {
    fn id(&self) -> &'static str { "hairlines" }

    fn activate(&mut self, host: H) -> &'static [ChartHook] {
        self.host = Some(host);
        self.detach_labels();
        self.debounce.cancel();
        HOOKS
    }

    fn handle_event(&mut self, evt: &ChartEvent) {
        match *evt {
            ChartEvent::DidDrawChart => self.did_draw_chart(),
            ChartEvent::Click { canvas_x, at } => {
                self.poll(at);
                self.click(canvas_x, at);
            }
            ChartEvent::DblClick { at, .. } => {
                // a creation already due is no longer cancellable
                self.poll(at);
                self.dblclick();
            }
            ChartEvent::DataWillUpdate => self.data_will_update(),
        }
    }

    fn poll(&mut self, now: Instant) {
        if let Some(x_value) = self.debounce.take_due(now) {
            self.create_pending(x_value);
        }
    }

    fn destroy(&mut self) {
        self.debounce.cancel();
        self.detach_labels();
    }
}

// File: crates/demo/src/main.rs
// Summary: Demo loads CSV columns (x, series...) and replays a hairline session: click, double-click,
// drag, live data update and bulk set, writing a PNG after each step.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chart_core::plugin::{wants, ChartEvent, ChartHook, Plugin};
use chart_core::{Axis, Chart, Series, ValueFormat};
use chart_hairlines::{HairlineEvent, HairlineHost, HairlineManager, PublicHairline};
use chart_render_skia::SkiaRenderer;
use tracing::{info, warn};

type SharedChart = Rc<RefCell<Chart>>;

fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,chart_hairlines=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let series = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            info!("Using input file: {}", path.display());
            load_columns_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            info!("No input file given; using generated data");
            LoadedData { x_label: "t".into(), time_axis: false, series: generated_series(0.0, 200) }
        }
    };
    if series.series.is_empty() || series.series[0].is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }

    let mut chart = Chart::new();
    let format = if series.time_axis { ValueFormat::EpochMillis } else { ValueFormat::Number };
    chart.x_axis = Axis::new(series.x_label.clone(), 0.0, 1.0).with_format(format);
    chart.y_axis = Axis::new("Value", 0.0, 1.0);
    chart.replace_series(series.series);
    chart.autoscale_axes(0.02);
    let chart: SharedChart = Rc::new(RefCell::new(chart));

    let mut session = Session::new(chart)?;
    session.run()
}

/// Replays gestures against the plugin the way a UI event loop would deliver them.
struct Session {
    chart: SharedChart,
    hairlines: HairlineManager<SharedChart>,
    hooks: &'static [ChartHook],
    renderer: SkiaRenderer,
    clock: Instant,
    out_dir: PathBuf,
    step: usize,
}

impl Session {
    fn new(chart: SharedChart) -> Result<Self> {
        let mut hairlines: HairlineManager<SharedChart> = HairlineManager::new(Default::default())?;
        let hooks = hairlines.activate(chart.clone());
        hairlines.subscribe(|e: &HairlineEvent| match *e {
            HairlineEvent::Created { x_value } => info!(x_value, "hairline created"),
            HairlineEvent::Deleted { x_value } => info!(x_value, "hairline deleted"),
            HairlineEvent::Moved { old_x_value, new_x_value } => info!(old_x_value, new_x_value, "hairline moved"),
            HairlineEvent::Changed => info!("hairlines changed"),
        });

        let out_dir = PathBuf::from("target/out");
        std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
        Ok(Self {
            chart,
            hairlines,
            hooks,
            renderer: SkiaRenderer::default(),
            clock: Instant::now(),
            out_dir,
            step: 0,
        })
    }

    fn run(&mut self) -> Result<()> {
        let delay = self.hairlines.config().click_delay;
        let area = self.chart.plot_area();

        // 1) two confirmed clicks create two hairlines
        for frac in [0.3, 0.7] {
            self.dispatch(ChartEvent::Click { canvas_x: area.x + area.w * frac, at: self.clock });
            self.advance(delay);
        }
        self.snapshot("created")?;

        // 2) a double-click zooms instead of creating
        let canvas_x = area.x + area.w * 0.5;
        self.dispatch(ChartEvent::Click { canvas_x, at: self.clock });
        self.advance(Duration::from_millis(90));
        self.dispatch(ChartEvent::DblClick { canvas_x, at: self.clock });
        self.advance(delay);
        info!(count = self.hairlines.len(), "after double-click");

        // 3) drag the back hairline to the right; it comes to the front
        if let Some(id) = self.hairlines.hairlines().first().map(|h| h.id()) {
            let grabbed = self.hairlines.hit_test(self.hairlines.hairlines()[0].visual().line.left);
            if grabbed != Some(id) {
                warn!(%id, "hit test picked a different hairline");
            }
            self.hairlines.hairline_dragged(id, area.x + area.w * 0.85);
        }
        self.snapshot("dragged")?;

        // 4) more data arrives; lines keep their screen position
        self.update_data(generated_series(0.0, 400));
        self.snapshot("data_updated")?;

        // 5) restore a saved layout
        let saved = vec![PublicHairline::new(50.0), PublicHairline { x_value: 120.0, interpolated: false }];
        self.hairlines.set(&saved);
        self.snapshot("restored")?;

        // 6) delete the top hairline through its panel button
        if let Some(id) = self.hairlines.hairlines().last().map(|h| h.id()) {
            self.hairlines.delete_clicked(id);
        }
        self.snapshot("deleted")?;

        for h in self.hairlines.get() {
            println!("hairline x={} interpolated={}", h.x_value, h.interpolated);
        }
        self.hairlines.destroy();
        Ok(())
    }

    fn dispatch(&mut self, evt: ChartEvent) {
        if wants(self.hooks, &evt) {
            self.hairlines.handle_event(&evt);
        }
    }

    fn advance(&mut self, by: Duration) {
        self.clock += by;
        self.hairlines.poll(self.clock);
    }

    fn update_data(&mut self, series: Vec<Series>) {
        self.dispatch(ChartEvent::DataWillUpdate);
        {
            let mut chart = self.chart.borrow_mut();
            chart.replace_series(series);
            chart.autoscale_axes(0.02);
        }
        self.dispatch(ChartEvent::DidDrawChart);
    }

    fn snapshot(&mut self, name: &str) -> Result<()> {
        self.step += 1;
        let path = self.out_dir.join(format!("hairlines_{:02}_{}.png", self.step, name));
        self.renderer
            .render_to_png(&self.chart.borrow(), self.hairlines.hairlines(), &path)
            .with_context(|| format!("rendering {}", path.display()))?;
        println!("Wrote {}", path.display());
        Ok(())
    }
}

struct LoadedData {
    x_label: String,
    time_axis: bool,
    series: Vec<Series>,
}

/// Two waves sampled at unit steps from `x0`.
fn generated_series(x0: f64, rows: usize) -> Vec<Series> {
    let xs = (0..rows).map(|i| x0 + i as f64).collect::<Vec<_>>();
    vec![
        Series::with_data("sin", xs.iter().map(|&x| (x, (x * 0.05).sin() * 10.0)).collect()),
        Series::with_data("cos", xs.iter().map(|&x| (x, (x * 0.03).cos() * 6.0 + 2.0)).collect()),
    ]
}

/// Load a CSV whose first column is x and remaining columns are series.
fn load_columns_csv(path: &Path) -> Result<LoadedData> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    if headers.len() < 2 {
        anyhow::bail!("need an x column and at least one series column, got {:?}", headers);
    }
    let x_label = headers[0].clone();
    let time_axis = ["time", "timestamp", "date", "datetime"].contains(&x_label.to_lowercase().as_str());

    let mut series = headers[1..].iter().map(Series::new).collect::<Vec<_>>();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()) };
        let Some(x) = parse(0) else { continue };
        for (col, s) in series.iter_mut().enumerate() {
            s.data_xy.push((x, parse(col + 1).unwrap_or(f64::NAN)));
        }
    }
    info!(rows = series[0].len(), columns = headers.len(), "loaded CSV");
    Ok(LoadedData { x_label, time_axis, series })
}

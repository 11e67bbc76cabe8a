//! Interactive plots of a run.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use hamilton_core::Observer;

use crate::traits::HasState;

/// Collects `(time, value)` traces and shows them in an egui window.
///
/// Passed as `&mut PlotObserver` to a solver, it records each state
/// component of every event against simulated time, one trace per slot.
/// Non-finite points are dropped, so a diverged run plots up to the
/// breakdown.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::states();
/// euler::solve(&model, &strategy, initial, &config, &mut obs)?;
/// obs.show("Double pendulum")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlotObserver {
    traces: Vec<Trace>,
}

#[derive(Debug, Clone)]
struct Trace {
    name: String,
    points: Vec<[f64; 2]>,
}

impl PlotObserver {
    /// Creates an observer with one empty trace per name.
    pub fn new<const N: usize>(names: [&str; N]) -> Self {
        Self {
            traces: names
                .into_iter()
                .map(|name| Trace {
                    name: name.to_owned(),
                    points: Vec::new(),
                })
                .collect(),
        }
    }

    /// Creates an observer with traces named after the state components.
    pub fn states() -> Self {
        Self::new(["p1", "p2", "x1", "x2"])
    }

    /// Adds a point to one trace.
    ///
    /// Ignores non-finite points and trace indices past the last trace.
    pub fn push(&mut self, trace: usize, time: f64, value: f64) {
        if !time.is_finite() || !value.is_finite() {
            return;
        }
        if let Some(trace) = self.traces.get_mut(trace) {
            trace.points.push([time, value]);
        }
    }

    /// Adds one point per trace, in trace order.
    pub fn record(&mut self, time: f64, values: &[f64]) {
        for (trace, value) in values.iter().enumerate() {
            self.push(trace, time, *value);
        }
    }

    /// Opens a blocking egui window with every trace against time.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, title: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(self))),
        )
    }
}

impl<E: HasState, A> Observer<E, A> for &mut PlotObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.time(), &event.state().components());
        None
    }
}

impl eframe::App for PlotObserver {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("run")
                .legend(Legend::default())
                .x_axis_label("t")
                .show(ui, |plot_ui| {
                    for trace in &self.traces {
                        let points: PlotPoints = trace.points.iter().copied().collect();
                        plot_ui.line(Line::new(points).name(&trace.name));
                    }
                });
        });
    }
}

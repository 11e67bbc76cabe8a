//! Energy bookkeeping along a run.

use hamilton_core::{EnergyModel, Observer};

use crate::traits::HasState;

/// An observer that evaluates `H` at every recorded state.
///
/// States whose energy cannot be evaluated (after divergence) are recorded
/// as `NaN` and ignored by [`max_drift`](EnergyMonitor::max_drift).
///
/// # Example
///
/// ```ignore
/// let mut monitor = EnergyMonitor::new(&model);
/// euler::solve(&model, &strategy, initial, &config, &mut monitor)?;
/// println!("max |ΔH| = {:?}", monitor.max_drift());
/// ```
#[derive(Debug, Clone)]
pub struct EnergyMonitor<M> {
    model: M,
    samples: Vec<[f64; 2]>,
}

impl<M: EnergyModel> EnergyMonitor<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            samples: Vec::new(),
        }
    }

    /// Returns the recorded `[time, H]` pairs in event order.
    #[must_use]
    pub fn samples(&self) -> &[[f64; 2]] {
        &self.samples
    }

    /// Returns the energy of the first recorded state.
    #[must_use]
    pub fn initial(&self) -> Option<f64> {
        self.samples.first().map(|[_, h]| *h)
    }

    /// Returns the largest `|H(t) − H(0)|` over the finite samples.
    ///
    /// Returns `None` if nothing was recorded or the initial energy is not
    /// finite.
    #[must_use]
    pub fn max_drift(&self) -> Option<f64> {
        let initial = self.initial().filter(|h| h.is_finite())?;
        Some(
            self.samples
                .iter()
                .map(|[_, h]| h - initial)
                .filter(|d| d.is_finite())
                .fold(0.0, |max: f64, d| max.max(d.abs())),
        )
    }

    fn record<E: HasState>(&mut self, event: &E) {
        let energy = self.model.energy(event.state()).unwrap_or(f64::NAN);
        self.samples.push([event.time(), energy]);
    }
}

impl<M: EnergyModel, E: HasState, A> Observer<E, A> for EnergyMonitor<M> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut EnergyMonitor` to be passed to solvers that take an observer
/// by value, so the samples can be read after the solve completes.
impl<M: EnergyModel, E: HasState, A> Observer<E, A> for &mut EnergyMonitor<M> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

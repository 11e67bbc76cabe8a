use hamilton_core::{EnergyModel, EvalError, Trajectory};

/// Indicates how the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every recorded state is finite.
    Complete,

    /// Integration broke down.
    ///
    /// `step` is the iteration whose result was the first non-finite state;
    /// that state and every later slot hold non-finite values.
    Diverged { step: usize },
}

/// The result of an Euler integration.
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: Status,

    /// One state per iteration, initial state first.
    pub trajectory: Trajectory,

    /// Number of iterations run.
    pub steps: usize,
}

impl Solution {
    /// Returns `H(last) − H(first)`, or `None` for an empty trajectory.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if either end state or its energy is not
    /// finite.
    pub fn energy_drift<M: EnergyModel>(&self, model: &M) -> Result<Option<f64>, EvalError> {
        let (Some(first), Some(last)) = (self.trajectory.first(), self.trajectory.last()) else {
            return Ok(None);
        };
        Ok(Some(model.energy(last)? - model.energy(first)?))
    }
}

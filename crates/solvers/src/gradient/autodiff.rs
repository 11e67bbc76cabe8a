use hamilton_core::{EnergyModel, EvalError, Gradient, GradientStrategy, State};
use num_dual::Dual64;

/// Exact gradient by forward-mode automatic differentiation.
///
/// Evaluates the Hamiltonian once per component in [`Dual64`] with that
/// component seeded, and reads the partial from the dual part. There is no
/// step size and no truncation error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoDiff;

impl GradientStrategy for AutoDiff {
    fn gradient<M: EnergyModel>(&self, model: &M, state: &State) -> Result<Gradient, EvalError> {
        if !state.is_finite() {
            return Err(EvalError::InvalidState { state: *state });
        }

        let base = state.components();
        let mut grad = [0.0; 4];

        for (i, partial) in grad.iter_mut().enumerate() {
            let mut seeded = base.map(Dual64::from);
            seeded[i] = Dual64::new(base[i], 1.0);

            let h = model.hamiltonian(seeded);
            if !h.re.is_finite() {
                return Err(EvalError::NonFiniteEnergy { state: *state });
            }
            *partial = connected_partial(i, h.eps);
        }

        Ok(Gradient::new(grad))
    }
}

/// Maps an undefined partial to zero.
///
/// A NaN tangent next to a finite energy comes from a component the energy
/// does not depend on through any defined path.
fn connected_partial(component: usize, tangent: f64) -> f64 {
    if tangent.is_nan() {
        tracing::trace!(component, "undefined partial replaced with zero");
        0.0
    } else {
        tangent
    }
}

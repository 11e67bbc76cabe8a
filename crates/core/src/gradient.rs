use crate::{EnergyModel, EvalError, Gradient, State};

/// Computes `∂H/∂(component)` of an energy model at a state.
///
/// Implementations must reject a non-finite `state` with
/// [`EvalError::InvalidState`] instead of returning a meaningless gradient.
pub trait GradientStrategy {
    /// Returns the gradient of `model` at `state`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if the state or the energy is not finite.
    fn gradient<M: EnergyModel>(&self, model: &M, state: &State) -> Result<Gradient, EvalError>;
}

impl<T: GradientStrategy> GradientStrategy for &T {
    fn gradient<M: EnergyModel>(&self, model: &M, state: &State) -> Result<Gradient, EvalError> {
        (**self).gradient(model, state)
    }
}

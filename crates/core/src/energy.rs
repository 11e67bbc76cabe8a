use crate::{EvalError, Scalar, State};

/// A Hamiltonian: scalar energy over a canonical [`State`].
///
/// Implementations must be pure. The components passed to
/// [`hamiltonian`](EnergyModel::hamiltonian) are in `(p1, p2, x1, x2)` order.
pub trait EnergyModel {
    /// Evaluates `H` in any [`Scalar`] type.
    fn hamiltonian<S: Scalar>(&self, state: [S; 4]) -> S;

    /// Evaluates `H` at `state` in double precision.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidState`] if `state` is not finite, or
    /// [`EvalError::NonFiniteEnergy`] if the energy itself is not.
    fn energy(&self, state: &State) -> Result<f64, EvalError> {
        if !state.is_finite() {
            return Err(EvalError::InvalidState { state: *state });
        }
        let h = self.hamiltonian(state.components());
        if h.is_finite() {
            Ok(h)
        } else {
            Err(EvalError::NonFiniteEnergy { state: *state })
        }
    }
}

impl<T: EnergyModel> EnergyModel for &T {
    fn hamiltonian<S: Scalar>(&self, state: [S; 4]) -> S {
        (**self).hamiltonian(state)
    }
}

/// A Lagrangian `L(q, w) = T(q, w) - V(q)` over two angles and two rates.
pub trait Lagrangian {
    /// Kinetic energy.
    fn kinetic<S: Scalar>(&self, q: [S; 2], w: [S; 2]) -> S;

    /// Potential energy.
    fn potential<S: Scalar>(&self, q: [S; 2]) -> S;

    fn lagrangian<S: Scalar>(&self, q: [S; 2], w: [S; 2]) -> S {
        self.kinetic(q, w) - self.potential(q)
    }
}

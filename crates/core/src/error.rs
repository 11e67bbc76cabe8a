use thiserror::Error;

use crate::State;

/// Errors from evaluating an energy model or its gradient.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("state has a non-finite component: {state:?}")]
    InvalidState { state: State },

    #[error("perturbation for component {component} is degenerate: {epsilon}")]
    DegenerateEpsilon { component: usize, epsilon: f64 },

    #[error("energy is not finite at {state:?}")]
    NonFiniteEnergy { state: State },
}

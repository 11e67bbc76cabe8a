use hamilton_core::{EvalError, State, TrajectoryError};

/// Errors that can occur during Euler integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("initial state has a non-finite component: {state:?}")]
    InvalidState { state: State },

    #[error("gradient evaluation failed")]
    Gradient(#[from] EvalError),

    #[error("trajectory write failed")]
    Trajectory(#[from] TrajectoryError),
}

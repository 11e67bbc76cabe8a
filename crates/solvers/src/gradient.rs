//! Gradient strategies: `∂H/∂(component)` of an energy model at a state.
//!
//! - [`FiniteDifference`] — forward difference, first-order accurate, with a
//!   configurable [`EpsilonPolicy`] and [`Precision`]
//! - [`AutoDiff`] — exact partials from forward-mode dual numbers
//! - [`Strategy`] — either of the above, chosen at configuration time
//!
//! Both reject non-finite states with [`EvalError::InvalidState`].
//!
//! [`EvalError::InvalidState`]: hamilton_core::EvalError::InvalidState

mod autodiff;
mod finite_difference;
mod strategy;

pub use autodiff::AutoDiff;
pub use finite_difference::{ConfigError, EPSILON_FLOOR, EpsilonPolicy, FiniteDifference, Precision};
pub use strategy::Strategy;

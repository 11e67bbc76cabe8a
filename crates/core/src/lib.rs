//! Core types and traits for Hamiltonian trajectory simulation.
//!
//! This crate defines the shared abstractions that models, solvers, and
//! observers build on:
//!
//! - [`State`], [`Gradient`], [`StateDerivative`] — fixed-size canonical
//!   vectors laid out as `(p1, p2, x1, x2)`
//! - [`rotate`] — Hamilton's equations as a fixed permutation and sign flip
//! - [`EnergyModel`] and [`Lagrangian`] — energy functions written once,
//!   generically over a [`Scalar`] type
//! - [`GradientStrategy`] — state in, gradient out
//! - [`Trajectory`] and [`TrajectorySink`] — the pre-sized record of a run
//!   and the seam where it leaves the simulator
//! - [`Observer`] — receives solver events and optionally returns actions

mod energy;
mod error;
mod gradient;
mod observer;
mod parameters;
mod scalar;
mod state;
mod step;
mod trajectory;

pub use energy::{EnergyModel, Lagrangian};
pub use error::EvalError;
pub use gradient::GradientStrategy;
pub use observer::Observer;
pub use parameters::{ParameterError, PhysicalParameters};
pub use scalar::Scalar;
pub use state::{Gradient, State, StateDerivative, rotate};
pub use step::{DerivativeOf, StepIntegrable};
pub use trajectory::{Trajectory, TrajectoryError, TrajectorySink};

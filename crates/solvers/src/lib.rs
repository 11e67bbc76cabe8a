//! Gradient strategies and time integrators for Hamiltonian simulation.
//!
//! - [`gradient`] — finite-difference and automatic-differentiation
//!   implementations of [`GradientStrategy`], and the [`Strategy`] union
//!   that selects between them at configuration time
//! - [`transient`] — fixed-step integrators that produce a [`Trajectory`]
//!
//! [`GradientStrategy`]: hamilton_core::GradientStrategy
//! [`Strategy`]: gradient::Strategy
//! [`Trajectory`]: hamilton_core::Trajectory

pub mod gradient;
pub mod transient;

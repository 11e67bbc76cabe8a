//! Energy models for double-pendulum-class systems.
//!
//! - [`CoupledPendulum`] — a Hamiltonian written directly in momenta and
//!   positions
//! - [`DecoupledPendulum`] — a Lagrangian in angles and angular velocities
//! - [`Legendre`] — turns any velocity-quadratic [`Lagrangian`] into an
//!   [`EnergyModel`]
//!
//! [`Lagrangian`]: hamilton_core::Lagrangian
//! [`EnergyModel`]: hamilton_core::EnergyModel

mod coupled;
mod decoupled;
mod legendre;

pub use coupled::CoupledPendulum;
pub use decoupled::DecoupledPendulum;
pub use legendre::Legendre;

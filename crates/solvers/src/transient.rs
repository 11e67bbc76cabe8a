//! Fixed-step time integrators.
//!
//! - [`euler`] — explicit (forward) Euler, the default and only method

pub mod euler;

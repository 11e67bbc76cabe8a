//! Capability traits for observers that work across solvers.
//!
//! # Example
//!
//! ```rust
//! use hamilton_core::Observer;
//! use hamilton_observers::traits::HasState;
//!
//! /// Counts events whose state has left the unit box.
//! struct OutOfBox(usize);
//!
//! impl<E: HasState, A> Observer<E, A> for OutOfBox {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.state().components().iter().any(|c| c.abs() > 1.0) {
//!             self.0 += 1;
//!         }
//!         None
//!     }
//! }
//! ```

use hamilton_core::State;
use hamilton_solvers::transient::euler;

/// An event that carries a recorded state and its simulated time.
pub trait HasState {
    fn state(&self) -> &State;

    fn time(&self) -> f64;
}

impl HasState for euler::Event {
    fn state(&self) -> &State {
        &self.state
    }

    fn time(&self) -> f64 {
        self.time
    }
}

impl<E: HasState> HasState for &E {
    fn state(&self) -> &State {
        (*self).state()
    }

    fn time(&self) -> f64 {
        (*self).time()
    }
}

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::StepIntegrable;

/// A point in canonical phase space.
///
/// Components are stored as `(p1, p2, x1, x2)`: slots 0 and 1 hold the
/// momenta, slots 2 and 3 the conjugate positions. The order is fixed and
/// [`rotate`] depends on it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct State([f64; 4]);

/// Partial derivatives `∂H/∂(component)` in [`State`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient([f64; 4]);

/// Time derivative of a [`State`], in [`State`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateDerivative([f64; 4]);

impl State {
    /// The origin of phase space.
    pub const ZERO: Self = Self([0.0; 4]);

    /// Creates a state from components in storage order `(p1, p2, x1, x2)`.
    #[must_use]
    pub const fn new(components: [f64; 4]) -> Self {
        Self(components)
    }

    /// Creates a state from its position and momentum halves.
    #[must_use]
    pub const fn from_canonical(positions: [f64; 2], momenta: [f64; 2]) -> Self {
        Self([momenta[0], momenta[1], positions[0], positions[1]])
    }

    /// Returns the components in storage order.
    #[must_use]
    pub const fn components(&self) -> [f64; 4] {
        self.0
    }

    /// Returns the momentum half `(p1, p2)`.
    #[must_use]
    pub const fn momenta(&self) -> [f64; 2] {
        [self.0[0], self.0[1]]
    }

    /// Returns the position half `(x1, x2)`.
    #[must_use]
    pub const fn positions(&self) -> [f64; 2] {
        [self.0[2], self.0[3]]
    }

    /// Returns the component at `index`, or `None` past the fourth.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl Index<usize> for State {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<[f64; 4]> for State {
    fn from(components: [f64; 4]) -> Self {
        Self(components)
    }
}

impl Gradient {
    #[must_use]
    pub const fn new(components: [f64; 4]) -> Self {
        Self(components)
    }

    #[must_use]
    pub const fn components(&self) -> [f64; 4] {
        self.0
    }

    /// Applies Hamilton's equations. See [`rotate`].
    #[must_use]
    pub const fn rotate(self) -> StateDerivative {
        rotate(self)
    }
}

impl Index<usize> for Gradient {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl StateDerivative {
    #[must_use]
    pub const fn new(components: [f64; 4]) -> Self {
        Self(components)
    }

    #[must_use]
    pub const fn components(&self) -> [f64; 4] {
        self.0
    }
}

impl Index<usize> for StateDerivative {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Turns a Hamiltonian gradient into a state derivative.
///
/// Returns `(-g[2], -g[3], g[0], g[1])`, which for the `(p1, p2, x1, x2)`
/// layout reads `dp/dt = -∂H/∂x` and `dx/dt = ∂H/∂p`. The mapping is a
/// pure index permutation with a sign flip and does not depend on the state.
#[must_use]
pub const fn rotate(gradient: Gradient) -> StateDerivative {
    let [g0, g1, g2, g3] = gradient.0;
    StateDerivative([-g2, -g3, g0, g1])
}

impl StepIntegrable<f64> for State {
    type Derivative = StateDerivative;

    fn step(&self, derivative: StateDerivative, dt: f64) -> Self {
        let mut next = self.0;
        for (s, d) in next.iter_mut().zip(derivative.0) {
            *s += d * dt;
        }
        Self(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotate_array(g: [f64; 4]) -> [f64; 4] {
        rotate(Gradient::new(g)).components()
    }

    #[test]
    fn rotate_swaps_halves_and_negates_momentum_rates() {
        let derivative = rotate(Gradient::new([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(derivative.components(), [-3.0, -4.0, 1.0, 2.0]);
    }

    #[test]
    fn rotate_twice_negates() {
        let g = [0.5, -1.5, 2.25, 7.0];
        assert_eq!(rotate_array(rotate_array(g)), g.map(|c| -c));
    }

    #[test]
    fn rotate_four_times_is_identity() {
        let g = [0.5, -1.5, 2.25, 7.0];
        let once = rotate_array(g);
        let four = rotate_array(rotate_array(rotate_array(once)));
        assert_eq!(four, g);
    }

    #[test]
    fn canonical_halves_round_trip() {
        let state = State::from_canonical([1.0, 2.0], [3.0, 4.0]);
        assert_eq!(state.components(), [3.0, 4.0, 1.0, 2.0]);
        assert_eq!(state.positions(), [1.0, 2.0]);
        assert_eq!(state.momenta(), [3.0, 4.0]);
    }

    #[test]
    fn finiteness_check_catches_nan_and_inf() {
        assert!(State::new([0.0, 1.0, -2.0, 3.0]).is_finite());
        assert!(!State::new([0.0, f64::NAN, 0.0, 0.0]).is_finite());
        assert!(!State::new([0.0, 0.0, f64::INFINITY, 0.0]).is_finite());
    }

    #[test]
    fn get_is_bounds_checked() {
        let state = State::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(state.get(3), Some(4.0));
        assert_eq!(state.get(4), None);
    }

    #[test]
    fn step_applies_derivative_times_dt() {
        let state = State::new([1.0, 2.0, 3.0, 4.0]);
        let derivative = StateDerivative::new([10.0, -10.0, 0.0, 2.0]);

        let next = state.step(derivative, 0.5);

        assert_eq!(next, State::new([6.0, -3.0, 3.0, 5.0]));
    }
}

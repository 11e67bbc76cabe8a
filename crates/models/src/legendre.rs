use hamilton_core::{EnergyModel, Lagrangian, Scalar, State};
use num_dual::Dual64;

/// Hamiltonian of a [`Lagrangian`] via the Legendre transform.
///
/// Momenta are `p = ∂L/∂w`, computed by forward-mode automatic
/// differentiation. For a canonical state the velocities are recovered by
/// inverting that map, which assumes `L` is quadratic in `w`, and the
/// energy is `H = Σ w·p − L(q, w)`.
///
/// [`hamiltonian`](EnergyModel::hamiltonian) holds `w` at the recovered
/// value while evaluating that expression. Since `∂H/∂w = p − ∂L/∂w = 0`
/// there, first derivatives of the result with respect to `p` and `q` are
/// the exact canonical partials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Legendre<L> {
    lagrangian: L,
}

impl<L: Lagrangian> Legendre<L> {
    #[must_use]
    pub const fn new(lagrangian: L) -> Self {
        Self { lagrangian }
    }

    #[must_use]
    pub const fn lagrangian(&self) -> &L {
        &self.lagrangian
    }

    /// Returns the conjugate momenta `∂L/∂w` at angles `q` and rates `w`.
    #[must_use]
    pub fn momenta(&self, q: [f64; 2], w: [f64; 2]) -> [f64; 2] {
        let q = q.map(Dual64::from);
        std::array::from_fn(|j| {
            let mut seeded = w.map(Dual64::from);
            seeded[j] = Dual64::new(w[j], 1.0);
            self.lagrangian.lagrangian(q, seeded).eps
        })
    }

    /// Builds a canonical state from angles and angular velocities.
    #[must_use]
    pub fn state_from_velocities(&self, q: [f64; 2], w: [f64; 2]) -> State {
        State::from_canonical(q, self.momenta(q, w))
    }

    /// Recovers the angular velocities of a canonical state.
    ///
    /// Returns `None` if the mass matrix `∂²L/∂w²` is singular at the
    /// state's angles.
    #[must_use]
    pub fn velocities(&self, state: &State) -> Option<[f64; 2]> {
        let q = state.positions();
        let p = state.momenta();

        // ∂L/∂w = M·w + b for L quadratic in w.
        let b = self.momenta(q, [0.0, 0.0]);
        let e1 = self.momenta(q, [1.0, 0.0]);
        let e2 = self.momenta(q, [0.0, 1.0]);
        let (m00, m10) = (e1[0] - b[0], e1[1] - b[1]);
        let (m01, m11) = (e2[0] - b[0], e2[1] - b[1]);

        let det = m00 * m11 - m01 * m10;
        let scale = (m00 * m11).abs().max((m01 * m10).abs());
        if !det.is_finite() || det.abs() <= f64::EPSILON * scale {
            return None;
        }

        let r0 = p[0] - b[0];
        let r1 = p[1] - b[1];
        Some([(m11 * r0 - m01 * r1) / det, (m00 * r1 - m10 * r0) / det])
    }
}

impl<L: Lagrangian> EnergyModel for Legendre<L> {
    fn hamiltonian<S: Scalar>(&self, state: [S; 4]) -> S {
        let [p1, p2, q1, q2] = state;

        let Some(w) = self.velocities(&State::new(state.map(S::re))) else {
            tracing::trace!("singular mass matrix at q = ({}, {})", q1.re(), q2.re());
            return S::from_f64(f64::NAN);
        };
        let w = w.map(S::from_f64);

        w[0] * p1 + w[1] * p2 - self.lagrangian.lagrangian([q1, q2], w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use hamilton_core::PhysicalParameters;

    use crate::DecoupledPendulum;

    fn pendulum(params: PhysicalParameters) -> Legendre<DecoupledPendulum> {
        Legendre::new(DecoupledPendulum::new(params))
    }

    fn sample_params() -> PhysicalParameters {
        PhysicalParameters::new(1.5, 0.75, 1.2, 0.8, 9.806).unwrap()
    }

    #[test]
    fn momenta_match_closed_form() {
        let model = pendulum(sample_params());
        let (q, w) = ([0.3, 0.2], [0.5, -0.4]);
        let (m1, m2, r1, r2) = (1.5, 0.75, 1.2, 0.8);
        let cos_sum = 0.5_f64.cos();

        let p = model.momenta(q, w);

        let p1 = m1 * r1 * r1 * w[0] + m2 * (r1 * r1 * w[0] + r1 * r2 * w[1] * cos_sum);
        let p2 = m2 * (r2 * r2 * w[1] + r1 * r2 * w[0] * cos_sum);
        assert_relative_eq!(p[0], p1, epsilon = 1e-12);
        assert_relative_eq!(p[1], p2, epsilon = 1e-12);
    }

    #[test]
    fn velocities_invert_momenta() {
        let model = pendulum(sample_params());
        let (q, w) = ([1.1, -0.6], [0.9, 2.5]);

        let state = model.state_from_velocities(q, w);
        let recovered = model.velocities(&state).unwrap();

        assert_eq!(state.positions(), q);
        assert_relative_eq!(recovered[0], w[0], epsilon = 1e-12);
        assert_relative_eq!(recovered[1], w[1], epsilon = 1e-12);
    }

    #[test]
    fn energy_is_kinetic_plus_potential() {
        let model = pendulum(sample_params());
        let (q, w) = ([0.7, 0.4], [-1.3, 0.6]);
        let lagrangian = model.lagrangian();

        let h = model.energy(&model.state_from_velocities(q, w)).unwrap();

        let expected = lagrangian.kinetic(q, w) + lagrangian.potential(q);
        assert_relative_eq!(h, expected, epsilon = 1e-12);
    }

    struct Frozen;

    impl Lagrangian for Frozen {
        fn kinetic<S: Scalar>(&self, _q: [S; 2], _w: [S; 2]) -> S {
            S::from_f64(0.0)
        }

        fn potential<S: Scalar>(&self, [q1, _]: [S; 2]) -> S {
            q1.cos()
        }
    }

    #[test]
    fn singular_mass_matrix_gives_nan_energy() {
        let model = Legendre::new(Frozen);
        let state = State::new([1.0, 0.0, 0.0, 0.0]);

        assert_eq!(model.velocities(&state), None);
        assert!(model.hamiltonian(state.components()).is_nan());
    }
}

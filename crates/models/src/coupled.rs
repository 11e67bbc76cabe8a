use hamilton_core::{EnergyModel, PhysicalParameters, Scalar};

/// Double pendulum with its Hamiltonian given directly in canonical form.
///
/// ```text
/// T = p1²/(2·r1) + i2/(2·r2)·(p1² + p2² + 2·p1·p2·cos(x1 − x2))
/// V = g·(r1·cos(x1)·(i1/r1² + i2/r2²) + (i2/r2)·cos(x2))
/// ```
///
/// where `i1`, `i2` are the parameters' masses read as inertias and `r1`,
/// `r2` their lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoupledPendulum {
    params: PhysicalParameters,
}

impl CoupledPendulum {
    #[must_use]
    pub const fn new(params: PhysicalParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> &PhysicalParameters {
        &self.params
    }
}

impl EnergyModel for CoupledPendulum {
    fn hamiltonian<S: Scalar>(&self, [p1, p2, x1, x2]: [S; 4]) -> S {
        let c = S::from_f64;
        let i1 = self.params.mass_1();
        let i2 = self.params.mass_2();
        let r1 = self.params.length_1();
        let r2 = self.params.length_2();
        let g = self.params.gravity();

        let coupling = c(2.0) * p1 * p2 * (x1 - x2).cos();
        let kinetic =
            c(0.5) * p1 * p1 / c(r1) + c(i2 / (2.0 * r2)) * (p1 * p1 + p2 * p2 + coupling);

        let weight = i1 / (r1 * r1) + i2 / (r2 * r2);
        let potential = c(g) * (c(r1) * x1.cos() * c(weight) + c(i2 / r2) * x2.cos());

        kinetic + potential
    }
}

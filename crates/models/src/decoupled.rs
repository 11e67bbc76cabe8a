use hamilton_core::{Lagrangian, PhysicalParameters, Scalar};

/// Double pendulum described by a Lagrangian in angles `q` and angular
/// velocities `w`.
///
/// ```text
/// T = ½·m1·(r1·w1)² + ½·m2·((r1·w1)² + (r2·w2)² + 2·r1·r2·w1·w2·cos(q1 + q2))
/// V = g·(m1·r1·cos(q1) + m2·(r1·cos(q1) + r2·cos(q1 + q2)))
/// ```
///
/// The second angle is measured relative to the first. Wrap it in
/// [`Legendre`](crate::Legendre) to simulate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecoupledPendulum {
    params: PhysicalParameters,
}

impl DecoupledPendulum {
    #[must_use]
    pub const fn new(params: PhysicalParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> &PhysicalParameters {
        &self.params
    }
}

impl Lagrangian for DecoupledPendulum {
    fn kinetic<S: Scalar>(&self, [q1, q2]: [S; 2], [w1, w2]: [S; 2]) -> S {
        let c = S::from_f64;
        let v1 = c(self.params.length_1()) * w1;
        let v2 = c(self.params.length_2()) * w2;

        c(0.5 * self.params.mass_1()) * v1 * v1
            + c(0.5 * self.params.mass_2())
                * (v1 * v1 + v2 * v2 + c(2.0) * v1 * v2 * (q1 + q2).cos())
    }

    fn potential<S: Scalar>(&self, [q1, q2]: [S; 2]) -> S {
        let c = S::from_f64;
        let m1 = self.params.mass_1();
        let m2 = self.params.mass_2();
        let r1 = self.params.length_1();
        let r2 = self.params.length_2();

        c(self.params.gravity())
            * (c(m1 * r1) * q1.cos() + c(m2) * (c(r1) * q1.cos() + c(r2) * (q1 + q2).cos()))
    }
}

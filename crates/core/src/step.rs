/// A value that can be advanced by one explicit step along its derivative.
///
/// Implementors define `step` as `self + derivative * delta`. The solvers
/// only ever call it with the derivative evaluated at the start of the step,
/// so any implementation of this trait used by them is forward Euler.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for [`StepIntegrable::Derivative`].
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Angle(f64);
    struct AngularVelocity(f64);

    impl StepIntegrable<f64> for Angle {
        type Derivative = AngularVelocity;

        fn step(&self, derivative: AngularVelocity, dt: f64) -> Self {
            Angle(self.0 + derivative.0 * dt)
        }
    }

    fn advance<T: StepIntegrable<f64>>(value: T, derivative: DerivativeOf<T, f64>, dt: f64) -> T {
        value.step(derivative, dt)
    }

    #[test]
    fn derivative_alias_names_the_associated_type() {
        let next = advance(Angle(0.25), AngularVelocity(-1.0), 0.25);
        assert_eq!(next, Angle(0.0));
    }
}

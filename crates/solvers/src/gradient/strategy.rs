use hamilton_core::{EnergyModel, EvalError, Gradient, GradientStrategy, State};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{AutoDiff, FiniteDifference};

/// A gradient strategy chosen at configuration time.
///
/// Deserializes from a table tagged by `method`:
///
/// ```toml
/// method = "finite_difference"
/// epsilon = "relative"   # or { fixed = 1e-6 }
/// precision = "double"   # or "single"
/// ```
///
/// or simply `method = "auto_diff"`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "method", rename_all = "snake_case")
)]
pub enum Strategy {
    FiniteDifference(FiniteDifference),
    AutoDiff,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::FiniteDifference(FiniteDifference::default())
    }
}

impl From<FiniteDifference> for Strategy {
    fn from(fd: FiniteDifference) -> Self {
        Self::FiniteDifference(fd)
    }
}

impl From<AutoDiff> for Strategy {
    fn from(_: AutoDiff) -> Self {
        Self::AutoDiff
    }
}

impl GradientStrategy for Strategy {
    fn gradient<M: EnergyModel>(&self, model: &M, state: &State) -> Result<Gradient, EvalError> {
        match self {
            Self::FiniteDifference(fd) => fd.gradient(model, state),
            Self::AutoDiff => AutoDiff.gradient(model, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use hamilton_core::Scalar;

    use crate::gradient::{EpsilonPolicy, Precision};

    /// H = x0² + x1²
    struct Bowl;

    impl EnergyModel for Bowl {
        fn hamiltonian<S: Scalar>(&self, [x0, x1, _, _]: [S; 4]) -> S {
            x0 * x0 + x1 * x1
        }
    }

    #[test]
    fn default_is_relative_double_finite_difference() {
        assert_eq!(
            Strategy::default(),
            Strategy::FiniteDifference(FiniteDifference::default())
        );
    }

    #[test]
    fn dispatches_to_the_selected_variant() {
        let state = State::new([0.75, -1.25, 0.0, 0.0]);

        let exact = Strategy::from(AutoDiff).gradient(&Bowl, &state).unwrap();
        let approx = Strategy::default().gradient(&Bowl, &state).unwrap();

        assert_eq!(exact.components(), [1.5, -2.5, 0.0, 0.0]);
        assert_relative_eq!(approx[0], 1.5, epsilon = 1e-5);
        assert_relative_eq!(approx[1], -2.5, epsilon = 1e-5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn method_tag_selects_the_variant() {
        let auto: Strategy = toml::from_str(r#"method = "auto_diff""#).unwrap();
        assert_eq!(auto, Strategy::AutoDiff);

        let fd: Strategy = toml::from_str(
            r#"
            method = "finite_difference"
            epsilon = { fixed = 1e-6 }
            precision = "single"
            "#,
        )
        .unwrap();
        assert_eq!(
            fd,
            Strategy::FiniteDifference(
                FiniteDifference::new(EpsilonPolicy::Fixed(1e-6), Precision::Single).unwrap()
            )
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn finite_difference_fields_default() {
        let fd: Strategy = toml::from_str(r#"method = "finite_difference""#).unwrap();
        assert_eq!(fd, Strategy::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn invalid_fixed_epsilon_is_rejected() {
        let result = toml::from_str::<Strategy>(
            r#"
            method = "finite_difference"
            epsilon = { fixed = 0.0 }
            "#,
        );
        assert!(result.is_err());
        assert!(toml::from_str::<Strategy>(r#"method = "central""#).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialized_strategy_reads_back() {
        for strategy in [Strategy::AutoDiff, Strategy::default()] {
            let text = toml::to_string(&strategy).unwrap();
            assert_eq!(toml::from_str::<Strategy>(&text).unwrap(), strategy);
        }
    }
}

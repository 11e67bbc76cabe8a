use hamilton_core::{EnergyModel, EvalError, Gradient, GradientStrategy, Scalar, State};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest perturbation the relative policy will use: 2⁻³².
pub const EPSILON_FLOOR: f64 = 1.0 / 4_294_967_296.0;

/// How the perturbation `ε` for each component is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EpsilonPolicy {
    /// `ε = max(|x| / 2³², 2⁻³²)`, scaled by the perturbed component itself.
    ///
    /// Components of very different magnitude get very different steps.
    #[default]
    Relative,

    /// The same `ε` for every component.
    Fixed(f64),
}

/// Floating-point type the energy is evaluated in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Precision {
    #[default]
    Double,

    /// Rounds the state to `f32` and evaluates energy, step and quotient in
    /// `f32`. A perturbation below the component's `f32` spacing is lost,
    /// which zeroes that partial.
    Single,
}

/// Errors that can occur when configuring a [`FiniteDifference`] strategy.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("fixed epsilon must be finite and positive, got {0}")]
    Epsilon(f64),
}

/// Forward-difference gradient.
///
/// For each component `i`, perturbs a copy of the state by `ε_i` in that
/// component only and returns `(H(perturbed) − H(base)) / ε_i`. This is
/// first-order accurate; together with explicit Euler it is the dominant
/// source of long-horizon energy drift.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawFiniteDifference", into = "RawFiniteDifference")
)]
pub struct FiniteDifference {
    epsilon: EpsilonPolicy,
    precision: Precision,
}

impl FiniteDifference {
    /// Creates a validated finite-difference strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Epsilon`] if a fixed epsilon is not finite and
    /// positive.
    pub fn new(epsilon: EpsilonPolicy, precision: Precision) -> Result<Self, ConfigError> {
        if let EpsilonPolicy::Fixed(h) = epsilon {
            if !h.is_finite() || h <= 0.0 {
                return Err(ConfigError::Epsilon(h));
            }
        }
        Ok(Self { epsilon, precision })
    }

    #[must_use]
    pub fn epsilon_policy(&self) -> EpsilonPolicy {
        self.epsilon
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Returns the perturbation used for a component with value `value`.
    #[must_use]
    pub fn epsilon(&self, value: f64) -> f64 {
        match self.epsilon {
            EpsilonPolicy::Relative => (value.abs() * EPSILON_FLOOR).max(EPSILON_FLOOR),
            EpsilonPolicy::Fixed(h) => h,
        }
    }

    fn forward<S: Scalar, M: EnergyModel>(
        &self,
        model: &M,
        state: &State,
    ) -> Result<Gradient, EvalError> {
        let base = state.components().map(S::from_f64);
        let h_base = model.hamiltonian(base);
        if !h_base.re().is_finite() {
            return Err(EvalError::NonFiniteEnergy { state: *state });
        }

        let mut grad = [0.0; 4];
        for (i, partial) in grad.iter_mut().enumerate() {
            let epsilon = S::from_f64(self.epsilon(state[i]));
            if epsilon.re() == 0.0 || !epsilon.re().is_finite() {
                return Err(EvalError::DegenerateEpsilon {
                    component: i,
                    epsilon: epsilon.re(),
                });
            }

            let mut perturbed = base;
            perturbed[i] = perturbed[i] + epsilon;

            *partial = ((model.hamiltonian(perturbed) - h_base) / epsilon).re();
            if !partial.is_finite() {
                return Err(EvalError::NonFiniteEnergy { state: *state });
            }
        }

        Ok(Gradient::new(grad))
    }
}

impl GradientStrategy for FiniteDifference {
    fn gradient<M: EnergyModel>(&self, model: &M, state: &State) -> Result<Gradient, EvalError> {
        if !state.is_finite() {
            return Err(EvalError::InvalidState { state: *state });
        }

        match self.precision {
            Precision::Double => self.forward::<f64, M>(model, state),
            Precision::Single => self.forward::<f32, M>(model, state),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawFiniteDifference {
    #[serde(default)]
    epsilon: EpsilonPolicy,
    #[serde(default)]
    precision: Precision,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFiniteDifference> for FiniteDifference {
    type Error = ConfigError;

    fn try_from(raw: RawFiniteDifference) -> Result<Self, Self::Error> {
        Self::new(raw.epsilon, raw.precision)
    }
}

#[cfg(feature = "serde")]
impl From<FiniteDifference> for RawFiniteDifference {
    fn from(fd: FiniteDifference) -> Self {
        Self {
            epsilon: fd.epsilon,
            precision: fd.precision,
        }
    }
}

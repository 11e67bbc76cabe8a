#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed physical constants of a double pendulum.
///
/// The coupled model reads the masses as moments of inertia. Values are
/// validated once and never change during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawParameters", into = "RawParameters")
)]
pub struct PhysicalParameters {
    mass_1: f64,
    mass_2: f64,
    length_1: f64,
    length_2: f64,
    gravity: f64,
}

/// Errors that can occur when validating physical parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("mass_1 must be finite and positive")]
    Mass1,

    #[error("mass_2 must be finite and positive")]
    Mass2,

    #[error("length_1 must be finite and positive")]
    Length1,

    #[error("length_2 must be finite and positive")]
    Length2,

    #[error("gravity must be finite")]
    Gravity,
}

impl PhysicalParameters {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a mass or length is not finite and positive, or
    /// if gravity is not finite.
    pub fn new(
        mass_1: f64,
        mass_2: f64,
        length_1: f64,
        length_2: f64,
        gravity: f64,
    ) -> Result<Self, ParameterError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(mass_1) {
            return Err(ParameterError::Mass1);
        }
        if !positive(mass_2) {
            return Err(ParameterError::Mass2);
        }
        if !positive(length_1) {
            return Err(ParameterError::Length1);
        }
        if !positive(length_2) {
            return Err(ParameterError::Length2);
        }
        if !gravity.is_finite() {
            return Err(ParameterError::Gravity);
        }

        Ok(Self {
            mass_1,
            mass_2,
            length_1,
            length_2,
            gravity,
        })
    }

    /// Every constant set to one.
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            mass_1: 1.0,
            mass_2: 1.0,
            length_1: 1.0,
            length_2: 1.0,
            gravity: 1.0,
        }
    }

    /// Returns a copy with a different gravitational constant.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Gravity`] if `gravity` is not finite.
    pub fn with_gravity(self, gravity: f64) -> Result<Self, ParameterError> {
        Self::new(
            self.mass_1,
            self.mass_2,
            self.length_1,
            self.length_2,
            gravity,
        )
    }

    #[must_use]
    pub fn mass_1(&self) -> f64 {
        self.mass_1
    }

    #[must_use]
    pub fn mass_2(&self) -> f64 {
        self.mass_2
    }

    #[must_use]
    pub fn length_1(&self) -> f64 {
        self.length_1
    }

    #[must_use]
    pub fn length_2(&self) -> f64 {
        self.length_2
    }

    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawParameters {
    mass_1: f64,
    mass_2: f64,
    length_1: f64,
    length_2: f64,
    gravity: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParameters> for PhysicalParameters {
    type Error = ParameterError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::new(
            raw.mass_1,
            raw.mass_2,
            raw.length_1,
            raw.length_2,
            raw.gravity,
        )
    }
}

#[cfg(feature = "serde")]
impl From<PhysicalParameters> for RawParameters {
    fn from(params: PhysicalParameters) -> Self {
        Self {
            mass_1: params.mass_1,
            mass_2: params.mass_2,
            length_1: params.length_1,
            length_2: params.length_2,
            gravity: params.gravity,
        }
    }
}

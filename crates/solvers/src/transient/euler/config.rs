#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the forward Euler solver.
///
/// The step size is fixed for the whole run and the solver always runs
/// exactly `steps` iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawConfig", into = "RawConfig")
)]
pub struct Config {
    dt: f64,
    steps: usize,
}

/// Errors that can occur when validating a forward Euler config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("dt must be finite and positive, got {0}")]
    Dt(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dt: 0.01,
            steps: 4 * 4096,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dt`] if `dt` is not finite and positive.
    pub fn new(dt: f64, steps: usize) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::Dt(dt));
        }
        Ok(Self { dt, steps })
    }

    /// Returns the fixed time step.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of recorded states, which equals the number of
    /// iterations.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawConfig {
    dt: f64,
    steps: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.dt, raw.steps)
    }
}

#[cfg(feature = "serde")]
impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            dt: config.dt,
            steps: config.steps,
        }
    }
}

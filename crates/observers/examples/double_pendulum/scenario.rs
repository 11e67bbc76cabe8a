use std::{error::Error, fs, path::Path, path::PathBuf};

use hamilton_core::{PhysicalParameters, State};
use hamilton_models::{DecoupledPendulum, Legendre};
use hamilton_solvers::{gradient::Strategy, transient::euler};
use serde::Deserialize;

/// The bundled reference run.
const REFERENCE: &str = include_str!("reference.toml");

/// Everything needed to run and record one simulation.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub output: PathBuf,
    pub model: ModelKind,
    #[serde(default)]
    pub parameters: PhysicalParameters,
    pub initial: Initial,
    #[serde(default)]
    pub integration: euler::Config,
    #[serde(default)]
    pub strategy: Strategy,
}

/// Which Hamiltonian to integrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelKind {
    /// Closed-form Hamiltonian with inertia-like masses.
    Coupled,
    /// Point masses on relative angles, via the Legendre transform.
    Decoupled,
}

/// Initial conditions, given either as canonical momenta or as velocities.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Initial {
    Momenta {
        positions: [f64; 2],
        momenta: [f64; 2],
    },
    Velocities {
        positions: [f64; 2],
        velocities: [f64; 2],
    },
}

impl Scenario {
    pub fn reference() -> Result<Self, toml::de::Error> {
        toml::from_str(REFERENCE)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Builds the starting state for a model without a velocity form.
    ///
    /// Returns `None` if the initial conditions are given as velocities.
    pub fn canonical_state(&self) -> Option<State> {
        match self.initial {
            Initial::Momenta { positions, momenta } => {
                Some(State::from_canonical(positions, momenta))
            }
            Initial::Velocities { .. } => None,
        }
    }

    /// Builds the starting state for the Legendre-transformed model.
    pub fn legendre_state(&self, model: &Legendre<DecoupledPendulum>) -> State {
        match self.initial {
            Initial::Momenta { positions, momenta } => State::from_canonical(positions, momenta),
            Initial::Velocities {
                positions,
                velocities,
            } => model.state_from_velocities(positions, velocities),
        }
    }
}


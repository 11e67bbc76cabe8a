//! Interactive plots of double pendulum runs.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- state
//! cargo run --example plot --features plot -- energy
//! cargo run --example plot --features plot -- energy 0.05
//! ```
//!
//! # Modes
//!
//! - **state** — The four state components of the reference run against
//!   time.
//!
//! - **energy [dt]** — `H` along the reference run for both gradient
//!   strategies. Forward Euler pumps energy into the system, faster with
//!   larger steps. Try `0.01` (default), `0.05`, `0.1`.

use std::{convert::Infallible, error::Error};

use hamilton_core::{EnergyModel, PhysicalParameters, State};
use hamilton_models::CoupledPendulum;
use hamilton_observers::PlotObserver;
use hamilton_solvers::{
    gradient::Strategy,
    transient::euler::{self, Config},
};

/// Simulated seconds for every mode.
const DURATION: f64 = 60.0;

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "state".into());
    match mode.as_str() {
        "state" => state(),
        "energy" => {
            let dt = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()?
                .unwrap_or(0.01);
            energy(dt)
        }
        other => Err(format!("unknown mode {other}, expected state or energy [dt]").into()),
    }
}

fn model() -> CoupledPendulum {
    CoupledPendulum::new(PhysicalParameters::unit())
}

fn initial() -> State {
    State::new([0.0, 0.0, 1.0, 0.0])
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn config(dt: f64) -> Result<Config, euler::ConfigError> {
    Config::new(dt, (DURATION / dt).round() as usize)
}

/// Plot every state component of the reference run.
fn state() -> Result<(), Box<dyn Error>> {
    let mut obs = PlotObserver::states();

    euler::solve(
        &model(),
        &Strategy::default(),
        initial(),
        &config(0.01)?,
        &mut obs,
    )?;

    obs.show("Double pendulum: state components")?;

    Ok(())
}

/// Plot the energy of the reference run under both strategies.
fn energy(dt: f64) -> Result<(), Box<dyn Error>> {
    let model = model();
    let config = config(dt)?;
    let mut obs = PlotObserver::new(["Finite difference", "Autodiff"]);

    for (trace, strategy) in [Strategy::default(), Strategy::AutoDiff].iter().enumerate() {
        euler::solve(
            &model,
            strategy,
            initial(),
            &config,
            |event: &euler::Event| -> Option<Infallible> {
                if let Ok(h) = model.energy(&event.state) {
                    obs.push(trace, event.time, h);
                }
                None
            },
        )?;
    }

    obs.show(&format!(
        "Double pendulum: energy under forward Euler (dt={dt})"
    ))?;

    Ok(())
}

//! # Double Pendulum Trajectory
//!
//! Integrates a double pendulum with forward Euler and writes the trajectory
//! to CSV, one `p1,p2,x1,x2` line per step.
//!
//! To run the bundled reference scenario:
//!
//! ```sh
//! cargo run --example double_pendulum --release
//! ```
//!
//! Or pass a scenario file:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example double_pendulum --release -- my_run.toml
//! ```

mod scenario;

use std::{error::Error, fs::File, time::Instant};

use hamilton_core::{EnergyModel, State};
use hamilton_models::{CoupledPendulum, DecoupledPendulum, Legendre};
use hamilton_observers::{CsvSink, EnergyMonitor};
use hamilton_solvers::transient::euler::{self, Status};
use tracing_subscriber::EnvFilter;

use scenario::{ModelKind, Scenario};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => Scenario::from_file(path)?,
        None => Scenario::reference()?,
    };
    tracing::info!(model = ?scenario.model, strategy = ?scenario.strategy, "loaded scenario");

    match scenario.model {
        ModelKind::Coupled => {
            let model = CoupledPendulum::new(scenario.parameters);
            let initial = scenario
                .canonical_state()
                .ok_or("the coupled model needs initial momenta, not velocities")?;
            run(&model, initial, &scenario)
        }
        ModelKind::Decoupled => {
            let model = Legendre::new(DecoupledPendulum::new(scenario.parameters));
            let initial = scenario.legendre_state(&model);
            run(&model, initial, &scenario)
        }
    }
}

fn run<M: EnergyModel>(model: &M, initial: State, scenario: &Scenario) -> Result<(), Box<dyn Error>> {
    let mut monitor = EnergyMonitor::new(model);

    let start = Instant::now();
    let solution = euler::solve(
        model,
        &scenario.strategy,
        initial,
        &scenario.integration,
        &mut monitor,
    )?;
    let elapsed = start.elapsed();

    match solution.status {
        Status::Complete => tracing::info!(?elapsed, steps = solution.steps, "run complete"),
        Status::Diverged { step } => tracing::warn!(?elapsed, step, "run diverged"),
    }
    if let (Some(initial), Some(drift)) = (monitor.initial(), monitor.max_drift()) {
        tracing::info!(initial, drift, "energy");
    }

    let file = File::create(&scenario.output)?;
    let mut sink = CsvSink::new(file);
    solution.trajectory.write_to(&mut sink)?;
    tracing::info!(path = %scenario.output.display(), "trajectory written");

    Ok(())
}

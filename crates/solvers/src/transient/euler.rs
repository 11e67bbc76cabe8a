//! Forward Euler integration of Hamilton's equations.
//!
//! Each iteration records the current state, then advances it:
//!
//! ```text
//! state_{n+1} = state_n + rotate(grad H(state_n)) * dt
//! ```
//!
//! The method is explicit and first-order. Energy is not conserved and
//! drifts over long runs, faster still with a finite-difference gradient.
//! The solver does not correct this.
//!
//! # Example
//!
//! ```ignore
//! use hamilton_solvers::{gradient::Strategy, transient::euler};
//!
//! let solution = euler::solve_unobserved(&model, &Strategy::default(), initial, &euler::Config::default())?;
//!
//! for state in solution.trajectory.states() {
//!     println!("{state:?}");
//! }
//! ```

mod config;
mod error;
mod event;
mod solution;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use std::convert::Infallible;

use hamilton_core::{
    EnergyModel, EvalError, GradientStrategy, Observer, State, StepIntegrable, Trajectory, rotate,
};

/// Advances `state` by one forward Euler step.
///
/// # Errors
///
/// Returns the strategy's [`EvalError`] if the gradient cannot be computed.
pub fn step<M, G>(model: &M, strategy: &G, state: &State, dt: f64) -> Result<State, EvalError>
where
    M: EnergyModel,
    G: GradientStrategy,
{
    let derivative = rotate(strategy.gradient(model, state)?);
    tracing::trace!(?derivative);
    Ok(state.step(derivative, dt))
}

/// Integrates from `initial` for exactly `config.steps()` iterations.
///
/// # Algorithm
///
/// For each iteration `i`:
///
/// 1. Record the current state at trajectory index `i`.
/// 2. Emit an [`Event`] to the observer.
/// 3. Advance the state with [`step`].
///
/// If a step produces a non-finite state, or the energy overflows, the run
/// is marked [`Status::Diverged`] and the remaining slots are filled with
/// that non-finite state. The loop never stops early, so the trajectory
/// always holds `config.steps()` states.
///
/// # Observer
///
/// The observer sees every recorded state and cannot alter the run.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] if `initial` is not finite, and
/// [`Error::Gradient`] if the strategy fails for a reason other than energy
/// overflow.
pub fn solve<M, G, Obs>(
    model: &M,
    strategy: &G,
    initial: State,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: EnergyModel,
    G: GradientStrategy,
    Obs: Observer<Event, Infallible>,
{
    if !initial.is_finite() {
        return Err(Error::InvalidState { state: initial });
    }

    let steps = config.steps();
    let dt = config.dt();
    tracing::debug!(steps, dt, ?initial, "starting forward Euler run");

    let mut trajectory = Trajectory::with_len(steps);
    let mut status = Status::Complete;
    let mut state = initial;

    for i in 0..steps {
        trajectory.record(i, state)?;
        let time = i as f64 * dt;
        observer.observe(&Event {
            step: i,
            time,
            state,
        });

        if status != Status::Complete {
            continue;
        }

        state = match step(model, strategy, &state, dt) {
            Ok(next) if next.is_finite() => next,
            Ok(next) => {
                tracing::warn!(step = i + 1, time, "state became non-finite");
                status = Status::Diverged { step: i + 1 };
                next
            }
            Err(EvalError::NonFiniteEnergy { .. }) => {
                tracing::warn!(step = i + 1, time, "energy overflowed");
                status = Status::Diverged { step: i + 1 };
                State::new([f64::NAN; 4])
            }
            Err(err) => return Err(err.into()),
        };
    }

    tracing::debug!(?status, "forward Euler run finished");

    Ok(Solution {
        status,
        trajectory,
        steps,
    })
}

/// Integrates without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, G>(
    model: &M,
    strategy: &G,
    initial: State,
    config: &Config,
) -> Result<Solution, Error>
where
    M: EnergyModel,
    G: GradientStrategy,
{
    solve(model, strategy, initial, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use hamilton_core::Scalar;

    use crate::gradient::{AutoDiff, FiniteDifference};

    // --- Test fixtures ---

    /// Unit harmonic oscillator in the first canonical pair: H = ½(p1² + x1²).
    struct Harmonic;

    impl EnergyModel for Harmonic {
        fn hamiltonian<S: Scalar>(&self, [p1, _, x1, _]: [S; 4]) -> S {
            S::from_f64(0.5) * (p1 * p1 + x1 * x1)
        }
    }

    /// H = p1, so x1 moves by exactly dt each step.
    struct Drift;

    impl EnergyModel for Drift {
        fn hamiltonian<S: Scalar>(&self, [p1, _, _, _]: [S; 4]) -> S {
            p1
        }
    }

    /// H = ½(p1² − x1²), whose solutions grow exponentially.
    struct Inverted;

    impl EnergyModel for Inverted {
        fn hamiltonian<S: Scalar>(&self, [p1, _, x1, _]: [S; 4]) -> S {
            S::from_f64(0.5) * (p1 * p1 - x1 * x1)
        }
    }

    fn config(dt: f64, steps: usize) -> Config {
        Config::new(dt, steps).expect("valid config")
    }

    // --- Tests ---

    #[test]
    fn single_step_follows_hamiltons_equations() {
        // dp/dt = -x, dx/dt = p
        let state = State::new([1.0, 0.0, 2.0, 0.0]);
        let next = step(&Harmonic, &AutoDiff, &state, 0.1).unwrap();

        assert_relative_eq!(next[0], 0.8, epsilon = 1e-15);
        assert_relative_eq!(next[1], 0.0);
        assert_relative_eq!(next[2], 2.1, epsilon = 1e-15);
        assert_relative_eq!(next[3], 0.0);
    }

    #[test]
    fn euler_step_scales_harmonic_energy_by_one_plus_dt_squared() {
        let dt = 0.05;
        let state = State::new([0.3, 0.0, -1.2, 0.0]);
        let before = Harmonic.energy(&state).unwrap();

        let after = Harmonic
            .energy(&step(&Harmonic, &AutoDiff, &state, dt).unwrap())
            .unwrap();

        assert_relative_eq!(after, before * (1.0 + dt * dt), epsilon = 1e-14);
    }

    #[test]
    fn records_pre_step_state_at_each_index() {
        let initial = State::new([1.0, 0.0, 0.0, 0.0]);
        let solution = solve_unobserved(&Harmonic, &AutoDiff, initial, &config(0.5, 3)).unwrap();

        let states = solution.trajectory.states();
        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 3);
        assert_eq!(states.len(), 3);
        assert_eq!(states[0], initial);
        assert_eq!(states[1].components(), [1.0, 0.0, 0.5, 0.0]);
        assert_eq!(states[2].components(), [0.75, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn zero_steps_gives_empty_trajectory() {
        let solution =
            solve_unobserved(&Harmonic, &AutoDiff, State::ZERO, &config(0.1, 0)).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert!(solution.trajectory.is_empty());
        assert_eq!(solution.energy_drift(&Harmonic), Ok(None));
    }

    #[test]
    fn observer_sees_every_step_with_time() {
        let mut seen = Vec::new();
        solve(
            &Harmonic,
            &AutoDiff,
            State::new([0.0, 0.0, 1.0, 0.0]),
            &config(0.25, 4),
            |event: &Event| -> Option<Infallible> {
                seen.push((event.step, event.time));
                None
            },
        )
        .unwrap();

        assert_eq!(seen, vec![(0, 0.0), (1, 0.25), (2, 0.5), (3, 0.75)]);
    }

    #[test]
    fn non_finite_initial_state_is_rejected() {
        let initial = State::new([0.0, f64::NAN, 0.0, 0.0]);
        let result = solve_unobserved(&Harmonic, &AutoDiff, initial, &config(0.1, 5));
        assert!(matches!(result, Err(Error::InvalidState { .. })));
    }

    #[test]
    fn divergence_keeps_full_length() {
        let initial = State::new([0.0, 0.0, f64::MAX, 0.0]);
        let solution =
            solve_unobserved(&Drift, &AutoDiff, initial, &config(f64::MAX, 10)).unwrap();

        let states = solution.trajectory.states();
        assert_eq!(states.len(), 10);
        assert_eq!(solution.status, Status::Diverged { step: 1 });
        assert_eq!(states[0], initial);
        assert_eq!(solution.trajectory.first_non_finite(), Some(1));
        assert!(states[1..].iter().all(|s| s[2] == f64::INFINITY));
    }

    #[test]
    fn energy_overflow_is_reported_as_divergence() {
        let initial = State::new([0.0, 0.0, 1e154, 0.0]);
        let solution =
            solve_unobserved(&Inverted, &FiniteDifference::default(), initial, &config(1.0, 6))
                .unwrap();

        assert_eq!(solution.trajectory.len(), 6);
        let Status::Diverged { step } = solution.status else {
            panic!("expected divergence, got {:?}", solution.status);
        };
        assert_eq!(solution.trajectory.first_non_finite(), Some(step));
        assert!(solution.energy_drift(&Inverted).is_err());
    }

    #[test]
    fn harmonic_energy_grows_under_euler() {
        let initial = State::new([0.0, 0.0, 1.0, 0.0]);
        let solution =
            solve_unobserved(&Harmonic, &AutoDiff, initial, &config(0.01, 1000)).unwrap();

        let drift = solution.energy_drift(&Harmonic).unwrap().unwrap();

        // 999 steps, each multiplying H = 0.5 by 1 + 1e-4.
        assert_relative_eq!(drift, 0.5 * (1.0001_f64.powi(999) - 1.0), epsilon = 1e-10);
    }
}

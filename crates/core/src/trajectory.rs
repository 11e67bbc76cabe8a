use thiserror::Error;

use crate::State;

/// A pre-sized, ordered record of visited states.
///
/// The index is the time axis. The length is fixed when the buffer is
/// created; [`record`](Trajectory::record) overwrites a slot and never grows
/// the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<State>,
}

/// Errors that can occur when writing to a [`Trajectory`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryError {
    #[error("index {index} is outside a trajectory of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Destination for a finished trajectory (a file, a plot, a channel).
pub trait TrajectorySink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Consumes the states of a finished run, in time order.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the states cannot be written.
    fn write(&mut self, states: &[State]) -> Result<(), Self::Error>;
}

impl Trajectory {
    /// Creates a buffer of `len` slots, each initialized to [`State::ZERO`].
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            states: vec![State::ZERO; len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Writes `state` into slot `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::IndexOutOfBounds`] if `index >= len()`.
    pub fn record(&mut self, index: usize, state: State) -> Result<(), TrajectoryError> {
        let len = self.states.len();
        let slot = self
            .states
            .get_mut(index)
            .ok_or(TrajectoryError::IndexOutOfBounds { index, len })?;
        *slot = state;
        Ok(())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&State> {
        self.states.get(index)
    }

    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    #[must_use]
    pub fn first(&self) -> Option<&State> {
        self.states.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&State> {
        self.states.last()
    }

    /// Hands over the recorded states, in time order.
    #[must_use]
    pub fn export(self) -> Vec<State> {
        self.states
    }

    /// Returns the index of the first state with a non-finite component.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.states.iter().position(|s| !s.is_finite())
    }

    /// Returns `true` if every recorded state is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    /// Writes the whole trajectory to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if writing fails.
    pub fn write_to<S: TrajectorySink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.write(&self.states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    #[test]
    fn starts_pre_sized_with_zero_states() {
        let trajectory = Trajectory::with_len(3);
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.states(), [State::ZERO; 3]);
    }

    #[test]
    fn record_overwrites_in_place() {
        let mut trajectory = Trajectory::with_len(2);
        trajectory.record(1, State::new([1.0; 4])).unwrap();
        trajectory.record(1, State::new([2.0; 4])).unwrap();

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.get(1), Some(&State::new([2.0; 4])));
    }

    #[test]
    fn record_past_end_is_an_error() {
        let mut trajectory = Trajectory::with_len(2);
        assert_eq!(
            trajectory.record(2, State::ZERO),
            Err(TrajectoryError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(trajectory.len(), 2);
    }

    #[test]
    fn finds_first_non_finite_state() {
        let mut trajectory = Trajectory::with_len(4);
        trajectory.record(2, State::new([0.0, f64::NAN, 0.0, 0.0])).unwrap();
        trajectory.record(3, State::new([f64::INFINITY, 0.0, 0.0, 0.0])).unwrap();

        assert_eq!(trajectory.first_non_finite(), Some(2));
        assert!(!trajectory.is_finite());
    }

    #[test]
    fn export_keeps_order() {
        let mut trajectory = Trajectory::with_len(3);
        for i in 0..3 {
            trajectory.record(i, State::new([i as f64; 4])).unwrap();
        }

        let states = trajectory.export();
        assert_eq!(states[0], State::new([0.0; 4]));
        assert_eq!(states[2], State::new([2.0; 4]));
    }

    struct Collect(Vec<State>);

    impl TrajectorySink for Collect {
        type Error = Infallible;

        fn write(&mut self, states: &[State]) -> Result<(), Infallible> {
            self.0.extend_from_slice(states);
            Ok(())
        }
    }

    #[test]
    fn write_to_hands_every_state_to_the_sink() {
        let mut trajectory = Trajectory::with_len(2);
        trajectory.record(0, State::new([1.0, 2.0, 3.0, 4.0])).unwrap();

        let mut sink = Collect(Vec::new());
        trajectory.write_to(&mut sink).unwrap();

        assert_eq!(sink.0, trajectory.states());
    }
}

use hamilton_core::State;

/// Event emitted by the Euler solver for each recorded state.
///
/// Step 0 carries the initial state. Events are emitted after the state is
/// recorded and before it is advanced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Trajectory index of the state.
    pub step: usize,

    /// Simulated time, `step · dt`.
    pub time: f64,

    pub state: State,
}

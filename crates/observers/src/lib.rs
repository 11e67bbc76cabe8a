//! Trajectory sinks and observers for Hamiltonian simulation runs.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits shared by the observers here
//!   ([`HasState`])
//! - [`sink`] — [`CsvSink`], a comma-separated [`TrajectorySink`]
//! - [`energy`] — [`EnergyMonitor`], which tracks `H` along a run
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing a run via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`HasState`]: traits::HasState
//! [`TrajectorySink`]: hamilton_core::TrajectorySink

pub mod energy;
pub mod sink;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use energy::EnergyMonitor;
pub use sink::{CsvSink, SinkError};

#[cfg(feature = "plot")]
pub use plot::PlotObserver;

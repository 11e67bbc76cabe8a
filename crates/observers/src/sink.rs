//! Comma-separated output for finished trajectories.

use std::io::{self, Write};

use csv::{Terminator, WriterBuilder};
use hamilton_core::{State, TrajectorySink};
use thiserror::Error;

/// Errors that can occur while writing a trajectory.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write state {index}")]
    Record {
        index: usize,
        #[source]
        source: csv::Error,
    },

    #[error("failed to flush output")]
    Flush(#[source] io::Error),
}

/// Writes one line per state as four comma-separated values.
///
/// Values are printed in storage order with three decimals and no header,
/// e.g. `0.000,0.000,1.000,0.000`. Non-finite components print as `NaN`,
/// `inf` or `-inf`.
///
/// # Example
///
/// ```ignore
/// let file = std::fs::File::create("trajectory.csv")?;
/// let mut sink = CsvSink::new(file);
/// solution.trajectory.write_to(&mut sink)?;
/// ```
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: WriterBuilder::new()
                .has_headers(false)
                .terminator(Terminator::Any(b'\n'))
                .from_writer(writer),
        }
    }

    /// Flushes buffered lines and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Flush`] if the buffered lines cannot be written.
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer
            .into_inner()
            .map_err(|err| SinkError::Flush(err.into_error()))
    }
}

impl<W: Write> TrajectorySink for CsvSink<W> {
    type Error = SinkError;

    fn write(&mut self, states: &[State]) -> Result<(), SinkError> {
        for (index, state) in states.iter().enumerate() {
            self.writer
                .write_record(state.components().map(|c| format!("{c:.3}")))
                .map_err(|source| SinkError::Record { index, source })?;
        }
        self.writer.flush().map_err(SinkError::Flush)
    }
}

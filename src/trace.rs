//! Diagnostic sinks for the filled distance matrix.
//!
//! The engine never prints. When a caller wants to see the matrix it passes
//! a sink, and the engine hands the finished grid to it exactly once, right
//! before the result is returned. Fast paths build no matrix and emit nothing.

use tracing::Level;

use crate::matrix::DistanceMatrix;

pub trait TraceSink {
    fn emit(&mut self, matrix: &DistanceMatrix);
}

impl<F> TraceSink for F
where
    F: FnMut(&DistanceMatrix),
{
    fn emit(&mut self, matrix: &DistanceMatrix) {
        self(matrix)
    }
}

/// Renders the matrix into a `tracing` event on the `levenshtein::matrix` target.
#[derive(Debug, Clone, Copy)]
pub struct LogSink {
    level: Level,
}

impl LogSink {
    pub fn new(level: Level) -> Self {
        LogSink { level }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        LogSink::new(Level::INFO)
    }
}

impl TraceSink for LogSink {
    fn emit(&mut self, matrix: &DistanceMatrix) {
        let rows = matrix.rows();
        let cols = matrix.cols();
        // tracing needs the level as a constant at each call site.
        match self.level {
            Level::ERROR => {
                tracing::error!(target: "levenshtein::matrix", rows, cols, "\n{}", matrix)
            }
            Level::WARN => {
                tracing::warn!(target: "levenshtein::matrix", rows, cols, "\n{}", matrix)
            }
            Level::INFO => {
                tracing::info!(target: "levenshtein::matrix", rows, cols, "\n{}", matrix)
            }
            Level::DEBUG => {
                tracing::debug!(target: "levenshtein::matrix", rows, cols, "\n{}", matrix)
            }
            _ => tracing::trace!(target: "levenshtein::matrix", rows, cols, "\n{}", matrix),
        }
    }
}

/// Keeps a copy of the last matrix it was given.
#[derive(Debug, Default, Clone)]
pub struct MatrixCapture {
    matrix: Option<DistanceMatrix>,
}

impl MatrixCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matrix(&self) -> Option<&DistanceMatrix> {
        self.matrix.as_ref()
    }

    pub fn into_matrix(self) -> Option<DistanceMatrix> {
        self.matrix
    }
}

impl TraceSink for MatrixCapture {
    fn emit(&mut self, matrix: &DistanceMatrix) {
        self.matrix = Some(matrix.clone());
    }
}

//! Levenshtein edit distance and similarity ratio over arbitrary symbol
//! sequences, with an optional trace of the full distance matrix.
//!
//! ```
//! use levenshtein_calculator::{distance_str, ratio_str};
//!
//! assert_eq!(distance_str("kitten", "sitting"), 3);
//! assert!((ratio_str("kitten", "sitting").unwrap() - 10.0 / 13.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod fasta_parser;
pub mod levenshtein;
pub mod matrix;
pub mod sequence;
pub mod trace;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{Argument, LevenshteinError, Result};
pub use levenshtein::{
    compute, compute_str, distance, distance_matrix, distance_str, ratio, ratio_str, Mode, Score,
};
pub use matrix::DistanceMatrix;
pub use sequence::compute_json;
pub use trace::{LogSink, MatrixCapture, TraceSink};

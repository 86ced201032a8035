//! The distance engine: a full `(n+1) x (m+1)` Wagner-Fischer matrix.
//!
//! Unlike a two-row implementation the whole grid is kept so a trace sink can
//! inspect it. Cell `(i, j)` is the distance between `a[..i]` and `b[..j]`.

use std::fmt;

use serde::Serialize;

use crate::error::{LevenshteinError, Result};
use crate::matrix::DistanceMatrix;
use crate::trace::TraceSink;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Absolute,
    Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    Distance(usize),
    Ratio(f64),
}

impl Score {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Score::Distance(d) => d as f64,
            Score::Ratio(r) => r,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Score::Distance(d) => write!(f, "{}", d),
            Score::Ratio(r) => write!(f, "{}", r),
        }
    }
}

/// Builds and fills the matrix for `a` against `b`.
///
/// Always allocates, even when one side is empty; in that case the result
/// is just the base-case row or column.
pub fn distance_matrix<T: PartialEq>(a: &[T], b: &[T]) -> DistanceMatrix {
    let n = a.len();
    let m = b.len();
    let mut lev = DistanceMatrix::with_base_case(n, m);

    for i in 1..=n {
        for j in 1..=m {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let deletion = lev[(i - 1, j)] + 1;
            let insertion = lev[(i, j - 1)] + 1;
            let substitution = lev[(i - 1, j - 1)] + cost;
            lev.set(i, j, deletion.min(insertion).min(substitution));
        }
    }
    lev
}

/// Levenshtein distance between `a` and `b`.
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    edit_distance(a, b, None)
}

/// Similarity ratio `(n + m - distance) / (n + m)`.
pub fn ratio<T: PartialEq>(a: &[T], b: &[T]) -> Result<f64> {
    compute(a, b, Mode::Ratio, None).map(|score| score.as_f64())
}

/// Computes the distance or ratio, optionally handing the filled matrix to `trace`.
///
/// Empty inputs short-circuit: no matrix is built and the sink is not called.
/// In ratio mode the short-circuited distance still goes through the ratio
/// formula, so one empty side gives `0.0` and two empty sides give
/// [`LevenshteinError::DivisionUndefined`].
pub fn compute<T: PartialEq>(
    a: &[T],
    b: &[T],
    mode: Mode,
    trace: Option<&mut dyn TraceSink>,
) -> Result<Score> {
    let dist = edit_distance(a, b, trace);

    match mode {
        Mode::Absolute => Ok(Score::Distance(dist)),
        Mode::Ratio => {
            let total = a.len() + b.len();
            if total == 0 {
                return Err(LevenshteinError::DivisionUndefined);
            }
            Ok(Score::Ratio((total - dist) as f64 / total as f64))
        }
    }
}

fn edit_distance<T: PartialEq>(a: &[T], b: &[T], trace: Option<&mut dyn TraceSink>) -> usize {
    if a.is_empty() {
        tracing::trace!(len = b.len(), "first sequence empty, skipping matrix");
        return b.len();
    }
    if b.is_empty() {
        tracing::trace!(len = a.len(), "second sequence empty, skipping matrix");
        return a.len();
    }

    let lev = distance_matrix(a, b);
    tracing::debug!(
        rows = lev.rows(),
        cols = lev.cols(),
        distance = lev.distance(),
        "filled distance matrix"
    );
    if let Some(sink) = trace {
        sink.emit(&lev);
    }
    lev.distance()
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// [`distance`] over the `char`s of two strings.
pub fn distance_str(a: &str, b: &str) -> usize {
    distance(&chars(a), &chars(b))
}

/// [`ratio`] over the `char`s of two strings.
pub fn ratio_str(a: &str, b: &str) -> Result<f64> {
    ratio(&chars(a), &chars(b))
}

/// [`compute`] over the `char`s of two strings.
pub fn compute_str(
    a: &str,
    b: &str,
    mode: Mode,
    trace: Option<&mut dyn TraceSink>,
) -> Result<Score> {
    compute(&chars(a), &chars(b), mode, trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::MatrixCapture;
    use pretty_assertions::assert_eq;

    #[test]
    fn kitten_sitting() {
        // https://en.wikipedia.org/wiki/Levenshtein_distance#Example
        assert_eq!(distance_str("kitten", "sitting"), 3);
    }

    #[test]
    fn flaw_lawn() {
        assert_eq!(distance_str("flaw", "lawn"), 2);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(distance_str("", ""), 0);
        assert_eq!(distance_str("", "abc"), 3);
        assert_eq!(distance_str("abc", ""), 3);
    }

    #[test]
    fn single_edits() {
        assert_eq!(distance_str("cat", "hat"), 1);
        assert_eq!(distance_str("cat", "cats"), 1);
        assert_eq!(distance_str("cats", "cat"), 1);
        assert_eq!(distance_str("saturday", "sunday"), 3);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(distance_str("caf\u{e9}", "cafe"), 1);
        assert_eq!(distance_str("\u{65e5}\u{672c}\u{8a9e}", "\u{65e5}\u{672c}"), 1);
    }

    #[test]
    fn works_on_bytes() {
        assert_eq!(distance(b"ACGTACGT", b"ACGAACGT"), 1);
        assert_eq!(distance(b"GATTACA", b"TACA"), 3);
    }

    #[test]
    fn ratio_of_identical_is_one() {
        assert_eq!(ratio_str("same", "same"), Ok(1.0));
    }

    #[test]
    fn ratio_kitten_sitting() {
        let r = ratio_str("kitten", "sitting").unwrap();
        assert!((r - 10.0 / 13.0).abs() < 1e-12);
    }

    #[test]
    fn ratio_with_one_empty_side_is_zero() {
        assert_eq!(ratio_str("", "abc"), Ok(0.0));
        assert_eq!(ratio_str("abc", ""), Ok(0.0));
    }

    #[test]
    fn ratio_of_two_empty_is_undefined() {
        assert_eq!(ratio_str("", ""), Err(LevenshteinError::DivisionUndefined));
        assert_eq!(distance_str("", ""), 0);
    }

    #[test]
    fn kitten_sitting_matrix() {
        let lev = distance_matrix(&chars("kitten"), &chars("sitting"));
        assert_eq!(lev.rows(), 7);
        assert_eq!(lev.cols(), 8);
        assert_eq!(lev.row(0), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(lev.row(1), &[1, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(lev.row(2), &[2, 2, 1, 2, 3, 4, 5, 6]);
        assert_eq!(lev.row(6), &[6, 6, 5, 4, 3, 3, 2, 3]);
        assert_eq!(lev.distance(), 3);
    }

    #[test]
    fn matrix_satisfies_recurrence() {
        let a = chars("intention");
        let b = chars("execution");
        let lev = distance_matrix(&a, &b);
        for i in 0..lev.rows() {
            for j in 0..lev.cols() {
                if i == 0 || j == 0 {
                    assert_eq!(lev[(i, j)], i.max(j));
                    continue;
                }
                let cost = usize::from(a[i - 1] != b[j - 1]);
                let expected = (lev[(i - 1, j)] + 1)
                    .min(lev[(i, j - 1)] + 1)
                    .min(lev[(i - 1, j - 1)] + cost);
                assert_eq!(lev[(i, j)], expected, "cell ({}, {})", i, j);
            }
        }
        assert_eq!(lev.distance(), 5);
    }

    #[test]
    fn trace_receives_the_matrix() {
        let mut capture = MatrixCapture::new();
        let score = compute_str("flaw", "lawn", Mode::Absolute, Some(&mut capture)).unwrap();
        assert_eq!(score, Score::Distance(2));
        let lev = capture.into_matrix().unwrap();
        assert_eq!(lev, distance_matrix(&chars("flaw"), &chars("lawn")));
        assert_eq!(lev.distance(), 2);
    }

    #[test]
    fn trace_does_not_change_the_result() {
        let mut calls = 0;
        let mut sink = |_: &DistanceMatrix| calls += 1;
        let traced = compute_str("kitten", "sitting", Mode::Ratio, Some(&mut sink)).unwrap();
        let plain = compute_str("kitten", "sitting", Mode::Ratio, None).unwrap();
        assert_eq!(traced, plain);
        assert_eq!(calls, 1);
    }

    #[test]
    fn fast_paths_build_no_matrix() {
        let mut calls = 0;
        let mut sink = |_: &DistanceMatrix| calls += 1;
        assert_eq!(compute_str("", "abc", Mode::Absolute, Some(&mut sink)), Ok(Score::Distance(3)));
        assert_eq!(compute_str("abc", "", Mode::Absolute, Some(&mut sink)), Ok(Score::Distance(3)));
        assert_eq!(compute_str("", "abc", Mode::Ratio, Some(&mut sink)), Ok(Score::Ratio(0.0)));
        assert_eq!(calls, 0);
    }

    #[test]
    fn score_serializes_with_mode_tag() {
        assert_eq!(serde_json::to_string(&Score::Distance(3)).unwrap(), r#"{"distance":3}"#);
        assert_eq!(serde_json::to_string(&Score::Ratio(0.5)).unwrap(), r#"{"ratio":0.5}"#);
        assert_eq!(serde_json::to_string(&Mode::Ratio).unwrap(), r#""ratio""#);
    }
}

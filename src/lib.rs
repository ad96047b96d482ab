//! Global sequence alignment with Hirschberg's divide-and-conquer strategy,
//! plus DNA-to-protein translation and a pairwise alignment pipeline.

use log::debug;
use thiserror::Error;

pub mod matrix;
pub mod pipeline;
pub mod scoring;
pub mod traceback;
pub mod translate;

pub use crate::scoring::{AlignmentStats, ScoreParams, GAP};
pub use crate::traceback::{AlignmentResult, TracebackOperation};
pub use crate::translate::ProteinSequencer;

use crate::matrix::score_last_row;
use crate::traceback::needleman_wunsch;

#[derive(Debug, Error)]
pub enum BioAlignerError {
    #[error("sequence must not be empty")]
    EmptySequence,
    #[error("invalid nucleotide '{0}': sequences may only contain 'A', 'C', 'G' and 'T'")]
    InvalidNucleotide(char),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Global aligner over byte sequences.
///
/// Computes a maximum-score global alignment of two sequences under a fixed
/// [`ScoreParams`] policy, using Hirschberg's algorithm: O(|x| * |y|) time,
/// linear space for the divide-and-conquer row computations. Holds no state
/// beyond the policy, so one value can serve any number of calls, including
/// concurrent ones.
pub struct Aligner {
    params: ScoreParams,
}

impl Aligner {
    pub fn new(params: ScoreParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScoreParams {
        &self.params
    }

    /// Aligns `x` against `y` and returns the gap-padded strand pair.
    ///
    /// Total over every length combination; zero-length inputs produce the
    /// trivial all-gap alignment against the other sequence.
    pub fn align(&self, x: &[u8], y: &[u8]) -> AlignmentResult {
        debug!("aligning {} x {} symbols", x.len(), y.len());

        let capacity = x.len() + y.len();
        let mut aligned_x = Vec::with_capacity(capacity);
        let mut aligned_y = Vec::with_capacity(capacity);
        self.hirschberg(x, y, &mut aligned_x, &mut aligned_y);

        AlignmentResult::from_strands(aligned_x, aligned_y, &self.params)
    }

    /// One recursion step, appending the sub-alignment of `x` against `y`
    /// onto the output strands (left sub-result first, then right, which is
    /// exactly in-order concatenation).
    fn hirschberg(&self, x: &[u8], y: &[u8], aligned_x: &mut Vec<u8>, aligned_y: &mut Vec<u8>) {
        if x.is_empty() {
            aligned_x.extend(std::iter::repeat(GAP).take(y.len()));
            aligned_y.extend_from_slice(y);
        } else if y.is_empty() {
            aligned_x.extend_from_slice(x);
            aligned_y.extend(std::iter::repeat(GAP).take(x.len()));
        } else if x.len() == 1 || y.len() == 1 {
            // Below this size the midpoint split is undefined; run the full
            // matrix and trace the path directly.
            let (tx, ty) = needleman_wunsch(x, y, &self.params);
            aligned_x.extend_from_slice(&tx);
            aligned_y.extend_from_slice(&ty);
        } else {
            let x_mid = x.len() / 2;

            let forward = score_last_row(&x[..x_mid], y, &self.params);
            let rev_x: Vec<u8> = x[x_mid..].iter().rev().copied().collect();
            let rev_y: Vec<u8> = y.iter().rev().copied().collect();
            let backward = score_last_row(&rev_x, &rev_y, &self.params);

            let y_split = partition_y(&forward, &backward);

            self.hirschberg(&x[..x_mid], &y[..y_split], aligned_x, aligned_y);
            self.hirschberg(&x[x_mid..], &y[y_split..], aligned_x, aligned_y);
        }
    }
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new(ScoreParams::default())
    }
}

/// Picks the column of `y` at which to split, maximizing the combined
/// forward and backward scores.
///
/// The scan runs left to right with a `>=` comparison, so the largest tying
/// index wins. The running maximum starts at zero: an all-negative candidate
/// row therefore falls back to split 0.
fn partition_y(forward: &[i32], backward: &[i32]) -> usize {
    let y_len = forward.len() - 1;
    let mut best_score = 0;
    let mut split = 0;

    for k in 0..=y_len {
        let candidate = forward[k] + backward[y_len - k];
        if candidate >= best_score {
            best_score = candidate;
            split = k;
        }
    }

    split
}

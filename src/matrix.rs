//! Needleman-Wunsch score matrix construction.
//!
//! Scores every prefix pair of the two sequences under a [`ScoreParams`]
//! policy. The full grid feeds the traceback; the rolling-row variant keeps
//! only two rows and is what the divide-and-conquer splitter calls.

use crate::scoring::ScoreParams;

/// Dynamic-programming score grid of size `(|x|+1) x (|y|+1)`.
///
/// Row 0 and column 0 hold the cumulative gap-cost prefix sums; cell `(i, j)`
/// is the best attainable score aligning `x[..i]` against `y[..j]`.
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn last_row(&self) -> &[i32] {
        &self.data[(self.rows - 1) * self.cols..]
    }
}

/// Builds the full score matrix for `x` against `y`.
///
/// The recurrence takes the maximum over the diagonal, up and left moves.
/// Runs in O(|x| * |y|) time and space.
pub fn score_matrix(x: &[u8], y: &[u8], params: &ScoreParams) -> ScoreMatrix {
    let rows = x.len() + 1;
    let cols = y.len() + 1;
    let mut matrix = ScoreMatrix::new(rows, cols);

    for j in 1..cols {
        matrix.set(0, j, matrix.get(0, j - 1) + params.insertion_cost(y[j - 1]));
    }
    for i in 1..rows {
        matrix.set(i, 0, matrix.get(i - 1, 0) + params.deletion_cost(x[i - 1]));
        for j in 1..cols {
            let sub = matrix.get(i - 1, j - 1) + params.substitution_cost(x[i - 1], y[j - 1]);
            let del = matrix.get(i - 1, j) + params.deletion_cost(x[i - 1]);
            let ins = matrix.get(i, j - 1) + params.insertion_cost(y[j - 1]);
            matrix.set(i, j, sub.max(del).max(ins));
        }
    }

    matrix
}

/// Computes only the last row of the score matrix, in O(|y|) space.
///
/// Identical to `score_matrix(x, y, params).last_row()` cell for cell.
pub fn score_last_row(x: &[u8], y: &[u8], params: &ScoreParams) -> Vec<i32> {
    let cols = y.len() + 1;
    let mut prev = vec![0i32; cols];
    let mut curr = vec![0i32; cols];

    for j in 1..cols {
        prev[j] = prev[j - 1] + params.insertion_cost(y[j - 1]);
    }
    for i in 1..=x.len() {
        curr[0] = prev[0] + params.deletion_cost(x[i - 1]);
        for j in 1..cols {
            let sub = prev[j - 1] + params.substitution_cost(x[i - 1], y[j - 1]);
            let del = prev[j] + params.deletion_cost(x[i - 1]);
            let ins = curr[j - 1] + params.insertion_cost(y[j - 1]);
            curr[j] = sub.max(del).max(ins);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}

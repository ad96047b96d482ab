/// Gap marker written into aligned strands for inserted and deleted positions.
pub const GAP: u8 = b'-';

// Protein scoring parameters
pub const PROTEIN_INSERTION: i32 = -2;
pub const PROTEIN_DELETION: i32 = -2;
pub const PROTEIN_MATCH: i32 = 2;
pub const PROTEIN_MISMATCH: i32 = -1;

/// Scoring policy for global alignment: four fixed integer costs.
///
/// The engine maximizes the total score, so gap and mismatch costs are
/// conventionally negative and the match cost non-negative, but any values
/// are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreParams {
    pub insertion: i32,
    pub deletion: i32,
    pub matched: i32,
    pub mismatched: i32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            insertion: PROTEIN_INSERTION,
            deletion: PROTEIN_DELETION,
            matched: PROTEIN_MATCH,
            mismatched: PROTEIN_MISMATCH,
        }
    }
}

impl ScoreParams {
    /// Cost of inserting `symbol` from the second sequence (gap on the first
    /// sequence's side). Currently a flat cost.
    #[inline]
    pub fn insertion_cost(&self, _symbol: u8) -> i32 {
        self.insertion
    }

    /// Cost of deleting `symbol` from the first sequence (gap on the second
    /// sequence's side). Currently a flat cost.
    #[inline]
    pub fn deletion_cost(&self, _symbol: u8) -> i32 {
        self.deletion
    }

    /// Cost of substituting `x` for `y`: the match cost under exact equality,
    /// the mismatch cost otherwise.
    #[inline]
    pub fn substitution_cost(&self, x: u8, y: u8) -> i32 {
        if x == y {
            self.matched
        } else {
            self.mismatched
        }
    }
}

/// Per-column counts for a finished alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_branches() {
        let params = ScoreParams::default();
        assert_eq!(params.substitution_cost(b'A', b'A'), PROTEIN_MATCH);
        assert_eq!(params.substitution_cost(b'A', b'G'), PROTEIN_MISMATCH);
    }

    #[test]
    fn test_flat_gap_costs() {
        let params = ScoreParams {
            insertion: -7,
            deletion: -3,
            matched: 1,
            mismatched: -1,
        };
        assert_eq!(params.insertion_cost(b'Q'), -7);
        assert_eq!(params.insertion_cost(b'W'), -7);
        assert_eq!(params.deletion_cost(b'Q'), -3);
    }
}

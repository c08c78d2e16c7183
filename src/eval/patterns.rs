//! Line scores for evaluation

/// Score constants for 4-cell lines
pub struct LineScore;

impl LineScore {
    /// Completed line. Larger than any sum of non-winning lines.
    pub const WIN: i32 = 1_000_000;

    /// Score of a line holding `k` stones of one player and none of the
    /// other. An empty line is worth nothing to either side.
    pub const BY_COUNT: [i32; 5] = [0, 10, 100, 1_000, Self::WIN];
}

/// Score a single line from the perspective of the player owning `mine`.
///
/// `mine` and `theirs` are the stone counts of each player inside the
/// line. Mixed lines can never be completed and score 0.
#[inline]
pub fn window_score(mine: usize, theirs: usize) -> i32 {
    match (mine, theirs) {
        (0, 0) => 0,
        (k, 0) => LineScore::BY_COUNT[k.min(4)],
        (0, k) => -LineScore::BY_COUNT[k.min(4)],
        _ => 0,
    }
}

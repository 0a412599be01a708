//! Line reduction - the single-direction move primitive
//!
//! Every move in the game is this operation applied leftward to each row,
//! with the board transposed and/or row-reversed around it for the other
//! three directions. Keeping the reducer direction-agnostic keeps it
//! trivially testable in isolation.

use arrayvec::ArrayVec;

use crate::types::{MAX_BOARD_SIZE, WIN_VALUE};

/// Result of reducing one row leftward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    /// The reduced row, zero-padded back to the input length
    pub row: ArrayVec<u32, MAX_BOARD_SIZE>,
    /// Sum of all merged values produced by this row
    pub score: u32,
    /// True when a merge produced exactly `WIN_VALUE`
    pub reached_win: bool,
}

/// Compress and merge one row leftward.
///
/// 1. Compress: drop zeros, preserving relative order.
/// 2. Merge: scan left to right; each pair of equal neighbors collapses into
///    one tile of double value. A merged tile never merges again within the
///    same pass; scanning resumes at the first cell after the consumed pair.
/// 3. Pad with zeros back to the input length.
///
/// Deterministic: identical input rows produce identical output and score.
pub fn reduce_left(row: &[u32]) -> LineResult {
    debug_assert!(row.len() <= MAX_BOARD_SIZE);

    let mut compressed: ArrayVec<u32, MAX_BOARD_SIZE> = ArrayVec::new();
    for &v in row {
        if v != 0 {
            compressed.push(v);
        }
    }

    let mut merged: ArrayVec<u32, MAX_BOARD_SIZE> = ArrayVec::new();
    let mut score = 0u32;
    let mut reached_win = false;

    let mut i = 0;
    while i < compressed.len() {
        if i + 1 < compressed.len() && compressed[i] == compressed[i + 1] {
            let value = compressed[i] * 2;
            merged.push(value);
            score += value;
            if value == WIN_VALUE {
                reached_win = true;
            }
            i += 2;
        } else {
            merged.push(compressed[i]);
            i += 1;
        }
    }

    while merged.len() < row.len() {
        merged.push(0);
    }

    LineResult {
        row: merged,
        score,
        reached_win,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(row: &[u32]) -> (Vec<u32>, u32) {
        let result = reduce_left(row);
        (result.row.to_vec(), result.score)
    }

    #[test]
    fn test_full_row_merges_pairwise() {
        // [2,2,2,2] -> [4,4,0,0], score 8
        assert_eq!(reduce(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
    }

    #[test]
    fn test_trailing_pair_compresses_then_merges() {
        // [0,0,2,2] -> [4,0,0,0], score 4
        assert_eq!(reduce(&[0, 0, 2, 2]), (vec![4, 0, 0, 0], 4));
    }

    #[test]
    fn test_gap_separated_pair_merges_once_compressed() {
        // [2,0,0,2] -> [4,0,0,0], score 4
        assert_eq!(reduce(&[2, 0, 0, 2]), (vec![4, 0, 0, 0], 4));
    }

    #[test]
    fn test_merge_does_not_chain() {
        // The 4 produced from 2+2 must not merge with the pre-existing 4.
        assert_eq!(reduce(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], 4));
        // Triple: only the leftmost pair merges.
        assert_eq!(reduce(&[2, 2, 2, 0]), (vec![4, 2, 0, 0], 4));
        assert_eq!(reduce(&[4, 4, 8, 8]), (vec![8, 16, 0, 0], 24));
    }

    #[test]
    fn test_all_zero_row_unchanged() {
        assert_eq!(reduce(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], 0));
    }

    #[test]
    fn test_compression_without_merge_scores_nothing() {
        assert_eq!(reduce(&[0, 2, 0, 4]), (vec![2, 4, 0, 0], 0));
        assert_eq!(reduce(&[2, 4, 8, 16]), (vec![2, 4, 8, 16], 0));
    }

    #[test]
    fn test_win_flag_on_2048_merge() {
        let result = reduce_left(&[1024, 1024, 0, 0]);
        assert_eq!(result.row.as_slice(), &[2048, 0, 0, 0]);
        assert_eq!(result.score, 2048);
        assert!(result.reached_win);

        // Merging past the threshold does not re-trigger it.
        let result = reduce_left(&[2048, 2048, 0, 0]);
        assert_eq!(result.row.as_slice(), &[4096, 0, 0, 0]);
        assert!(!result.reached_win);
    }

    #[test]
    fn test_output_length_matches_input() {
        for len in 3..=8usize {
            let row = vec![2u32; len];
            let result = reduce_left(&row);
            assert_eq!(result.row.len(), len);
        }
    }

    #[test]
    fn test_tile_mass_conserved_and_count_never_grows() {
        let inputs: [&[u32]; 4] = [
            &[2, 2, 4, 4],
            &[0, 2, 2, 8],
            &[16, 0, 16, 16],
            &[2, 4, 2, 4],
        ];
        for row in inputs {
            let result = reduce_left(row);
            let in_sum: u32 = row.iter().sum();
            let out_sum: u32 = result.row.iter().sum();
            assert_eq!(in_sum, out_sum, "tile mass is conserved for {:?}", row);
            let in_nonzero = row.iter().filter(|&&v| v != 0).count();
            let out_nonzero = result.row.iter().filter(|&&v| v != 0).count();
            assert!(out_nonzero <= in_nonzero);
        }
    }
}

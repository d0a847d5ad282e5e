//! The longest common subsequence strategy.
//!
//! This strategy returns the length of the [longest common subsequence](
//! https://en.wikipedia.org/wiki/Longest_common_subsequence) of the two sequences. Note that this
//! is a similarity count rather than an edit distance: identical sequences yield their full
//! length, and sequences with no element in common yield `0`.

use std::{cmp, mem};

use serde::{Deserialize, Serialize};

use crate::{
    distance_strategy::{DistanceStrategy, ElementEq},
    error::DistanceError,
};

/// The longest common subsequence strategy.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct Lcs {}

#[typetag::serde(name = "lcs")]
impl DistanceStrategy for Lcs {
    fn name(&self) -> &str {
        "lcs"
    }

    fn measure(&self, len_a: usize, len_b: usize, eq: &ElementEq) -> Result<f64, DistanceError> {
        // Keep the shorter sequence on the inner dimension, so that the rows stay small.
        let length = if len_b <= len_a {
            lcs_length(len_a, len_b, eq)
        } else {
            lcs_length(len_b, len_a, |i, j| eq(j, i))
        };

        Ok(length as f64)
    }
}

/// Compute the length of the longest common subsequence with two rolling rows of the DP table.
///
/// `eq(i, j)` compares the `i`-th element of the outer sequence (of length `outer`) with the
/// `j`-th element of the inner sequence (of length `inner`).
fn lcs_length(outer: usize, inner: usize, eq: impl Fn(usize, usize) -> bool) -> usize {
    if outer == 0 || inner == 0 {
        return 0;
    }

    // `previous[j]` holds the LCS length of the first `i` outer elements and the first `j` inner
    // elements; column 0 is never written and stays at 0.
    let mut previous = vec![0usize; inner + 1];
    let mut current = vec![0usize; inner + 1];

    for i in 0..outer {
        for j in 0..inner {
            current[j + 1] = if eq(i, j) {
                previous[j] + 1
            } else {
                cmp::max(previous[j + 1], current[j])
            };
        }
        mem::swap(&mut previous, &mut current);
    }

    previous[inner]
}

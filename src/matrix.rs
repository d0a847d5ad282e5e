//! Pairwise distances between many texts.

use itertools::Itertools;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::{distance_strategy::DistanceStrategy, error::DistanceError, sequence::Unit};

/// The distance between two texts of a collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDistance {
    /// The index of the first text.
    pub first: usize,
    /// The index of the second text.
    pub second: usize,
    /// The distance between the two texts.
    pub distance: f64,
}

/// Compute the distance between every unordered pair of texts.
///
/// The pairs are computed in parallel, all sharing the same strategy. The result is ordered by
/// `(first, second)`, with `first < second`; the first error encountered aborts the computation.
///
/// # Arguments
/// * `strategy` - The distance strategy to use.
/// * `unit` - The unit in which the texts are split.
/// * `texts` - The texts to compare.
pub fn pairwise<T: AsRef<str> + Sync>(
    strategy: &dyn DistanceStrategy,
    unit: Unit,
    texts: &[T],
) -> Result<Vec<PairDistance>, DistanceError> {
    let pairs: Vec<(usize, usize)> = (0..texts.len()).tuple_combinations().collect();

    pairs
        .par_iter()
        .map(|&(first, second)| {
            unit.measure(strategy, texts[first].as_ref(), texts[second].as_ref())
                .map_err(|err| DistanceError {
                    message: format!(
                        "could not compare texts #{} and #{}: {}",
                        first, second, err.message
                    ),
                    ..err
                })
                .map(|distance| PairDistance {
                    first,
                    second,
                    distance,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        distance_strategy::{HAMMING, LCS},
        error::ErrorKind,
    };

    #[test]
    fn every_pair_in_order() {
        let texts = ["ab", "abc", "ac", "foo"];
        let distances = pairwise(LCS, Unit::Chars, &texts).unwrap();

        let pairs: Vec<(usize, usize, f64)> = distances
            .iter()
            .map(|pair| (pair.first, pair.second, pair.distance))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (0, 1, 2.0),
                (0, 2, 1.0),
                (0, 3, 0.0),
                (1, 2, 2.0),
                (1, 3, 0.0),
                (2, 3, 0.0),
            ]
        );
    }

    #[test]
    fn fewer_than_two_texts() {
        assert!(pairwise(LCS, Unit::Chars, &["alone"]).unwrap().is_empty());
        assert!(pairwise::<String>(LCS, Unit::Chars, &[]).unwrap().is_empty());
    }

    #[test]
    fn errors_keep_their_kind() {
        let texts = vec![String::from("ab"), String::from("ac"), String::from("abc")];
        let err = pairwise(HAMMING, Unit::Chars, &texts).unwrap_err();

        assert_eq!(err.kind, ErrorKind::LengthMismatch);
        assert!(err.message.starts_with("could not compare texts #"));
    }
}

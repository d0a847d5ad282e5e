//! The Hamming distance strategy.
//!
//! This distance strategy implements the [Hamming distance](
//! https://en.wikipedia.org/wiki/Hamming_distance).

use serde::{Deserialize, Serialize};

use crate::{
    distance_strategy::{DistanceStrategy, ElementEq},
    error::DistanceError,
};

/// The [Hamming distance](https://en.wikipedia.org/wiki/Hamming_distance) strategy.
///
/// Both sequences must have the same length.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct Hamming {}

#[typetag::serde(name = "hamming")]
impl DistanceStrategy for Hamming {
    fn name(&self) -> &str {
        "hamming"
    }

    fn measure(&self, len_a: usize, len_b: usize, eq: &ElementEq) -> Result<f64, DistanceError> {
        if len_a != len_b {
            return fail!(
                LengthMismatch: "sequences must have equal length ({} != {}).",
                len_a,
                len_b
            );
        }

        Ok((0..len_a).filter(|&index| !eq(index, index)).count() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{distance_strategy::HAMMING, error::ErrorKind};

    #[test]
    fn known_distances() {
        let hamming = |a, b| HAMMING.calculate_text(Some(a), Some(b)).unwrap();

        assert_eq!(hamming("", ""), 0.0);
        assert_eq!(hamming("a", "a"), 0.0);
        assert_eq!(hamming("ab", "ac"), 1.0);
        assert_eq!(hamming("foo", "bar"), 3.0);
        assert_eq!(hamming("karolin", "kathrin"), 3.0);
    }

    #[test]
    fn length_mismatch() {
        let err = HAMMING.calculate_text(Some("ab"), Some("a")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::LengthMismatch);
        assert_eq!(err.message, "sequences must have equal length (2 != 1).");

        let err = HAMMING
            .calculate(Some(&[1u8][..]), Some(&[][..]))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::LengthMismatch);
    }

    #[test]
    fn length_is_checked_before_scanning() {
        let err = Hamming {}
            .measure(3, 2, &|_, _| panic!("elements should not be compared."))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::LengthMismatch);
    }

    #[test]
    fn elements_are_compared_by_value() {
        let a = vec![String::from("x"), String::from("y")];
        let b = vec![String::from("x"), String::from("z")];

        assert_eq!(
            HAMMING.calculate(Some(a.as_slice()), Some(b.as_slice())).unwrap(),
            1.0
        );
    }
}

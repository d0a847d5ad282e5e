//! Distance strategies between sequences.
//!
//! A strategy is a stateless algorithm that turns two sequences into a single non-negative
//! number. Callers hold a `&dyn DistanceStrategy` (usually one of the pre-built [LCS] and
//! [HAMMING] instances) and never depend on the concrete algorithm.
//!
//! ```
//! use seqdist::distance_strategy::{HAMMING, LCS};
//!
//! assert_eq!(LCS.calculate_text(Some("ab"), Some("abc")).unwrap(), 2.0);
//! assert_eq!(HAMMING.calculate_text(Some("foo"), Some("bar")).unwrap(), 3.0);
//! ```

use std::{fmt, str};

use dyn_clone::DynClone;

use crate::error::{self, DistanceError};

pub mod hamming;
pub mod lcs;

pub use hamming::Hamming;
pub use lcs::Lcs;

/// The element equality oracle handed to [DistanceStrategy::measure].
///
/// `eq(i, j)` is [true] when the `i`-th element of the first sequence equals the `j`-th element
/// of the second sequence.
pub type ElementEq<'a> = dyn Fn(usize, usize) -> bool + 'a;

/// An algorithm measuring the distance between two sequences.
///
/// Implementations hold no mutable state, so a single instance may be shared between threads
/// and called concurrently.
#[typetag::serde(tag = "kind")]
pub trait DistanceStrategy: DynClone + Send + Sync {
    /// The name of the strategy.
    fn name(&self) -> &str;

    /// Measure the distance between two sequences, given their lengths and an element equality
    /// oracle.
    ///
    /// This is the type-erased core of [calculate](Self::calculate); it assumes both sequences
    /// are present.
    ///
    /// # Arguments
    /// * `len_a` - The length of the first sequence.
    /// * `len_b` - The length of the second sequence.
    /// * `eq` - The element equality oracle (see [ElementEq]).
    fn measure(&self, len_a: usize, len_b: usize, eq: &ElementEq) -> Result<f64, DistanceError>;
}

dyn_clone::clone_trait_object!(DistanceStrategy);

impl<'s> dyn DistanceStrategy + 's {
    /// Calculate the distance between two sequences.
    ///
    /// Elements are compared with [PartialEq]. Both sequences must be present; an absent one
    /// results in an [ErrorKind::NullArgument](crate::error::ErrorKind::NullArgument) error,
    /// raised before any computation.
    ///
    /// # Arguments
    /// * `a` - The first sequence.
    /// * `b` - The second sequence.
    pub fn calculate<E: PartialEq>(
        &self,
        a: Option<&[E]>,
        b: Option<&[E]>,
    ) -> Result<f64, DistanceError> {
        let a = error::require(a, "a")?;
        let b = error::require(b, "b")?;

        self.measure(a.len(), b.len(), &|i, j| a[i] == b[j])
    }

    /// Calculate the distance between two texts, seen as sequences of Unicode scalar values.
    ///
    /// # Arguments
    /// * `a` - The first text.
    /// * `b` - The second text.
    pub fn calculate_text(&self, a: Option<&str>, b: Option<&str>) -> Result<f64, DistanceError> {
        let a: Vec<char> = error::require(a, "a")?.chars().collect();
        let b: Vec<char> = error::require(b, "b")?.chars().collect();

        self.calculate(Some(a.as_slice()), Some(b.as_slice()))
    }
}

impl<'s> fmt::Display for dyn DistanceStrategy + 's {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The longest-common-subsequence strategy.
pub static LCS: &dyn DistanceStrategy = &Lcs {};
/// The Hamming strategy.
pub static HAMMING: &dyn DistanceStrategy = &Hamming {};

/// Get all the pre-built strategies.
pub fn all() -> [&'static dyn DistanceStrategy; 2] {
    [LCS, HAMMING]
}

/// Get a strategy by name.
///
/// # Arguments
/// * `name` - The name of the strategy (see [DistanceStrategy::name]).
pub fn from_name(name: &str) -> Result<Box<dyn DistanceStrategy>, DistanceError> {
    all()
        .into_iter()
        .find(|strategy| strategy.name() == name)
        .map(dyn_clone::clone_box)
        .ok_or_else(|| {
            error!(
                "invalid distance strategy '{}' (expected one of: {}).",
                name,
                all()
                    .map(|strategy| strategy.name().to_string())
                    .join(", ")
            )
        })
}

impl str::FromStr for Box<dyn DistanceStrategy> {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::error::ErrorKind;

    fn random_sequences(rng: &mut StdRng, count: usize) -> Vec<Vec<u8>> {
        (0..count)
            .map(|_| {
                let len = rng.random_range(0..24);
                (0..len).map(|_| rng.random_range(b'a'..=b'd')).collect()
            })
            .collect()
    }

    #[test]
    fn lcs_symmetry_identity_and_bounds() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let sequences = random_sequences(&mut rng, 40);

        for a in &sequences {
            let a = a.as_slice();
            assert_eq!(LCS.calculate(Some(a), Some(a)).unwrap(), a.len() as f64);
            assert_eq!(LCS.calculate(Some(a), Some(&[][..])).unwrap(), 0.0);
            assert_eq!(LCS.calculate(Some(&[][..]), Some(a)).unwrap(), 0.0);

            for b in &sequences {
                let b = b.as_slice();
                let ab = LCS.calculate(Some(a), Some(b)).unwrap();
                let ba = LCS.calculate(Some(b), Some(a)).unwrap();

                assert_eq!(ab, ba);
                assert!(ab >= 0.0);
                assert!(ab <= a.len().min(b.len()) as f64);
                assert_eq!(ab.fract(), 0.0);
            }
        }
    }

    #[test]
    fn hamming_symmetry_and_identity() {
        let mut rng = StdRng::seed_from_u64(0xd15c);

        for _ in 0..40 {
            let len = rng.random_range(0..32);
            let a: Vec<u8> = (0..len).map(|_| rng.random_range(0..3)).collect();
            let b: Vec<u8> = (0..len).map(|_| rng.random_range(0..3)).collect();

            let (a, b) = (a.as_slice(), b.as_slice());
            assert_eq!(HAMMING.calculate(Some(a), Some(a)).unwrap(), 0.0);

            let ab = HAMMING.calculate(Some(a), Some(b)).unwrap();
            assert_eq!(ab, HAMMING.calculate(Some(b), Some(a)).unwrap());
            assert!(ab <= len as f64);
        }
    }

    #[test]
    fn absent_sequences_are_rejected() {
        for strategy in all() {
            let err = strategy.calculate(None, Some(&[1, 2][..])).unwrap_err();
            assert_eq!(err.kind, ErrorKind::NullArgument);

            let err = strategy.calculate(Some(&[1, 2][..]), None).unwrap_err();
            assert_eq!(err.kind, ErrorKind::NullArgument);

            let err = strategy.calculate_text(None, None).unwrap_err();
            assert_eq!(err.kind, ErrorKind::NullArgument);
        }
    }

    #[test]
    fn absent_check_precedes_length_check() {
        let err = HAMMING.calculate_text(Some("ab"), None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NullArgument);
    }

    #[test]
    fn text_is_compared_by_scalar_values() {
        assert_eq!(LCS.calculate_text(Some("héllo"), Some("hello")).unwrap(), 4.0);
        assert_eq!(HAMMING.calculate_text(Some("héllo"), Some("hello")).unwrap(), 1.0);
    }

    #[test]
    fn strategies_by_name() {
        assert_eq!(from_name("lcs").unwrap().name(), "lcs");
        assert_eq!(from_name("hamming").unwrap().name(), "hamming");
        assert_eq!(
            "hamming".parse::<Box<dyn DistanceStrategy>>().unwrap().to_string(),
            "hamming"
        );

        let Err(err) = from_name("levenshtein") else {
            panic!("'levenshtein' should not be a known strategy.");
        };
        assert_eq!(err.kind, ErrorKind::Invalid);
        assert!(err.message.contains("lcs, hamming"));
    }

    #[test]
    fn shared_between_threads() {
        let expected = LCS
            .calculate_text(
                Some("The quick brown fox jumps over the lazy dog"),
                Some("The five boxing wizards jump quickly"),
            )
            .unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        LCS.calculate_text(
                            Some("The quick brown fox jumps over the lazy dog"),
                            Some("The five boxing wizards jump quickly"),
                        )
                    })
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), expected);
            }
        });
    }
}

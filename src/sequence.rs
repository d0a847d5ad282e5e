//! Turning texts into sequences.
//!
//! Distance strategies work on any sequence of comparable elements; when the inputs are texts,
//! the [Unit] decides what the elements are.

use std::{fmt, str};

use serde::{Deserialize, Serialize};

use crate::{distance_strategy::DistanceStrategy, error::DistanceError};

/// The unit in which a text is split before being compared.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// Raw UTF-8 bytes.
    Bytes,
    /// Lines, without their line terminators.
    Lines,
}

impl Unit {
    /// Get the length of a text, in this unit.
    pub fn len(&self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Bytes => text.len(),
            Self::Lines => text.lines().count(),
        }
    }

    /// Measure the distance between two texts with the given strategy.
    ///
    /// # Arguments
    /// * `strategy` - The distance strategy to use.
    /// * `a` - The first text.
    /// * `b` - The second text.
    pub fn measure(
        &self,
        strategy: &dyn DistanceStrategy,
        a: &str,
        b: &str,
    ) -> Result<f64, DistanceError> {
        match self {
            Self::Chars => strategy.calculate_text(Some(a), Some(b)),
            Self::Bytes => strategy.calculate(Some(a.as_bytes()), Some(b.as_bytes())),
            Self::Lines => {
                let a: Vec<&str> = a.lines().collect();
                let b: Vec<&str> = b.lines().collect();

                strategy.calculate(Some(a.as_slice()), Some(b.as_slice()))
            }
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Chars => "chars",
                Self::Bytes => "bytes",
                Self::Lines => "lines",
            }
        )
    }
}

impl str::FromStr for Unit {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chars" => Ok(Self::Chars),
            "bytes" => Ok(Self::Bytes),
            "lines" => Ok(Self::Lines),
            unknown => fail!("invalid unit '{}'.", unknown),
        }
    }
}

//! Board generation seeds.

use std::str::FromStr;

use derive_more::{Display, Error};
use rand::RngExt as _;

/// A board generation seed in the range 0-9999.
///
/// A fixed seed makes board generation fully reproducible: the same seed
/// always produces the same grid. Seeds outside the range are rejected at
/// construction, so a `BoardSeed` held anywhere in the system is valid by
/// type.
///
/// # Examples
///
/// ```
/// use wordtrace_generator::{BoardSeed, SeedError};
///
/// let seed = BoardSeed::new(42)?;
/// assert_eq!(seed.value(), 42);
///
/// // Seeds also parse from strings, for CLI input
/// let parsed: BoardSeed = "42".parse()?;
/// assert_eq!(parsed, seed);
///
/// assert_eq!(BoardSeed::new(10_000), Err(SeedError::OutOfRange));
/// # Ok::<(), SeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct BoardSeed(u16);

impl BoardSeed {
    /// The smallest valid seed value.
    pub const MIN: u16 = 0;
    /// The largest valid seed value.
    pub const MAX: u16 = 9999;

    /// Creates a seed from an integer value.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::OutOfRange`] if `value` exceeds [`Self::MAX`].
    pub fn new(value: u16) -> Result<Self, SeedError> {
        if value > Self::MAX {
            return Err(SeedError::OutOfRange);
        }
        Ok(Self(value))
    }

    /// Draws a seed from system entropy.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random_range(Self::MIN..=Self::MAX))
    }

    /// Returns the seed's integer value.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for BoardSeed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u16 = s.trim().parse().map_err(|_| SeedError::NotAnInteger)?;
        Self::new(value)
    }
}

/// An error constructing a [`BoardSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SeedError {
    /// The input was not a base-10 integer.
    #[display("seed must be a number")]
    NotAnInteger,
    /// The integer was outside the supported range.
    #[display("seed must be within {} and {}", BoardSeed::MIN, BoardSeed::MAX)]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_full_range() {
        assert_eq!(BoardSeed::new(0).unwrap().value(), 0);
        assert_eq!(BoardSeed::new(9999).unwrap().value(), 9999);
        assert_eq!(BoardSeed::new(10_000), Err(SeedError::OutOfRange));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0".parse::<BoardSeed>().unwrap().value(), 0);
        assert_eq!(" 1234 ".parse::<BoardSeed>().unwrap().value(), 1234);
        assert_eq!("-1".parse::<BoardSeed>(), Err(SeedError::NotAnInteger));
        assert_eq!("twelve".parse::<BoardSeed>(), Err(SeedError::NotAnInteger));
        assert_eq!("10000".parse::<BoardSeed>(), Err(SeedError::OutOfRange));
        // Larger than u16 still reports a plain parse failure
        assert_eq!("99999".parse::<BoardSeed>(), Err(SeedError::NotAnInteger));
    }

    #[test]
    fn test_random_is_in_range() {
        for _ in 0..100 {
            let seed = BoardSeed::random();
            assert!(seed.value() <= BoardSeed::MAX);
        }
    }

    #[test]
    fn test_display_is_plain_integer() {
        assert_eq!(BoardSeed::new(7).unwrap().to_string(), "7");
    }
}

//! Uppercase letter representation.

use std::fmt::{self, Display};

/// An uppercase ASCII letter in the range A-Z.
///
/// This enum provides type-safe representation of board letters, preventing
/// invalid cell values at compile time. The discriminant of each variant is
/// the letter's ASCII code.
///
/// # Examples
///
/// ```
/// use wordtrace_core::Letter;
///
/// let letter = Letter::from_char('Q').unwrap();
/// assert_eq!(letter, Letter::Q);
/// assert_eq!(letter.as_char(), 'Q');
///
/// // Lowercase and non-letters are rejected
/// assert_eq!(Letter::from_char('q'), None);
/// assert_eq!(Letter::from_char('!'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Letter {
    A = b'A',
    B = b'B',
    C = b'C',
    D = b'D',
    E = b'E',
    F = b'F',
    G = b'G',
    H = b'H',
    I = b'I',
    J = b'J',
    K = b'K',
    L = b'L',
    M = b'M',
    N = b'N',
    O = b'O',
    P = b'P',
    Q = b'Q',
    R = b'R',
    S = b'S',
    T = b'T',
    U = b'U',
    V = b'V',
    W = b'W',
    X = b'X',
    Y = b'Y',
    Z = b'Z',
}

impl Letter {
    /// Array containing all letters from A to Z, in alphabetical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtrace_core::Letter;
    ///
    /// assert_eq!(Letter::ALL.len(), 26);
    /// assert_eq!(Letter::ALL[0], Letter::A);
    /// assert_eq!(Letter::ALL[25], Letter::Z);
    /// ```
    pub const ALL: [Self; 26] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Creates a letter from a character, returning `None` for anything
    /// outside A-Z.
    ///
    /// No case folding is performed; lowercase input is rejected.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            let index = u8::try_from(c).ok()? - b'A';
            Some(Self::ALL[usize::from(index)])
        } else {
            None
        }
    }

    /// Returns the letter as a character.
    #[must_use]
    pub fn as_char(self) -> char {
        char::from(self as u8)
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_all_is_alphabetical() {
        for (i, letter) in Letter::ALL.into_iter().enumerate() {
            assert_eq!(letter as u8, b'A' + u8::try_from(i).unwrap());
        }
    }

    #[test]
    fn test_from_char_rejects_non_uppercase() {
        assert_eq!(Letter::from_char('a'), None);
        assert_eq!(Letter::from_char('0'), None);
        assert_eq!(Letter::from_char(' '), None);
        assert_eq!(Letter::from_char('É'), None);
    }

    #[test]
    fn test_display_matches_char() {
        assert_eq!(Letter::K.to_string(), "K");
    }

    proptest! {
        #[test]
        fn test_char_round_trip(c in proptest::char::range('A', 'Z')) {
            let letter = Letter::from_char(c).unwrap();
            prop_assert_eq!(letter.as_char(), c);
            prop_assert_eq!(char::from(letter), c);
        }
    }
}

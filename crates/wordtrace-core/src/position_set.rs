//! Sets of board positions.

use crate::Position;

/// A set of board positions backed by a 16-bit mask.
///
/// One bit per cell in row-major order. Used as the visited overlay during
/// path search and as the mark set when drawing a board with a traced path
/// highlighted.
///
/// # Examples
///
/// ```
/// use wordtrace_core::{Position, PositionSet};
///
/// let mut set = PositionSet::EMPTY;
/// set.insert(Position::new(0, 0));
/// set.insert(Position::new(1, 0));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Position::new(1, 0)));
///
/// set.remove(Position::new(1, 0));
/// assert!(!set.contains(Position::new(1, 0)));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSet(u16);

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates a set containing a single position.
    #[must_use]
    pub fn from_elem(pos: Position) -> Self {
        let mut set = Self::EMPTY;
        set.insert(pos);
        set
    }

    /// Adds a position to the set.
    #[inline]
    pub fn insert(&mut self, pos: Position) {
        self.0 |= Self::bit(pos);
    }

    /// Removes a position from the set.
    #[inline]
    pub fn remove(&mut self, pos: Position) {
        self.0 &= !Self::bit(pos);
    }

    /// Returns whether the set contains a position.
    #[must_use]
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        self.0 & Self::bit(pos) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the contained positions in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |pos| self.contains(*pos))
    }

    #[inline]
    fn bit(pos: Position) -> u16 {
        1 << pos.index()
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Position>,
    {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

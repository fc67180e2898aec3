//! Traced paths through the board.

use wordtrace_core::{Position, PositionSet};

/// The ordered cell sequence of a successful word trace.
///
/// Cell `k` holds the `k`-th character of the traced word, so the length
/// always equals the word's character count. Consecutive cells are
/// orthogonally adjacent and no cell repeats.
///
/// # Examples
///
/// ```
/// use wordtrace_core::LetterGrid;
/// use wordtrace_search::PathSearcher;
///
/// let grid: LetterGrid = "CATX QWER ZXCV BNML".parse()?;
/// let path = PathSearcher::new().find_path(&grid, "CAT").unwrap();
///
/// assert_eq!(path.len(), 3);
/// // Mark the traced cells when drawing the board
/// let art = grid.display_marked(path.marks()).to_string();
/// assert!(art.contains("|<C>| |<A>| |<T>| | X |"));
/// # Ok::<(), wordtrace_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracePath(Vec<Position>);

impl TracePath {
    pub(crate) fn new(positions: Vec<Position>) -> Self {
        debug_assert!(!positions.is_empty());
        Self(positions)
    }

    /// Returns the traced cells in word order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Returns the number of traced cells (equal to the word length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the path is empty. Successful traces never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the traced cells as a set, for display marking.
    #[must_use]
    pub fn marks(&self) -> PositionSet {
        self.0.iter().copied().collect()
    }
}

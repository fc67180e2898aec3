//! The 4×4 letter board.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{Letter, Position, PositionSet, SIDE};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 16;

/// A 4×4 board of uppercase letters.
///
/// The board is a fixed 16-cell matrix; every cell always holds exactly one
/// letter. The grid itself is immutable once built: searches track their own
/// visited state in a [`PositionSet`] overlay instead of altering cells, so a
/// grid observed after any number of searches is byte-for-byte the grid that
/// was generated.
///
/// # Examples
///
/// Fixture grids parse from a 16-letter string, whitespace ignored:
///
/// ```
/// use wordtrace_core::{Letter, LetterGrid, Position};
///
/// let grid: LetterGrid = "
///     ABCD
///     EFGH
///     IJKL
///     MNOP
/// "
/// .parse()?;
///
/// assert_eq!(grid[Position::new(3, 0)], Letter::D);
/// assert_eq!(grid[Position::new(0, 3)], Letter::M);
/// # Ok::<(), wordtrace_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid([Letter; CELL_COUNT]);

impl LetterGrid {
    /// Creates a grid from its cells in row-major order.
    #[must_use]
    pub fn from_cells(cells: [Letter; CELL_COUNT]) -> Self {
        Self(cells)
    }

    /// Returns the letter at the given position.
    #[must_use]
    pub fn get(&self, pos: Position) -> Letter {
        self.0[pos.index()]
    }

    /// Iterates over all cells in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = Letter> {
        self.0.into_iter()
    }

    /// Returns a display adapter that draws the board with the given cells
    /// bracketed as `<A>`, the decoration used to show a traced path.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtrace_core::{LetterGrid, Position, PositionSet};
    ///
    /// let grid: LetterGrid = "CATX XXXX XXXX XXXX".parse()?;
    /// let marks = PositionSet::from_elem(Position::new(0, 0));
    /// let art = grid.display_marked(marks).to_string();
    /// assert!(art.contains("|<C>|"));
    /// assert!(art.contains("| A |"));
    /// # Ok::<(), wordtrace_core::GridParseError>(())
    /// ```
    #[must_use]
    pub fn display_marked(&self, marks: PositionSet) -> MarkedGrid<'_> {
        MarkedGrid { grid: self, marks }
    }
}

impl Index<Position> for LetterGrid {
    type Output = Letter;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.0[pos.index()]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_marked(PositionSet::EMPTY).fmt(f)
    }
}

/// Display adapter for a [`LetterGrid`] with a set of bracketed cells.
///
/// Created by [`LetterGrid::display_marked`]. Unmarked cells render as
/// `| A |`, marked cells as `|<A>|`. Callers must not depend on the exact
/// textual form of the marker beyond it differing from a plain cell.
#[derive(Debug)]
pub struct MarkedGrid<'a> {
    grid: &'a LetterGrid,
    marks: PositionSet,
}

impl Display for MarkedGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "+---+ +---+ +---+ +---+";
        for y in 0..SIDE {
            writeln!(f, "{RULE}")?;
            for x in 0..SIDE {
                let pos = Position::new(x, y);
                let letter = self.grid[pos];
                if x > 0 {
                    write!(f, " ")?;
                }
                if self.marks.contains(pos) {
                    write!(f, "|<{letter}>|")?;
                } else {
                    write!(f, "| {letter} |")?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        Ok(())
    }
}

/// An error parsing a [`LetterGrid`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, DeriveDisplay, Error)]
pub enum GridParseError {
    /// The string contained a character that is not an uppercase letter
    /// (whitespace excepted).
    #[display("unsupported grid character: {_0:?}")]
    UnsupportedCharacter(#[error(not(source))] char),
    /// The string did not contain exactly 16 letters.
    #[display("expected {CELL_COUNT} letters, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for LetterGrid {
    type Err = GridParseError;

    /// Parses a grid from 16 uppercase letters in row-major order.
    /// Whitespace (including newlines) is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Letter::A; CELL_COUNT];
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let letter =
                Letter::from_char(c).ok_or(GridParseError::UnsupportedCharacter(c))?;
            if count == CELL_COUNT {
                return Err(GridParseError::WrongCellCount(count + 1));
            }
            cells[count] = letter;
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(GridParseError::WrongCellCount(count));
        }
        Ok(Self(cells))
    }
}

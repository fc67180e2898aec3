//! Board position coordinates.

/// Board side length in cells.
pub const SIDE: u8 = 4;

/// A cell position on the 4×4 board.
///
/// `x` is the column (0-3, left to right) and `y` is the row (0-3, top to
/// bottom).
///
/// # Examples
///
/// ```
/// use wordtrace_core::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 1);
/// assert_eq!(pos.index(), 6); // row 1, column 2 -> 1*4 + 2
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all board positions in row-major order
    /// (row 0 column 0..3, then row 1, ...).
    pub const ALL: [Self; 16] = {
        let mut all = [Self { x: 0, y: 0 }; 16];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 16 {
            all[i] = Self {
                x: (i % 4) as u8,
                y: (i / 4) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column and row coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-3.
    #[must_use]
    pub fn new(x: u8, y: u8) -> Self {
        assert!(x < SIDE && y < SIDE, "position out of bounds: ({x}, {y})");
        Self { x, y }
    }

    /// Returns the column coordinate (0-3).
    #[must_use]
    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-3).
    #[must_use]
    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-15).
    #[must_use]
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.y) * usize::from(SIDE) + usize::from(self.x)
    }

    /// Returns the orthogonal neighbors of this position that lie on the
    /// board, in the fixed exploration order: right, down, left, up.
    ///
    /// This order determines which of several valid traces the search finds
    /// first, so it is part of the observable search behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtrace_core::Position;
    ///
    /// let corner = Position::new(0, 0);
    /// let neighbors: Vec<_> = corner.neighbors().collect();
    /// assert_eq!(neighbors, [Position::new(1, 0), Position::new(0, 1)]);
    /// ```
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        const STEPS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
        STEPS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Returns whether `other` is exactly one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx + dy == 1
    }

    fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < SIDE && y < SIDE).then_some(Self { x, y })
    }
}

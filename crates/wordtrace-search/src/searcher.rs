//! Backtracking path search.

use wordtrace_core::{LetterGrid, Position, PositionSet};

use crate::TracePath;

/// Exhaustive backtracking search for a word traced through adjacent cells.
///
/// Every one of the 16 cells is tried as a start in row-major order; from
/// each matching cell the four orthogonal neighbors are explored in the
/// fixed order right, down, left, up, with cells on the current path
/// excluded by a visited overlay. The first successful trace wins — there is
/// no preference for shorter or lexicographically smaller paths, only a
/// deterministic one.
///
/// Words are compared character-by-character against the grid, literally and
/// case-sensitively. A word containing a character no cell holds (lowercase,
/// digits, anything outside A-Z) is an ordinary unsuccessful query, not an
/// error, and the empty word has no trace. A word longer than 16 characters
/// can never succeed, since a trace cannot revisit cells; the search still
/// terminates promptly because the visited overlay bounds the recursion.
///
/// The grid is never mutated. After any search, successful or not, the board
/// is exactly as it was before the call.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathSearcher;

impl PathSearcher {
    /// Creates a new searcher.
    #[must_use]
    pub const fn new() -> Self {
        PathSearcher
    }

    /// Searches for a trace of `word` and returns its path, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtrace_core::{LetterGrid, Position};
    /// use wordtrace_search::PathSearcher;
    ///
    /// let grid: LetterGrid = "
    ///     ABXX
    ///     XCXX
    ///     XXXX
    ///     XXXX
    /// "
    /// .parse()?;
    ///
    /// let path = PathSearcher::new().find_path(&grid, "ABC").unwrap();
    /// assert_eq!(
    ///     path.positions(),
    ///     [Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)]
    /// );
    /// # Ok::<(), wordtrace_core::GridParseError>(())
    /// ```
    #[must_use]
    pub fn find_path(&self, grid: &LetterGrid, word: &str) -> Option<TracePath> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return None;
        }
        let mut search = Search {
            grid,
            letters: &letters,
            visited: PositionSet::EMPTY,
            path: Vec::with_capacity(letters.len()),
        };
        for start in Position::ALL {
            if search.trace_from(0, start) {
                return Some(TracePath::new(search.path));
            }
        }
        None
    }

    /// Returns whether `word` can be traced on the grid.
    #[must_use]
    pub fn exists(&self, grid: &LetterGrid, word: &str) -> bool {
        self.find_path(grid, word).is_some()
    }
}

/// State of one search call. Fully unwound on backtrack: when every start
/// has failed, both the overlay and the path are empty again.
struct Search<'a> {
    grid: &'a LetterGrid,
    letters: &'a [char],
    visited: PositionSet,
    path: Vec<Position>,
}

impl Search<'_> {
    fn trace_from(&mut self, k: usize, pos: Position) -> bool {
        if self.visited.contains(pos) || self.grid[pos].as_char() != self.letters[k] {
            return false;
        }
        self.path.push(pos);
        if k + 1 == self.letters.len() {
            return true;
        }
        self.visited.insert(pos);
        for neighbor in pos.neighbors() {
            if self.trace_from(k + 1, neighbor) {
                return true;
            }
        }
        self.visited.remove(pos);
        self.path.pop();
        false
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wordtrace_core::Letter;

    use super::*;

    fn grid(s: &str) -> LetterGrid {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_letter_word() {
        let grid = grid("ABCD EFGH IJKL MNOP");
        let searcher = PathSearcher::new();
        for (i, letter) in Letter::ALL[..16].iter().enumerate() {
            let path = searcher
                .find_path(&grid, &letter.to_string())
                .expect("every board letter is traceable");
            assert_eq!(path.positions(), [Position::ALL[i]]);
        }
        assert!(!searcher.exists(&grid, "Q"));
        assert!(!searcher.exists(&grid, "Z"));
    }

    #[test]
    fn test_word_along_a_row() {
        let grid = grid("ABCD EFGH IJKL MNOP");
        let path = PathSearcher::new().find_path(&grid, "ABCD").unwrap();
        assert_eq!(
            path.positions(),
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(3, 0),
            ]
        );
    }

    #[test]
    fn test_word_with_turns() {
        let grid = grid("ABCD EFGH IJKL MNOP");
        // A -> B -> F -> E winds right, down, left
        let path = PathSearcher::new().find_path(&grid, "ABFE").unwrap();
        assert_eq!(
            path.positions(),
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_right_is_preferred_over_down() {
        // B is both right of and below A; the fixed neighbor order picks right.
        let grid = grid("ABXX BXXX XXXX XXXX");
        let path = PathSearcher::new().find_path(&grid, "AB").unwrap();
        assert_eq!(path.positions(), [Position::new(0, 0), Position::new(1, 0)]);
    }

    #[test]
    fn test_first_start_in_row_major_order_wins() {
        // Two disjoint AB traces; the one starting at (0, 0) is found first.
        let grid = grid("ABXX XXXX XXAB XXXX");
        let path = PathSearcher::new().find_path(&grid, "AB").unwrap();
        assert_eq!(path.positions(), [Position::new(0, 0), Position::new(1, 0)]);
    }

    #[test]
    fn test_cells_cannot_be_reused() {
        // The only A and the only B are adjacent, but ABA needs A twice.
        let grid = grid("ABXX XXXX XXXX XXXX");
        assert!(!PathSearcher::new().exists(&grid, "ABA"));
    }

    #[test]
    fn test_failed_start_unwinds_its_visited_cells() {
        // The start at (0, 0) walks A -> A and dead-ends. The winning trace
        // starts at (1, 0) and runs back through (0, 0), which only works if
        // the failed attempt released every cell it had marked.
        let grid = grid("AAXX BXXX CXXX XXXX");
        let path = PathSearcher::new().find_path(&grid, "AABC").unwrap();
        assert_eq!(
            path.positions(),
            [
                Position::new(1, 0),
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
            ]
        );
    }

    #[test]
    fn test_no_diagonal_adjacency() {
        let grid = grid("AXXX XBXX XXXX XXXX");
        assert!(!PathSearcher::new().exists(&grid, "AB"));
    }

    #[test]
    fn test_word_longer_than_board_fails() {
        let grid = grid("AAAA AAAA AAAA AAAA");
        let word: String = "A".repeat(17);
        assert!(!PathSearcher::new().exists(&grid, &word));
    }

    #[test]
    fn test_full_board_word_succeeds() {
        // Boustrophedon path covering all 16 cells.
        let grid = grid("ABCD HGFE IJKL PONM");
        let path = PathSearcher::new()
            .find_path(&grid, "ABCDEFGHIJKLMNOP")
            .unwrap();
        assert_eq!(path.len(), 16);
        assert_eq!(path.marks().len(), 16);
    }

    #[test]
    fn test_empty_word_has_no_trace() {
        let grid = grid("ABCD EFGH IJKL MNOP");
        assert!(PathSearcher::new().find_path(&grid, "").is_none());
    }

    #[test]
    fn test_characters_outside_the_alphabet_never_match() {
        let grid = grid("ABCD EFGH IJKL MNOP");
        let searcher = PathSearcher::new();
        assert!(!searcher.exists(&grid, "a"));
        assert!(!searcher.exists(&grid, "A1"));
        assert!(!searcher.exists(&grid, "A B"));
    }

    #[test]
    fn test_search_leaves_grid_unchanged() {
        let before = grid("ABCD EFGH IJKL MNOP");
        let after = before.clone();
        let searcher = PathSearcher::new();
        assert!(!searcher.exists(&after, "ABDC"));
        assert!(searcher.exists(&after, "ABCD"));
        assert_eq!(before, after);
    }

    fn assert_path_is_valid(grid: &LetterGrid, word: &str, path: &TracePath) {
        let letters: Vec<char> = word.chars().collect();
        assert_eq!(path.len(), letters.len());
        for (pos, c) in path.positions().iter().zip(&letters) {
            assert_eq!(grid[*pos].as_char(), *c);
        }
        for pair in path.positions().windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
        assert_eq!(path.marks().len(), path.len(), "a trace never repeats a cell");
    }

    proptest! {
        // Small alphabet so words frequently do trace.
        #[test]
        fn test_found_paths_are_valid(
            cells in "[A-D]{16}",
            word in "[A-D]{1,8}",
        ) {
            let grid: LetterGrid = cells.parse().unwrap();
            let searcher = PathSearcher::new();
            let path = searcher.find_path(&grid, &word);
            prop_assert_eq!(searcher.exists(&grid, &word), path.is_some());
            if let Some(path) = path {
                assert_path_is_valid(&grid, &word, &path);
            }
        }

        #[test]
        fn test_single_cell_word_found_iff_letter_present(
            cells in "[A-D]{16}",
            c in proptest::char::range('A', 'E'),
        ) {
            let grid: LetterGrid = cells.parse().unwrap();
            let found = PathSearcher::new().exists(&grid, &c.to_string());
            let present = grid.letters().any(|letter| letter.as_char() == c);
            prop_assert_eq!(found, present);
        }
    }
}

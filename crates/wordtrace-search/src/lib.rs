//! Path search over 4×4 letter boards.
//!
//! [`PathSearcher`] decides whether a word can be traced through
//! orthogonally adjacent cells of a [`LetterGrid`] without reusing a cell,
//! using exhaustive backtracking DFS. A successful search reports the traced
//! cells as a [`TracePath`]; the grid itself is never mutated, so a failed
//! search trivially leaves the board exactly as it found it.
//!
//! The search is deterministic: start cells are tried in row-major order and
//! neighbors are explored right, down, left, up, so for a given grid and word
//! the same path is always found first.
//!
//! [`LetterGrid`]: wordtrace_core::LetterGrid
//!
//! # Examples
//!
//! ```
//! use wordtrace_core::LetterGrid;
//! use wordtrace_search::PathSearcher;
//!
//! let grid: LetterGrid = "
//!     CATX
//!     QWER
//!     ZXCV
//!     BNML
//! "
//! .parse()?;
//!
//! let searcher = PathSearcher::new();
//! assert!(searcher.exists(&grid, "CAT"));
//! assert!(!searcher.exists(&grid, "DOG"));
//! # Ok::<(), wordtrace_core::GridParseError>(())
//! ```

pub use self::{searcher::PathSearcher, trace::TracePath};

mod searcher;
mod trace;

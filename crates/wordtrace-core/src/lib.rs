//! Core data structures for the word-trace puzzle.
//!
//! This crate provides the board model shared by generation, search, and game
//! session components:
//!
//! - [`Letter`]: type-safe representation of the uppercase letters A-Z
//! - [`Position`]: a cell coordinate on the 4×4 board
//! - [`PositionSet`]: a set of board cells backed by a 16-bit mask
//! - [`LetterGrid`]: the 4×4 board itself
//! - [`is_palindrome`]: the palindrome check applied to guesses
//!
//! # Examples
//!
//! ```
//! use wordtrace_core::{LetterGrid, Letter, Position, is_palindrome};
//!
//! let grid: LetterGrid = "
//!     RACE
//!     XCAR
//!     YZQW
//!     KLMN
//! "
//! .parse()?;
//!
//! assert_eq!(grid[Position::new(0, 0)], Letter::R);
//! assert!(is_palindrome("RACECAR"));
//! # Ok::<(), wordtrace_core::GridParseError>(())
//! ```

pub mod grid;
pub mod letter;
pub mod palindrome;
pub mod position;
pub mod position_set;

pub use self::{
    grid::{GridParseError, LetterGrid, MarkedGrid},
    letter::Letter,
    palindrome::is_palindrome,
    position::{Position, SIDE},
    position_set::PositionSet,
};

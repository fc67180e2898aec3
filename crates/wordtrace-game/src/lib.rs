//! Game session for the word-trace puzzle.
//!
//! A [`Game`] owns one generated board and answers guesses: a guess is
//! uppercased, searched for as a trace through adjacent cells, and checked
//! for being a palindrome. Guessing never changes the board; replacing it is
//! a separate, explicit operation ([`Game::regenerate`]).
//!
//! # Examples
//!
//! ```
//! use wordtrace_game::Game;
//! use wordtrace_generator::BoardGenerator;
//!
//! let generator = BoardGenerator::new();
//! let mut game = Game::new(generator.generate());
//!
//! let outcome = game.guess("racecar");
//! assert_eq!(outcome.word(), "RACECAR");
//! assert!(outcome.is_palindrome()); // regardless of whether it traced
//!
//! // A new board is an explicit request, never a side effect of guessing
//! game.regenerate(&generator);
//! ```

pub use self::{game::Game, outcome::GuessOutcome};

mod game;
mod outcome;

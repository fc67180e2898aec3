//! Guess results.

use wordtrace_core::PositionSet;
use wordtrace_search::TracePath;

/// The result of one guess against the board.
///
/// Carries the normalized word, the traced path when the word was found, and
/// whether the word is a palindrome. "Not found" is an ordinary outcome, not
/// an error: any string is a legal query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    word: String,
    path: Option<TracePath>,
    palindrome: bool,
}

impl GuessOutcome {
    pub(crate) fn new(word: String, path: Option<TracePath>, palindrome: bool) -> Self {
        Self {
            word,
            path,
            palindrome,
        }
    }

    /// Returns the guessed word after normalization (uppercased).
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns whether the word was traced on the board.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Returns the traced path, if the word was found.
    #[must_use]
    pub fn path(&self) -> Option<&TracePath> {
        self.path.as_ref()
    }

    /// Returns whether the normalized word is a palindrome.
    #[must_use]
    pub fn is_palindrome(&self) -> bool {
        self.palindrome
    }

    /// Returns the traced cells for display marking, empty when not found.
    #[must_use]
    pub fn marks(&self) -> PositionSet {
        self.path
            .as_ref()
            .map_or(PositionSet::EMPTY, TracePath::marks)
    }
}

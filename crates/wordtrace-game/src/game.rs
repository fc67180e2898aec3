use wordtrace_core::{LetterGrid, is_palindrome};
use wordtrace_generator::{BoardGenerator, BoardSeed, GeneratedBoard};
use wordtrace_search::PathSearcher;

use crate::GuessOutcome;

/// A word-trace game session.
///
/// Owns exactly one board at a time. Guesses are answered against the
/// current board without mutating it; the board is only ever replaced
/// wholesale by an explicit [`regenerate`](Self::regenerate) call.
///
/// A session is single-threaded by design: there is one board and no
/// interior mutability, so the borrow checker already enforces that guesses
/// and regeneration never race.
///
/// # Examples
///
/// ```
/// use wordtrace_game::Game;
/// use wordtrace_generator::{BoardGenerator, BoardSeed};
///
/// let generator = BoardGenerator::new();
/// let seed = BoardSeed::new(42)?;
/// let game = Game::new(generator.generate_with_seed(seed));
///
/// assert_eq!(game.seed(), seed);
/// println!("{}", game.grid());
/// # Ok::<(), wordtrace_generator::SeedError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: LetterGrid,
    seed: BoardSeed,
}

impl Game {
    /// Creates a session playing the given board.
    #[must_use]
    pub fn new(board: GeneratedBoard) -> Self {
        let GeneratedBoard { grid, seed } = board;
        Self { grid, seed }
    }

    /// Returns the current board.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the seed the current board was generated from.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }

    /// Answers a guess against the current board.
    ///
    /// The raw input is uppercased and otherwise taken literally: it is not
    /// trimmed, and characters outside A-Z simply never match a cell. Every
    /// input yields an outcome; there are no error cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtrace_game::Game;
    /// use wordtrace_generator::BoardGenerator;
    ///
    /// let generator = BoardGenerator::new();
    /// let game = Game::new(generator.generate());
    ///
    /// let outcome = game.guess("level");
    /// assert_eq!(outcome.word(), "LEVEL");
    /// assert!(outcome.is_palindrome());
    /// ```
    #[must_use]
    pub fn guess(&self, word: &str) -> GuessOutcome {
        let word = word.to_uppercase();
        let path = PathSearcher::new().find_path(&self.grid, &word);
        let palindrome = is_palindrome(&word);
        GuessOutcome::new(word, path, palindrome)
    }

    /// Replaces the board with a freshly generated one (random seed).
    pub fn regenerate(&mut self, generator: &BoardGenerator) {
        self.replace(generator.generate());
    }

    /// Replaces the board with the one determined by `seed`.
    pub fn regenerate_with_seed(&mut self, generator: &BoardGenerator, seed: BoardSeed) {
        self.replace(generator.generate_with_seed(seed));
    }

    fn replace(&mut self, board: GeneratedBoard) {
        let GeneratedBoard { grid, seed } = board;
        self.grid = grid;
        self.seed = seed;
    }
}

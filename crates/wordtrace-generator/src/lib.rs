//! Board generation for the word-trace puzzle.
//!
//! [`BoardGenerator`] fills a 4×4 grid with letters drawn independently and
//! uniformly from A-Z, in row-major order. Generation is driven by an owned
//! PRNG seeded per call, never by process-global random state: a
//! [`BoardSeed`] (0-9999) makes the result fully reproducible, while
//! [`BoardGenerator::generate`] draws a fresh seed from system entropy and
//! records it in the returned [`GeneratedBoard`] so even random boards can be
//! reproduced later.
//!
//! # Examples
//!
//! ```
//! use wordtrace_generator::{BoardGenerator, BoardSeed};
//!
//! let generator = BoardGenerator::new();
//!
//! // Fixed seed: identical boards
//! let seed = BoardSeed::new(7)?;
//! let a = generator.generate_with_seed(seed);
//! let b = generator.generate_with_seed(seed);
//! assert_eq!(a.grid, b.grid);
//!
//! // Random board: the seed that produced it is recorded
//! let board = generator.generate();
//! assert_eq!(generator.generate_with_seed(board.seed).grid, board.grid);
//! # Ok::<(), wordtrace_generator::SeedError>(())
//! ```

use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use wordtrace_core::{Letter, LetterGrid, Position, grid::CELL_COUNT};

pub use self::seed::{BoardSeed, SeedError};

mod seed;

/// A generated board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The filled 4×4 letter grid.
    pub grid: LetterGrid,
    /// The seed the grid was generated from.
    pub seed: BoardSeed,
}

/// Generator for 4×4 letter boards.
///
/// Stateless: every call seeds its own PRNG, so concurrent or interleaved
/// generations never influence each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoardGenerator;

impl BoardGenerator {
    /// Creates a new board generator.
    #[must_use]
    pub const fn new() -> Self {
        BoardGenerator
    }

    /// Generates a board from a seed drawn from system entropy.
    ///
    /// The drawn seed is recorded in the returned [`GeneratedBoard`], so the
    /// board can be regenerated exactly with
    /// [`generate_with_seed`](Self::generate_with_seed).
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board determined by `seed`.
    ///
    /// The same seed always yields the same grid.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut rng = Pcg64Mcg::seed_from_u64(u64::from(seed.value()));
        GeneratedBoard {
            grid: self.fill(&mut rng),
            seed,
        }
    }

    /// Fills a grid from an injected random source.
    ///
    /// All 16 cells are filled in row-major order (row 0 column 0..3, then
    /// row 1, ...), each drawn independently and uniformly from the 26
    /// uppercase letters. This is the primitive the seeded entry points are
    /// built on; it is public so callers can supply their own source.
    pub fn fill<R>(&self, rng: &mut R) -> LetterGrid
    where
        R: Rng + ?Sized,
    {
        let mut cells = [Letter::A; CELL_COUNT];
        for pos in Position::ALL {
            cells[pos.index()] = Letter::ALL[rng.random_range(0..Letter::ALL.len())];
        }
        LetterGrid::from_cells(cells)
    }
}

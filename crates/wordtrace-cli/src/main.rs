//! Terminal front end for the word-trace puzzle.
//!
//! This is a thin presentation layer over the game session: it draws the
//! board, reads guesses, and reports trace and palindrome results. All game
//! logic lives in the library crates.
//!
//! # Usage
//!
//! Play interactively on a random board:
//!
//! ```sh
//! cargo run -p wordtrace-cli
//! ```
//!
//! Play on a reproducible board:
//!
//! ```sh
//! cargo run -p wordtrace-cli -- --seed 42
//! ```
//!
//! Check a single word and exit (exit code 0 when found, 1 when not):
//!
//! ```sh
//! cargo run -p wordtrace-cli -- --seed 42 --word CAT
//! ```

use std::{
    io::{self, BufRead as _, Write as _},
    process,
};

use clap::Parser;
use wordtrace_game::{Game, GuessOutcome};
use wordtrace_generator::{BoardGenerator, BoardSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board seed (0-9999). Omit for a random board.
    #[arg(long, value_name = "SEED")]
    seed: Option<BoardSeed>,

    /// Check a single word and exit instead of playing interactively.
    #[arg(long, value_name = "WORD")]
    word: Option<String>,

    /// Generate a fresh board after every successful trace.
    #[arg(long)]
    refresh_on_win: bool,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let generator = BoardGenerator::new();
    let board = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    log::debug!("playing board from seed {}", board.seed);
    let mut game = Game::new(board);

    if let Some(word) = args.word {
        let outcome = game.guess(&word);
        report(&game, &outcome);
        process::exit(i32::from(!outcome.is_found()));
    }

    greet();
    println!("{}", game.grid());
    play(&mut game, &generator, args.refresh_on_win)
}

fn greet() {
    println!("Welcome to a simple 4 x 4 word trace game.");
    println!();
    println!("Trace a word through neighboring cells (no diagonals,");
    println!("no reusing a cell). Enter a word to guess, or press");
    println!("Ctrl-D to stop.");
    println!();
}

fn play(game: &mut Game, generator: &BoardGenerator, refresh_on_win: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "Enter word: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let outcome = game.guess(word);
        report(game, &outcome);
        if outcome.is_found() && refresh_on_win {
            game.regenerate(generator);
            log::debug!("refreshed board, new seed {}", game.seed());
            println!("{}", game.grid());
        }
    }
}

fn report(game: &Game, outcome: &GuessOutcome) {
    if outcome.is_found() {
        println!("Nice Job!");
        println!("{}", game.grid().display_marked(outcome.marks()));
    } else {
        println!("Are we looking at the same board!");
        println!("{}", game.grid());
    }
    if outcome.is_palindrome() {
        println!("The word {} is a palindrome.", outcome.word());
    } else {
        println!("The word {} is not a palindrome.", outcome.word());
    }
}

//! Benchmarks for the backtracking path search.
//!
//! The worst case for the searcher is a board of identical letters and a
//! word that forces the DFS to enumerate self-avoiding walks before failing
//! or succeeding on the last cell.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use wordtrace_core::LetterGrid;
use wordtrace_search::PathSearcher;

fn bench_worst_case_found(c: &mut Criterion) {
    // All A's with a single B reachable only at the end of a full-board walk.
    let grid: LetterGrid = "AAAA AAAA AAAA AAAB".parse().unwrap();
    let word = format!("{}B", "A".repeat(15));
    let searcher = PathSearcher::new();

    c.bench_function("find_path_full_board", |b| {
        b.iter(|| hint::black_box(searcher.find_path(&grid, hint::black_box(&word))));
    });
}

fn bench_worst_case_exhausted(c: &mut Criterion) {
    // No trace exists; the search must exhaust every start.
    let grid: LetterGrid = "AAAA AAAA AAAA AAAA".parse().unwrap();
    let word = "A".repeat(17);
    let searcher = PathSearcher::new();

    c.bench_function("find_path_exhausted", |b| {
        b.iter(|| hint::black_box(searcher.find_path(&grid, hint::black_box(&word))));
    });
}

criterion_group!(benches, bench_worst_case_found, bench_worst_case_exhausted);
criterion_main!(benches);

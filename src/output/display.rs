//! Display functions for command results
//!
//! Boards and solutions go to stdout; counts and notes go to stderr so the
//! solution list can be piped on its own.

use super::formatters::render_board;
use crate::commands::{BenchmarkResult, LetterSource, SolveConfig, SolveResult};
use crate::core::Board;
use colored::Colorize;

/// Print the board box
pub fn print_board(board: &Board) {
    println!("\n{}\n", render_board(board).bright_yellow().bold());
}

/// Line announcing where a board's letters came from
#[must_use]
pub fn status_line(source: &LetterSource, letters: &str) -> String {
    match source {
        LetterSource::UserProvided => format!("Using user-provided letters '{letters}'"),
        LetterSource::Generated | LetterSource::Fallback(_) => {
            format!("Using randomly-generated letters '{letters}'")
        }
    }
}

/// Announce a user board before the dictionary is scanned
pub fn print_user_board(board: &Board) {
    println!("{}", status_line(&LetterSource::UserProvided, &board.letters()));
    print_board(board);
}

/// Print where the letters came from, then the board
pub fn print_puzzle(result: &SolveResult) {
    let board = &result.solution.board;
    if let LetterSource::Fallback(original) = &result.source {
        eprintln!(
            "{}",
            format!("No two-word solution for '{original}', generating a new puzzle").yellow()
        );
    }
    println!("{}", status_line(&result.source, &board.letters()));
    print_board(board);
}

/// Print the result of solving a puzzle
///
/// User boards are announced by [`print_user_board`] before solving, so only
/// generated boards are printed here.
pub fn print_solve_result(result: &SolveResult, config: &SolveConfig) {
    if result.source != LetterSource::UserProvided {
        print_puzzle(result);
    }

    let solution = &result.solution;
    eprintln!("{} valid words found.", solution.valid_words);
    eprintln!("{} valid two-word pairs found.", solution.pairs.len());

    let shown = config.display_count(solution.pairs.len());
    for (i, pair) in solution.pairs.iter().take(shown).enumerate() {
        if i == 0 {
            println!("{}", pair.green().bold());
        } else {
            println!("{pair}");
        }
    }

    if shown < solution.pairs.len() {
        eprintln!(
            "{}",
            format!(
                "... {} more (use --all to show every pair)",
                solution.pairs.len() - shown
            )
            .bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let solvable_pct = if result.total_boards > 0 {
        result.solvable as f64 / result.total_boards as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Solvability:".bright_cyan().bold());
    println!("   Boards tested:    {}", result.total_boards);
    println!(
        "   Solvable:         {} {}",
        result.solvable,
        format!("({solvable_pct:.1}%)").bright_yellow().bold()
    );
    println!("   Avg valid words:  {:.1}", result.average_valid_words);
    println!("   Avg pairs:        {:.1}", result.average_pairs);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.shortest_distribution.is_empty() {
        return;
    }

    println!(
        "\n📈 {}",
        "Shortest solution length:".bright_cyan().bold()
    );
    let mut lengths: Vec<_> = result.shortest_distribution.iter().collect();
    lengths.sort_unstable();
    for (&len, &count) in lengths {
        let pct = (count as f64 / result.solvable as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {len:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}

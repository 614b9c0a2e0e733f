//! Formatting utilities for terminal output

use crate::core::{Board, SIDE_LEN};

/// Render the board as an ASCII box
///
/// Sides go clockwise from the top: side 0 across the top, side 1 down the
/// right, side 2 right-to-left along the bottom, side 3 up the left.
///
/// ```text
///   a b c
///  +-----+
/// l|     |d
/// k|     |e
/// j|     |f
///  +-----+
///   i h g
/// ```
#[must_use]
pub fn render_board(board: &Board) -> String {
    let top = spaced(board.side(0).iter());
    let bottom = spaced(board.side(2).iter().rev());
    let right = board.side(1);
    let left = board.side(3);

    let width = top.len();
    let edge = format!(" +{}+", "-".repeat(width));

    let mut lines = Vec::with_capacity(SIDE_LEN + 4);
    lines.push(format!("  {top}"));
    lines.push(edge.clone());
    for row in 0..SIDE_LEN {
        lines.push(format!(
            "{}|{}|{}",
            char::from(left[SIDE_LEN - 1 - row]),
            " ".repeat(width),
            char::from(right[row])
        ));
    }
    lines.push(edge);
    lines.push(format!("  {bottom}"));

    lines.join("\n")
}

fn spaced<'a>(letters: impl Iterator<Item = &'a u8>) -> String {
    letters
        .map(|&b| char::from(b).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a word's efficiency (0–100) as a bar
#[must_use]
pub fn efficiency_bar(efficiency: f64, width: usize) -> String {
    create_progress_bar(efficiency, 100.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_board_clockwise() {
        let board = Board::from_letters("abcdefghijkl").unwrap();
        let expected = [
            "  a b c",
            " +-----+",
            "l|     |d",
            "k|     |e",
            "j|     |f",
            " +-----+",
            "  i h g",
        ]
        .join("\n");
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn render_board_contains_every_letter() {
        let board = Board::from_letters("tnlihawrudof").unwrap();
        let rendered = render_board(&board);
        for letter in board.letters().chars() {
            assert_eq!(rendered.matches(letter).count(), 1, "letter {letter}");
        }
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn efficiency_bar_quarter() {
        let bar = efficiency_bar(25.0, 8);
        assert_eq!(bar, "██░░░░░░");
    }
}

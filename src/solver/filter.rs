//! Dictionary filtering
//!
//! Streams raw words through the validator and ranks the survivors by
//! efficiency, best first.

use crate::core::{Board, ValidatedWord, validate};
use std::io;
use tracing::{debug, warn};

/// Keep the words that are playable on `board`, ranked by efficiency
///
/// Ties keep their original stream order.
///
/// # Examples
/// ```
/// use letter_boxed::core::Board;
/// use letter_boxed::solver::filter_words;
///
/// let board = Board::from_letters("abcdefghijkl").unwrap();
/// let words = filter_words(&board, ["add", "adg", "adgjbehkcfil"]);
///
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "adgjbehkcfil");
/// ```
pub fn filter_words<I, S>(board: &Board, words: I) -> Vec<ValidatedWord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let valid = words
        .into_iter()
        .filter_map(|word| validate(board, word.as_ref()))
        .collect();

    rank_by_efficiency(valid)
}

/// Like [`filter_words`], for a fallible line source
///
/// A read error ends the scan early: it is logged and the words validated
/// so far are still returned.
pub fn filter_stream<I>(board: &Board, lines: I) -> Vec<ValidatedWord>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut valid = Vec::new();
    let mut scanned = 0usize;

    for line in lines {
        match line {
            Ok(word) => {
                scanned += 1;
                if let Some(word) = validate(board, &word) {
                    valid.push(word);
                }
            }
            Err(e) => {
                warn!(error = %e, scanned, "dictionary read failed, using words read so far");
                break;
            }
        }
    }

    debug!(scanned, valid = valid.len(), board = %board, "dictionary scan finished");
    rank_by_efficiency(valid)
}

fn rank_by_efficiency(mut words: Vec<ValidatedWord>) -> Vec<ValidatedWord> {
    // sort_by is stable: equal scores keep stream order
    words.sort_by(|a, b| b.efficiency().total_cmp(&a.efficiency()));
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_letters("abcdefghijkl").unwrap()
    }

    #[test]
    fn filter_keeps_only_valid_words() {
        let words = filter_words(&board(), ["adg", "add", "axg", "aja"]);
        let texts: Vec<_> = words.iter().map(ValidatedWord::text).collect();
        assert_eq!(texts, vec!["adg", "aja"]);
    }

    #[test]
    fn filter_ranks_by_efficiency_descending() {
        let words = filter_words(&board(), ["aja", "adg", "adgjbehkcfil", "adgj"]);
        let texts: Vec<_> = words.iter().map(ValidatedWord::text).collect();
        assert_eq!(texts, vec!["adgjbehkcfil", "adgj", "adg", "aja"]);

        for pair in words.windows(2) {
            assert!(pair[0].efficiency() >= pair[1].efficiency());
        }
    }

    #[test]
    fn filter_ties_keep_stream_order() {
        // All three-letter words with three distinct letters score 25.0
        let words = filter_words(&board(), ["gda", "adg", "jad", "bej"]);
        let texts: Vec<_> = words.iter().map(ValidatedWord::text).collect();
        assert_eq!(texts, vec!["gda", "adg", "jad", "bej"]);
    }

    #[test]
    fn filter_empty_dictionary() {
        let words = filter_words(&board(), Vec::<String>::new());
        assert!(words.is_empty());
    }

    #[test]
    fn filter_stream_reads_all_lines() {
        let lines = vec![Ok("adg".to_string()), Ok("add".to_string())];
        let words = filter_stream(&board(), lines);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "adg");
    }

    #[test]
    fn filter_stream_stops_at_read_error() {
        let lines = vec![
            Ok("aja".to_string()),
            Ok("adg".to_string()),
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed")),
            Ok("adgj".to_string()),
        ];
        let words = filter_stream(&board(), lines);
        let texts: Vec<_> = words.iter().map(ValidatedWord::text).collect();

        // Words before the error survive, ranked; words after are never read
        assert_eq!(texts, vec!["adg", "aja"]);
    }
}

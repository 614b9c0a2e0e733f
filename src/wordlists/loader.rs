//! Dictionary loading utilities
//!
//! Dictionaries are plaintext files with one word per line, in any order.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Stream words from a reader, one per line
///
/// Trailing whitespace (including `\r`) is trimmed. Lines that are not
/// UTF-8 still yield a word, one that never validates. The iterator yields
/// read errors rather than hiding them, so callers decide whether to stop.
pub fn read_words<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| decode_line(&bytes)))
}

/// Invalid UTF-8 becomes U+FFFD, which is never a board letter
fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end().to_string()
}

/// Open a dictionary file for streaming
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened.
pub fn open_dictionary<P: AsRef<Path>>(
    path: P,
) -> io::Result<impl Iterator<Item = io::Result<String>>> {
    let file = File::open(path)?;
    Ok(read_words(BufReader::new(file)))
}

/// Load a whole dictionary into memory
///
/// Blank lines are skipped. Lines are decoded the same way as
/// [`read_words`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_boxed::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read(path)?;
    Ok(content
        .split(|&b| b == b'\n')
        .map(decode_line)
        .filter(|word| !word.is_empty())
        .collect())
}

/// Convert string slices to an owned word list, skipping blanks
///
/// # Examples
/// ```
/// use letter_boxed::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["lad", "", "ifl "]);
/// assert_eq!(words, vec!["lad", "ifl"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|word| word.trim_end())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

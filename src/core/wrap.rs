//! # Line Wrapper
//!
//! Greedy line filling over whole words. A line is never split inside a word:
//! a word wider than the column gets a line to itself and overflows.
//!
//! Widths are terminal display columns, so `é` counts as one and a CJK
//! ideograph as two.

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};
use unicode_width::UnicodeWidthStr;

use super::error::SessionError;

/// First-fit over ASCII spaces, never splitting or hyphenating a word.
fn wrap_options(max_width: usize) -> Options<'static> {
    Options::new(max_width)
        .break_words(false)
        .word_splitter(WordSplitter::NoHyphenation)
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
}

/// Wrap every line so it fits in `max_width` columns.
///
/// Lines that already fit are returned as they are, internal spacing included.
/// Lines that need breaking are refilled word by word, joined by single spaces.
/// Empty lines come back as exactly one empty line.
pub fn wrap<S: AsRef<str>>(lines: &[S], max_width: usize) -> Result<Vec<String>, SessionError> {
    if max_width == 0 {
        return Err(SessionError::InvalidWrapWidth(max_width));
    }

    let options = wrap_options(max_width);
    let mut wrapped = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.as_ref();
        if line.width() <= max_width {
            wrapped.push(line.to_string());
            continue;
        }

        // Collapse runs of whitespace so refilled lines use single spaces
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            wrapped.push(String::new());
            continue;
        }
        let normalized = words.join(" ");
        wrapped.extend(
            textwrap::wrap(&normalized, &options)
                .into_iter()
                .map(|l| l.into_owned()),
        );
    }
    Ok(wrapped)
}

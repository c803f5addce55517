/// Tokenizer — splits corpus text into lowercase, whitespace-delimited words.

use std::str::SplitWhitespace;

/// Lazy iterator over the ASCII-lowercased words of a borrowed text.
///
/// Cloning yields an independent iterator positioned at the same word, so a
/// fresh `tokenize` call (or a clone taken up front) restarts the sequence.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    words: SplitWhitespace<'a>,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.words.next().map(str::to_ascii_lowercase)
    }
}

/// Split text on runs of whitespace and lowercase every word.
///
/// Only ASCII letters are folded; other characters keep their case.
/// Punctuation is kept attached to the word it appears in.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        words: text.split_whitespace(),
    }
}

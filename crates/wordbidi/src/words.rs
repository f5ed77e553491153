//! Splitting text into words and joining words back into text
//!
//! Spans count chars because engine position maps do.

use std::ops::Range;

use wordbidi_core::types::Word;

/// Split `text` on whitespace, keeping each word's char span.
pub fn split_words(text: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (idx, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            if let Some((start, word)) = current.take() {
                words.push(Word {
                    text: word,
                    span: start..idx,
                });
            }
        } else {
            current.get_or_insert_with(|| (idx, String::new())).1.push(ch);
        }
    }

    if let Some((start, word)) = current {
        let end = start + word.chars().count();
        words.push(Word {
            text: word,
            span: start..end,
        });
    }

    words
}

/// Join `words` with single spaces, returning the text and each word's char span in it.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> (String, Vec<Range<usize>>) {
    let mut joined = String::new();
    let mut spans = Vec::with_capacity(words.len());
    let mut cursor = 0;

    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            joined.push(' ');
            cursor += 1;
        }
        let word = word.as_ref();
        let len = word.chars().count();
        joined.push_str(word);
        spans.push(cursor..cursor + len);
        cursor += len;
    }

    (joined, spans)
}

// Shared text utilities: sentence splitting and word counting.
//
// Both the topic classifier and the salience scorer work on the same plain
// transcript string. These helpers are the only tokenization either of them
// does; there is no real NLP here.

pub mod sentences;

pub use sentences::{split_sentences, Sentences};

/// Count tokens produced by splitting on single spaces.
///
/// Repeated spaces produce empty tokens and those are counted too, so
/// `"a  b"` has three tokens. Used for the classification threshold.
pub fn simple_word_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Count whitespace-delimited words, ignoring empty runs.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

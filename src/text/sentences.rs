// Sentence splitter.
//
// A sentence is a run of non-terminal characters followed by one or more of
// `.`, `!`, `?`. Terminators that open the text (or follow a previous run of
// terminators) never start a sentence, and trailing text with no terminator
// is dropped rather than returned as a final sentence.

/// Lazy iterator over the sentences of a transcript.
///
/// Yields trimmed borrowed slices. A clone is an independent cursor over the
/// remaining text, so the sequence can be walked more than once.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rest: &'a str,
}

impl<'a> Sentences<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        // Skip terminators that can't begin a sentence
        let body_start = match self.rest.find(|c: char| !is_terminator(c)) {
            Some(i) => i,
            None => {
                self.rest = "";
                return None;
            }
        };
        let candidate = &self.rest[body_start..];

        // No terminator left means the tail is an unterminated fragment
        let Some(term_start) = candidate.find(is_terminator) else {
            self.rest = "";
            return None;
        };

        // Consecutive terminators collapse into one boundary ("Really?!")
        let end = candidate[term_start..]
            .find(|c: char| !is_terminator(c))
            .map_or(candidate.len(), |i| term_start + i);

        let sentence = &candidate[..end];
        self.rest = &candidate[end..];
        Some(sentence.trim())
    }
}

/// Split a transcript into trimmed sentences.
pub fn split_sentences(text: &str) -> Sentences<'_> {
    Sentences::new(text)
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let sentences: Vec<&str> = split_sentences("A. B! C?").collect();
        assert_eq!(sentences, vec!["A.", "B!", "C?"]);
    }

    #[test]
    fn test_unterminated_tail_dropped() {
        let sentences: Vec<&str> = split_sentences("First one. and then nothing").collect();
        assert_eq!(sentences, vec!["First one."]);
    }

    #[test]
    fn test_clone_gives_same_sequence() {
        let iter = split_sentences("One. Two. Three.");
        let first: Vec<&str> = iter.clone().collect();
        let second: Vec<&str> = iter.collect();
        assert_eq!(first, second);
    }
}

// Sentence salience scoring and extractive summaries.
//
// Every sentence starts at zero and collects bonuses:
// - each importance term it contains (substring, counted once per term)
// - a length in the "informative" window
// - any digit
// - being the first or last sentence of the transcript
// - any quotation mark
//
// Bonuses stack, so sentences that hit several cues outrank sentences that
// merely repeat one keyword. Scores only mean something within one pass.

use serde::Serialize;
use tracing::debug;

use crate::config::{AnalysisConfig, WordBounds};
use crate::keywords::KeywordSet;
use crate::text::{split_sentences, word_count};

/// Points awarded for each salience cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalienceWeights {
    /// Per distinct importance term present (default 2)
    pub keyword: u32,
    /// Word count inside the bounds (default 1)
    pub length: u32,
    /// Contains a decimal digit (default 1)
    pub digit: u32,
    /// First or last sentence; awarded once even when both (default 1)
    pub boundary: u32,
    /// Contains `"` or `'` (default 1)
    pub quote: u32,
}

impl Default for SalienceWeights {
    fn default() -> Self {
        Self {
            keyword: 2,
            length: 1,
            digit: 1,
            boundary: 1,
            quote: 1,
        }
    }
}

/// A sentence with its score and position in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSentence<'a> {
    pub text: &'a str,
    pub position: usize,
    pub score: u32,
}

/// Heuristic sentence scorer.
pub struct SalienceScorer {
    importance: KeywordSet,
    bounds: WordBounds,
    weights: SalienceWeights,
}

impl SalienceScorer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self::with_weights(config, SalienceWeights::default())
    }

    pub fn with_weights(config: &AnalysisConfig, weights: SalienceWeights) -> Self {
        Self {
            importance: config.importance_keywords.clone(),
            bounds: config.sentence_word_bounds,
            weights,
        }
    }

    /// Score one sentence given its position among `total` sentences.
    pub fn score_sentence(&self, sentence: &str, position: usize, total: usize) -> u32 {
        let lower = sentence.to_lowercase();
        let mut score = 0;

        let keyword_hits = self.importance.iter().filter(|t| lower.contains(t)).count() as u32;
        score += keyword_hits * self.weights.keyword;

        if self.bounds.contains(word_count(sentence)) {
            score += self.weights.length;
        }

        if sentence.chars().any(|c| c.is_ascii_digit()) {
            score += self.weights.digit;
        }

        if position == 0 || position + 1 == total {
            score += self.weights.boundary;
        }

        if sentence.contains('"') || sentence.contains('\'') {
            score += self.weights.quote;
        }

        score
    }

    /// Score every sentence of a transcript, in transcript order.
    pub fn score_sentences<'a>(&self, transcript: &'a str) -> Vec<ScoredSentence<'a>> {
        let sentences: Vec<&str> = split_sentences(transcript).collect();
        let total = sentences.len();
        sentences
            .into_iter()
            .enumerate()
            .map(|(position, text)| ScoredSentence {
                text,
                position,
                score: self.score_sentence(text, position, total),
            })
            .collect()
    }

    /// Rank sentences by score and keep the top `max_points`.
    ///
    /// Zero-score sentences are dropped. Ties keep transcript order.
    pub fn rank<'a>(&self, transcript: &'a str, max_points: usize) -> Vec<ScoredSentence<'a>> {
        let mut ranked: Vec<ScoredSentence<'a>> = self
            .score_sentences(transcript)
            .into_iter()
            .filter(|s| s.score > 0)
            .collect();

        // sort_by is stable, which is what keeps ties in transcript order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(max_points);

        debug!(
            kept = ranked.len(),
            top_score = ranked.first().map(|s| s.score).unwrap_or(0),
            "Ranked transcript sentences"
        );

        ranked
    }

    /// Extractive summary: the top-ranked sentences, verbatim.
    pub fn summarize(&self, transcript: &str, max_points: usize) -> Vec<String> {
        self.rank(transcript, max_points)
            .into_iter()
            .map(|s| s.text.to_string())
            .collect()
    }
}

/// Summarize with the built-in importance vocabulary and default bounds.
pub fn summarize(transcript: &str, max_points: usize) -> Vec<String> {
    SalienceScorer::new(&AnalysisConfig::default()).summarize(transcript, max_points)
}

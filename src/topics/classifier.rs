// Keyword-density topic classifier.
//
// Two signals, checked in order:
// 1. Title: any topic term appearing anywhere in the lower-cased title
//    (plain substring) classifies the video immediately.
// 2. Transcript: whole-word hits of every topic term are summed and compared
//    against max(floor, words / divisor), so longer transcripts need
//    proportionally more hits before they count.
//
// Each term is compiled into its own matcher up front. A term that fails to
// compile is skipped and reported in the diagnostics, it never aborts the
// classification.

use regex_lite::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use super::traits::TopicClassifier;
use crate::config::AnalysisConfig;
use crate::keywords::KeywordSet;
use crate::text::simple_word_count;

/// How a single topic term fared during a transcript scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TermStatus {
    /// Whole-word occurrences found in the transcript
    Counted { occurrences: usize },
    /// The term could not be matched and was left out of the total
    Skipped { reason: String },
}

/// Per-term diagnostic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermDiagnostic {
    pub term: String,
    #[serde(flatten)]
    pub status: TermStatus,
}

/// Which signal decided the classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum ClassificationSignal {
    /// The title contained this term; the transcript was never scanned
    Title { term: String },
    /// The transcript was scanned and compared against the threshold
    Transcript {
        keyword_count: usize,
        threshold: usize,
        word_count: usize,
    },
}

/// Result of classifying one video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub is_excluded: bool,
    pub signal: ClassificationSignal,
    /// One entry per topic term when the transcript was scanned; empty on a
    /// title match
    pub diagnostics: Vec<TermDiagnostic>,
}

impl Classification {
    /// Terms that failed to match and were skipped.
    pub fn skipped_terms(&self) -> impl Iterator<Item = &TermDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.status, TermStatus::Skipped { .. }))
    }
}

/// A topic term with its whole-word matcher, or the reason it has none.
struct TermMatcher {
    term: String,
    matcher: Result<Regex, String>,
}

impl TermMatcher {
    /// Compile `\b<term>\b` with the term escaped, so `+` and `.` are literal.
    ///
    /// Boundaries wrap the whole phrase: "command line" needs a boundary
    /// before "command" and after "line", nothing in between.
    fn compile(term: &str) -> Self {
        let pattern = format!(r"\b{}\b", regex_lite::escape(term));
        Self {
            term: term.to_string(),
            matcher: Regex::new(&pattern).map_err(|e| e.to_string()),
        }
    }

    fn diagnose(&self, lower_transcript: &str) -> TermDiagnostic {
        let status = match &self.matcher {
            Ok(re) => TermStatus::Counted {
                occurrences: re.find_iter(lower_transcript).count(),
            },
            Err(reason) => {
                warn!(term = %self.term, reason = %reason, "Skipping topic term that failed to compile");
                TermStatus::Skipped {
                    reason: reason.clone(),
                }
            }
        };
        TermDiagnostic {
            term: self.term.clone(),
            status,
        }
    }
}

/// Keyword-density classifier, the default TopicClassifier.
pub struct KeywordDensityClassifier {
    terms: KeywordSet,
    matchers: Vec<TermMatcher>,
    threshold_floor: usize,
    threshold_divisor: usize,
}

impl KeywordDensityClassifier {
    /// Build a classifier from the topic terms and threshold settings.
    pub fn new(config: &AnalysisConfig) -> Self {
        let terms = config.topic_keywords.clone();
        let matchers = terms.iter().map(TermMatcher::compile).collect();
        Self {
            terms,
            matchers,
            threshold_floor: config.threshold_floor,
            // validate() rejects zero, but configs aren't required to be validated
            threshold_divisor: config.threshold_divisor.max(1),
        }
    }

    /// The keyword count a transcript must reach to be classified.
    pub fn threshold(&self, transcript: &str) -> usize {
        self.threshold_floor
            .max(simple_word_count(transcript) / self.threshold_divisor)
    }

    /// First topic term found as a substring of the title, if any.
    pub fn title_match(&self, title: &str) -> Option<&str> {
        let lower_title = title.to_lowercase();
        self.terms.iter().find(|term| lower_title.contains(term))
    }

    /// Scan the transcript term by term.
    pub fn scan_transcript(&self, transcript: &str) -> Vec<TermDiagnostic> {
        let lower = transcript.to_lowercase();
        self.matchers.iter().map(|m| m.diagnose(&lower)).collect()
    }
}

impl TopicClassifier for KeywordDensityClassifier {
    fn classify(&self, title: &str, transcript: &str) -> Classification {
        if let Some(term) = self.title_match(title) {
            debug!(term, "Title matched a topic term");
            return Classification {
                is_excluded: true,
                signal: ClassificationSignal::Title {
                    term: term.to_string(),
                },
                diagnostics: Vec::new(),
            };
        }

        let diagnostics = self.scan_transcript(transcript);
        let keyword_count: usize = diagnostics
            .iter()
            .map(|d| match d.status {
                TermStatus::Counted { occurrences } => occurrences,
                TermStatus::Skipped { .. } => 0,
            })
            .sum();
        let threshold = self.threshold(transcript);
        let is_excluded = keyword_count >= threshold;

        debug!(
            keyword_count,
            threshold,
            excluded = is_excluded,
            "Classified transcript by keyword density"
        );

        Classification {
            is_excluded,
            signal: ClassificationSignal::Transcript {
                keyword_count,
                threshold,
                word_count: simple_word_count(transcript),
            },
            diagnostics,
        }
    }
}

/// Classify with the built-in programming vocabulary and default thresholds.
pub fn classify_topic(title: &str, transcript: &str) -> bool {
    KeywordDensityClassifier::new(&AnalysisConfig::default())
        .classify(title, transcript)
        .is_excluded
}

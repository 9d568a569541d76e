use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::keywords::KeywordSet;

pub const DEFAULT_MAX_POINTS: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_TIMEDTEXT_URL: &str = "https://www.youtube.com/api/timedtext";
pub const DEFAULT_OEMBED_URL: &str = "https://www.youtube.com/oembed";

/// Exclusive word-count bounds for the sentence length bonus.
///
/// A sentence earns the bonus when `min < words < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for WordBounds {
    fn default() -> Self {
        Self { min: 5, max: 30 }
    }
}

impl WordBounds {
    pub fn contains(&self, words: usize) -> bool {
        words > self.min && words < self.max
    }
}

/// Everything the classifier and scorer need, injected at construction.
///
/// This is plain immutable data. Tests substitute small fixture keyword
/// sets by building one of these directly.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Terms that mark content as programming-related
    pub topic_keywords: KeywordSet,
    /// Terms that mark a sentence as salient
    pub importance_keywords: KeywordSet,
    /// Maximum number of sentences in a summary
    pub max_points: usize,
    /// Length bonus bounds (default 5..30, both exclusive)
    pub sentence_word_bounds: WordBounds,
    /// Lowest keyword count that can ever classify a transcript (default 3)
    pub threshold_floor: usize,
    /// Words per required keyword hit in long transcripts (default 200)
    pub threshold_divisor: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            topic_keywords: KeywordSet::programming(),
            importance_keywords: KeywordSet::importance(),
            max_points: DEFAULT_MAX_POINTS,
            sentence_word_bounds: WordBounds::default(),
            threshold_floor: 3,
            threshold_divisor: 200,
        }
    }
}

impl AnalysisConfig {
    /// Check the invariants the classifier and scorer rely on.
    pub fn validate(&self) -> Result<()> {
        if self.threshold_divisor == 0 {
            anyhow::bail!("Classification threshold divisor must be greater than zero");
        }
        if self.sentence_word_bounds.min >= self.sentence_word_bounds.max {
            anyhow::bail!(
                "Sentence word bounds are empty: min {} must be below max {}",
                self.sentence_word_bounds.min,
                self.sentence_word_bounds.max
            );
        }
        let shared = self.topic_keywords.overlap(&self.importance_keywords);
        if !shared.is_empty() {
            anyhow::bail!(
                "Topic and importance keyword sets must be disjoint, both contain: {}",
                shared.join(", ")
            );
        }
        Ok(())
    }

    /// Replace keyword sets with the ones given in a JSON keywords file.
    ///
    /// Either key may be omitted, in which case the current set is kept.
    pub fn apply_keywords_file(&mut self, path: &Path) -> Result<()> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read keywords file {}", path.display()))?;
        let file: KeywordsFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse keywords file {}", path.display()))?;

        if let Some(topic) = file.topic_keywords {
            self.topic_keywords = topic;
        }
        if let Some(importance) = file.importance_keywords {
            self.importance_keywords = importance;
        }
        Ok(())
    }
}

/// On-disk shape of `SKIMMER_KEYWORDS_FILE`.
#[derive(Debug, Deserialize)]
struct KeywordsFile {
    topic_keywords: Option<KeywordSet>,
    importance_keywords: Option<KeywordSet>,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Nothing
/// here is secret; every value has a default.
pub struct Config {
    pub analysis: AnalysisConfig,
    /// Stop after classification when the video is about programming.
    /// When false, programming videos are summarized anyway.
    pub skip_programming: bool,
    /// Upper bound on transcript acquisition
    pub fetch_timeout: Duration,
    pub timedtext_url: String,
    pub oembed_url: String,
    /// Where the keyword sets came from, if not built in
    pub keywords_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let mut analysis = AnalysisConfig::default();

        if let Some(max_points) = parse_env::<usize>("SKIMMER_MAX_POINTS")? {
            analysis.max_points = max_points;
        }

        let keywords_file = env::var("SKIMMER_KEYWORDS_FILE").ok().map(PathBuf::from);
        if let Some(path) = &keywords_file {
            analysis.apply_keywords_file(path)?;
        }
        analysis.validate()?;

        let skip_programming = parse_env::<bool>("SKIMMER_SKIP_PROGRAMMING")?.unwrap_or(true);
        let timeout_secs =
            parse_env::<u64>("SKIMMER_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            analysis,
            skip_programming,
            fetch_timeout: Duration::from_secs(timeout_secs),
            timedtext_url: env::var("SKIMMER_TIMEDTEXT_URL")
                .unwrap_or_else(|_| DEFAULT_TIMEDTEXT_URL.to_string()),
            oembed_url: env::var("SKIMMER_OEMBED_URL")
                .unwrap_or_else(|_| DEFAULT_OEMBED_URL.to_string()),
            keywords_file,
        })
    }
}

/// Read and parse an optional env var. Unset is `None`, garbage is an error.
fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid value for {key} ({raw:?}): {e}")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let config = AnalysisConfig {
            threshold_divisor: 0,
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overlapping_sets_rejected() {
        let config = AnalysisConfig {
            topic_keywords: KeywordSet::new(["python", "key"]).unwrap(),
            ..AnalysisConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("key"), "unexpected error: {err}");
    }

    #[test]
    fn test_word_bounds_are_exclusive() {
        let bounds = WordBounds::default();
        assert!(!bounds.contains(5));
        assert!(bounds.contains(6));
        assert!(bounds.contains(29));
        assert!(!bounds.contains(30));
    }

    #[test]
    fn test_keywords_file_partial_override() {
        let path = std::env::temp_dir().join(format!(
            "skimmer-keywords-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"topic_keywords": ["Rust", "cargo"]}"#).unwrap();

        let mut config = AnalysisConfig::default();
        config.apply_keywords_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.topic_keywords.terms(), &["rust", "cargo"]);
        assert_eq!(config.importance_keywords, KeywordSet::importance());
    }
}

// Transcript acquirer: fallback chain over transcript sources.
//
// Sources are tried in order. A source that errors or returns only
// whitespace is logged and skipped. When nothing works, the acquirer hands
// back FALLBACK_TRANSCRIPT so downstream analysis always has input; the
// origin field tells the caller which of the two happened.

use serde::Serialize;
use tracing::{info, warn};

use super::traits::TranscriptSource;

/// Transcript used when every source fails.
pub const FALLBACK_TRANSCRIPT: &str = "Welcome to this video. Today we're going to discuss some important topics. \
First, let's talk about the main points. It's essential to understand the key concepts. \
Remember that practice is crucial for mastery. The second important point is consistency. \
To summarize, focus on these key takeaways. Finally, don't forget to like and subscribe.";

/// Where an acquired transcript came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum TranscriptOrigin {
    /// A real source, by name
    Source(String),
    /// Every source failed and the fixed fallback text was used
    Fallback,
    /// Supplied directly by the caller (file or stdin)
    Provided,
}

/// An acquired, whitespace-normalized transcript.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub text: String,
    pub origin: TranscriptOrigin,
}

impl Transcript {
    /// Wrap caller-supplied text, normalizing its whitespace.
    pub fn provided(raw: &str) -> Self {
        Self {
            text: normalize_whitespace(raw),
            origin: TranscriptOrigin::Provided,
        }
    }
}

/// Tries each source in order, then falls back.
pub struct TranscriptAcquirer {
    sources: Vec<Box<dyn TranscriptSource>>,
    fallback: String,
}

impl TranscriptAcquirer {
    pub fn new(sources: Vec<Box<dyn TranscriptSource>>) -> Self {
        Self {
            sources,
            fallback: FALLBACK_TRANSCRIPT.to_string(),
        }
    }

    /// Replace the fallback text.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Acquire a transcript. Never fails; see `Transcript::origin`.
    pub async fn acquire(&self, video_id: &str) -> Transcript {
        for source in &self.sources {
            match source.fetch(video_id).await {
                Ok(raw) => {
                    let text = normalize_whitespace(&raw);
                    if text.is_empty() {
                        warn!(source = source.name(), video_id, "Transcript source returned no text");
                        continue;
                    }
                    info!(source = source.name(), video_id, chars = text.len(), "Acquired transcript");
                    return Transcript {
                        text,
                        origin: TranscriptOrigin::Source(source.name().to_string()),
                    };
                }
                Err(e) => {
                    warn!(source = source.name(), video_id, error = %e, "Transcript source failed");
                }
            }
        }

        info!(video_id, "All transcript sources failed, using fallback transcript");
        Transcript {
            text: self.fallback.clone(),
            origin: TranscriptOrigin::Fallback,
        }
    }
}

/// Collapse every whitespace run (including newlines) to one space and trim.
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Transcript source trait: one strategy for fetching a transcript.
//
// Implementations must be async because real sources are HTTP calls. Tests
// provide in-memory sources behind the same trait.

use anyhow::Result;
use async_trait::async_trait;

/// A single way of fetching a video's transcript.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Short name used in logs and in `TranscriptOrigin::Source`.
    fn name(&self) -> &str;

    /// Fetch the raw transcript text for a video id.
    ///
    /// An error means "try the next source", not "give up".
    async fn fetch(&self, video_id: &str) -> Result<String>;
}

// Video analysis pipeline.
//
// For a single video this:
// 1. Acquires the transcript (bounded by a timeout)
// 2. Classifies it; a programming video stops here when skipping is on
// 3. Scores sentences and keeps the top points as the summary
// 4. Returns an AnalysisReport ready for display or JSON output
//
// Steps 2-4 are synchronous and pure; only acquisition touches the network.

use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::config::AnalysisConfig;
use crate::scoring::salience::SalienceScorer;
use crate::topics::classifier::{Classification, KeywordDensityClassifier};
use crate::topics::traits::TopicClassifier;
use crate::transcript::acquire::{Transcript, TranscriptAcquirer, TranscriptOrigin};

/// Error message used when acquisition exceeds its time budget.
pub const TIMEOUT_MESSAGE: &str =
    "Request timed out. The video might not have a transcript available.";

/// What the pipeline decided to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// Programming content; no summary was produced
    Excluded,
    /// Extractive summary, best sentence first. May be empty.
    Summary { points: Vec<String> },
}

/// Full result of analyzing one video or transcript.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub video_id: Option<String>,
    pub title: String,
    pub origin: TranscriptOrigin,
    pub classification: Classification,
    pub outcome: AnalysisOutcome,
    pub analyzed_at: DateTime<Utc>,
}

/// Classifier + scorer pair with the summary settings.
pub struct Analyzer {
    classifier: Box<dyn TopicClassifier>,
    scorer: SalienceScorer,
    max_points: usize,
    skip_excluded: bool,
}

impl Analyzer {
    /// Build the default keyword-density analyzer from a config.
    pub fn new(config: &AnalysisConfig, skip_excluded: bool) -> Self {
        Self::with_classifier(
            Box::new(KeywordDensityClassifier::new(config)),
            SalienceScorer::new(config),
            config.max_points,
            skip_excluded,
        )
    }

    pub fn with_classifier(
        classifier: Box<dyn TopicClassifier>,
        scorer: SalienceScorer,
        max_points: usize,
        skip_excluded: bool,
    ) -> Self {
        Self {
            classifier,
            scorer,
            max_points,
            skip_excluded,
        }
    }

    /// Analyze an already-acquired transcript.
    pub fn analyze(
        &self,
        video_id: Option<&str>,
        title: &str,
        transcript: &Transcript,
    ) -> AnalysisReport {
        let classification = self.classifier.classify(title, &transcript.text);

        let outcome = if classification.is_excluded && self.skip_excluded {
            AnalysisOutcome::Excluded
        } else {
            AnalysisOutcome::Summary {
                points: self.scorer.summarize(&transcript.text, self.max_points),
            }
        };

        let point_count = match &outcome {
            AnalysisOutcome::Summary { points } => points.len(),
            AnalysisOutcome::Excluded => 0,
        };
        info!(
            video_id = video_id.unwrap_or("-"),
            excluded = classification.is_excluded,
            points = point_count,
            "Analysis complete"
        );

        AnalysisReport {
            video_id: video_id.map(str::to_string),
            title: title.to_string(),
            origin: transcript.origin.clone(),
            classification,
            outcome,
            analyzed_at: Utc::now(),
        }
    }

    /// Acquire a video's transcript and analyze it.
    ///
    /// Acquisition that takes longer than `timeout` fails with
    /// `TIMEOUT_MESSAGE` instead of waiting indefinitely.
    pub async fn analyze_video(
        &self,
        acquirer: &TranscriptAcquirer,
        video_id: &str,
        title: &str,
        timeout: Duration,
    ) -> Result<AnalysisReport> {
        let transcript = match tokio::time::timeout(timeout, acquirer.acquire(video_id)).await {
            Ok(transcript) => transcript,
            Err(_) => anyhow::bail!(TIMEOUT_MESSAGE),
        };

        Ok(self.analyze(Some(video_id), title, &transcript))
    }
}

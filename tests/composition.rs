// Composition tests: verifying that the pipeline stages chain together.
//
// These tests exercise the data flow between modules:
//   Acquirer -> Classifier -> Scorer -> AnalysisReport
// without network access. Sources are in-memory fakes.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use skimmer::config::AnalysisConfig;
use skimmer::keywords::KeywordSet;
use skimmer::output::render_json;
use skimmer::pipeline::analyze::{AnalysisOutcome, Analyzer, TIMEOUT_MESSAGE};
use skimmer::topics::classifier::ClassificationSignal;
use skimmer::transcript::acquire::{
    Transcript, TranscriptAcquirer, TranscriptOrigin, FALLBACK_TRANSCRIPT,
};
use skimmer::transcript::traits::TranscriptSource;

const CODING_TRANSCRIPT: &str = "In this tutorial, we'll learn how to code a simple JavaScript function. \
    First, let's create a variable using the let keyword. \
    It's important to understand how scope works in JavaScript. \
    Remember to use proper syntax when defining your functions. \
    Let me show you how to debug this code using console.log statements.";

const GARDEN_TRANSCRIPT: &str = "Welcome to the garden. \
    The most important thing is to water your tomatoes every 2 days. \
    Pick a sunny spot. \
    Remember that compost is crucial for healthy soil. \
    Thanks for watching!";

struct SlowSource;

#[async_trait]
impl TranscriptSource for SlowSource {
    fn name(&self) -> &str {
        "slow"
    }

    async fn fetch(&self, _video_id: &str) -> Result<String> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok("Too late.".to_string())
    }
}

struct StaticSource(&'static str);

#[async_trait]
impl TranscriptSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, _video_id: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

fn summary_points(outcome: &AnalysisOutcome) -> &[String] {
    match outcome {
        AnalysisOutcome::Summary { points } => points,
        AnalysisOutcome::Excluded => panic!("expected a summary"),
    }
}

// ============================================================
// Chain: Classifier -> Scorer
// ============================================================

#[test]
fn programming_transcript_skips_summary() {
    let analyzer = Analyzer::new(&AnalysisConfig::default(), true);
    let report = analyzer.analyze(None, "", &Transcript::provided(CODING_TRANSCRIPT));

    assert!(report.classification.is_excluded);
    assert_eq!(report.outcome, AnalysisOutcome::Excluded);
}

#[test]
fn programming_title_skips_summary() {
    let analyzer = Analyzer::new(&AnalysisConfig::default(), true);
    let report = analyzer.analyze(
        Some("abc"),
        "Learn Python Basics",
        &Transcript::provided(GARDEN_TRANSCRIPT),
    );

    assert_eq!(report.outcome, AnalysisOutcome::Excluded);
    assert!(matches!(
        report.classification.signal,
        ClassificationSignal::Title { .. }
    ));
}

#[test]
fn programming_transcript_summarized_when_not_skipping() {
    let analyzer = Analyzer::new(&AnalysisConfig::default(), false);
    let report = analyzer.analyze(None, "", &Transcript::provided(CODING_TRANSCRIPT));

    assert!(report.classification.is_excluded);
    assert!(!summary_points(&report.outcome).is_empty());
}

#[test]
fn non_programming_transcript_is_summarized() {
    let analyzer = Analyzer::new(&AnalysisConfig::default(), true);
    let report = analyzer.analyze(None, "Tomato Care", &Transcript::provided(GARDEN_TRANSCRIPT));

    assert!(!report.classification.is_excluded);
    let points = summary_points(&report.outcome);
    // remember + crucial + length beats important + length + digit
    assert_eq!(points[0], "Remember that compost is crucial for healthy soil.");
    assert_eq!(
        points[1],
        "The most important thing is to water your tomatoes every 2 days."
    );
    assert!(!points.iter().any(|p| p == "Pick a sunny spot."));
}

#[test]
fn summary_respects_configured_max_points() {
    let config = AnalysisConfig {
        max_points: 2,
        ..AnalysisConfig::default()
    };
    let analyzer = Analyzer::new(&config, true);
    let report = analyzer.analyze(None, "", &Transcript::provided(GARDEN_TRANSCRIPT));
    assert_eq!(summary_points(&report.outcome).len(), 2);
}

#[test]
fn fixture_keyword_sets_flow_through() {
    let config = AnalysisConfig {
        topic_keywords: KeywordSet::new(["tomato"]).unwrap(),
        importance_keywords: KeywordSet::new(["compost"]).unwrap(),
        ..AnalysisConfig::default()
    };
    let analyzer = Analyzer::new(&config, true);

    let report = analyzer.analyze(None, "Tomato Care", &Transcript::provided(GARDEN_TRANSCRIPT));
    assert_eq!(report.outcome, AnalysisOutcome::Excluded);

    let report = analyzer.analyze(None, "", &Transcript::provided(CODING_TRANSCRIPT));
    assert!(!report.classification.is_excluded);
}

#[test]
fn text_without_sentences_gives_empty_summary() {
    let analyzer = Analyzer::new(&AnalysisConfig::default(), true);
    let report = analyzer.analyze(None, "", &Transcript::provided("just some words"));
    assert!(summary_points(&report.outcome).is_empty());
}

#[test]
fn report_serializes_to_json() {
    let analyzer = Analyzer::new(&AnalysisConfig::default(), true);
    let report = analyzer.analyze(Some("abc"), "Tomato Care", &Transcript::provided(GARDEN_TRANSCRIPT));

    let json = render_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["video_id"], "abc");
    assert_eq!(value["origin"]["kind"], "provided");
    assert_eq!(value["outcome"]["outcome"], "summary");
    assert_eq!(value["classification"]["signal"]["signal"], "transcript");
    assert!(!value["outcome"]["points"].as_array().unwrap().is_empty());
}

// ============================================================
// Chain: Acquirer -> Analyzer
// ============================================================

#[tokio::test]
async fn analyze_video_uses_acquired_transcript() {
    let analyzer = Analyzer::new(&AnalysisConfig::default(), true);
    let acquirer = TranscriptAcquirer::new(vec![Box::new(StaticSource(GARDEN_TRANSCRIPT))]);

    let report = analyzer
        .analyze_video(&acquirer, "abc", "", Duration::from_secs(5))
        .await
        .unwrap();

    assert_eq!(report.video_id.as_deref(), Some("abc"));
    assert_eq!(report.origin, TranscriptOrigin::Source("static".to_string()));
    assert!(!summary_points(&report.outcome).is_empty());
}

#[tokio::test]
async fn analyze_video_falls_back_and_still_summarizes() {
    let analyzer = Analyzer::new(&AnalysisConfig::default(), true);
    let acquirer = TranscriptAcquirer::new(Vec::new());

    let report = analyzer
        .analyze_video(&acquirer, "abc", "", Duration::from_secs(5))
        .await
        .unwrap();

    assert_eq!(report.origin, TranscriptOrigin::Fallback);
    assert!(!report.classification.is_excluded);
    let points = summary_points(&report.outcome);
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| FALLBACK_TRANSCRIPT.contains(p.as_str())));
}

#[tokio::test]
async fn slow_acquisition_times_out() {
    let analyzer = Analyzer::new(&AnalysisConfig::default(), true);
    let acquirer = TranscriptAcquirer::new(vec![Box::new(SlowSource)]);

    let err = analyzer
        .analyze_video(&acquirer, "abc", "", Duration::from_millis(50))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), TIMEOUT_MESSAGE);
}

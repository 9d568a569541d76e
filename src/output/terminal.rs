// Colored terminal output for analysis reports, summaries, and diagnostics.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use crate::pipeline::analyze::{AnalysisOutcome, AnalysisReport};
use crate::scoring::salience::ScoredSentence;
use crate::topics::classifier::{Classification, ClassificationSignal, TermStatus};
use crate::transcript::acquire::TranscriptOrigin;

/// Display a full analysis report.
pub fn display_report(report: &AnalysisReport) {
    let heading = match &report.video_id {
        Some(id) => format!("=== Video {id} ==="),
        None => "=== Transcript ===".to_string(),
    };
    println!("\n{}", heading.bold());

    if report.title.is_empty() {
        println!("  Title: {}", "(unavailable)".dimmed());
    } else {
        println!("  Title: {}", super::truncate_chars(&report.title, 80));
    }
    println!("  Transcript: {}", describe_origin(&report.origin));

    match &report.outcome {
        AnalysisOutcome::Excluded => {
            println!(
                "\n  {}",
                "This appears to be a programming video. Skipping summary.".yellow()
            );
            println!("  {}", describe_signal(&report.classification.signal).dimmed());
        }
        AnalysisOutcome::Summary { points } => {
            if report.classification.is_excluded {
                println!(
                    "  {}",
                    "Classified as programming content, summarizing anyway.".dimmed()
                );
            }
            display_points(points);
        }
    }
}

/// Display summary points as a bulleted list.
pub fn display_points(points: &[String]) {
    if points.is_empty() {
        println!("\n  No important points found in this video.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Key Points ({}) ===", points.len()).bold()
    );
    for point in points {
        println!("  • {point}");
    }
}

/// Display ranked sentences with their scores.
pub fn display_scored(sentences: &[ScoredSentence<'_>]) {
    if sentences.is_empty() {
        println!("No sentence scored above zero.");
        return;
    }

    println!("  {:>5}  {:>4}  Sentence", "Score".dimmed(), "Pos".dimmed());
    println!("  {}", "-".repeat(78).dimmed());
    for sentence in sentences {
        println!(
            "  {:>5}  {:>4}  {}",
            colorize_score(sentence.score),
            sentence.position + 1,
            super::truncate_chars(sentence.text, 100)
        );
    }
}

/// Display a classification with per-term diagnostics.
pub fn display_classification(classification: &Classification) {
    let verdict = if classification.is_excluded {
        "programming".red().bold()
    } else {
        "not programming".green()
    };
    println!("\nClassification: {verdict}");
    println!("  {}", describe_signal(&classification.signal));

    let hits: Vec<(&str, usize)> = classification
        .diagnostics
        .iter()
        .filter_map(|d| match d.status {
            TermStatus::Counted { occurrences } if occurrences > 0 => {
                Some((d.term.as_str(), occurrences))
            }
            _ => None,
        })
        .collect();

    if !hits.is_empty() {
        println!("\n  Matched terms:");
        for (term, count) in hits {
            println!("    {:<24} {}", term, count);
        }
    }

    for skipped in classification.skipped_terms() {
        if let TermStatus::Skipped { reason } = &skipped.status {
            println!(
                "  {} skipped term {:?}: {}",
                "Warning:".yellow(),
                skipped.term,
                reason.dimmed()
            );
        }
    }
}

fn describe_signal(signal: &ClassificationSignal) -> String {
    match signal {
        ClassificationSignal::Title { term } => format!("Title mentions \"{term}\""),
        ClassificationSignal::Transcript {
            keyword_count,
            threshold,
            word_count,
        } => format!(
            "{keyword_count} keyword hits in {word_count} words (threshold {threshold})"
        ),
    }
}

fn describe_origin(origin: &TranscriptOrigin) -> String {
    match origin {
        TranscriptOrigin::Source(name) => format!("fetched via {name}"),
        TranscriptOrigin::Fallback => "unavailable, using fallback text"
            .yellow()
            .to_string(),
        TranscriptOrigin::Provided => "provided locally".to_string(),
    }
}

fn colorize_score(score: u32) -> colored::ColoredString {
    let text = score.to_string();
    match score {
        s if s >= 5 => text.green().bold(),
        s if s >= 3 => text.green(),
        _ => text.dimmed(),
    }
}

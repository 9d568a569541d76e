use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use skimmer::config::Config;
use skimmer::pipeline::analyze::Analyzer;
use skimmer::scoring::salience::SalienceScorer;
use skimmer::topics::classifier::KeywordDensityClassifier;
use skimmer::topics::traits::TopicClassifier;
use skimmer::transcript::acquire::{Transcript, TranscriptAcquirer};
use skimmer::transcript::youtube::YouTubeClient;

/// Skimmer: the key points of a video, without the programming tutorials.
///
/// Fetches a video's transcript, skips it if it's about programming, and
/// otherwise prints its most salient sentences.
#[derive(Parser)]
#[command(name = "skimmer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, classify, and summarize a YouTube video
    Analyze {
        /// Video URL (youtube.com/watch?v=... or youtu.be/...) or bare video id
        video: String,

        /// Use this title instead of looking it up
        #[arg(long)]
        title: Option<String>,

        /// Max summary points (default: SKIMMER_MAX_POINTS or 10)
        #[arg(long)]
        max_points: Option<usize>,

        /// Seconds to wait for the transcript (default: SKIMMER_TIMEOUT_SECS or 15)
        #[arg(long)]
        timeout: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a local transcript as programming or not
    Classify {
        /// Video title to check first
        #[arg(long, default_value = "")]
        title: String,

        /// Transcript file (reads stdin when omitted)
        #[arg(long)]
        file: Option<String>,
    },

    /// Summarize a local transcript
    Summarize {
        /// Transcript file (reads stdin when omitted)
        #[arg(long)]
        file: Option<String>,

        /// Max summary points (default: SKIMMER_MAX_POINTS or 10)
        #[arg(long)]
        max_points: Option<usize>,

        /// Show each kept sentence's score and position
        #[arg(long)]
        scores: bool,
    },

    /// Print the sentences a transcript splits into
    Sentences {
        /// Transcript file (reads stdin when omitted)
        #[arg(long)]
        file: Option<String>,
    },

    /// Show the effective configuration
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("skimmer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            video,
            title,
            max_points,
            timeout,
            json,
        } => {
            let mut config = Config::load()?;
            if let Some(max_points) = max_points {
                config.analysis.max_points = max_points;
            }
            let timeout = timeout
                .map(Duration::from_secs)
                .unwrap_or(config.fetch_timeout);

            let video_id = skimmer::transcript::video::parse_video_id(&video)?;
            let client = YouTubeClient::new(&config.timedtext_url, &config.oembed_url)?;

            let title = match title {
                Some(title) => title,
                None => match client.fetch_title(&video_id).await {
                    Ok(title) => title,
                    Err(e) => {
                        warn!(video_id = %video_id, error = %e, "Title lookup failed");
                        String::new()
                    }
                },
            };

            let analyzer = Analyzer::new(&config.analysis, config.skip_programming);
            let acquirer = TranscriptAcquirer::new(vec![Box::new(client)]);

            let spinner = ProgressBar::new_spinner();
            if !json {
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .template("  {spinner} {msg}")
                        .context("Invalid spinner template")?,
                );
                spinner.set_message(format!("Analyzing video {video_id}..."));
                spinner.enable_steady_tick(Duration::from_millis(100));
            }

            let result = analyzer
                .analyze_video(&acquirer, &video_id, &title, timeout)
                .await;
            spinner.finish_and_clear();
            let report = result?;

            if json {
                println!("{}", skimmer::output::render_json(&report)?);
            } else {
                skimmer::output::terminal::display_report(&report);
            }
        }

        Commands::Classify { title, file } => {
            let config = Config::load()?;
            let transcript = read_transcript(file.as_deref())?;

            let classifier = KeywordDensityClassifier::new(&config.analysis);
            let classification = classifier.classify(&title, &transcript.text);

            skimmer::output::terminal::display_classification(&classification);
        }

        Commands::Summarize {
            file,
            max_points,
            scores,
        } => {
            let config = Config::load()?;
            let transcript = read_transcript(file.as_deref())?;
            let max_points = max_points.unwrap_or(config.analysis.max_points);

            let scorer = SalienceScorer::new(&config.analysis);
            if scores {
                let ranked = scorer.rank(&transcript.text, max_points);
                skimmer::output::terminal::display_scored(&ranked);
            } else {
                let points = scorer.summarize(&transcript.text, max_points);
                skimmer::output::terminal::display_points(&points);
            }
        }

        Commands::Sentences { file } => {
            let transcript = read_transcript(file.as_deref())?;
            let mut count = 0;
            for (i, sentence) in skimmer::text::split_sentences(&transcript.text).enumerate() {
                println!("{:>4}. {}", i + 1, sentence);
                count += 1;
            }
            if count == 0 {
                println!(
                    "{}",
                    "No sentences found (text needs '.', '!' or '?' terminators).".dimmed()
                );
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            skimmer::status::show(&config);
        }
    }

    Ok(())
}

/// Read a transcript from a file, or from stdin when no file is given.
fn read_transcript(file: Option<&str>) -> Result<Transcript> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("Failed to read transcript file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read transcript from stdin")?;
            buf
        }
    };

    let transcript = Transcript::provided(&raw);
    info!(chars = transcript.text.len(), "Loaded transcript");
    Ok(transcript)
}

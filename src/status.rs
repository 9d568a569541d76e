// Configuration status display: what the analyzer will run with.

use crate::config::Config;
use crate::output::truncate_chars;

/// Display the effective configuration to the terminal.
pub fn show(config: &Config) {
    let analysis = &config.analysis;

    match &config.keywords_file {
        Some(path) => println!("Keywords: loaded from {}", path.display()),
        None => println!("Keywords: built-in"),
    }
    println!(
        "  Topic terms: {} ({})",
        analysis.topic_keywords.len(),
        preview_terms(analysis.topic_keywords.terms())
    );
    println!(
        "  Importance terms: {} ({})",
        analysis.importance_keywords.len(),
        preview_terms(analysis.importance_keywords.terms())
    );

    println!(
        "Classification threshold: max({}, words / {})",
        analysis.threshold_floor, analysis.threshold_divisor
    );
    println!(
        "Length bonus: more than {} and fewer than {} words",
        analysis.sentence_word_bounds.min, analysis.sentence_word_bounds.max
    );
    println!("Max summary points: {}", analysis.max_points);
    println!(
        "Programming videos: {}",
        if config.skip_programming {
            "skipped"
        } else {
            "summarized"
        }
    );
    println!("Fetch timeout: {}s", config.fetch_timeout.as_secs());
    println!("Timed-text endpoint: {}", config.timedtext_url);
    println!("oEmbed endpoint: {}", config.oembed_url);
}

fn preview_terms(terms: &[String]) -> String {
    truncate_chars(&terms.join(", "), 60)
}

// Skimmer: extractive summaries of video transcripts.
//
// This is the library root. The analysis core is `text`, `keywords`,
// `topics`, and `scoring`; everything else acquires input for it or
// presents its results.

pub mod config;
pub mod keywords;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod status;
pub mod text;
pub mod topics;
pub mod transcript;

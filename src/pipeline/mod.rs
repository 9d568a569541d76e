// Analysis pipeline: acquire a transcript, classify it, summarize it.

pub mod analyze;

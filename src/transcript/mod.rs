// Transcript acquisition: turning a video reference into one plain string.
//
// The TranscriptSource trait defines a single fetch strategy. The acquirer
// chains sources in order and falls back to a fixed transcript when every
// source fails, so callers always get some text back.

pub mod acquire;
pub mod traits;
pub mod video;
pub mod youtube;

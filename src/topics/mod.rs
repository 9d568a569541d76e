// Topic classification: deciding whether a video is about programming.

pub mod classifier;
pub mod traits;

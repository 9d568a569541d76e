// Topic classifier trait: swap-ready abstraction.
//
// The pipeline only needs a yes/no answer plus an explanation of how it was
// reached. The default implementation counts whole-word keyword hits against
// a length-scaled threshold; anything smarter can slot in behind this trait.

use super::classifier::Classification;

/// Trait for deciding whether a video belongs to the excluded topic.
pub trait TopicClassifier {
    /// Classify a video from its title and transcript.
    ///
    /// Must be pure: the same inputs always produce the same result.
    fn classify(&self, title: &str, transcript: &str) -> Classification;
}

// Sentence salience scoring: ranking transcript sentences for the summary.

pub mod salience;

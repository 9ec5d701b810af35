//! Cumulative sentiment timeline derivation.
//!
//! The provider labels each transcript segment with a sentiment and a start
//! offset in milliseconds. The dashboard wants a running score it can plot
//! over time, so this module folds the labels into one cumulative series.

use serde::{Deserialize, Serialize};

/// One sentiment-labeled segment as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentResult {
    /// Sentiment label, usually "POSITIVE", "NEGATIVE" or "NEUTRAL".
    pub sentiment: String,
    /// Segment start offset in milliseconds.
    pub start: u64,
}

/// A single point on the cumulative sentiment chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentPoint {
    /// Segment start in seconds.
    pub timestamp: f64,
    /// Running score after this segment's contribution.
    pub score: i64,
}

/// Fold the provider's sentiment segments into a cumulative score timeline.
///
/// "POSITIVE" adds one, "NEGATIVE" subtracts one, and any other label
/// ("NEUTRAL" included) leaves the score untouched. One point is emitted per
/// segment, in input order, carrying the accumulator value after that
/// segment's own delta. Start offsets are converted from milliseconds to
/// seconds without rounding.
pub fn score_timeline(results: &[SentimentResult]) -> Vec<SentimentPoint> {
    let mut score: i64 = 0;

    results
        .iter()
        .map(|segment| {
            score += match segment.sentiment.as_str() {
                "POSITIVE" => 1,
                "NEGATIVE" => -1,
                _ => 0,
            };

            SentimentPoint {
                timestamp: segment.start as f64 / 1000.0,
                score,
            }
        })
        .collect()
}

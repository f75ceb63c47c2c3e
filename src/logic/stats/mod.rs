//! Inbox Statistics
//!
//! Pure reductions over the stored records for display: label tallies,
//! percentages, and the ordered score series for the trend view.

use serde::Serialize;

use crate::logic::analysis::{SecurityLabel, SentimentLabel};
use crate::logic::store::EmailRecord;

// ============================================================================
// SUMMARY TYPES
// ============================================================================

/// Tallies over the sentiment partition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Tallies over the security partition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecurityCounts {
    pub safe: usize,
    pub caution: usize,
    pub phishing_suspected: usize,
}

impl SecurityCounts {
    pub fn total(&self) -> usize {
        self.safe + self.caution + self.phishing_suspected
    }
}

/// Full summary of the record collection
#[derive(Debug, Clone, Serialize)]
pub struct InboxSummary {
    pub total: usize,
    pub sentiment: SentimentCounts,
    pub security: SecurityCounts,
    /// One score per record, in collection (insertion) order.
    /// Raw values, no smoothing.
    pub score_series: Vec<f32>,
}

impl InboxSummary {
    /// Share of the collection a tally represents, in percent.
    /// Defined as 0 for the empty collection.
    pub fn percent(&self, count: usize) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            count as f32 * 100.0 / self.total as f32
        }
    }
}

// ============================================================================
// SUMMARIZE
// ============================================================================

/// Reduce the full record collection into display summaries
///
/// No weighting, no time decay; total over any collection including the
/// empty one.
pub fn summarize(emails: &[EmailRecord]) -> InboxSummary {
    let mut sentiment = SentimentCounts::default();
    let mut security = SecurityCounts::default();
    let mut score_series = Vec::with_capacity(emails.len());

    for email in emails {
        match email.sentiment {
            SentimentLabel::Positive => sentiment.positive += 1,
            SentimentLabel::Neutral => sentiment.neutral += 1,
            SentimentLabel::Negative => sentiment.negative += 1,
        }
        match email.security {
            SecurityLabel::Safe => security.safe += 1,
            SecurityLabel::Caution => security.caution += 1,
            SecurityLabel::PhishingSuspected => security.phishing_suspected += 1,
        }
        score_series.push(email.score);
    }

    InboxSummary {
        total: emails.len(),
        sentiment,
        security,
        score_series,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sentiment: SentimentLabel, security: SecurityLabel, score: f32) -> EmailRecord {
        EmailRecord {
            subject: "s".to_string(),
            message: "m".to_string(),
            timestamp: "2026-08-29 10:30".to_string(),
            sentiment,
            security,
            score,
        }
    }

    #[test]
    fn test_empty_collection() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.sentiment, SentimentCounts::default());
        assert_eq!(summary.security, SecurityCounts::default());
        assert!(summary.score_series.is_empty());
        assert_eq!(summary.percent(0), 0.0);
    }

    #[test]
    fn test_partitions_sum_to_total() {
        let emails = vec![
            record(SentimentLabel::Positive, SecurityLabel::Safe, 0.5),
            record(SentimentLabel::Positive, SecurityLabel::Caution, 0.3),
            record(SentimentLabel::Neutral, SecurityLabel::Safe, 0.0),
            record(SentimentLabel::Negative, SecurityLabel::PhishingSuspected, -0.4),
            record(SentimentLabel::Negative, SecurityLabel::Safe, -0.2),
        ];

        let summary = summarize(&emails);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.sentiment.total(), 5);
        assert_eq!(summary.security.total(), 5);
        assert_eq!(summary.sentiment.positive, 2);
        assert_eq!(summary.sentiment.neutral, 1);
        assert_eq!(summary.sentiment.negative, 2);
        assert_eq!(summary.security.safe, 3);
        assert_eq!(summary.security.caution, 1);
        assert_eq!(summary.security.phishing_suspected, 1);
    }

    #[test]
    fn test_score_series_preserves_order() {
        let emails = vec![
            record(SentimentLabel::Positive, SecurityLabel::Safe, 0.9),
            record(SentimentLabel::Negative, SecurityLabel::Safe, -0.9),
            record(SentimentLabel::Neutral, SecurityLabel::Safe, 0.0),
        ];

        let summary = summarize(&emails);
        assert_eq!(summary.score_series, vec![0.9, -0.9, 0.0]);
    }

    #[test]
    fn test_percentages() {
        let emails = vec![
            record(SentimentLabel::Positive, SecurityLabel::Safe, 0.5),
            record(SentimentLabel::Positive, SecurityLabel::Safe, 0.5),
            record(SentimentLabel::Neutral, SecurityLabel::Safe, 0.0),
            record(SentimentLabel::Neutral, SecurityLabel::Safe, 0.0),
        ];

        let summary = summarize(&emails);
        assert_eq!(summary.percent(summary.sentiment.positive), 50.0);
        assert_eq!(summary.percent(summary.security.safe), 100.0);
    }
}

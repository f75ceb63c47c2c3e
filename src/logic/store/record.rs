//! Email Record
//!
//! The sole persisted entity. Immutable after creation: the labels and
//! score are derived from the message once, at submit time, and never
//! recomputed.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::logic::analysis::{Analysis, SecurityLabel, SentimentLabel};

/// Minute-resolution creation stamp, matching the inbox display format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One classified email message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// User-supplied subject line, non-empty at creation
    pub subject: String,
    /// Free text body, non-empty at creation
    pub message: String,
    /// Creation time, `YYYY-MM-DD HH:MM`, set once
    pub timestamp: String,
    /// Derived sentiment label, pure function of `message` at creation
    pub sentiment: SentimentLabel,
    /// Derived security label, pure function of `message` at creation
    pub security: SecurityLabel,
    /// Polarity score in [-1.0, 1.0]
    pub score: f32,
}

impl EmailRecord {
    /// Build a record from validated input and its analysis,
    /// stamped with the current local time
    pub fn create(subject: &str, message: &str, analysis: &Analysis) -> Self {
        Self {
            subject: subject.to_string(),
            message: message.to_string(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            sentiment: analysis.sentiment,
            security: analysis.security,
            score: analysis.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_analysis() -> Analysis {
        Analysis {
            sentiment: SentimentLabel::Positive,
            security: SecurityLabel::Safe,
            score: 0.4,
            matched_indicators: vec![],
        }
    }

    #[test]
    fn test_create_copies_derived_fields() {
        let record = EmailRecord::create("Hello", "Nice to meet you", &sample_analysis());
        assert_eq!(record.subject, "Hello");
        assert_eq!(record.sentiment, SentimentLabel::Positive);
        assert_eq!(record.security, SecurityLabel::Safe);
        assert_eq!(record.score, 0.4);
    }

    #[test]
    fn test_timestamp_is_minute_resolution() {
        let record = EmailRecord::create("s", "m", &sample_analysis());
        // "YYYY-MM-DD HH:MM" = 16 chars, no seconds
        assert_eq!(record.timestamp.len(), 16);
        assert_eq!(&record.timestamp[10..11], " ");
    }

    #[test]
    fn test_record_json_shape() {
        let record = EmailRecord::create("Offer", "free money", &sample_analysis());
        let json = serde_json::to_value(&record).unwrap();
        for field in ["subject", "message", "timestamp", "sentiment", "security", "score"] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        // Matched indicators are informational, never persisted
        assert!(json.get("matched_indicators").is_none());
    }
}

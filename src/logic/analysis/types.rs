//! Analysis Types
//!
//! Core types for message classification. No logic here, only data
//! structures shared by the classifier, the store and the boundary.

use serde::{Deserialize, Serialize};

// ============================================================================
// SENTIMENT LABEL
// ============================================================================

/// Sentiment classification of a message body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Polarity at or above the positive threshold
    Positive,
    /// Polarity inside the neutral dead zone
    Neutral,
    /// Polarity at or below the negative threshold
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }

    /// Display glyph for the presentation boundary.
    /// Never persisted; the stored label is the clean enum.
    pub fn glyph(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😊",
            SentimentLabel::Neutral => "😐",
            SentimentLabel::Negative => "😔",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SECURITY LABEL
// ============================================================================

/// Phishing-heuristic classification of a message body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityLabel {
    /// No phishing indicators found
    Safe,
    /// Exactly one indicator found, worth a second look
    Caution,
    /// Two or more indicators found
    PhishingSuspected,
}

impl SecurityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityLabel::Safe => "safe",
            SecurityLabel::Caution => "caution",
            SecurityLabel::PhishingSuspected => "phishing_suspected",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            SecurityLabel::Safe => 0,
            SecurityLabel::Caution => 1,
            SecurityLabel::PhishingSuspected => 2,
        }
    }

    /// Display glyph for the presentation boundary.
    /// Never persisted; the stored label is the clean enum.
    pub fn glyph(&self) -> &'static str {
        match self {
            SecurityLabel::Safe => "✅",
            SecurityLabel::Caution => "⚠️",
            SecurityLabel::PhishingSuspected => "🚨",
        }
    }

    /// Human-readable headline for the presentation boundary
    pub fn headline(&self) -> &'static str {
        match self {
            SecurityLabel::Safe => "Looks Safe",
            SecurityLabel::Caution => "Be Careful",
            SecurityLabel::PhishingSuspected => "Possible Phishing",
        }
    }
}

impl std::fmt::Display for SecurityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// ANALYSIS RESULT
// ============================================================================

/// Result of classifying one message body
///
/// Pure function of the input text: the same text always produces the
/// same analysis. `matched_indicators` is informational for the boundary
/// and is never persisted with the record.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub sentiment: SentimentLabel,
    pub security: SecurityLabel,
    /// Polarity score in [-1.0, 1.0]
    pub score: f32,
    /// Which phishing indicators were found in the text
    pub matched_indicators: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_serialize_without_glyphs() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"Positive\"");
        assert!(!json.contains('😊'));

        let json = serde_json::to_string(&SecurityLabel::PhishingSuspected).unwrap();
        assert_eq!(json, "\"PhishingSuspected\"");
        assert!(!json.contains('🚨'));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(SecurityLabel::Safe.severity_level() < SecurityLabel::Caution.severity_level());
        assert!(
            SecurityLabel::Caution.severity_level()
                < SecurityLabel::PhishingSuspected.severity_level()
        );
    }
}

//! Message Classifier
//!
//! Only classify logic here - no types, no thresholds.
//! Input: message text + a polarity provider
//! Output: Analysis (sentiment label, security label, score)

use super::rules::{ClassifierThresholds, PHISHING_INDICATORS};
use super::types::{Analysis, SecurityLabel, SentimentLabel};
use crate::logic::sentiment::PolarityProvider;

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify a message body
///
/// Deterministic and explainable: the sentiment label is a pure function
/// of the polarity score via fixed thresholds, the security label a pure
/// function of the indicator count. The caller guarantees non-empty text.
pub fn classify<P: PolarityProvider>(text: &str, provider: &P) -> Analysis {
    classify_with_thresholds(text, provider, &ClassifierThresholds::default())
}

/// Classification with custom thresholds
pub fn classify_with_thresholds<P: PolarityProvider>(
    text: &str,
    provider: &P,
    thresholds: &ClassifierThresholds,
) -> Analysis {
    let score = provider.polarity(text).clamp(-1.0, 1.0);
    let sentiment = sentiment_from_score(score, thresholds);

    let matched_indicators = matched_indicators(text);
    let security = security_from_count(matched_indicators.len(), thresholds);

    Analysis {
        sentiment,
        security,
        score,
        matched_indicators,
    }
}

/// Map a polarity score onto a sentiment label
pub fn sentiment_from_score(score: f32, thresholds: &ClassifierThresholds) -> SentimentLabel {
    if score >= thresholds.positive_min {
        SentimentLabel::Positive
    } else if score <= thresholds.negative_max {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Map an indicator count onto a security label
pub fn security_from_count(count: usize, thresholds: &ClassifierThresholds) -> SecurityLabel {
    if count >= thresholds.phishing_suspected_min {
        SecurityLabel::PhishingSuspected
    } else if count >= 1 {
        SecurityLabel::Caution
    } else {
        SecurityLabel::Safe
    }
}

/// Find which phishing indicators appear in the text
///
/// Case-insensitive substring containment, not word-boundary tokenized:
/// an indicator inside a larger word still counts. Each indicator is
/// counted at most once regardless of repetitions.
pub fn matched_indicators(text: &str) -> Vec<&'static str> {
    let haystack = text.to_lowercase();
    PHISHING_INDICATORS
        .iter()
        .filter(|term| haystack.contains(*term))
        .copied()
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

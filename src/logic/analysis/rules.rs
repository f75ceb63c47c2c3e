//! Classification Rules & Thresholds
//!
//! Defines the thresholds and the phishing indicator list.
//! No classify logic here, only constants and config.

use serde::{Deserialize, Serialize};

// ============================================================================
// SENTIMENT THRESHOLDS
// ============================================================================

/// At or above this polarity = Positive
pub const POSITIVE_THRESHOLD: f32 = 0.05;

/// At or below this polarity = Negative
///
/// Symmetric with the positive threshold: the dead zone between them is
/// 0.1 wide so near-zero polarity is not over-classified as directional.
pub const NEGATIVE_THRESHOLD: f32 = -0.05;

// ============================================================================
// PHISHING INDICATORS
// ============================================================================

/// Fixed indicator list checked by case-insensitive substring containment.
/// Each indicator counts at most once per message.
pub const PHISHING_INDICATORS: [&str; 8] = [
    "urgent",
    "click now",
    "verify account",
    "suspended",
    "limited time",
    "act now",
    "money",
    "free",
];

/// At or above this many distinct indicators = PhishingSuspected
pub const PHISHING_SUSPECTED_MIN: usize = 2;

// ============================================================================
// CONFIGURABLE THRESHOLDS (for runtime adjustment)
// ============================================================================

/// Thresholds for classification (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    /// At or above this polarity = Positive
    pub positive_min: f32,
    /// At or below this polarity = Negative, between = Neutral
    pub negative_max: f32,
    /// Indicator count at or above this = PhishingSuspected
    pub phishing_suspected_min: usize,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            positive_min: POSITIVE_THRESHOLD,
            negative_max: NEGATIVE_THRESHOLD,
            phishing_suspected_min: PHISHING_SUSPECTED_MIN,
        }
    }
}

impl ClassifierThresholds {
    /// High sensitivity - lower thresholds, more alerts
    pub fn high_sensitivity() -> Self {
        Self {
            positive_min: 0.02,
            negative_max: -0.02,
            phishing_suspected_min: 1,
        }
    }

    /// Low sensitivity - higher thresholds, fewer alerts
    pub fn low_sensitivity() -> Self {
        Self {
            positive_min: 0.1,
            negative_max: -0.1,
            phishing_suspected_min: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dead_zone_is_symmetric() {
        let t = ClassifierThresholds::default();
        assert_eq!(t.positive_min, -t.negative_max);
    }

    #[test]
    fn test_indicator_list_is_lowercase() {
        // Matching lowercases the text once, so the indicators themselves
        // must already be lowercase.
        for term in PHISHING_INDICATORS {
            assert_eq!(term, term.to_lowercase());
        }
    }
}

//! Message Analysis
//!
//! Sentiment + phishing classification of message bodies.
//! Split like the other logic modules: types / rules / classifier.

pub mod classifier;
pub mod rules;
pub mod types;

pub use classifier::{classify, classify_with_thresholds, matched_indicators};
pub use rules::{ClassifierThresholds, PHISHING_INDICATORS};
pub use types::{Analysis, SecurityLabel, SentimentLabel};

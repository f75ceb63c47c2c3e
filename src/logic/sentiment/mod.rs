//! Sentiment Polarity
//!
//! The classifier only needs `polarity(text) -> [-1, 1]`; the trait keeps
//! that seam open so a heavier NLP backend can replace the built-in
//! lexicon analyzer without touching classification.

pub mod lexicon;

use self::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};

// ============================================================================
// PROVIDER TRAIT
// ============================================================================

/// Source of polarity scores
pub trait PolarityProvider {
    /// Polarity of the text in [-1.0, 1.0].
    /// Negative = negative tone, positive = positive tone, near zero = neutral.
    fn polarity(&self, text: &str) -> f32;
}

// ============================================================================
// LEXICON ANALYZER
// ============================================================================

/// Word-list based polarity analyzer
///
/// Tokenizes on non-alphanumeric boundaries, lowercases, and scores
/// `(positive_hits - negative_hits) / token_count`. Crude but
/// deterministic, dependency-free and fast.
#[derive(Debug, Default)]
pub struct LexiconAnalyzer;

/// Detailed output of one lexicon pass
#[derive(Debug, Clone)]
pub struct PolarityBreakdown {
    pub score: f32,
    pub positive_hits: usize,
    pub negative_hits: usize,
    pub token_count: usize,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score the text and report the hit counts behind the score
    pub fn analyze(&self, text: &str) -> PolarityBreakdown {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return PolarityBreakdown {
                score: 0.0,
                positive_hits: 0,
                negative_hits: 0,
                token_count: 0,
            };
        }

        let positive_hits = tokens.iter().filter(|t| POSITIVE_WORDS.contains(*t)).count();
        let negative_hits = tokens.iter().filter(|t| NEGATIVE_WORDS.contains(*t)).count();

        let raw = (positive_hits as f32 - negative_hits as f32) / tokens.len() as f32;

        PolarityBreakdown {
            score: raw.clamp(-1.0, 1.0),
            positive_hits,
            negative_hits,
            token_count: tokens.len(),
        }
    }
}

impl PolarityProvider for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> f32 {
        self.analyze(text).score
    }
}

// ============================================================================
// TESTS
// ============================================================================

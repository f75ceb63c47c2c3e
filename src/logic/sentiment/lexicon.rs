//! Sentiment Lexicons
//!
//! Static word lists for the lexicon analyzer. General-purpose email
//! vocabulary, not domain-tuned.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Words that pull polarity toward positive
pub static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Gratitude and praise
        "thanks", "thank", "grateful", "appreciate", "appreciated", "congrats",
        "congratulations", "welcome", "kudos", "praise",
        // Quality
        "good", "great", "excellent", "amazing", "awesome", "wonderful",
        "fantastic", "brilliant", "outstanding", "superb", "perfect", "best",
        "nice", "lovely", "solid", "impressive", "remarkable", "terrific",
        // Emotion
        "happy", "glad", "pleased", "delighted", "excited", "love", "loved",
        "enjoy", "enjoyed", "proud", "thrilled", "cheerful", "hopeful",
        // Outcomes
        "success", "successful", "win", "won", "achieved", "accomplished",
        "improved", "improvement", "resolved", "fixed", "helpful", "smooth",
        "easy", "beneficial", "positive", "agree", "agreed", "approve",
        "approved", "recommend", "recommended",
    ]
    .into_iter()
    .collect()
});

/// Words that pull polarity toward negative
pub static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Quality
        "bad", "terrible", "awful", "horrible", "poor", "worst", "useless",
        "broken", "wrong", "faulty", "inferior", "unacceptable",
        // Emotion
        "hate", "hated", "angry", "upset", "sad", "unhappy", "disappointed",
        "disappointing", "frustrated", "frustrating", "annoyed", "annoying",
        "worried", "afraid", "fear", "miserable", "regret", "sorry",
        // Outcomes
        "fail", "failed", "failure", "problem", "problems", "error", "errors",
        "mistake", "mistakes", "delay", "delayed", "loss", "lost", "damage",
        "damaged", "broke", "crash", "crashed", "cancel", "cancelled",
        "refuse", "refused", "reject", "rejected", "decline", "declined",
        "complaint", "complaints", "dispute", "penalty", "overdue",
        // Pressure and risk
        "urgent", "emergency", "crisis", "threat", "warning", "risk",
        "danger", "dangerous", "suspended", "scam", "fraud", "unfortunately",
        "never", "impossible", "blocked",
    ]
    .into_iter()
    .collect()
});

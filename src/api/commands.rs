//! Command Layer
//!
//! The boundary the presentation front-end calls into. Input validation
//! happens here, before anything reaches the classifier or the store;
//! no record is ever created from invalid input.

use serde::Serialize;

use crate::logic::analysis;
use crate::logic::sentiment::PolarityProvider;
use crate::logic::stats::{self, InboxSummary};
use crate::logic::store::{EmailRecord, InboxStore, StoreError};

// ============================================================================
// ERRORS
// ============================================================================

/// Errors surfaced at the command boundary
#[derive(Debug)]
pub enum CommandError {
    /// Rejected input: empty subject or message. Handled at the boundary,
    /// the classifier and store never see it.
    Validation(String),

    /// Storage failure (corrupt database, I/O, bad schema version).
    /// Propagated as-is, no retry, no auto-repair.
    Store(StoreError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "{}", msg),
            Self::Store(e) => write!(f, "storage error: {}", e),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<StoreError> for CommandError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

// ============================================================================
// SUBMIT
// ============================================================================

/// What the caller gets back after a successful submit
#[derive(Debug, Clone, Serialize)]
pub struct SubmitReceipt {
    /// The record as persisted
    pub record: EmailRecord,
    /// Which phishing indicators were found (informational, not persisted)
    pub matched_indicators: Vec<&'static str>,
}

/// Classify a new email and append it to the inbox
pub fn submit_email<P: PolarityProvider>(
    store: &InboxStore,
    provider: &P,
    subject: &str,
    message: &str,
) -> Result<SubmitReceipt, CommandError> {
    if subject.trim().is_empty() || message.trim().is_empty() {
        return Err(CommandError::Validation(
            "Please fill in both subject and message".to_string(),
        ));
    }

    let analysis = analysis::classify(message, provider);
    if analysis.security.severity_level() > 0 {
        log::warn!(
            "Suspicious message submitted: {} indicator(s) matched: {:?}",
            analysis.matched_indicators.len(),
            analysis.matched_indicators
        );
    }

    let record = EmailRecord::create(subject, message, &analysis);
    store.append(record.clone())?;

    log::info!(
        "Email '{}' classified as {} / {} (score {:.2})",
        record.subject,
        record.sentiment,
        record.security,
        record.score
    );

    Ok(SubmitReceipt {
        record,
        matched_indicators: analysis.matched_indicators,
    })
}

// ============================================================================
// INBOX
// ============================================================================

/// Full inbox, newest first (display order)
pub fn list_inbox(store: &InboxStore) -> Result<Vec<EmailRecord>, CommandError> {
    let mut emails = store.load()?;
    emails.reverse();
    Ok(emails)
}

// ============================================================================
// STATISTICS
// ============================================================================

/// Summary tables over the whole inbox
pub fn get_statistics(store: &InboxStore) -> Result<InboxSummary, CommandError> {
    let emails = store.load()?;
    Ok(stats::summarize(&emails))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::analysis::{SecurityLabel, SentimentLabel};
    use crate::logic::sentiment::LexiconAnalyzer;
    use crate::logic::store::JsonStore;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> InboxStore {
        InboxStore::new(JsonStore::new(dir.path().join("inbox.json")))
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let result = submit_email(&store, &LexiconAnalyzer::new(), "   ", "hello there");
        assert!(matches!(result, Err(CommandError::Validation(_))));
        // No record was created
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let result = submit_email(&store, &LexiconAnalyzer::new(), "subject", "\n\t ");
        assert!(matches!(result, Err(CommandError::Validation(_))));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_submit_persists_classified_record() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let receipt = submit_email(
            &store,
            &LexiconAnalyzer::new(),
            "Great news",
            "Thanks so much, great work!",
        )
        .unwrap();
        assert_eq!(receipt.record.sentiment, SentimentLabel::Positive);
        assert_eq!(receipt.record.security, SecurityLabel::Safe);
        assert!(receipt.matched_indicators.is_empty());

        let emails = store.load().unwrap();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0], receipt.record);
    }

    #[test]
    fn test_submit_flags_phishing() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let receipt = submit_email(
            &store,
            &LexiconAnalyzer::new(),
            "Account notice",
            "This is urgent, please act now to verify account",
        )
        .unwrap();
        assert_eq!(receipt.record.security, SecurityLabel::PhishingSuspected);
        assert_eq!(receipt.record.sentiment, SentimentLabel::Negative);
        assert_eq!(
            receipt.matched_indicators,
            vec!["urgent", "verify account", "act now"]
        );
    }

    #[test]
    fn test_inbox_is_newest_first() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let analyzer = LexiconAnalyzer::new();

        submit_email(&store, &analyzer, "first", "The meeting is at 3pm.").unwrap();
        submit_email(&store, &analyzer, "second", "See you tomorrow.").unwrap();

        let inbox = list_inbox(&store).unwrap();
        assert_eq!(inbox[0].subject, "second");
        assert_eq!(inbox[1].subject, "first");
    }

    #[test]
    fn test_statistics_over_submissions() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let analyzer = LexiconAnalyzer::new();

        submit_email(&store, &analyzer, "a", "Thanks so much, great work!").unwrap();
        submit_email(&store, &analyzer, "b", "The meeting is at 3pm.").unwrap();
        submit_email(
            &store,
            &analyzer,
            "c",
            "This is urgent, please act now to verify account",
        )
        .unwrap();

        let summary = get_statistics(&store).unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.sentiment.positive, 1);
        assert_eq!(summary.sentiment.neutral, 1);
        assert_eq!(summary.sentiment.negative, 1);
        assert_eq!(summary.security.safe, 2);
        assert_eq!(summary.security.phishing_suspected, 1);
        assert_eq!(summary.score_series.len(), 3);
    }
}

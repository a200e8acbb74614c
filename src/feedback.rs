use crate::errors::SessionError;
use crate::providers::FeedbackProvider;
use crate::query::ResultSet;
use crate::types::{DocumentId, ResultSetId, SentenceId};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Binary relevance feedback for one result item.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// One recorded feedback entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub document_id: DocumentId,
    pub sentence_id: Option<SentenceId>,
    pub polarity: Polarity,
    pub recorded_at: DateTime<Utc>,
}

/// In-memory feedback store, usable as the session's feedback provider when
/// no remote service is configured.
///
/// A result set must be registered before feedback against its items is
/// accepted; re-submitting feedback for the same (document, sentence) pair
/// overwrites the earlier polarity.
#[derive(Default)]
pub struct MemoryFeedbackStore {
    data: Mutex<HashMap<ResultSetId, HashMap<(DocumentId, Option<SentenceId>), FeedbackRecord>>>,
}

impl MemoryFeedbackStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All feedback recorded against a result set, unordered.
    #[must_use]
    pub fn feedback_for(&self, result_set_id: &ResultSetId) -> Vec<FeedbackRecord> {
        self.data
            .lock()
            .get(result_set_id)
            .map(|entries| entries.values().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_registered(&self, result_set_id: &ResultSetId) -> bool {
        self.data.lock().contains_key(result_set_id)
    }
}

impl FeedbackProvider for MemoryFeedbackStore {
    fn register(&self, results: &ResultSet) -> Result<(), SessionError> {
        self.data.lock().entry(results.id).or_default();
        log::debug!("result set {} registered for feedback", results.id);
        Ok(())
    }

    fn add_feedback(
        &self,
        result_set_id: &ResultSetId,
        document_id: &DocumentId,
        sentence_id: Option<&SentenceId>,
        polarity: Polarity,
    ) -> Result<(), SessionError> {
        let mut data = self.data.lock();
        let entries = data
            .get_mut(result_set_id)
            .ok_or_else(|| SessionError::UnknownResultSet(result_set_id.to_string()))?;
        entries.insert(
            (document_id.clone(), sentence_id.copied()),
            FeedbackRecord {
                document_id: document_id.clone(),
                sentence_id: sentence_id.copied(),
                polarity,
                recorded_at: Utc::now(),
            },
        );
        log::debug!("feedback recorded for document {document_id}");
        Ok(())
    }

    fn alive(&self) -> Result<bool, SessionError> {
        Ok(true)
    }
}

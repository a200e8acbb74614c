#![allow(dead_code)]

// Mock providers shared by the integration tests.

use parking_lot::Mutex;
use searchdeck::document::{Document, Sentence};
use searchdeck::errors::SessionError;
use searchdeck::feedback::{MemoryFeedbackStore, Polarity};
use searchdeck::providers::{FeedbackProvider, FetchProvider, FetchResult, SearchProvider};
use searchdeck::query::{ResultItem, ResultSet, SearchQuery};
use searchdeck::types::{DocumentId, ResultSetId, SentenceId};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A document with one sentence per text snippet.
pub fn doc_with_sentences(id: &str, sentences: &[&str]) -> Document {
    let mut offset = 0;
    let mut built = Vec::new();
    for text in sentences {
        let end = offset + text.len();
        built.push(Sentence::new(*text, offset, end));
        offset = end + 1;
    }
    Document::new(id, sentences.join(" ")).with_sentences(built)
}

pub fn item(document_id: &str, sentence_id: Option<SentenceId>, score: f64) -> ResultItem {
    ResultItem::new(document_id, sentence_id, score)
}

/// Search provider that answers every query with a fixed item list and
/// records what it was asked.
pub struct RecordingSearchProvider {
    pub items: Vec<ResultItem>,
    pub calls: Arc<AtomicUsize>,
    pub last_query: Arc<Mutex<Option<SearchQuery>>>,
}

impl RecordingSearchProvider {
    pub fn new(items: Vec<ResultItem>) -> Self {
        Self { items, calls: Arc::new(AtomicUsize::new(0)), last_query: Arc::new(Mutex::new(None)) }
    }
}

impl SearchProvider for RecordingSearchProvider {
    fn search(&self, query: &SearchQuery) -> Result<ResultSet, SessionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock() = Some(query.clone());
        Ok(ResultSet::new(query.clone(), self.items.clone()))
    }

    fn alive(&self) -> Result<bool, SessionError> {
        Ok(true)
    }
}

pub struct FailingSearchProvider;

impl SearchProvider for FailingSearchProvider {
    fn search(&self, _query: &SearchQuery) -> Result<ResultSet, SessionError> {
        Err(SessionError::Search("search backend offline".to_string()))
    }

    fn alive(&self) -> Result<bool, SessionError> {
        Ok(false)
    }
}

/// Fetch provider backed by a fixed document map, counting fetch calls.
pub struct MapFetchProvider {
    docs: HashMap<DocumentId, Document>,
    pub calls: Arc<AtomicUsize>,
    pub alive: bool,
}

impl MapFetchProvider {
    pub fn new(docs: Vec<Document>) -> Self {
        Self {
            docs: docs.into_iter().map(|d| (d.id.clone(), d)).collect(),
            calls: Arc::new(AtomicUsize::new(0)),
            alive: true,
        }
    }

    pub fn dead(docs: Vec<Document>) -> Self {
        Self { alive: false, ..Self::new(docs) }
    }
}

impl FetchProvider for MapFetchProvider {
    fn fetch(&self, ids: &[DocumentId]) -> Result<FetchResult, SessionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let documents = ids.iter().filter_map(|id| self.docs.get(id).cloned()).collect();
        Ok(FetchResult { documents })
    }

    fn alive(&self) -> Result<bool, SessionError> {
        Ok(self.alive)
    }
}

pub struct FailingFetchProvider;

impl FetchProvider for FailingFetchProvider {
    fn fetch(&self, _ids: &[DocumentId]) -> Result<FetchResult, SessionError> {
        Err(SessionError::Fetch("fetch service unavailable".to_string()))
    }

    fn alive(&self) -> Result<bool, SessionError> {
        Err(SessionError::Fetch("connection refused".to_string()))
    }
}

/// Delegating wrapper so a test can keep a handle on the store after the
/// session takes ownership of the provider.
pub struct SharedFeedback(pub Arc<MemoryFeedbackStore>);

impl FeedbackProvider for SharedFeedback {
    fn register(&self, results: &ResultSet) -> Result<(), SessionError> {
        self.0.register(results)
    }

    fn add_feedback(
        &self,
        result_set_id: &ResultSetId,
        document_id: &DocumentId,
        sentence_id: Option<&SentenceId>,
        polarity: Polarity,
    ) -> Result<(), SessionError> {
        self.0.add_feedback(result_set_id, document_id, sentence_id, polarity)
    }

    fn alive(&self) -> Result<bool, SessionError> {
        self.0.alive()
    }
}

pub struct FailingFeedbackProvider;

impl FeedbackProvider for FailingFeedbackProvider {
    fn register(&self, _results: &ResultSet) -> Result<(), SessionError> {
        Err(SessionError::Feedback("feedback store rejected registration".to_string()))
    }

    fn add_feedback(
        &self,
        _result_set_id: &ResultSetId,
        _document_id: &DocumentId,
        _sentence_id: Option<&SentenceId>,
        _polarity: Polarity,
    ) -> Result<(), SessionError> {
        Err(SessionError::Feedback("feedback store write failed".to_string()))
    }

    fn alive(&self) -> Result<bool, SessionError> {
        Err(SessionError::Feedback("connection refused".to_string()))
    }
}

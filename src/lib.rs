pub mod cache;
pub mod config;
pub mod display;
pub mod document;
pub mod errors;
pub mod events;
pub mod feedback;
pub mod logger;
pub mod providers;
pub mod query;
pub mod render;
pub mod results;
pub mod types;

use crate::cache::{CacheMetricsSnapshot, DocumentCache};
use crate::config::SessionConfig;
use crate::display::{MessageSink, NullSink};
use crate::document::Document;
use crate::errors::SessionError;
use crate::feedback::{MemoryFeedbackStore, Polarity};
use crate::providers::{
    FeedbackProvider, FetchProvider, SearchProvider, SearchRegistry, ServiceReport, summarize,
};
use crate::query::{QueryKind, ResultItem, ResultSet, SearchQuery};
use crate::render::RenderedRow;
use crate::results::{AnnotationTask, ResultsStore};
use crate::types::{DocumentId, MentionId, ResultSetId, SentenceId};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// One interactive search session: the explicitly constructed context object
/// owning the document cache, provider wiring, current result set and user
/// identity. All state lives here rather than in ambient globals; operations
/// take `&self` and are driven from a single UI thread.
pub struct Session {
    config: SessionConfig,
    cache: Mutex<DocumentCache>,
    searchers: SearchRegistry,
    fetcher: Box<dyn FetchProvider>,
    feedback: Box<dyn FeedbackProvider>,
    results: Mutex<ResultsStore>,
    // Result sets already registered with the feedback provider.
    guarded: Mutex<HashSet<ResultSetId>>,
    current: Mutex<Option<ResultSet>>,
    user_id: Mutex<Option<String>>,
    sink: Arc<dyn MessageSink>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Session {
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // --- Query dispatch ---

    /// Dispatches a query to the provider registered for its kind and makes
    /// the response the current result set. Previous user-visible messages
    /// are cleared first.
    pub fn execute_query(&self, query: &SearchQuery) -> Result<ResultSet, SessionError> {
        self.sink.clear();
        let mut query = query.clone();
        if query.user_id.is_none() {
            query.user_id = self.user();
        }
        let results = query::execute(&self.searchers, self.sink.as_ref(), &query)?;
        *self.current.lock() = Some(results.clone());
        Ok(results)
    }

    /// Builds a query from search-box input and dispatches it.
    pub fn search_from_input(
        &self,
        kind: QueryKind,
        input: &str,
        name: Option<&str>,
    ) -> Result<ResultSet, SessionError> {
        self.execute_query(&SearchQuery::from_input(kind, input, name))
    }

    /// Builds an entity-mention query from a clicked span of a document and
    /// dispatches it. The document is resolved through the cache.
    pub fn search_mention(
        &self,
        document_id: &DocumentId,
        mention_id: &MentionId,
    ) -> Result<ResultSet, SessionError> {
        let doc =
            render::resolve_document(&self.cache, self.fetcher.as_ref(), self.sink.as_ref(), document_id)?
                .ok_or_else(|| SessionError::Fetch(format!("document {document_id} is not available")))?;
        let mention = doc
            .mention_with_id(mention_id)
            .ok_or_else(|| SessionError::UnknownMention(mention_id.to_string()))?;
        self.execute_query(&SearchQuery::for_mention(document_id, mention))
    }

    /// The result set currently on display, if any.
    #[must_use]
    pub fn current_results(&self) -> Option<ResultSet> {
        self.current.lock().clone()
    }

    // --- Rendering ---

    /// Renders every row of the current result set.
    pub fn render_current(&self) -> Result<Vec<RenderedRow>, SessionError> {
        let results = self.current_results().ok_or(SessionError::NoCurrentResults)?;
        self.render(&results)
    }

    /// Renders every row of a result set, resolving documents through the
    /// cache with at most one fetch per distinct id.
    pub fn render(&self, results: &ResultSet) -> Result<Vec<RenderedRow>, SessionError> {
        render::render_set(&self.cache, self.fetcher.as_ref(), self.sink.as_ref(), results)
    }

    /// Renders a single document reference outside of any result set, e.g.
    /// for a row opened in its own tab.
    pub fn render_document(
        &self,
        document_id: &DocumentId,
        sentence_id: Option<&SentenceId>,
    ) -> Result<RenderedRow, SessionError> {
        let item = ResultItem::new(document_id.clone(), sentence_id.copied(), 0.0);
        render::render_item(&self.cache, self.fetcher.as_ref(), self.sink.as_ref(), &item)
    }

    /// Pre-warms the cache with an already materialized document.
    pub fn cache_document(&self, document: Document) {
        self.cache.lock().set(document);
    }

    pub fn cache_metrics(&self) -> CacheMetricsSnapshot {
        self.cache.lock().metrics()
    }

    // --- Feedback ---

    /// Submits feedback for an item of the current result set. The result set
    /// is registered with the feedback provider on first use.
    pub fn submit_feedback(
        &self,
        document_id: &DocumentId,
        sentence_id: Option<&SentenceId>,
        polarity: Polarity,
    ) -> Result<(), SessionError> {
        let results = self.current_results().ok_or(SessionError::NoCurrentResults)?;
        self.submit_feedback_for(&results, document_id, sentence_id, polarity)
    }

    /// Submits feedback against an explicit result set.
    pub fn submit_feedback_for(
        &self,
        results: &ResultSet,
        document_id: &DocumentId,
        sentence_id: Option<&SentenceId>,
        polarity: Polarity,
    ) -> Result<(), SessionError> {
        {
            let mut guarded = self.guarded.lock();
            if !guarded.contains(&results.id) {
                self.feedback.register(results).map_err(|err| {
                    self.sink.error(&err.to_string());
                    err
                })?;
                guarded.insert(results.id);
            }
        }
        self.feedback
            .add_feedback(&results.id, document_id, sentence_id, polarity)
            .map_err(|err| {
                self.sink.error(&err.to_string());
                err
            })
    }

    // --- Results registration ---

    /// Registers the current result set for an annotation task.
    pub fn register_results(&self, task: AnnotationTask) -> Result<ResultSetId, SessionError> {
        let results = self.current_results().ok_or(SessionError::NoCurrentResults)?;
        let id = results.id;
        self.results.lock().add(results, task);
        Ok(id)
    }

    /// Registered result sets for a task, newest first. Limit 0 is unlimited.
    #[must_use]
    pub fn results_by_task(&self, task: AnnotationTask, limit: usize) -> Vec<ResultSet> {
        self.results.lock().by_task(task, limit).into_iter().cloned().collect()
    }

    /// The most recently registered result set for a user.
    #[must_use]
    pub fn latest_results_for(&self, user_id: &str) -> Option<ResultSet> {
        self.results.lock().latest_for_user(user_id).cloned()
    }

    // --- Service health ---

    /// Probes every configured provider's liveness endpoint. Failures are
    /// aggregated into a single user-visible message; the session stays
    /// usable either way.
    pub fn probe_services(&self) -> Vec<ServiceReport> {
        let mut reports = Vec::new();
        for kind in QueryKind::ALL {
            if let Some(provider) = self.searchers.get(kind) {
                reports.push(providers::probe(&format!("search ({kind})"), provider.alive()));
            }
        }
        reports.push(providers::probe("fetch", self.fetcher.alive()));
        reports.push(providers::probe("feedback", self.feedback.alive()));
        if let Some(message) = summarize(&reports) {
            self.sink.error(&message);
        }
        reports
    }

    // --- User identity ---

    /// Sets the display name used on queries. Empty names are rejected.
    /// Returns the greeting to show.
    pub fn set_user(&self, name: &str) -> Result<String, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyUserName);
        }
        *self.user_id.lock() = Some(name.to_string());
        Ok(format!("Hello, {name}"))
    }

    #[must_use]
    pub fn user(&self) -> Option<String> {
        self.user_id.lock().clone()
    }
}

/// Builder for [`Session`]. A fetch provider is required; the feedback
/// provider defaults to the in-memory store and the message sink to a
/// discarding one.
#[derive(Default)]
pub struct SessionBuilder {
    config: SessionConfig,
    searchers: SearchRegistry,
    fetcher: Option<Box<dyn FetchProvider>>,
    feedback: Option<Box<dyn FeedbackProvider>>,
    sink: Option<Arc<dyn MessageSink>>,
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn search_provider(
        mut self,
        kind: QueryKind,
        provider: impl SearchProvider + 'static,
    ) -> Self {
        self.searchers.register(kind, Box::new(provider));
        self
    }

    #[must_use]
    pub fn fetch_provider(mut self, provider: impl FetchProvider + 'static) -> Self {
        self.fetcher = Some(Box::new(provider));
        self
    }

    #[must_use]
    pub fn feedback_provider(mut self, provider: impl FeedbackProvider + 'static) -> Self {
        self.feedback = Some(Box::new(provider));
        self
    }

    #[must_use]
    pub fn message_sink(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Result<Session, SessionError> {
        let fetcher = self
            .fetcher
            .ok_or_else(|| SessionError::Config("no fetch provider configured".to_string()))?;
        let user_id = self.config.user_id.clone();
        Ok(Session {
            cache: Mutex::new(DocumentCache::new(self.config.cache_capacity)),
            config: self.config,
            searchers: self.searchers,
            fetcher,
            feedback: self.feedback.unwrap_or_else(|| Box::new(MemoryFeedbackStore::new())),
            results: Mutex::new(ResultsStore::new()),
            guarded: Mutex::new(HashSet::new()),
            current: Mutex::new(None),
            user_id: Mutex::new(user_id),
            sink: self.sink.unwrap_or_else(|| Arc::new(NullSink)),
        })
    }
}

/// Initializes the logging system. Call once before other operations.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    logger::init()?;
    Ok(())
}

mod health;
mod registry;

pub use health::{ServiceReport, ServiceState, summarize};
pub(crate) use health::probe;
pub use registry::SearchRegistry;

use crate::document::Document;
use crate::errors::SessionError;
use crate::query::{ResultSet, SearchQuery};
use crate::types::{DocumentId, ResultSetId, SentenceId};
use crate::feedback::Polarity;

/// The documents a fetch provider returned. May hold fewer documents than
/// were requested; missing ids are not an error at this layer.
#[derive(Debug, Clone, Default)]
pub struct FetchResult {
    pub documents: Vec<Document>,
}

/// Executes structured queries against a remote search service.
pub trait SearchProvider: Send + Sync {
    fn search(&self, query: &SearchQuery) -> Result<ResultSet, SessionError>;

    /// Liveness probe, polled at session start.
    fn alive(&self) -> Result<bool, SessionError>;
}

/// Fetches fully materialized documents by id.
pub trait FetchProvider: Send + Sync {
    fn fetch(&self, ids: &[DocumentId]) -> Result<FetchResult, SessionError>;

    fn alive(&self) -> Result<bool, SessionError>;
}

/// Records per-item relevance feedback. A result set must be registered
/// before feedback against its items is accepted.
pub trait FeedbackProvider: Send + Sync {
    fn register(&self, results: &ResultSet) -> Result<(), SessionError>;

    fn add_feedback(
        &self,
        result_set_id: &ResultSetId,
        document_id: &DocumentId,
        sentence_id: Option<&SentenceId>,
        polarity: Polarity,
    ) -> Result<(), SessionError>;

    fn alive(&self) -> Result<bool, SessionError>;
}

use crate::document::EntityMention;
use crate::types::{DocumentId, ResultSetId, SentenceId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of query kinds the session can dispatch. Each kind is served
/// by its own registered search provider.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Documents,
    Sentences,
    EntityMentions,
}

impl QueryKind {
    pub const ALL: [QueryKind; 3] =
        [QueryKind::Documents, QueryKind::Sentences, QueryKind::EntityMentions];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            QueryKind::Documents => "documents",
            QueryKind::Sentences => "sentences",
            QueryKind::EntityMentions => "entity-mentions",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured query submitted to a search provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub kind: QueryKind,
    pub raw: String,
    /// Optional display name for the query; defaults to the raw text when the
    /// result set is registered for annotation.
    pub name: Option<String>,
    pub terms: Vec<String>,
    pub user_id: Option<String>,
    /// Set for queries derived from a span of a specific document.
    pub document_id: Option<DocumentId>,
    /// Token indices for mention-derived queries.
    pub tokens: Vec<usize>,
}

impl SearchQuery {
    /// Builds a query from user-entered text, splitting terms on whitespace.
    #[must_use]
    pub fn from_input(kind: QueryKind, input: &str, name: Option<&str>) -> Self {
        Self {
            kind,
            raw: input.to_string(),
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
            terms: input.split_whitespace().map(str::to_string).collect(),
            user_id: None,
            document_id: None,
            tokens: Vec::new(),
        }
    }

    /// Builds an entity-mention query from a clicked mention of a document.
    #[must_use]
    pub fn for_mention(document_id: &DocumentId, mention: &EntityMention) -> Self {
        Self {
            kind: QueryKind::EntityMentions,
            raw: mention.text.clone(),
            name: None,
            terms: vec![mention.text.clone()],
            user_id: None,
            document_id: Some(document_id.clone()),
            tokens: mention.tokens.clone(),
        }
    }

    #[must_use]
    pub fn with_user(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }
}

/// A single search hit referencing a document and, optionally, a sentence
/// within it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultItem {
    pub document_id: DocumentId,
    pub sentence_id: Option<SentenceId>,
    pub score: f64,
}

impl ResultItem {
    #[must_use]
    pub fn new(document_id: impl Into<DocumentId>, sentence_id: Option<SentenceId>, score: f64) -> Self {
        Self { document_id: document_id.into(), sentence_id, score }
    }
}

/// The response to one dispatched query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub id: ResultSetId,
    pub query: SearchQuery,
    pub items: Vec<ResultItem>,
    pub received_at: DateTime<Utc>,
}

impl ResultSet {
    #[must_use]
    pub fn new(query: SearchQuery, items: Vec<ResultItem>) -> Self {
        Self { id: ResultSetId::new(), query, items, received_at: Utc::now() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Document identifiers are opaque strings assigned by the corpus.
pub type DocumentId = String;

/// Identifier of a sentence within a document.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SentenceId(pub Uuid);

/// Identifier of an entity mention within a document.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MentionId(pub Uuid);

/// Identifier of a result set returned by a search provider.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultSetId(pub Uuid);

impl SentenceId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl MentionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl ResultSetId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SentenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for MentionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ResultSetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for MentionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for ResultSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

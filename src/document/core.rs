use crate::document::types::{EntityMention, Sentence};
use crate::errors::SessionError;
use crate::types::{DocumentId, MentionId, SentenceId};
use serde::{Deserialize, Serialize};

/// A fully materialized document as returned by a fetch provider.
///
/// Documents are owned by the cache once inserted; callers work with clones or
/// borrows for the duration of a render pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub text: String,
    pub sentences: Vec<Sentence>,
    pub mentions: Vec<EntityMention>,
}

impl Document {
    #[must_use]
    pub fn new(id: impl Into<DocumentId>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into(), sentences: Vec::new(), mentions: Vec::new() }
    }

    #[must_use]
    pub fn with_sentences(mut self, sentences: Vec<Sentence>) -> Self {
        self.sentences = sentences;
        self
    }

    #[must_use]
    pub fn with_mentions(mut self, mentions: Vec<EntityMention>) -> Self {
        self.mentions = mentions;
        self
    }

    /// Looks up a sentence by id. Returns `None` for ids that do not resolve
    /// within this document.
    #[must_use]
    pub fn sentence_with_id(&self, id: &SentenceId) -> Option<&Sentence> {
        self.sentences.iter().find(|s| s.id == *id)
    }

    #[must_use]
    pub fn first_sentence(&self) -> Option<&Sentence> {
        self.sentences.first()
    }

    #[must_use]
    pub fn mention_with_id(&self, id: &MentionId) -> Option<&EntityMention> {
        self.mentions.iter().find(|m| m.id == *id)
    }

    /// All mentions anchored to the given sentence.
    #[must_use]
    pub fn mentions_in_sentence(&self, id: &SentenceId) -> Vec<&EntityMention> {
        self.mentions.iter().filter(|m| m.sentence == Some(*id)).collect()
    }

    /// Parses a document from its JSON wire form, as returned by fetch
    /// services.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }
}

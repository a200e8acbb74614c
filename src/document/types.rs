use crate::types::{MentionId, SentenceId};
use serde::{Deserialize, Serialize};

/// A sentence within a document. `start`/`end` are character offsets into the
/// document text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub id: SentenceId,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Sentence {
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self { id: SentenceId::new(), text: text.into(), start, end }
    }
}

/// An entity mention within a document. `tokens` holds the token indices the
/// mention spans, relative to its sentence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EntityMention {
    pub id: MentionId,
    pub text: String,
    pub sentence: Option<SentenceId>,
    pub tokens: Vec<usize>,
}

impl EntityMention {
    #[must_use]
    pub fn new(text: impl Into<String>, sentence: Option<SentenceId>, tokens: Vec<usize>) -> Self {
        Self { id: MentionId::new(), text: text.into(), sentence, tokens }
    }
}

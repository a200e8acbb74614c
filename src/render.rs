use crate::cache::DocumentCache;
use crate::display::MessageSink;
use crate::document::Document;
use crate::errors::SessionError;
use crate::providers::FetchProvider;
use crate::query::{ResultItem, ResultSet};
use crate::types::{DocumentId, SentenceId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Why a row fell back from the sentence its result item referenced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The result carried a sentence id that does not resolve in the document.
    InvalidSentenceId,
    /// The result carried no sentence id at all.
    MissingSentenceId,
    /// The document has no sentences; its raw text was used.
    NoSentences,
    /// The document could not be materialized.
    DocumentUnavailable,
}

/// The text chosen for a row, tagged with where it came from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum RowText {
    Sentence(String),
    FirstSentence(String),
    Raw(String),
    Unavailable,
}

/// One rendered result row. Fallback rows are kept and annotated, never
/// suppressed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub document_id: DocumentId,
    pub sentence_id: Option<SentenceId>,
    pub score: f64,
    pub text: RowText,
    pub fallback: Option<Fallback>,
}

impl RenderedRow {
    /// The text to display for this row.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.text {
            RowText::Sentence(t) | RowText::FirstSentence(t) | RowText::Raw(t) => t.clone(),
            RowText::Unavailable => {
                format!("Document with ID \"{}\" is not available", self.document_id)
            }
        }
    }
}

/// Renders every row of a result set. Documents are resolved through the
/// cache with at most one fetch per distinct id; fetch errors abort the
/// render pass.
pub(crate) fn render_set(
    cache: &Mutex<DocumentCache>,
    fetcher: &dyn FetchProvider,
    sink: &dyn MessageSink,
    results: &ResultSet,
) -> Result<Vec<RenderedRow>, SessionError> {
    results.items.iter().map(|item| render_item(cache, fetcher, sink, item)).collect()
}

/// Renders a single result row.
pub(crate) fn render_item(
    cache: &Mutex<DocumentCache>,
    fetcher: &dyn FetchProvider,
    sink: &dyn MessageSink,
    item: &ResultItem,
) -> Result<RenderedRow, SessionError> {
    let document = resolve_document(cache, fetcher, sink, &item.document_id)?;

    let (text, fallback) = match &document {
        None => (RowText::Unavailable, Some(Fallback::DocumentUnavailable)),
        Some(doc) => match item.sentence_id {
            Some(sid) => match doc.sentence_with_id(&sid) {
                Some(sentence) => (RowText::Sentence(sentence.text.clone()), None),
                None => {
                    log::warn!("search result specified an invalid sentence id: {sid}");
                    fallback_text(doc, Fallback::InvalidSentenceId)
                }
            },
            None => {
                sink.error("Search result did not include an (optional) sentence id");
                log::warn!("search result did not include an (optional) sentence id");
                fallback_text(doc, Fallback::MissingSentenceId)
            }
        },
    };

    Ok(RenderedRow {
        document_id: item.document_id.clone(),
        sentence_id: item.sentence_id,
        score: item.score,
        text,
        fallback,
    })
}

/// Cache-then-fetch resolution for one document id. A freshly fetched
/// document is inserted into the cache before use, so later rows referencing
/// the same id hit the cache. Returns `None` when the fetch provider does not
/// know the id.
pub(crate) fn resolve_document(
    cache: &Mutex<DocumentCache>,
    fetcher: &dyn FetchProvider,
    sink: &dyn MessageSink,
    id: &DocumentId,
) -> Result<Option<Document>, SessionError> {
    if let Some(doc) = cache.lock().get(id) {
        return Ok(Some(doc.clone()));
    }

    // Not resident; the cache lock is released around the fetch call.
    let fetched = fetcher.fetch(std::slice::from_ref(id)).map_err(|err| {
        sink.error(&err.to_string());
        err
    })?;

    let document = fetched.documents.into_iter().find(|d| d.id == *id);
    match &document {
        Some(doc) => cache.lock().set(doc.clone()),
        None => log::warn!("fetch returned no document for id {id}"),
    }
    Ok(document)
}

/// Fallback chain once the referenced sentence is unusable: first sentence,
/// else raw text, else the unavailable marker.
fn fallback_text(doc: &Document, reason: Fallback) -> (RowText, Option<Fallback>) {
    if let Some(first) = doc.first_sentence() {
        return (RowText::FirstSentence(first.text.clone()), Some(reason));
    }
    log::warn!("document {} contains no sentences", doc.id);
    if doc.text.is_empty() {
        (RowText::Unavailable, Some(reason))
    } else {
        (RowText::Raw(doc.text.clone()), Some(Fallback::NoSentences))
    }
}

use crate::Session;
use crate::errors::SessionError;
use crate::feedback::Polarity;
use crate::query::{QueryKind, ResultSet};
use crate::render::RenderedRow;
use crate::types::{DocumentId, MentionId, SentenceId};
use std::collections::HashMap;
use std::fmt;

/// The closed set of UI events the session reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The user submitted the search box.
    SearchSubmitted { kind: QueryKind, input: String, name: Option<String> },
    /// The user clicked a highlighted entity-mention span.
    SpanClicked { document_id: DocumentId, mention_id: MentionId },
    /// The user clicked a feedback button on a result row.
    FeedbackClicked {
        document_id: DocumentId,
        sentence_id: Option<SentenceId>,
        polarity: Polarity,
    },
    /// The user opened a result row in its own tab.
    RowOpened { document_id: DocumentId, sentence_id: Option<SentenceId> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    SearchSubmitted,
    SpanClicked,
    FeedbackClicked,
    RowOpened,
}

impl UiEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::SearchSubmitted { .. } => EventKind::SearchSubmitted,
            UiEvent::SpanClicked { .. } => EventKind::SpanClicked,
            UiEvent::FeedbackClicked { .. } => EventKind::FeedbackClicked,
            UiEvent::RowOpened { .. } => EventKind::RowOpened,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::SearchSubmitted => "search-submitted",
            EventKind::SpanClicked => "span-clicked",
            EventKind::FeedbackClicked => "feedback-clicked",
            EventKind::RowOpened => "row-opened",
        };
        f.write_str(name)
    }
}

/// What handling an event produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Results(ResultSet),
    Row(RenderedRow),
    Ack,
}

/// An event handler. Handlers take the session context explicitly rather
/// than closing over it.
pub type Handler = fn(&Session, &UiEvent) -> Result<Outcome, SessionError>;

/// Explicit dispatch table from event kind to handler.
pub struct EventTable {
    handlers: HashMap<EventKind, Handler>,
}

impl EventTable {
    /// An empty table; events dispatched against it fail as unhandled.
    #[must_use]
    pub fn new() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// The default wiring: searches dispatch queries, feedback clicks submit
    /// feedback, opened rows render.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.set(EventKind::SearchSubmitted, on_search_submitted);
        table.set(EventKind::SpanClicked, on_span_clicked);
        table.set(EventKind::FeedbackClicked, on_feedback_clicked);
        table.set(EventKind::RowOpened, on_row_opened);
        table
    }

    /// Registers a handler for a kind, replacing any previous one.
    pub fn set(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.insert(kind, handler);
    }

    pub fn dispatch(&self, session: &Session, event: &UiEvent) -> Result<Outcome, SessionError> {
        let kind = event.kind();
        let handler = self
            .handlers
            .get(&kind)
            .ok_or_else(|| SessionError::UnhandledEvent(kind.to_string()))?;
        handler(session, event)
    }
}

impl Default for EventTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn on_search_submitted(session: &Session, event: &UiEvent) -> Result<Outcome, SessionError> {
    let UiEvent::SearchSubmitted { kind, input, name } = event else {
        return Err(SessionError::UnhandledEvent(event.kind().to_string()));
    };
    session.search_from_input(*kind, input, name.as_deref()).map(Outcome::Results)
}

fn on_span_clicked(session: &Session, event: &UiEvent) -> Result<Outcome, SessionError> {
    let UiEvent::SpanClicked { document_id, mention_id } = event else {
        return Err(SessionError::UnhandledEvent(event.kind().to_string()));
    };
    session.search_mention(document_id, mention_id).map(Outcome::Results)
}

fn on_feedback_clicked(session: &Session, event: &UiEvent) -> Result<Outcome, SessionError> {
    let UiEvent::FeedbackClicked { document_id, sentence_id, polarity } = event else {
        return Err(SessionError::UnhandledEvent(event.kind().to_string()));
    };
    session.submit_feedback(document_id, sentence_id.as_ref(), *polarity)?;
    Ok(Outcome::Ack)
}

fn on_row_opened(session: &Session, event: &UiEvent) -> Result<Outcome, SessionError> {
    let UiEvent::RowOpened { document_id, sentence_id } = event else {
        return Err(SessionError::UnhandledEvent(event.kind().to_string()));
    };
    session.render_document(document_id, sentence_id.as_ref()).map(Outcome::Row)
}

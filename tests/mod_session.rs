mod common;

use common::{
    FailingFeedbackProvider, MapFetchProvider, RecordingSearchProvider, doc_with_sentences, item,
};
use searchdeck::Session;
use searchdeck::display::BufferSink;
use searchdeck::errors::SessionError;
use searchdeck::events::{EventKind, EventTable, Outcome, UiEvent};
use searchdeck::feedback::Polarity;
use searchdeck::providers::ServiceState;
use searchdeck::query::QueryKind;
use searchdeck::render::RowText;
use std::sync::Arc;

#[test]
fn builder_requires_a_fetch_provider() {
    let err = Session::builder().build().unwrap_err();
    assert!(matches!(err, SessionError::Config(_)));
}

#[test]
fn set_user_rejects_empty_names() {
    let session =
        Session::builder().fetch_provider(MapFetchProvider::new(vec![])).build().unwrap();

    assert!(matches!(session.set_user("   ").unwrap_err(), SessionError::EmptyUserName));
    assert!(session.user().is_none());

    let greeting = session.set_user("kate").unwrap();
    assert_eq!(greeting, "Hello, kate");
    assert_eq!(session.user().as_deref(), Some("kate"));
}

#[test]
fn probe_reports_healthy_services_without_messages() {
    let sink = Arc::new(BufferSink::new());
    let session = Session::builder()
        .search_provider(QueryKind::Documents, RecordingSearchProvider::new(vec![]))
        .fetch_provider(MapFetchProvider::new(vec![]))
        .message_sink(sink.clone())
        .build()
        .unwrap();

    let reports = session.probe_services();
    assert_eq!(reports.len(), 3); // search, fetch, feedback
    assert!(reports.iter().all(searchdeck::providers::ServiceReport::is_alive));
    assert!(sink.messages().is_empty());
}

#[test]
fn probe_aggregates_failures_into_one_message() {
    let sink = Arc::new(BufferSink::new());
    let session = Session::builder()
        .fetch_provider(MapFetchProvider::dead(vec![]))
        .feedback_provider(FailingFeedbackProvider)
        .message_sink(sink.clone())
        .build()
        .unwrap();

    let reports = session.probe_services();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].state, ServiceState::Down);
    assert!(matches!(reports[1].state, ServiceState::Unreachable(_)));

    let messages = sink.messages();
    assert_eq!(messages.len(), 1, "failures must be aggregated into one message");
    assert!(messages[0].contains("fetch"));
    assert!(messages[0].contains("feedback"));
}

#[test]
fn default_event_table_routes_search_and_feedback() {
    let doc = doc_with_sentences("d1", &["only sentence."]);
    let session = Session::builder()
        .search_provider(
            QueryKind::Sentences,
            RecordingSearchProvider::new(vec![item("d1", None, 0.9)]),
        )
        .fetch_provider(MapFetchProvider::new(vec![doc]))
        .build()
        .unwrap();
    let table = EventTable::with_defaults();

    let outcome = table
        .dispatch(
            &session,
            &UiEvent::SearchSubmitted {
                kind: QueryKind::Sentences,
                input: "only".to_string(),
                name: None,
            },
        )
        .unwrap();
    let Outcome::Results(results) = outcome else { panic!("expected results") };
    assert_eq!(results.len(), 1);

    let outcome = table
        .dispatch(
            &session,
            &UiEvent::FeedbackClicked {
                document_id: "d1".to_string(),
                sentence_id: None,
                polarity: Polarity::Positive,
            },
        )
        .unwrap();
    assert_eq!(outcome, Outcome::Ack);

    let outcome = table
        .dispatch(
            &session,
            &UiEvent::RowOpened { document_id: "d1".to_string(), sentence_id: None },
        )
        .unwrap();
    let Outcome::Row(row) = outcome else { panic!("expected a rendered row") };
    assert_eq!(row.text, RowText::FirstSentence("only sentence.".to_string()));
}

#[test]
fn empty_event_table_reports_unhandled_events() {
    let session =
        Session::builder().fetch_provider(MapFetchProvider::new(vec![])).build().unwrap();
    let table = EventTable::new();

    let err = table
        .dispatch(
            &session,
            &UiEvent::RowOpened { document_id: "d1".to_string(), sentence_id: None },
        )
        .unwrap_err();
    assert!(matches!(err, SessionError::UnhandledEvent(_)));
}

#[test]
fn handlers_can_be_replaced_per_kind() {
    fn deny_search(
        _session: &Session,
        _event: &UiEvent,
    ) -> Result<Outcome, SessionError> {
        Err(SessionError::Config("search disabled".to_string()))
    }

    let session = Session::builder()
        .search_provider(QueryKind::Documents, RecordingSearchProvider::new(vec![]))
        .fetch_provider(MapFetchProvider::new(vec![]))
        .build()
        .unwrap();
    let mut table = EventTable::with_defaults();
    table.set(EventKind::SearchSubmitted, deny_search);

    let err = table
        .dispatch(
            &session,
            &UiEvent::SearchSubmitted {
                kind: QueryKind::Documents,
                input: "q".to_string(),
                name: None,
            },
        )
        .unwrap_err();
    assert!(matches!(err, SessionError::Config(_)));
}

#[test]
fn cache_metrics_are_observable_through_the_session() {
    let doc = doc_with_sentences("d1", &["sentence."]);
    let session = Session::builder()
        .fetch_provider(MapFetchProvider::new(vec![doc]))
        .build()
        .unwrap();

    session.render_document(&"d1".to_string(), None).unwrap();
    session.render_document(&"d1".to_string(), None).unwrap();

    let snap = session.cache_metrics();
    assert_eq!(snap.inserts, 1);
    assert!(snap.hits >= 1);
}

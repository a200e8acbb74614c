use crate::display::MessageSink;
use crate::errors::SessionError;
use crate::providers::SearchRegistry;
use crate::query::types::{ResultSet, SearchQuery};

/// Validates, logs and dispatches a query to the provider registered for its
/// kind. An unregistered kind is reported through the sink and aborts the
/// dispatch without touching any provider; provider errors are reported and
/// re-raised.
pub fn execute(
    registry: &SearchRegistry,
    sink: &dyn MessageSink,
    query: &SearchQuery,
) -> Result<ResultSet, SessionError> {
    validate(query)?;

    let Some(provider) = registry.get(query.kind) else {
        let err = SessionError::MissingProvider(query.kind.to_string());
        sink.error(&err.to_string());
        return Err(err);
    };

    log_query(query);
    match provider.search(query) {
        Ok(results) => {
            log_results(&results);
            Ok(results)
        }
        Err(err) => {
            sink.error(&err.to_string());
            Err(err)
        }
    }
}

fn validate(query: &SearchQuery) -> Result<(), SessionError> {
    if query.raw.trim().is_empty() {
        return Err(SessionError::EmptyQuery);
    }
    Ok(())
}

fn log_query(query: &SearchQuery) {
    log::info!("Search query ({}): {}", query.kind, query.raw);
    if query.terms.is_empty() {
        log::debug!("No terms provided");
    } else {
        log::debug!("{} term(s) provided", query.terms.len());
        for term in &query.terms {
            log::debug!("Term: {term}");
        }
    }
}

fn log_results(results: &ResultSet) {
    if results.is_empty() {
        log::info!("Search: no results returned");
    } else {
        log::info!("Search: {} result(s) returned", results.len());
        for item in &results.items {
            log::debug!("Result: {} (score {})", item.document_id, item.score);
        }
    }
}

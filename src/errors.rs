use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No search provider registered for search type: {0}")]
    MissingProvider(String),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Search error: {0}")]
    Search(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Feedback error: {0}")]
    Feedback(String),

    #[error("Unknown result set: {0}")]
    UnknownResultSet(String),

    #[error("Unknown entity mention: {0}")]
    UnknownMention(String),

    #[error("No current result set")]
    NoCurrentResults,

    #[error("User name cannot be empty")]
    EmptyUserName,

    #[error("No handler registered for event: {0}")]
    UnhandledEvent(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

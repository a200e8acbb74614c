use crate::cache::DEFAULT_CAPACITY;
use crate::errors::SessionError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Session configuration, loadable from TOML with environment overrides.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Max number of documents kept resident by the LRU cache.
    pub cache_capacity: usize,
    /// Display name used on queries until the user sets one interactively.
    pub user_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    /// error|warn|info|debug|trace
    pub log_level: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { cache_capacity: DEFAULT_CAPACITY, user_id: None, log_dir: None, log_level: None }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SessionError::Io(format!("failed to read {}: {e}", path.display())))?;
        Ok(toml::from_str(&raw)?)
    }

    /// Applies `SEARCHDECK_*` environment overrides on top of the current
    /// values.
    #[must_use]
    pub fn apply_env(mut self) -> Self {
        if let Some(cap) =
            std::env::var("SEARCHDECK_CACHE_CAPACITY").ok().and_then(|s| s.parse::<usize>().ok())
        {
            self.cache_capacity = cap;
        }
        if let Ok(user) = std::env::var("SEARCHDECK_USER") {
            if !user.trim().is_empty() {
                self.user_id = Some(user);
            }
        }
        if let Ok(dir) = std::env::var("SEARCHDECK_LOG_DIR") {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if let Ok(level) = std::env::var("SEARCHDECK_LOG_LEVEL") {
            self.log_level = Some(level);
        }
        self
    }
}

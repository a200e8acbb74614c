use crate::query::ResultSet;
use crate::types::ResultSetId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Annotation workflows a registered result set can feed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationTask {
    Ner,
    Translation,
    Triage,
}

struct Entry {
    results: ResultSet,
    tasks: HashSet<AnnotationTask>,
    registered_at: DateTime<Utc>,
    user_id: Option<String>,
}

/// In-memory store of result sets registered for annotation. Listings are
/// newest first; registering the same result set again merges task types
/// rather than duplicating the entry.
#[derive(Default)]
pub struct ResultsStore {
    data: HashMap<ResultSetId, Entry>,
}

impl ResultsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a result set for a task. A query without a display name gets
    /// its raw text as the name.
    pub fn add(&mut self, mut results: ResultSet, task: AnnotationTask) {
        if let Some(entry) = self.data.get_mut(&results.id) {
            entry.tasks.insert(task);
            return;
        }
        if results.query.name.is_none() {
            results.query.name = Some(results.query.raw.clone());
        }
        let user_id = results.query.user_id.clone();
        let id = results.id;
        self.data.insert(
            id,
            Entry {
                results,
                tasks: HashSet::from([task]),
                registered_at: Utc::now(),
                user_id,
            },
        );
    }

    #[must_use]
    pub fn by_id(&self, id: &ResultSetId) -> Option<&ResultSet> {
        self.data.get(id).map(|e| &e.results)
    }

    /// The most recently registered result set for a user.
    #[must_use]
    pub fn latest_for_user(&self, user_id: &str) -> Option<&ResultSet> {
        self.data
            .values()
            .filter(|e| e.user_id.as_deref() == Some(user_id))
            .max_by_key(|e| e.registered_at)
            .map(|e| &e.results)
    }

    /// Result sets registered for a task, newest first. A limit of 0 means
    /// unlimited.
    #[must_use]
    pub fn by_task(&self, task: AnnotationTask, limit: usize) -> Vec<&ResultSet> {
        let limit = if limit == 0 { usize::MAX } else { limit };
        let mut entries: Vec<&Entry> =
            self.data.values().filter(|e| e.tasks.contains(&task)).collect();
        entries.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        entries.into_iter().take(limit).map(|e| &e.results).collect()
    }

    /// Result sets registered for a task by a user, newest first.
    #[must_use]
    pub fn by_user(&self, task: AnnotationTask, user_id: &str, limit: usize) -> Vec<&ResultSet> {
        let limit = if limit == 0 { usize::MAX } else { limit };
        let mut entries: Vec<&Entry> = self
            .data
            .values()
            .filter(|e| e.tasks.contains(&task))
            .filter(|e| e.user_id.as_deref() == Some(user_id))
            .collect();
        entries.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        entries.into_iter().take(limit).map(|e| &e.results).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

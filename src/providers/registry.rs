use crate::providers::SearchProvider;
use crate::query::QueryKind;
use std::collections::HashMap;

/// Search providers keyed by the query kind they serve. Dispatch looks the
/// provider up by kind; kinds without a registration are a configuration
/// error surfaced at dispatch time.
#[derive(Default)]
pub struct SearchRegistry {
    providers: HashMap<QueryKind, Box<dyn SearchProvider>>,
}

impl SearchRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the provider for a kind, replacing any previous one.
    pub fn register(&mut self, kind: QueryKind, provider: Box<dyn SearchProvider>) {
        self.providers.insert(kind, provider);
    }

    #[must_use]
    pub fn get(&self, kind: QueryKind) -> Option<&dyn SearchProvider> {
        self.providers.get(&kind).map(Box::as_ref)
    }

    #[must_use]
    pub fn is_registered(&self, kind: QueryKind) -> bool {
        self.providers.contains_key(&kind)
    }

    /// Registered kinds in declaration order of `QueryKind::ALL`.
    #[must_use]
    pub fn kinds(&self) -> Vec<QueryKind> {
        QueryKind::ALL.into_iter().filter(|k| self.providers.contains_key(k)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

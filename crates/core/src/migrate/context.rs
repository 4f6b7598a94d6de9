//! Cross-reference state threaded through the loaders of one run.
//!
//! Both indexes live only for the duration of a single import transaction
//! and are discarded on commit or rollback.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use uuid::Uuid;

use crate::store::{ImportStore, StoreError};

/// What to do when an article's author name has no exact match in the
/// dedup index. The legacy system silently fell back to the first author
/// created in the run; that behavior is preserved as the default but is
/// now an explicit, configurable policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthorFallback {
    /// Skip the article and record a soft error.
    Strict,
    /// Use the first author created during this run.
    #[default]
    FallbackToAny,
}

impl FromStr for AuthorFallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(AuthorFallback::Strict),
            "any" | "fallback" => Ok(AuthorFallback::FallbackToAny),
            other => Err(format!("unknown author fallback policy: {other:?}")),
        }
    }
}

/// Author dedup index: exact name to the id created for it this run.
#[derive(Debug, Default)]
pub struct AuthorIndex {
    by_name: HashMap<String, Uuid>,
    first: Option<Uuid>,
}

impl AuthorIndex {
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn insert(&mut self, name: &str, id: Uuid) {
        // First occurrence of a name wins; later duplicates reuse that id.
        self.by_name.entry(name.to_string()).or_insert(id);
        self.first.get_or_insert(id);
    }

    /// Resolve a name to an author id under the given policy. Returns
    /// `None` when the article must be skipped; with an empty index there
    /// is nothing to fall back to under either policy.
    pub fn resolve(&self, name: &str, fallback: AuthorFallback) -> Option<Uuid> {
        if let Some(id) = self.by_name.get(name) {
            return Some(*id);
        }
        match fallback {
            AuthorFallback::Strict => None,
            AuthorFallback::FallbackToAny => self.first,
        }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Read-through cache over the batched tag lookup. Only names not seen
/// before hit the store, one batch per call; names that do not exist are
/// cached as misses and dropped silently from connections.
#[derive(Debug, Default)]
pub struct TagCache {
    known: HashMap<String, Option<Uuid>>,
}

impl TagCache {
    pub async fn resolve<S: ImportStore>(
        &mut self,
        store: &mut S,
        names: &[String],
    ) -> Result<Vec<Uuid>, StoreError> {
        let mut missing: Vec<String> = Vec::new();
        let mut requested: HashSet<&str> = HashSet::new();
        for name in names {
            if requested.insert(name.as_str()) && !self.known.contains_key(name) {
                missing.push(name.clone());
            }
        }
        if !missing.is_empty() {
            for (name, id) in store.find_tag_ids(missing.clone()).await? {
                self.known.insert(name, Some(id));
            }
            for name in missing {
                self.known.entry(name).or_insert(None);
            }
        }

        let mut ids = Vec::new();
        let mut seen = HashSet::new();
        for name in names {
            if let Some(Some(id)) = self.known.get(name) {
                if seen.insert(*id) {
                    ids.push(*id);
                }
            }
        }
        Ok(ids)
    }
}

/// Shared loader context for one run: the dedup index, the tag cache and
/// the configured fallback policy.
#[derive(Debug, Default)]
pub struct MigrationContext {
    pub authors: AuthorIndex,
    pub tags: TagCache,
    pub author_fallback: AuthorFallback,
}

impl MigrationContext {
    pub fn new(author_fallback: AuthorFallback) -> Self {
        Self {
            author_fallback,
            ..Default::default()
        }
    }
}

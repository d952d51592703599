//! Query cache keyed by resource kind plus parameters.
//!
//! # Responsibility
//! - Hold fetched payloads in pending/success/error entry states.
//! - Provide server-side prefetch, snapshot dehydrate/hydrate, and
//!   invalidation by key kind.
//!
//! # Invariants
//! - Invalidation marks entries stale; the next access refetches.
//! - Hydration never overwrites a fresh success entry.
//! - A failed prefetch is recorded as the entry's error state, never raised.

use crate::api::{ApiError, ApiResult};
use log::{debug, info};
use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key kind for single-note lookups.
pub const KIND_NOTE: &str = "note";
/// Key kind for notes-list lookups.
pub const KIND_NOTES: &str = "notes";

pub type QueryResult<T> = Result<T, QueryError>;

/// Cache-layer error: the underlying fetch failed or a payload refused to
/// (de)serialize.
#[derive(Debug)]
pub enum QueryError {
    Api(ApiError),
    Payload(serde_json::Error),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(err) => write!(f, "{err}"),
            Self::Payload(err) => write!(f, "cache payload serialization failed: {err}"),
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Api(err) => Some(err),
            Self::Payload(err) => Some(err),
        }
    }
}

impl From<ApiError> for QueryError {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

/// Cache key: (entity kind, filter-or-id) tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// Single note lookup, wire shape `["note", id]`.
    Note(String),
    /// Notes listing lookup, wire shape `["notes", tag-or-null]`.
    Notes { tag: Option<String> },
}

impl QueryKey {
    /// Key for one note detail query.
    pub fn note(id: impl Into<String>) -> Self {
        Self::Note(id.into())
    }

    /// Key for one notes-list query with an optional verbatim tag filter.
    pub fn notes(tag: Option<&str>) -> Self {
        Self::Notes {
            tag: tag.map(str::to_string),
        }
    }

    /// Returns the entity kind used for invalidation by prefix.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Note(_) => KIND_NOTE,
            Self::Notes { .. } => KIND_NOTES,
        }
    }
}

impl Serialize for QueryKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        match self {
            Self::Note(id) => {
                seq.serialize_element(KIND_NOTE)?;
                seq.serialize_element(id)?;
            }
            Self::Notes { tag } => {
                seq.serialize_element(KIND_NOTES)?;
                seq.serialize_element(tag)?;
            }
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for QueryKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (kind, value): (String, Option<String>) = Deserialize::deserialize(deserializer)?;
        match kind.as_str() {
            KIND_NOTE => value
                .map(QueryKey::Note)
                .ok_or_else(|| de::Error::custom("`note` key requires an id")),
            KIND_NOTES => Ok(QueryKey::Notes { tag: value }),
            other => Err(de::Error::custom(format!(
                "unknown query key kind `{other}`"
            ))),
        }
    }
}

/// Lifecycle state of one cached query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryState {
    /// Fetch scheduled but not resolved.
    Pending,
    /// Resolved payload, stored as JSON so heterogeneous queries share one
    /// cache.
    Success { data: serde_json::Value },
    /// Fetch failure surfaced to whichever layer reads the entry.
    Error { message: String },
}

/// One cache slot: state plus staleness marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub state: QueryState,
    /// Set by invalidation; a stale entry refetches on next access.
    #[serde(default)]
    pub stale: bool,
}

/// One dehydrated cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DehydratedQuery {
    pub key: QueryKey,
    pub entry: CacheEntry,
}

/// Serialized cache state handed from the producing side to a consumer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub queries: Vec<DehydratedQuery>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

/// In-memory query cache keyed by `(entity kind, filter-or-id)`.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a client-side cache seeded from a snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut cache = Self::new();
        cache.hydrate(snapshot);
        cache
    }

    /// Returns the stored state for a key, when any.
    pub fn state(&self, key: &QueryKey) -> Option<&QueryState> {
        self.entries.get(key).map(|entry| &entry.state)
    }

    /// Returns whether the entry exists and was invalidated.
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.stale)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. Anything beyond wholesale clearing is the owning
    /// layer's retention policy.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the cached payload when the entry is fresh, otherwise runs
    /// `fetch_fn` and stores the outcome.
    ///
    /// # Errors
    /// Propagates the fetch failure (also recorded in the entry state) and
    /// payload serialization failures.
    pub fn fetch<T, F>(&mut self, key: QueryKey, fetch_fn: F) -> QueryResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> ApiResult<T>,
    {
        if let Some(entry) = self.entries.get(&key) {
            if !entry.stale {
                if let QueryState::Success { data } = &entry.state {
                    debug!("event=cache_hit module=cache kind={}", key.kind());
                    return serde_json::from_value(data.clone()).map_err(QueryError::from);
                }
            }
        }

        self.entries.insert(
            key.clone(),
            CacheEntry {
                state: QueryState::Pending,
                stale: false,
            },
        );
        match fetch_fn() {
            Ok(value) => {
                let data = serde_json::to_value(&value)?;
                self.entries.insert(
                    key,
                    CacheEntry {
                        state: QueryState::Success { data },
                        stale: false,
                    },
                );
                Ok(value)
            }
            Err(err) => {
                self.entries.insert(
                    key,
                    CacheEntry {
                        state: QueryState::Error {
                            message: err.to_string(),
                        },
                        stale: false,
                    },
                );
                Err(QueryError::Api(err))
            }
        }
    }

    /// Runs a fetch and records the outcome without propagating failure.
    ///
    /// Used by the producing side ahead of rendering: a failed prefetch
    /// leaves an error entry for the consuming layer to surface.
    pub fn prefetch<T, F>(&mut self, key: QueryKey, fetch_fn: F)
    where
        T: Serialize,
        F: FnOnce() -> ApiResult<T>,
    {
        let state = match fetch_fn() {
            Ok(value) => match serde_json::to_value(&value) {
                Ok(data) => QueryState::Success { data },
                Err(err) => QueryState::Error {
                    message: err.to_string(),
                },
            },
            Err(err) => {
                debug!(
                    "event=prefetch_failed module=cache kind={} error={err}",
                    key.kind()
                );
                QueryState::Error {
                    message: err.to_string(),
                }
            }
        };
        self.entries.insert(
            key,
            CacheEntry {
                state,
                stale: false,
            },
        );
    }

    /// Marks every entry of the given kind stale and returns the count.
    pub fn invalidate_kind(&mut self, kind: &str) -> usize {
        let mut marked = 0;
        for (key, entry) in self.entries.iter_mut() {
            if key.kind() == kind {
                entry.stale = true;
                marked += 1;
            }
        }
        info!("event=cache_invalidate module=cache kind={kind} marked={marked}");
        marked
    }

    /// Serializes every entry for hand-off to a consuming cache.
    pub fn dehydrate(&self) -> Snapshot {
        let mut queries: Vec<DehydratedQuery> = self
            .entries
            .iter()
            .map(|(key, entry)| DehydratedQuery {
                key: key.clone(),
                entry: entry.clone(),
            })
            .collect();
        // Deterministic order keeps serialized snapshots stable.
        queries.sort_by(|a, b| key_sort_token(&a.key).cmp(&key_sort_token(&b.key)));
        Snapshot { queries }
    }

    /// Seeds entries from a snapshot.
    ///
    /// An entry already holding a fresh success payload wins over the
    /// snapshot; everything else is replaced.
    pub fn hydrate(&mut self, snapshot: Snapshot) {
        for DehydratedQuery { key, entry } in snapshot.queries {
            let keep_existing = matches!(
                self.entries.get(&key),
                Some(existing)
                    if !existing.stale && matches!(existing.state, QueryState::Success { .. })
            );
            if !keep_existing {
                self.entries.insert(key, entry);
            }
        }
    }
}

fn key_sort_token(key: &QueryKey) -> (u8, String) {
    match key {
        QueryKey::Note(id) => (0, id.clone()),
        QueryKey::Notes { tag } => (1, tag.clone().unwrap_or_default()),
    }
}

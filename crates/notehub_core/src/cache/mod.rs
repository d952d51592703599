//! Query cache layer: prefetch, hydration and invalidation.
//!
//! # Responsibility
//! - Store fetched payloads keyed by (entity kind, filter-or-id).
//! - Support produce-side prefetch, snapshot hand-off and staleness-based
//!   refetch.
//!
//! # Invariants
//! - Key wire shape is `["note", id]` / `["notes", tag-or-null]` exactly.
//! - Entry garbage collection is the owner's policy, not this layer's.

pub mod query_cache;

pub use query_cache::{
    CacheEntry, DehydratedQuery, QueryCache, QueryError, QueryKey, QueryResult, QueryState,
    Snapshot, KIND_NOTE, KIND_NOTES,
};

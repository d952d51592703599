//! Core client logic for NoteHub.
//! This crate is the single source of truth for business invariants.

pub mod api;
pub mod cache;
pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod page;
pub mod route;

pub use api::{ApiError, ApiResult, HttpNoteApi, NoteApi};
pub use cache::{QueryCache, QueryError, QueryKey, QueryState, Snapshot};
pub use config::ApiConfig;
pub use form::{FormHost, FormPhase, FormValues, NoteForm, SubmitOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::{validate_note_fields, FieldErrors, NoteDraft};
pub use model::note::{Note, NoteId, NoteTag, NotesPage};
pub use page::{PageMetadata, PageServer, RenderedPage};
pub use route::{parse_path, Route, RouteError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Backend API surface.
//!
//! # Responsibility
//! - Define the note API contract consumed by pages and the form.
//! - Keep HTTP transport details behind the `NoteApi` seam.
//!
//! # Invariants
//! - API failures are opaque to callers; no retry policy lives here.

mod http;

pub use http::{HttpNoteApi, NOTES_PER_PAGE};

use crate::model::draft::NoteDraft;
use crate::model::note::{Note, NotesPage};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

/// Transport/protocol error raised by API implementations.
#[derive(Debug)]
pub enum ApiError {
    /// Connection, timeout or body-decoding failure.
    Transport(reqwest::Error),
    /// Backend answered with a non-success status.
    Status {
        status: u16,
        /// Response body, capped for log hygiene.
        body: String,
    },
    /// Client-side configuration rejected before any request was made.
    InvalidConfig(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "api transport failure: {err}"),
            Self::Status { status, body } => {
                write!(f, "backend returned status {status}: {body}")
            }
            Self::InvalidConfig(message) => write!(f, "invalid api configuration: {message}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Status { .. } | Self::InvalidConfig(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Note API contract: detail, list and create.
pub trait NoteApi {
    /// Fetches one note by backend id.
    fn fetch_note_by_id(&self, id: &str) -> ApiResult<Note>;
    /// Fetches one listing page, optionally filtered by a verbatim tag value.
    fn fetch_notes(&self, page: u32, tag: Option<&str>) -> ApiResult<NotesPage>;
    /// Creates one note from a validated draft.
    fn create_note(&self, draft: &NoteDraft) -> ApiResult<Note>;
}

/// Shared references stay usable wherever an API value is expected.
impl<T: NoteApi + ?Sized> NoteApi for &T {
    fn fetch_note_by_id(&self, id: &str) -> ApiResult<Note> {
        (**self).fetch_note_by_id(id)
    }

    fn fetch_notes(&self, page: u32, tag: Option<&str>) -> ApiResult<NotesPage> {
        (**self).fetch_notes(page, tag)
    }

    fn create_note(&self, draft: &NoteDraft) -> ApiResult<Note> {
        (**self).create_note(draft)
    }
}

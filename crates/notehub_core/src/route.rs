//! URL routing contracts for the notes views.
//!
//! # Responsibility
//! - Map externally observable URL paths onto data-fetching intents.
//!
//! # Invariants
//! - `/notes/filter/All/...` means "no tag filter"; any other first slug
//!   segment passes through verbatim.
//! - `filter` and `action` never resolve as note ids.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slug literal selecting the unfiltered notes listing.
pub const FILTER_ALL: &str = "All";

const SEGMENT_NOTES: &str = "notes";
const SEGMENT_FILTER: &str = "filter";
const SEGMENT_ACTION: &str = "action";
const SEGMENT_CREATE: &str = "create";

pub type RouteResult = Result<Route, RouteError>;

/// Data-fetching intent derived from a URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/notes/{id}` — one note's detail view.
    NoteDetail { id: String },
    /// `/notes/filter/{tag|All}/...` — filtered listing; `None` is all notes.
    NotesFilter { tag: Option<String> },
    /// `/notes/action/create` — the creation form shell.
    CreateNote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Path matches none of the exported URL contracts.
    Unmatched(String),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unmatched(path) => write!(f, "no route matches path `{path}`"),
        }
    }
}

impl Error for RouteError {}

/// Parses one URL path into a route.
///
/// Empty segments are ignored, so `/notes//abc/` and `/notes/abc` agree.
/// Trailing segments after the filter slug are the view's concern and are
/// ignored here.
pub fn parse_path(path: &str) -> RouteResult {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [SEGMENT_NOTES, SEGMENT_FILTER, slug, ..] => Ok(Route::NotesFilter {
            tag: filter_tag(slug),
        }),
        [SEGMENT_NOTES, SEGMENT_ACTION, SEGMENT_CREATE] => Ok(Route::CreateNote),
        [SEGMENT_NOTES, id] if *id != SEGMENT_FILTER && *id != SEGMENT_ACTION => {
            Ok(Route::NoteDetail {
                id: (*id).to_string(),
            })
        }
        _ => Err(RouteError::Unmatched(path.to_string())),
    }
}

/// Maps one filter slug onto an optional tag filter.
///
/// The literal `All` clears the filter; anything else passes through
/// verbatim, including values outside the known tag set.
pub fn filter_tag(slug: &str) -> Option<String> {
    if slug == FILTER_ALL {
        None
    } else {
        Some(slug.to_string())
    }
}

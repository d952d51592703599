//! Server-side page composition: prefetch plus snapshot hand-off.
//!
//! # Responsibility
//! - Compose each route into a rendered shell: optional metadata plus a
//!   dehydrated cache snapshot the client hydrates at mount.
//!
//! # Invariants
//! - Each page composes over a fresh cache; snapshots never share state
//!   between requests.
//! - List prefetch covers page 1 only; later pages are the live view's job.
//! - Prefetch failure is shipped inside the snapshot, never raised here.

use crate::api::NoteApi;
use crate::cache::{QueryCache, QueryKey, Snapshot};
use crate::page::metadata::{create_note_metadata, PageMetadata};
use crate::route::Route;
use log::debug;

/// First (and only prefetched) listing page.
pub const FIRST_PAGE: u32 = 1;

/// Composed page shell handed to the consuming side.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// Link-preview metadata; `None` for pages without a metadata export.
    pub metadata: Option<PageMetadata>,
    /// Dehydrated query snapshot seeding the client cache.
    pub snapshot: Snapshot,
}

/// Server-side page composer over any note API implementation.
pub struct PageServer<A: NoteApi> {
    api: A,
}

impl<A: NoteApi> PageServer<A> {
    /// Creates a composer using the provided API implementation.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Composes the page for an already parsed route.
    pub fn render(&self, route: &Route) -> RenderedPage {
        match route {
            Route::NoteDetail { id } => self.note_detail(id),
            Route::NotesFilter { tag } => self.notes_filter(tag.as_deref()),
            Route::CreateNote => self.create_note(),
        }
    }

    /// Note detail: prefetch `["note", id]` and dehydrate.
    pub fn note_detail(&self, id: &str) -> RenderedPage {
        debug!("event=page_render module=page view=note_detail id={id}");
        let mut cache = QueryCache::new();
        cache.prefetch(QueryKey::note(id), || self.api.fetch_note_by_id(id));
        RenderedPage {
            metadata: None,
            snapshot: cache.dehydrate(),
        }
    }

    /// Filtered listing: prefetch page 1 of `["notes", tag]` and dehydrate.
    pub fn notes_filter(&self, tag: Option<&str>) -> RenderedPage {
        debug!(
            "event=page_render module=page view=notes_filter tag={}",
            tag.unwrap_or("-")
        );
        let mut cache = QueryCache::new();
        cache.prefetch(QueryKey::notes(tag), || self.api.fetch_notes(FIRST_PAGE, tag));
        RenderedPage {
            metadata: None,
            snapshot: cache.dehydrate(),
        }
    }

    /// Creation page: static shell with metadata, nothing to prefetch.
    pub fn create_note(&self) -> RenderedPage {
        debug!("event=page_render module=page view=create_note");
        RenderedPage {
            metadata: Some(create_note_metadata()),
            snapshot: Snapshot::default(),
        }
    }
}

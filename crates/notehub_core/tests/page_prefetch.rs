mod common;

use common::FakeNoteApi;
use notehub_core::api::NoteApi;
use notehub_core::cache::{QueryCache, QueryKey, QueryState};
use notehub_core::model::note::{Note, NoteTag};
use notehub_core::page::{PageServer, FIRST_PAGE};
use notehub_core::route::parse_path;

#[test]
fn note_detail_page_prefetches_into_the_snapshot() {
    let api = FakeNoteApi::new();
    let note = api.seed("Existing", "body", NoteTag::Work);

    let page = PageServer::new(&api).note_detail(&note.id);
    assert!(page.metadata.is_none());

    // The client hydrates and renders without a second round-trip.
    let client_api = FakeNoteApi::new();
    let mut client_cache = QueryCache::from_snapshot(page.snapshot);
    let fetched: Note = client_cache
        .fetch(QueryKey::note(&note.id), || {
            client_api.fetch_note_by_id(&note.id)
        })
        .expect("hydrated entry should satisfy the fetch");
    assert_eq!(fetched.title, "Existing");
    assert_eq!(client_api.fetch_calls.get(), 0);
}

#[test]
fn filter_page_all_prefetches_the_unfiltered_first_page() {
    let api = FakeNoteApi::new();
    api.seed("A", "", NoteTag::Todo);
    api.seed("B", "", NoteTag::Work);

    let route = parse_path("/notes/filter/All").expect("route should parse");
    let page = PageServer::new(&api).render(&route);

    assert_eq!(api.last_list_page.get(), FIRST_PAGE);
    assert_eq!(*api.last_list_tag.borrow(), None);

    let cache = QueryCache::from_snapshot(page.snapshot);
    assert!(matches!(
        cache.state(&QueryKey::notes(None)),
        Some(QueryState::Success { .. })
    ));
}

#[test]
fn filter_page_passes_the_tag_verbatim() {
    let api = FakeNoteApi::new();
    api.seed("Standup", "", NoteTag::Meeting);

    let route = parse_path("/notes/filter/Meeting").expect("route should parse");
    let page = PageServer::new(&api).render(&route);

    assert_eq!(*api.last_list_tag.borrow(), Some("Meeting".to_string()));
    let cache = QueryCache::from_snapshot(page.snapshot);
    assert!(matches!(
        cache.state(&QueryKey::notes(Some("Meeting"))),
        Some(QueryState::Success { .. })
    ));
}

#[test]
fn failed_detail_prefetch_ships_the_error_state() {
    let api = FakeNoteApi::new();
    api.fail_fetch.set(true);

    let page = PageServer::new(&api).note_detail("nope");
    let cache = QueryCache::from_snapshot(page.snapshot);
    assert!(matches!(
        cache.state(&QueryKey::note("nope")),
        Some(QueryState::Error { .. })
    ));
}

#[test]
fn create_page_is_static_with_metadata() {
    let api = FakeNoteApi::new();
    let route = parse_path("/notes/action/create").expect("route should parse");
    let page = PageServer::new(&api).render(&route);

    assert!(page.snapshot.is_empty());
    assert_eq!(api.fetch_calls.get(), 0);

    let metadata = page.metadata.expect("create page should export metadata");
    assert_eq!(metadata.title, "New note");
    assert_eq!(metadata.description, "Create new note");
    let open_graph = metadata.open_graph.expect("open graph should exist");
    assert!(!open_graph.images.is_empty());
}

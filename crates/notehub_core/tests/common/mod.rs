//! In-memory test doubles shared by the integration tests.
#![allow(dead_code)]

use notehub_core::api::{ApiError, ApiResult, NoteApi};
use notehub_core::form::FormHost;
use notehub_core::model::draft::NoteDraft;
use notehub_core::model::note::{Note, NoteTag, NotesPage};
use std::cell::{Cell, RefCell};

/// Scripted in-memory backend double.
#[derive(Debug, Default)]
pub struct FakeNoteApi {
    notes: RefCell<Vec<Note>>,
    pub fail_fetch: Cell<bool>,
    pub fail_create: Cell<bool>,
    pub fetch_calls: Cell<usize>,
    pub create_calls: Cell<usize>,
    pub last_list_page: Cell<u32>,
    pub last_list_tag: RefCell<Option<String>>,
    next_id: Cell<u32>,
}

impl FakeNoteApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores one note directly, bypassing the create path.
    pub fn seed(&self, title: &str, content: &str, tag: NoteTag) -> Note {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let note = Note {
            id: format!("note-{id}"),
            title: title.to_string(),
            content: content.to_string(),
            tag,
            created_at: None,
            updated_at: None,
        };
        self.notes.borrow_mut().push(note.clone());
        note
    }

    fn failure() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "backend unavailable".to_string(),
        }
    }
}

impl NoteApi for FakeNoteApi {
    fn fetch_note_by_id(&self, id: &str) -> ApiResult<Note> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        if self.fail_fetch.get() {
            return Err(Self::failure());
        }
        self.notes
            .borrow()
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                body: "note not found".to_string(),
            })
    }

    fn fetch_notes(&self, page: u32, tag: Option<&str>) -> ApiResult<NotesPage> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        self.last_list_page.set(page);
        *self.last_list_tag.borrow_mut() = tag.map(str::to_string);
        if self.fail_fetch.get() {
            return Err(Self::failure());
        }
        let notes: Vec<Note> = self
            .notes
            .borrow()
            .iter()
            .filter(|note| tag.map_or(true, |tag| note.tag.as_str() == tag))
            .cloned()
            .collect();
        Ok(NotesPage {
            notes,
            total_pages: 1,
        })
    }

    fn create_note(&self, draft: &NoteDraft) -> ApiResult<Note> {
        self.create_calls.set(self.create_calls.get() + 1);
        if self.fail_create.get() {
            return Err(Self::failure());
        }
        Ok(self.seed(&draft.title, &draft.content, draft.tag))
    }
}

/// Records host callbacks issued by the form.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub close_calls: u32,
    pub notices: Vec<String>,
}

impl FormHost for RecordingHost {
    fn close(&mut self) {
        self.close_calls += 1;
    }

    fn notify_error(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

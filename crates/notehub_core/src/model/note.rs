//! Note domain model.
//!
//! # Responsibility
//! - Define the note record and the closed tag vocabulary shared by every
//!   layer of the client.
//! - Keep wire field names aligned with the backend JSON schema.
//!
//! # Invariants
//! - `NoteTag` serializes as its exact PascalCase name.
//! - Note identity is backend-assigned and opaque to the client.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable backend-assigned identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = String;

/// Closed tag vocabulary classifying every note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteTag {
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl NoteTag {
    /// Every allowed tag, in display order.
    pub const ALL: [NoteTag; 5] = [
        NoteTag::Todo,
        NoteTag::Work,
        NoteTag::Personal,
        NoteTag::Meeting,
        NoteTag::Shopping,
    ];

    /// Returns the canonical wire/display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Meeting => "Meeting",
            Self::Shopping => "Shopping",
        }
    }

    /// Parses one tag value.
    ///
    /// Surrounding whitespace is trimmed; matching is exact and
    /// case-sensitive because the backend treats tag names verbatim.
    pub fn parse(value: &str) -> Option<NoteTag> {
        let trimmed = value.trim();
        Self::ALL.into_iter().find(|tag| tag.as_str() == trimmed)
    }
}

impl Default for NoteTag {
    fn default() -> Self {
        Self::Todo
    }
}

impl Display for NoteTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical note record as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Backend-assigned stable id.
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
    /// Backend bookkeeping timestamp, absent on older payloads.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One page of the notes listing as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesPage {
    pub notes: Vec<Note>,
    /// Total page count for the active filter.
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
}

//! Note creation draft and pure field validation.
//!
//! # Responsibility
//! - Validate raw form fields against the create contract.
//! - Build the trimmed, typed payload sent to the backend.
//!
//! # Invariants
//! - Length bounds apply to trimmed values, counted in characters.
//! - A `NoteDraft` can only be constructed from fields that pass validation.

use crate::model::note::NoteTag;
use serde::{Deserialize, Serialize};

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 50;
pub const CONTENT_MAX_CHARS: usize = 500;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const TITLE_TOO_SHORT: &str = "Title is too short";
pub const TITLE_TOO_LONG: &str = "Title is too long";
pub const CONTENT_TOO_LONG: &str = "Content is too long";
pub const TAG_REQUIRED: &str = "Tag is required";
pub const TAG_UNKNOWN: &str = "Tag must be one of: Todo, Work, Personal, Meeting, Shopping";

/// Per-field validation outcome. `None` means the field is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
    pub tag: Option<&'static str>,
}

impl FieldErrors {
    /// Returns whether every field passed validation.
    pub fn is_valid(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag.is_none()
    }
}

/// Validates raw note fields against the create contract.
///
/// Rules:
/// - title: required, trimmed length within 3..=50 characters.
/// - content: optional, trimmed length at most 500 characters.
/// - tag: required, must be one of the five `NoteTag` names.
pub fn validate_note_fields(title: &str, content: &str, tag: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let title = title.trim();
    let title_chars = title.chars().count();
    if title.is_empty() {
        errors.title = Some(TITLE_REQUIRED);
    } else if title_chars < TITLE_MIN_CHARS {
        errors.title = Some(TITLE_TOO_SHORT);
    } else if title_chars > TITLE_MAX_CHARS {
        errors.title = Some(TITLE_TOO_LONG);
    }

    if content.trim().chars().count() > CONTENT_MAX_CHARS {
        errors.content = Some(CONTENT_TOO_LONG);
    }

    let tag = tag.trim();
    if tag.is_empty() {
        errors.tag = Some(TAG_REQUIRED);
    } else if NoteTag::parse(tag).is_none() {
        errors.tag = Some(TAG_UNKNOWN);
    }

    errors
}

/// Validated create payload with trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

impl NoteDraft {
    /// Builds a draft from raw fields, trimming title and content.
    ///
    /// # Errors
    /// Returns the full `FieldErrors` set when any field fails validation.
    pub fn from_fields(title: &str, content: &str, tag: &str) -> Result<Self, FieldErrors> {
        let errors = validate_note_fields(title, content, tag);
        if !errors.is_valid() {
            return Err(errors);
        }
        let tag = match NoteTag::parse(tag) {
            Some(tag) => tag,
            None => {
                return Err(FieldErrors {
                    tag: Some(TAG_UNKNOWN),
                    ..FieldErrors::default()
                })
            }
        };
        Ok(Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            tag,
        })
    }
}

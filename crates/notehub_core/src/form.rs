//! Note creation form state machine.
//!
//! # Responsibility
//! - Hold transient form values and drive the editing/submitting lifecycle.
//! - Gate submission on validation and reconcile the cache after a create.
//!
//! # Invariants
//! - Submission never starts while the current values fail validation.
//! - A successful create invalidates every notes-list entry, closes the
//!   form through the host, and resets the fields.
//! - A failed create keeps the fields and emits exactly one notification.

use crate::api::{ApiError, NoteApi};
use crate::cache::{QueryCache, KIND_NOTES};
use crate::model::draft::{validate_note_fields, FieldErrors, NoteDraft};
use crate::model::note::{Note, NoteTag};
use log::{info, warn};

/// Submit control label while editing.
pub const SUBMIT_LABEL_IDLE: &str = "Create note";
/// Submit control label while a create request is in flight.
pub const SUBMIT_LABEL_PENDING: &str = "Submitting ...";
/// Generic user-facing notification for a failed create.
pub const CREATE_FAILED_NOTICE: &str = "Something went wrong";

/// Transient raw input for one form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub content: String,
    /// Raw tag selection; validated against `NoteTag` on submit.
    pub tag: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tag: NoteTag::Todo.as_str().to_string(),
        }
    }
}

/// Form lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Accepting edits; initial phase.
    #[default]
    Editing,
    /// Create request in flight; submission is blocked.
    Submitting,
}

/// Caller-supplied seam for closing the form and surfacing notifications.
pub trait FormHost {
    /// Closes whatever surface embeds the form (modal, panel, page).
    fn close(&mut self);
    /// Presents one generic failure notification to the user.
    fn notify_error(&mut self, message: &str);
}

/// Outcome of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Create succeeded; list caches were invalidated and the form reset.
    Created(Note),
    /// Validation failed; no request was issued.
    Invalid(FieldErrors),
    /// Backend rejected or transport failed; fields were retained.
    Failed(ApiError),
}

/// Note creation form.
#[derive(Debug, Clone, Default)]
pub struct NoteForm {
    values: FormValues,
    phase: FormPhase,
}

impl NoteForm {
    /// Creates a form with empty fields and the default `Todo` tag.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.values.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.values.content = content.into();
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.values.tag = tag.into();
    }

    /// Validates the current values without side effects.
    pub fn errors(&self) -> FieldErrors {
        validate_note_fields(&self.values.title, &self.values.content, &self.values.tag)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_valid()
    }

    /// The submit control is disabled while invalid or already submitting.
    pub fn submit_disabled(&self) -> bool {
        self.phase == FormPhase::Submitting || !self.is_valid()
    }

    /// Label for the submit control in the current phase.
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Editing => SUBMIT_LABEL_IDLE,
            FormPhase::Submitting => SUBMIT_LABEL_PENDING,
        }
    }

    /// Cancels the session: discards the values and closes through the host
    /// without validating or submitting.
    pub fn cancel(&mut self, host: &mut dyn FormHost) {
        self.reset();
        host.close();
    }

    /// Submits the current values.
    ///
    /// Validation failure returns the field errors without any network call.
    /// On success the notes-list cache entries are invalidated, the host is
    /// closed, and the form resets. On failure the fields stay put and the
    /// host receives one generic notification.
    pub fn submit(
        &mut self,
        api: &impl NoteApi,
        cache: &mut QueryCache,
        host: &mut dyn FormHost,
    ) -> SubmitOutcome {
        let draft = match NoteDraft::from_fields(
            &self.values.title,
            &self.values.content,
            &self.values.tag,
        ) {
            Ok(draft) => draft,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        self.phase = FormPhase::Submitting;
        match api.create_note(&draft) {
            Ok(note) => {
                cache.invalidate_kind(KIND_NOTES);
                host.close();
                self.reset();
                info!("event=note_create module=form status=ok id={}", note.id);
                SubmitOutcome::Created(note)
            }
            Err(err) => {
                self.phase = FormPhase::Editing;
                host.notify_error(CREATE_FAILED_NOTICE);
                warn!("event=note_create module=form status=error error={err}");
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Returns to the initial editing state with empty values.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.phase = FormPhase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::{FormPhase, FormValues, NoteForm, SUBMIT_LABEL_IDLE};

    #[test]
    fn initial_values_are_empty_with_todo_tag() {
        let form = NoteForm::new();
        assert_eq!(form.values(), &FormValues::default());
        assert_eq!(form.values().tag, "Todo");
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.submit_label(), SUBMIT_LABEL_IDLE);
    }

    #[test]
    fn empty_form_cannot_submit() {
        let form = NoteForm::new();
        // Tag defaults to a valid value; the empty title blocks submission.
        assert!(form.submit_disabled());
        assert!(form.errors().title.is_some());
        assert!(form.errors().tag.is_none());
    }
}

//! Domain model for the notes client.
//!
//! # Responsibility
//! - Define the note record, the closed tag vocabulary and the wire shapes
//!   exchanged with the backend.
//! - Keep validation of create input as pure functions next to the types.
//!
//! # Invariants
//! - `NoteTag` is a closed five-value set; unknown tags never construct.
//! - The backend owns note identity and lifecycle; this client holds copies.

pub mod draft;
pub mod note;

//! Page layer: server-side composition of the note views.
//!
//! # Responsibility
//! - Turn routes into page shells: metadata plus dehydrated cache snapshots.
//! - Keep the consuming side free of second fetches at mount.

pub mod metadata;
pub mod server;

pub use metadata::{create_note_metadata, OpenGraph, OpenGraphImage, PageMetadata};
pub use server::{PageServer, RenderedPage, FIRST_PAGE};

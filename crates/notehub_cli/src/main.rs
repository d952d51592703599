//! CLI probe for the NoteHub client core.
//!
//! # Responsibility
//! - Exercise route parsing, prefetch and snapshot hand-off end to end
//!   against the configured backend.
//! - Keep output deterministic enough for quick local sanity checks.

use notehub_core::{parse_path, ApiConfig, HttpNoteApi, PageServer};
use std::process::ExitCode;

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/notes/filter/All".to_string());

    println!("notehub_core version={}", notehub_core::core_version());

    let route = match parse_path(&path) {
        Ok(route) => route,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let api = match HttpNoteApi::new(&ApiConfig::from_env()) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let page = PageServer::new(api).render(&route);
    match serde_json::to_string_pretty(&page.snapshot) {
        Ok(snapshot) => {
            println!("route={route:?}");
            println!("{snapshot}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: failed to serialize snapshot: {err}");
            ExitCode::FAILURE
        }
    }
}

//! HTTP implementation of the note API.
//!
//! # Responsibility
//! - Translate `NoteApi` calls into REST requests against the backend.
//! - Normalize the base URL and attach bearer auth uniformly.
//!
//! # Invariants
//! - Listing requests always carry `page` and `perPage`.
//! - Error bodies are captured but capped before leaving this module.

use crate::api::{ApiError, ApiResult, NoteApi};
use crate::config::ApiConfig;
use crate::model::draft::NoteDraft;
use crate::model::note::{Note, NotesPage};
use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Page size used by the notes listing, matching the web client.
pub const NOTES_PER_PAGE: u32 = 12;

const ERROR_BODY_MAX_CHARS: usize = 256;

/// Blocking HTTP client for the notes backend.
#[derive(Debug)]
pub struct HttpNoteApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpNoteApi {
    /// Builds a client from connection settings.
    ///
    /// # Errors
    /// - `ApiError::InvalidConfig` when the base URL is empty.
    /// - `ApiError::Transport` when the underlying client cannot be built.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: cap_body(&body),
            });
        }
        Ok(response.json()?)
    }
}

impl NoteApi for HttpNoteApi {
    fn fetch_note_by_id(&self, id: &str) -> ApiResult<Note> {
        let url = self.endpoint(&format!("notes/{id}"));
        debug!("event=api_request module=api method=GET url={url}");
        let request = self.authorize(self.client.get(&url));
        Self::decode(request.send()?)
    }

    fn fetch_notes(&self, page: u32, tag: Option<&str>) -> ApiResult<NotesPage> {
        let url = self.endpoint("notes");
        let mut query: Vec<(&str, String)> = vec![
            ("page", page.to_string()),
            ("perPage", NOTES_PER_PAGE.to_string()),
        ];
        if let Some(tag) = tag {
            query.push(("tag", tag.to_string()));
        }
        debug!(
            "event=api_request module=api method=GET url={url} page={page} tag={}",
            tag.unwrap_or("-")
        );
        let request = self.authorize(self.client.get(&url).query(&query));
        Self::decode(request.send()?)
    }

    fn create_note(&self, draft: &NoteDraft) -> ApiResult<Note> {
        let url = self.endpoint("notes");
        debug!("event=api_request module=api method=POST url={url} tag={}", draft.tag);
        let request = self.authorize(self.client.post(&url).json(draft));
        Self::decode(request.send()?)
    }
}

fn cap_body(body: &str) -> String {
    let flattened = body.replace(['\n', '\r'], " ");
    let mut capped: String = flattened.chars().take(ERROR_BODY_MAX_CHARS).collect();
    if flattened.chars().count() > ERROR_BODY_MAX_CHARS {
        capped.push_str("...");
    }
    capped
}

//! Link-preview metadata attached to page shells.

use serde::{Deserialize, Serialize};

/// Open-graph image descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// Open-graph block for social link previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub images: Vec<OpenGraphImage>,
}

/// Page shell metadata for link previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
}

/// Metadata exported by the note creation page shell.
pub fn create_note_metadata() -> PageMetadata {
    PageMetadata {
        title: "New note".to_string(),
        description: "Create new note".to_string(),
        open_graph: Some(OpenGraph {
            title: "New note".to_string(),
            description: "Create new note".to_string(),
            url: "https://notehub.example.com/notes/action/create".to_string(),
            images: vec![OpenGraphImage {
                url: "https://ac.goit.global/fullstack/react/notehub-og-meta.jpg".to_string(),
                width: 1200,
                height: 630,
                alt: "Notes application".to_string(),
            }],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::create_note_metadata;

    #[test]
    fn create_metadata_carries_open_graph_preview() {
        let metadata = create_note_metadata();
        assert_eq!(metadata.title, "New note");
        let open_graph = metadata.open_graph.expect("open graph block should exist");
        assert_eq!(open_graph.images.len(), 1);
        assert_eq!(open_graph.images[0].width, 1200);
    }
}

//! Video record model.

use lectern_content::ContentItem;
use serde::Deserialize;

/// One video/lecture record from the catalog file.
///
/// Only `title` and `slug` are required; everything else defaults so sparse
/// records still load.
#[derive(Clone, Debug, Deserialize)]
pub struct Video {
    /// Display title.
    pub title: String,
    /// URL slug identifying the video.
    pub slug: String,
    /// Short description shown on the listing page.
    #[serde(default)]
    pub description: String,
    /// Creation date as authored in the file (not parsed).
    #[serde(default)]
    pub created: Option<String>,
    /// Poster image URL for the listing page.
    #[serde(default)]
    pub poster: Option<String>,
    /// Content blocks composing the video's body.
    #[serde(default)]
    pub content: Vec<ContentItem>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sparse_record_loads_with_defaults() {
        let video: Video =
            serde_json::from_str(r#"{"title": "Intro", "slug": "intro"}"#).unwrap();

        assert_eq!(video.title, "Intro");
        assert_eq!(video.slug, "intro");
        assert_eq!(video.description, "");
        assert_eq!(video.created, None);
        assert_eq!(video.poster, None);
        assert!(video.content.is_empty());
    }

    #[test]
    fn test_record_with_content_blocks() {
        let json = r#"{
            "title": "Intro",
            "slug": "intro",
            "content": [
                {"type": "heading", "data": "Welcome"},
                {"type": "surprise"}
            ]
        }"#;
        let video: Video = serde_json::from_str(json).unwrap();

        assert_eq!(video.content.len(), 2);
        assert_eq!(video.content[0], ContentItem::Heading { data: "Welcome".to_owned() });
        assert_eq!(video.content[1], ContentItem::Unknown { kind: "surprise".to_owned() });
    }
}

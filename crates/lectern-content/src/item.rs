//! Typed content items.
//!
//! One tagged unit of authorable content within a document. The JSON form
//! carries a `type` discriminator next to its payload fields:
//!
//! ```json
//! { "type": "quote", "data": "hello", "attribute": "Jón" }
//! ```
//!
//! Deserialization is deliberately lenient: any JSON object becomes an item.
//! Unrecognized tags map to [`ContentItem::Unknown`] carrying the literal
//! tag, and missing or wrong-shaped payload fields coerce to empty values.
//! A partially malformed document still renders.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One tagged unit of authorable content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentItem {
    /// Multi-line text; each line renders as its own paragraph.
    Text {
        /// Text content, lines separated by `\n`.
        data: String,
    },
    /// Section heading.
    Heading {
        /// Heading text.
        data: String,
    },
    /// Quotation with a citation.
    Quote {
        /// Quoted text.
        data: String,
        /// Citation or source, may be empty.
        attribute: String,
    },
    /// Unordered list.
    List {
        /// List entries, in order.
        data: Vec<String>,
    },
    /// Verbatim code block.
    Code {
        /// Code text.
        data: String,
    },
    /// Embedded YouTube video.
    Youtube {
        /// Embed URL, passed through verbatim.
        data: String,
    },
    /// Image with a caption.
    Image {
        /// Image URL.
        data: String,
        /// Caption, used both as alt text and as the visible caption.
        caption: String,
    },
    /// Unrecognized tag; renders as a fallback block showing the tag itself.
    Unknown {
        /// The literal tag from the document.
        kind: String,
    },
}

impl ContentItem {
    /// The type tag, as used in the `item--<type>` modifier class.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Text { .. } => "text",
            Self::Heading { .. } => "heading",
            Self::Quote { .. } => "quote",
            Self::List { .. } => "list",
            Self::Code { .. } => "code",
            Self::Youtube { .. } => "youtube",
            Self::Image { .. } => "image",
            Self::Unknown { kind } => kind,
        }
    }
}

/// Raw JSON shape before tag dispatch.
#[derive(Deserialize)]
struct RawItem {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    attribute: String,
    #[serde(default)]
    caption: String,
}

impl<'de> Deserialize<'de> for ContentItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawItem::deserialize(deserializer)?;
        Ok(Self::from(raw))
    }
}

impl From<RawItem> for ContentItem {
    fn from(raw: RawItem) -> Self {
        match raw.kind.as_str() {
            "text" => Self::Text {
                data: string_payload(&raw.data),
            },
            "heading" => Self::Heading {
                data: string_payload(&raw.data),
            },
            "quote" => Self::Quote {
                data: string_payload(&raw.data),
                attribute: raw.attribute,
            },
            "list" => Self::List {
                data: list_payload(&raw.data),
            },
            "code" => Self::Code {
                data: string_payload(&raw.data),
            },
            "youtube" => Self::Youtube {
                data: string_payload(&raw.data),
            },
            "image" => Self::Image {
                data: string_payload(&raw.data),
                caption: raw.caption,
            },
            _ => Self::Unknown { kind: raw.kind },
        }
    }
}

/// Coerce a payload value to a string, empty when absent or non-string.
fn string_payload(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_owned()
}

/// Coerce a payload value to a list of strings, empty when absent.
///
/// Non-string entries coerce to empty strings rather than being dropped, so
/// entry count and order are preserved.
fn list_payload(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|entries| entries.iter().map(string_payload).collect())
        .unwrap_or_default()
}

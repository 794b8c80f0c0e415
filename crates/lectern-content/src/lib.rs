//! Content block compiler for Lectern.
//!
//! Converts an ordered sequence of typed content items (text, headings,
//! quotes, lists, code, embedded video, images) into a single HTML string.
//! Each item is wrapped in a uniform two-level structural shell:
//!
//! ```text
//! <div class="item item--text">
//!   <div class="item__content">...</div>
//! </div>
//! ```
//!
//! The compiler is a pure one-shot transform: one linear pass over the
//! document, a flat match dispatching each item to its builder, then one
//! serialization of the container element. There is no error path — items
//! with unrecognized types degrade to a fallback block and empty payload
//! fields render as empty content, so partial or unknown content never
//! blocks rendering of the rest of the document.
//!
//! # Example
//!
//! ```
//! use lectern_content::{ContentItem, compile};
//!
//! let items = vec![
//!     ContentItem::Heading { data: "Intro".to_owned() },
//!     ContentItem::Text { data: "one\ntwo".to_owned() },
//! ];
//! let html = compile(&items);
//! assert!(html.contains(r#"<div class="item item--heading">"#));
//! ```

mod compile;
mod element;
mod item;

pub use compile::compile;
pub use element::{Element, Node, escape_html};
pub use item::ContentItem;

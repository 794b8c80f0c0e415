//! Content document to HTML compilation.
//!
//! One linear pass over the document: a flat match dispatches each item to
//! its builder, every block is wrapped in the shared two-level shell, and the
//! container is serialized once at the end. Item order is preserved and no
//! item is ever dropped.

use crate::element::Element;
use crate::item::ContentItem;

/// Compile an ordered content document into a single HTML string.
///
/// The result is one `<div>` container whose children are the per-item
/// blocks, in input order. An empty document yields an empty container.
/// This never fails: unrecognized items render as a fallback block and
/// empty payload fields render as empty content.
#[must_use]
pub fn compile(items: &[ContentItem]) -> String {
    let mut container = Element::new("div");
    for entry in items {
        container = container.child(build(entry));
    }
    container.to_html()
}

/// Dispatch one item to its builder.
fn build(entry: &ContentItem) -> Element {
    match entry {
        ContentItem::Text { data } => text(data),
        ContentItem::Heading { data } => heading(data),
        ContentItem::Quote { data, attribute } => quote(data, attribute),
        ContentItem::List { data } => list(data),
        ContentItem::Code { data } => code(data),
        ContentItem::Youtube { data } => youtube(data),
        ContentItem::Image { data, caption } => image(data, caption),
        ContentItem::Unknown { kind } => unknown(kind),
    }
}

/// Wrap a block's children in the two-level structural shell:
/// `item item--<kind>` outside, `item__content` inside.
fn item(kind: &str, children: Vec<Element>) -> Element {
    let mut content = Element::new("div").class("item__content");
    for child in children {
        content = content.child(child);
    }
    Element::new("div")
        .class("item")
        .class(format!("item--{kind}"))
        .child(content)
}

/// Text block: one `<p>` per line. Empty input yields zero paragraphs.
fn text(data: &str) -> Element {
    let mut lines = Vec::new();
    if !data.is_empty() {
        for line in data.split('\n') {
            lines.push(Element::new("p").class("item__text").text(line));
        }
    }
    item("text", lines)
}

/// Heading block.
fn heading(data: &str) -> Element {
    item("heading", vec![Element::new("h3").class("item__heading").text(data)])
}

/// Quote block: a `<blockquote>` holding the quoted text and its
/// attribution. The attribution paragraph is rendered even when empty.
fn quote(data: &str, attribute: &str) -> Element {
    let quoted = Element::new("p").class("item__quote").text(data);
    let source = Element::new("p").class("item__attribute").text(attribute);
    item("quote", vec![Element::new("blockquote").child(quoted).child(source)])
}

/// List block: a `<ul>` with one `<li>` per entry, input order preserved.
fn list(data: &[String]) -> Element {
    let mut ul = Element::new("ul").class("item__ul");
    for entry in data {
        ul = ul.child(Element::new("li").class("item__li").text(entry));
    }
    item("list", vec![ul])
}

/// Code block: verbatim text in a `<pre>`, standard text-node escaping only.
fn code(data: &str) -> Element {
    item("code", vec![Element::new("pre").class("item__code").text(data)])
}

/// Embedded YouTube video. The URL is passed through verbatim.
fn youtube(url: &str) -> Element {
    let iframe = Element::new("iframe")
        .class("item__iframe")
        .attr("src", url)
        .attr("frameborder", "0")
        .attr("allowfullscreen", "true");
    item("youtube", vec![iframe])
}

/// Image block: the caption doubles as alt text and as a visible caption
/// paragraph, both wrapped in a sub-container.
fn image(url: &str, caption: &str) -> Element {
    let img = Element::new("img").class("image__img").attr("alt", caption).attr("src", url);
    let visible_caption = Element::new("p").class("item__caption").text(caption);
    item("image", vec![Element::new("div").child(img).child(visible_caption)])
}

/// Fallback for unrecognized tags: the literal tag as visible text, still
/// wrapped in the shell so the document keeps one block per item.
fn unknown(kind: &str) -> Element {
    item(kind, vec![Element::new("div").text(kind)])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quick_xml::events::Event;
    use quick_xml::reader::Reader;

    use super::*;

    /// Parse compiled markup and return the flat sequence of opening tags
    /// with their class attributes, in document order.
    fn structure(html: &str) -> Vec<(String, String)> {
        let mut reader = Reader::from_str(html);
        reader.config_mut().check_end_names = false;
        let mut tags = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Eof => break,
                Event::Start(start) | Event::Empty(start) => {
                    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                    let class = start
                        .try_get_attribute("class")
                        .unwrap()
                        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
                        .unwrap_or_default();
                    tags.push((tag, class));
                }
                _ => {}
            }
        }
        tags
    }

    fn owned(tags: &[(&str, &str)]) -> Vec<(String, String)> {
        tags.iter().map(|(tag, class)| ((*tag).to_owned(), (*class).to_owned())).collect()
    }

    #[test]
    fn test_empty_document_yields_empty_container() {
        assert_eq!(compile(&[]), "<div></div>");
    }

    #[test]
    fn test_one_wrapper_per_item_in_order() {
        let items = vec![
            ContentItem::Heading { data: "a".to_owned() },
            ContentItem::Code { data: "b".to_owned() },
            ContentItem::Heading { data: "c".to_owned() },
        ];
        let html = compile(&items);

        assert_eq!(html.matches(r#"<div class="item item--"#).count(), 3);
        let heading_pos = html.find("item--heading").unwrap();
        let code_pos = html.find("item--code").unwrap();
        let last_pos = html.rfind("item--heading").unwrap();
        assert!(heading_pos < code_pos && code_pos < last_pos);
    }

    #[test]
    fn test_text_splits_lines_into_paragraphs() {
        let html = compile(&[ContentItem::Text { data: "a\nb\nc".to_owned() }]);
        assert_eq!(
            html,
            r#"<div><div class="item item--text"><div class="item__content"><p class="item__text">a</p><p class="item__text">b</p><p class="item__text">c</p></div></div></div>"#
        );
    }

    #[test]
    fn test_empty_text_yields_no_paragraphs() {
        let html = compile(&[ContentItem::Text { data: String::new() }]);
        assert_eq!(
            html,
            r#"<div><div class="item item--text"><div class="item__content"></div></div></div>"#
        );
    }

    #[test]
    fn test_blank_interior_line_keeps_its_paragraph() {
        let html = compile(&[ContentItem::Text { data: "a\n\nb".to_owned() }]);
        assert_eq!(html.matches("<p").count(), 3);
    }

    #[test]
    fn test_heading() {
        let html = compile(&[ContentItem::Heading { data: "Intro".to_owned() }]);
        assert!(html.contains(r#"<h3 class="item__heading">Intro</h3>"#));
        assert!(html.contains("item--heading"));
    }

    #[test]
    fn test_quote_has_text_then_attribution() {
        let html = compile(&[ContentItem::Quote {
            data: "hello".to_owned(),
            attribute: "Jón".to_owned(),
        }]);
        assert_eq!(
            html,
            r#"<div><div class="item item--quote"><div class="item__content"><blockquote><p class="item__quote">hello</p><p class="item__attribute">Jón</p></blockquote></div></div></div>"#
        );
    }

    #[test]
    fn test_quote_with_empty_attribution_still_renders_paragraph() {
        let html = compile(&[ContentItem::Quote {
            data: "hello".to_owned(),
            attribute: String::new(),
        }]);
        assert!(html.contains(r#"<p class="item__attribute"></p>"#));
    }

    #[test]
    fn test_list_preserves_entry_order() {
        let html = compile(&[ContentItem::List {
            data: vec!["x".to_owned(), "y".to_owned()],
        }]);
        assert_eq!(
            html,
            r#"<div><div class="item item--list"><div class="item__content"><ul class="item__ul"><li class="item__li">x</li><li class="item__li">y</li></ul></div></div></div>"#
        );
    }

    #[test]
    fn test_code_escapes_text_only() {
        let html = compile(&[ContentItem::Code { data: "if (a < b) {}".to_owned() }]);
        assert!(html.contains(r#"<pre class="item__code">if (a &lt; b) {}</pre>"#));
    }

    #[test]
    fn test_youtube_iframe_attributes() {
        let html = compile(&[ContentItem::Youtube {
            data: "https://www.youtube.com/embed/abc123".to_owned(),
        }]);
        assert!(html.contains(
            r#"<iframe class="item__iframe" src="https://www.youtube.com/embed/abc123" frameborder="0" allowfullscreen="true"></iframe>"#
        ));
    }

    #[test]
    fn test_image_caption_used_as_alt_and_caption() {
        let html = compile(&[ContentItem::Image {
            data: "https://example.com/cat.png".to_owned(),
            caption: "A cat".to_owned(),
        }]);
        assert!(html.contains(
            r#"<img class="image__img" alt="A cat" src="https://example.com/cat.png">"#
        ));
        assert!(html.contains(r#"<p class="item__caption">A cat</p>"#));
    }

    #[test]
    fn test_unknown_type_renders_tag_as_text() {
        let html = compile(&[ContentItem::Unknown { kind: "foo".to_owned() }]);
        assert_eq!(
            html,
            r#"<div><div class="item item--foo"><div class="item__content"><div>foo</div></div></div></div>"#
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items = vec![ContentItem::Text { data: "a\nb".to_owned() }];
        let before = items.clone();
        let _ = compile(&items);
        assert_eq!(items, before);
    }

    #[test]
    fn test_compile_is_deterministic() {
        let items = vec![
            ContentItem::Heading { data: "h".to_owned() },
            ContentItem::List { data: vec!["x".to_owned()] },
        ];
        assert_eq!(compile(&items), compile(&items));
    }

    #[test]
    fn test_structural_composition_of_full_document() {
        let items = vec![
            ContentItem::Heading { data: "Intro".to_owned() },
            ContentItem::Text { data: "a\nb".to_owned() },
            ContentItem::Quote { data: "q".to_owned(), attribute: "src".to_owned() },
            ContentItem::List { data: vec!["x".to_owned(), "y".to_owned()] },
            ContentItem::Code { data: "fn main() {}".to_owned() },
            ContentItem::Youtube { data: "https://www.youtube.com/embed/abc".to_owned() },
            ContentItem::Image { data: "/cat.png".to_owned(), caption: "cat".to_owned() },
            ContentItem::Unknown { kind: "foo".to_owned() },
        ];
        let html = compile(&items);

        let expected = owned(&[
            ("div", ""),
            ("div", "item item--heading"),
            ("div", "item__content"),
            ("h3", "item__heading"),
            ("div", "item item--text"),
            ("div", "item__content"),
            ("p", "item__text"),
            ("p", "item__text"),
            ("div", "item item--quote"),
            ("div", "item__content"),
            ("blockquote", ""),
            ("p", "item__quote"),
            ("p", "item__attribute"),
            ("div", "item item--list"),
            ("div", "item__content"),
            ("ul", "item__ul"),
            ("li", "item__li"),
            ("li", "item__li"),
            ("div", "item item--code"),
            ("div", "item__content"),
            ("pre", "item__code"),
            ("div", "item item--youtube"),
            ("div", "item__content"),
            ("iframe", "item__iframe"),
            ("div", "item item--image"),
            ("div", "item__content"),
            ("div", ""),
            ("img", "image__img"),
            ("p", "item__caption"),
            ("div", "item item--foo"),
            ("div", "item__content"),
            ("div", ""),
        ]);
        assert_eq!(structure(&html), expected);
        // Re-serializing the same document parses to the identical structure
        assert_eq!(structure(&compile(&items)), expected);
    }

    #[test]
    fn test_document_parsed_from_json_end_to_end() {
        let json = r#"[
            {"type": "heading", "data": "Welcome"},
            {"type": "mystery", "data": 7},
            {"type": "quote", "data": "hello", "attribute": "Jón"}
        ]"#;
        let items: Vec<ContentItem> = serde_json::from_str(json).unwrap();
        let html = compile(&items);

        assert_eq!(html.matches(r#"<div class="item item--"#).count(), 3);
        assert!(html.contains("mystery"));
        assert!(html.contains("Jón"));
    }
}

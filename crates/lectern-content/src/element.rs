//! Lightweight HTML element tree.
//!
//! A minimal stand-in for a DOM, used purely as a string builder: tag name,
//! class list, ordered attributes, ordered children. A single serialization
//! routine produces the markup text, escaping text nodes and attribute
//! values. No layout, scripting, or parsing happens here.

use std::fmt::Write;

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["area", "base", "br", "col", "hr", "img", "input", "link", "meta"];

/// A node in the element tree: a child element or a text node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Text content, escaped on serialization.
    Text(String),
}

/// An HTML element under construction.
///
/// Built with chained calls, then serialized once with [`Element::to_html`]:
///
/// ```
/// use lectern_content::Element;
///
/// let p = Element::new("p").class("item__text").text("hello");
/// assert_eq!(p.to_html(), r#"<p class="item__text">hello</p>"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag name.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a class to the class list.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute. Attributes serialize in insertion order.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append a text node.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Number of direct children (elements and text nodes).
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Serialize the element and its subtree to markup text.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            write!(out, r#" class="{}""#, escape_html(&self.classes.join(" "))).unwrap();
        }
        for (name, value) in &self.attrs {
            write!(out, r#" {}="{}""#, name, escape_html(value)).unwrap();
        }
        out.push('>');

        // Void elements take no children and no closing tag
        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&escape_html(text)),
            }
        }
        write!(out, "</{}>", self.tag).unwrap();
    }
}

/// Escape HTML special characters in text content or attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_element() {
        assert_eq!(Element::new("div").to_html(), "<div></div>");
    }

    #[test]
    fn test_classes_join_with_spaces() {
        let el = Element::new("div").class("item").class("item--text");
        assert_eq!(el.to_html(), r#"<div class="item item--text"></div>"#);
    }

    #[test]
    fn test_attributes_in_insertion_order() {
        let el = Element::new("iframe").attr("src", "https://example.com").attr("frameborder", "0");
        assert_eq!(
            el.to_html(),
            r#"<iframe src="https://example.com" frameborder="0"></iframe>"#
        );
    }

    #[test]
    fn test_children_in_order() {
        let el = Element::new("ul")
            .child(Element::new("li").text("x"))
            .child(Element::new("li").text("y"));
        assert_eq!(el.to_html(), "<ul><li>x</li><li>y</li></ul>");
    }

    #[test]
    fn test_text_nodes_are_escaped() {
        let el = Element::new("pre").text("if (a < b && c > d) { \"quote\" }");
        assert_eq!(
            el.to_html(),
            "<pre>if (a &lt; b &amp;&amp; c &gt; d) { &quot;quote&quot; }</pre>"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let el = Element::new("img").attr("alt", r#"a "quoted" <caption>"#);
        assert_eq!(el.to_html(), r#"<img alt="a &quot;quoted&quot; &lt;caption&gt;">"#);
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let el = Element::new("img").attr("src", "/a.png");
        assert_eq!(el.to_html(), r#"<img src="/a.png">"#);
    }

    #[test]
    fn test_mixed_text_and_element_children() {
        let el = Element::new("div").text("before").child(Element::new("br")).text("after");
        assert_eq!(el.to_html(), "<div>before<br>after</div>");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<p>'hi'</p>"), "&lt;p&gt;&#x27;hi&#x27;&lt;/p&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}

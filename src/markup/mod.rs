//! Minimal element tree used as the render target of the shell's views.
//!
//! Attributes keep insertion order, so rendering the same tree always yields
//! the same bytes.

use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Several siblings with no wrapping element
    Fragment(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a child only when present
    pub fn maybe_child(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Depth-first search for the first element carrying `class` in its
    /// class list.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Fragment(children) => children.iter().find_map(|c| c.find_by_class(class)),
            Node::Element(el) => {
                let has_class = el
                    .get_attr("class")
                    .is_some_and(|classes| classes.split_whitespace().any(|c| c == class));
                if has_class {
                    Some(el)
                } else {
                    el.children.iter().find_map(|c| c.find_by_class(class))
                }
            }
        }
    }

    /// Concatenated text content
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Fragment(children) => children.iter().for_each(|c| c.collect_text(out)),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Fragment(children) => children.iter().for_each(|c| c.write_html(out)),
            Node::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                for (name, value) in &el.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                out.push('>');
                if VOID_TAGS.contains(&el.tag) {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }
}

/// Elements that take no children and no closing tag
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let node: Node = Element::new("div")
            .attr("class", "row")
            .child(Element::new("span").text("hi"))
            .into();
        assert_eq!(node.to_html(), "<div class=\"row\"><span>hi</span></div>");
    }

    #[test]
    fn test_escaping() {
        let node: Node = Element::new("p")
            .attr("title", "a \"quote\"")
            .text("<b>&</b>")
            .into();
        assert_eq!(
            node.to_html(),
            "<p title=\"a &quot;quote&quot;\">&lt;b&gt;&amp;&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn test_find_by_class() {
        let node: Node = Element::new("div")
            .child(Element::new("span").attr("class", "badge unread").text("3"))
            .into();
        let badge = node.find_by_class("unread").unwrap();
        assert_eq!(badge.tag, "span");
        assert!(node.find_by_class("presence").is_none());
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let node: Node = Element::new("div")
            .child(Element::new("img").attr("src", "/a.png"))
            .child(Element::new("br"))
            .into();
        assert_eq!(node.to_html(), "<div><img src=\"/a.png\"><br></div>");
    }

    #[test]
    fn test_fragment_and_text_content() {
        let node = Node::Fragment(vec![Node::text("a"), Element::new("b").text("c").into()]);
        assert_eq!(node.text_content(), "ac");
        assert_eq!(node.to_html(), "a<b>c</b>");
    }
}

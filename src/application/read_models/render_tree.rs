//! Typed element tree the dashboard is rendered into.
//!
//! Regions are compared as whole [`Node`] values, so two renders of the same
//! data produce equal trees and the renderer can skip the patch.

use std::collections::BTreeMap;

/// A node in the render tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape_html(t)),
            Node::Element(e) => e.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with an optional id, an ordered class list and attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    /// Adds `class` only when `enabled` is true
    pub fn class_if(self, class: &str, enabled: bool) -> Self {
        if enabled {
            self.class(class)
        } else {
            self
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.collect_text(&mut out));
        out
    }

    /// Depth-first search for the element carrying `id`, including self
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find_map(|e| e.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(e) => e.find_mut(id),
            Node::Text(_) => None,
        })
    }

    /// Detaches the descendant carrying `id` and returns it
    pub fn remove_descendant(&mut self, id: &str) -> Option<Element> {
        if let Some(pos) = self
            .children
            .iter()
            .position(|n| matches!(n, Node::Element(e) if e.id() == Some(id)))
        {
            return match self.children.remove(pos) {
                Node::Element(e) => Some(e),
                Node::Text(_) => None,
            };
        }
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(e) => e.remove_descendant(id),
            Node::Text(_) => None,
        })
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            push_attribute(out, "id", id);
        }
        if !self.classes.is_empty() {
            push_attribute(out, "class", &self.classes.join(" "));
        }
        for (name, value) in &self.attributes {
            push_attribute(out, name, value);
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

/// Elements serialized without children or a closing tag
const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

/// Escapes the five HTML-significant characters
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .with_id("root")
            .class("panel")
            .child(Element::new("span").with_id("a").text("Alpha"))
            .child(
                Element::new("ul")
                    .with_id("list")
                    .child(Element::new("li").with_id("b").text("Beta")),
            )
    }

    #[test]
    fn test_to_html() {
        let html = Element::new("p")
            .with_id("x")
            .class("kpi")
            .class("active")
            .attr("data-tab", "overview")
            .text("5 < 6 & \"ok\"")
            .to_html();
        assert_eq!(
            html,
            r#"<p id="x" class="kpi active" data-tab="overview">5 &lt; 6 &amp; &quot;ok&quot;</p>"#
        );
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let html = Element::new("meta").attr("charset", "utf-8").to_html();
        assert_eq!(html, r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn test_find_nested() {
        let root = sample();
        assert_eq!(root.find("b").unwrap().text_content(), "Beta");
        assert!(root.find("missing").is_none());
        assert_eq!(root.find("root").unwrap().tag(), "div");
    }

    #[test]
    fn test_remove_descendant() {
        let mut root = sample();
        let removed = root.remove_descendant("b").unwrap();
        assert_eq!(removed.text_content(), "Beta");
        assert!(root.find("b").is_none());
        assert!(root.find("list").is_some());
    }

    #[test]
    fn test_class_toggling_is_idempotent() {
        let mut e = Element::new("button");
        e.add_class("active");
        e.add_class("active");
        assert_eq!(e.classes(), ["active".to_string()]);
        e.remove_class("active");
        assert!(!e.has_class("active"));
    }

    #[test]
    fn test_equal_trees_compare_equal() {
        assert_eq!(Node::from(sample()), Node::from(sample()));
        let changed = sample().class("active");
        assert_ne!(Node::from(sample()), Node::from(changed));
    }

    #[test]
    fn test_text_content_concatenates() {
        assert_eq!(sample().text_content(), "AlphaBeta");
    }
}

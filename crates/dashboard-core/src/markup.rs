//! Generic markup tree.
//!
//! Every renderable piece of a page is a [`MarkupNode`]: either an element
//! with a tag, attributes, inline style and children, or a text leaf.
//! Trees are built once and then only read, either as HTML or as JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Element kinds understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    H1,
    H4,
    P,
    Table,
    /// Table head section
    Thead,
    /// Table body section
    Tbody,
    /// Table row
    Tr,
    /// Header cell
    Th,
    /// Data cell
    Td,
    /// Chart container, hydrated client-side from its figure JSON
    Graph,
}

impl Tag {
    /// HTML element name emitted for this tag.
    pub fn html_name(&self) -> &'static str {
        match self {
            Tag::Div | Tag::Graph => "div",
            Tag::H1 => "h1",
            Tag::H4 => "h4",
            Tag::P => "p",
            Tag::Table => "table",
            Tag::Thead => "thead",
            Tag::Tbody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
        }
    }
}

/// Inline CSS declarations, kept in key order for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property. Keys may be camelCase (`textAlign`) or kebab-case.
    #[must_use]
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a CSS declaration list, e.g. `color: red; text-align: center`.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}: {}", kebab_case(k), v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(default)]
    pub children: Vec<MarkupNode>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: BTreeMap::new(),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<MarkupNode>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<MarkupNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MarkupNode {
    Element(Element),
    Text { text: String },
}

impl MarkupNode {
    pub fn text(text: impl Into<String>) -> Self {
        MarkupNode::Text { text: text.into() }
    }

    /// Tag of an element node; `None` for text.
    pub fn tag(&self) -> Option<Tag> {
        match self {
            MarkupNode::Element(e) => Some(e.tag),
            MarkupNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Element(e) => &e.children,
            MarkupNode::Text { .. } => &[],
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            MarkupNode::Element(e) => e.attributes.get(name).map(String::as_str),
            MarkupNode::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            MarkupNode::Text { text } => out.push_str(text),
            MarkupNode::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Render the tree as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            MarkupNode::Text { text } => out.push_str(&html_escape::encode_text(text)),
            MarkupNode::Element(e) => {
                let name = e.tag.html_name();
                out.push('<');
                out.push_str(name);

                if e.tag == Tag::Graph && !e.attributes.contains_key("class") {
                    out.push_str(" class=\"dash-graph\"");
                }
                for (key, value) in &e.attributes {
                    let _ = write!(
                        out,
                        " {}=\"{}\"",
                        key,
                        html_escape::encode_double_quoted_attribute(value)
                    );
                }
                if !e.style.is_empty() {
                    let _ = write!(
                        out,
                        " style=\"{}\"",
                        html_escape::encode_double_quoted_attribute(&e.style.to_css())
                    );
                }
                out.push('>');

                for child in &e.children {
                    child.write_html(out);
                }

                let _ = write!(out, "</{}>", name);
            }
        }
    }
}

impl From<Element> for MarkupNode {
    fn from(element: Element) -> Self {
        MarkupNode::Element(element)
    }
}

impl From<&str> for MarkupNode {
    fn from(text: &str) -> Self {
        MarkupNode::text(text)
    }
}

impl From<String> for MarkupNode {
    fn from(text: String) -> Self {
        MarkupNode::text(text)
    }
}

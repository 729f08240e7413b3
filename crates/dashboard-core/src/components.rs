//! Declarative page components.
//!
//! Small constructors for the building blocks a dashboard page is composed
//! of. Anything convertible into a [`MarkupNode`] can be a child, so plain
//! strings become text.

use crate::error::Result;
use crate::figure::Figure;
use crate::markup::{Element, MarkupNode, Tag};
use serde::{Deserialize, Serialize};

pub fn div<I, N>(children: I) -> Element
where
    I: IntoIterator<Item = N>,
    N: Into<MarkupNode>,
{
    Element::new(Tag::Div).children(children)
}

pub fn h1(text: impl Into<String>) -> Element {
    Element::new(Tag::H1).child(text.into())
}

pub fn h4(text: impl Into<String>) -> Element {
    Element::new(Tag::H4).child(text.into())
}

pub fn p(text: impl Into<String>) -> Element {
    Element::new(Tag::P).child(text.into())
}

/// Chart container carrying its figure as JSON in `data-figure`.
pub fn graph(id: impl Into<String>, figure: &Figure) -> Result<Element> {
    Ok(Element::new(Tag::Graph)
        .id(id)
        .attr("data-figure", figure.to_json()?))
}

/// A titled page layout, handed to the server as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub root: MarkupNode,
}

impl Layout {
    pub fn new(title: impl Into<String>, root: impl Into<MarkupNode>) -> Self {
        Self {
            title: title.into(),
            root: root.into(),
        }
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{BarSpec, Figure};
    use crate::dataset::{Column, Dataset};

    #[test]
    fn test_compose_layout() {
        let layout = Layout::new(
            "Demo",
            div([h1("Title"), p("Some text")]).id("root"),
        );
        assert_eq!(
            layout.to_html(),
            "<div id=\"root\"><h1>Title</h1><p>Some text</p></div>"
        );
    }

    #[test]
    fn test_graph_embeds_figure() {
        let ds = Dataset::new(vec![Column::new("a", ["x"]), Column::new("b", [1])]).unwrap();
        let figure = Figure::bar(&ds, &BarSpec::new("a", "b")).unwrap();
        let node: MarkupNode = graph("chart", &figure).unwrap().into();

        let json = node.attribute("data-figure").unwrap();
        let parsed: Figure = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, figure);
        assert!(node.to_html().starts_with("<div class=\"dash-graph\" data-figure=\"{&quot;data&quot;"));
    }
}

use std::fmt;

use crate::error::{MarkdownError, Result};

/// Element attributes, rendered in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props(Vec<(String, String)>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Props::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key`. An existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders ` key="value"` for every prop; empty when there are none.
    ///
    /// Values are escaped for a double-quoted attribute.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        for (key, value) in self.iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

/// A node without children: a tagged element around a value, or raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// `None` renders `value` verbatim with no surrounding element.
    pub tag: Option<String>,
    pub value: String,
    pub props: Props,
}

impl LeafNode {
    /// Untagged text.
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            props: Props::new(),
        }
    }

    pub fn tagged(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            props: Props::new(),
        }
    }

    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }
}

/// An element whose content is its children.
///
/// # Invariants
///
/// - `children` is never empty; [`ParentNode::new`] refuses to build one.
///
/// Fields are private so the invariant cannot be broken after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    props: Props,
}

impl ParentNode {
    /// # Errors
    /// [`MarkdownError::EmptyContainer`] if `children` is empty.
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self> {
        Self::with_props(tag, children, Props::new())
    }

    pub fn with_props(
        tag: impl Into<String>,
        children: Vec<HtmlNode>,
        props: Props,
    ) -> Result<Self> {
        let tag = tag.into();
        if children.is_empty() {
            return Err(MarkdownError::EmptyContainer { tag });
        }
        Ok(Self {
            tag,
            children,
            props,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn props(&self) -> &Props {
        &self.props
    }
}

/// A node of the rendered HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Serializes the subtree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Appends the rendered subtree to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(LeafNode {
                tag: None, value, ..
            }) => out.push_str(value),
            HtmlNode::Leaf(LeafNode {
                tag: Some(tag),
                value,
                props,
            }) => {
                open_tag(out, tag, props);
                out.push_str(value);
                close_tag(out, tag);
            }
            HtmlNode::Parent(parent) => {
                open_tag(out, &parent.tag, &parent.props);
                for child in &parent.children {
                    child.write_html(out);
                }
                close_tag(out, &parent.tag);
            }
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Concatenated leaf values of the subtree, without markup.
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Leaf(leaf) => leaf.value.clone(),
            HtmlNode::Parent(parent) => parent.children.iter().map(HtmlNode::text_content).collect(),
        }
    }
}

fn open_tag(out: &mut String, tag: &str, props: &Props) {
    out.push('<');
    out.push_str(tag);
    props.write_html(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

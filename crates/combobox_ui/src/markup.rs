//! Immutable markup tree produced by every primitive.
//!
//! A [`Markup`] value is a plain description of nested elements; it is handed
//! to a renderer (the Leptos bridge in [`crate::view`], or [`Markup::to_html`])
//! and never mutated after construction.

use std::fmt::Write as _;

use crate::class_names::ComposedClassName;

const VOID_ELEMENTS: &[&str] = &["input", "img", "br", "hr", "meta", "link"];

/// A node in a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// A single element with attributes and children.
    Element(Element),
    /// Literal text content.
    Text(String),
    /// An ordered sequence of sibling nodes without a wrapper.
    Fragment(Vec<Markup>),
}

impl Markup {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates an empty fragment.
    pub fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    /// Returns the element when this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first, pre-order search for the first element matching `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            Self::Text(_) => None,
            Self::Element(element) => {
                if predicate(element) {
                    return Some(element);
                }
                element.children.iter().find_map(|child| child.find(predicate))
            }
            Self::Fragment(children) => children.iter().find_map(|child| child.find(predicate)),
        }
    }

    /// All elements matching `predicate`, in document order.
    pub fn find_all(&self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matches(predicate, &mut found);
        found
    }

    fn collect_matches<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        match self {
            Self::Text(_) => {}
            Self::Element(element) => {
                if predicate(element) {
                    found.push(element);
                }
                for child in &element.children {
                    child.collect_matches(predicate, found);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.collect_matches(predicate, found);
                }
            }
        }
    }

    /// First element carrying the class token `token`.
    pub fn find_by_class(&self, token: &str) -> Option<&Element> {
        self.find(&|element| element.has_class(token))
    }

    /// Every element carrying the class token `token`.
    pub fn find_all_by_class(&self, token: &str) -> Vec<&Element> {
        self.find_all(&|element| element.has_class(token))
    }

    /// First element with tag name `tag`.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        self.find(&|element| element.tag == tag)
    }

    /// Serialises the tree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => {
                html_escape::encode_text_to_string(text, out);
            }
            Self::Element(element) => element.write_html(out),
            Self::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
        }
    }
}

impl From<Element> for Markup {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<String> for Markup {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Markup {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<Markup>> for Markup {
    fn from(value: Vec<Markup>) -> Self {
        Self::Fragment(value)
    }
}

/// An element description: tag, ordered attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, for example `div` or `svg`.
    pub tag: &'static str,
    /// Attributes in the order they were set.
    pub attrs: Vec<(&'static str, String)>,
    /// Child nodes in document order.
    pub children: Vec<Markup>,
}

impl Element {
    /// Creates an element with no attributes and no children.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets attribute `name`, replacing an earlier value for the same name.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Sets attribute `name` only when `value` is present.
    pub fn opt_attr<V: Into<String>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Sets the `class` attribute unless the composition is empty.
    pub fn class(self, class_name: ComposedClassName) -> Self {
        if class_name.is_empty() {
            self
        } else {
            self.attr("class", class_name.into_string())
        }
    }

    /// Appends one child node.
    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a child node only when present.
    pub fn opt_child(self, child: Option<impl Into<Markup>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Appends every node from `children`.
    pub fn children(mut self, children: impl IntoIterator<Item = Markup>) -> Self {
        self.children.extend(children);
        self
    }

    /// Value of attribute `name`, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `class` attribute, or an empty string.
    pub fn class_name(&self) -> &str {
        self.attribute("class").unwrap_or("")
    }

    /// Returns `true` when the class attribute contains `token`.
    pub fn has_class(&self, token: &str) -> bool {
        self.class_name().split_whitespace().any(|candidate| candidate == token)
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        Markup::Fragment(self.children.clone()).text_content()
    }

    /// Serialises the children only.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"");
            html_escape::encode_double_quoted_attribute_to_string(value, out);
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

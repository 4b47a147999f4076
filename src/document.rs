// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Owned SVG document tree and its JSX-compatible serializer.
//!
//! The tree keeps attributes in an insertion-ordered map and children in
//! source order so that serializing the same document always yields the same
//! bytes.

use std::{borrow::Cow, fmt::Write as _};

use indexmap::IndexMap;

/// Ordered attribute mapping of a single element.
pub type Attributes = IndexMap<String, String>;

/// Parsed SVG document rooted at the `svg` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    root: Element
}

/// Element node with its tag name, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name exactly as written in the source.
    pub name:       String,
    /// Attributes in source order, values already unescaped.
    pub attributes: Attributes,
    /// Child nodes in source order.
    pub children:   Vec<Node>
}

/// Child node of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Character data, already unescaped.
    Text(String)
}

impl SvgDocument {
    /// Wraps an element as the document root.
    ///
    /// The caller guarantees that `root` is an `svg` element; the parser is
    /// the only producer in this crate.
    pub(crate) fn from_root(root: Element) -> Self {
        Self {
            root
        }
    }

    /// Borrows the root `svg` element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Consumes the document and returns the root element.
    pub fn into_root(self) -> Element {
        self.root
    }

    /// Serializes the document into markup that can be embedded in a JSX
    /// expression.
    ///
    /// Childless elements self-close, attribute values are double-quoted and
    /// entity-escaped, and text containing braces is wrapped in an expression
    /// container holding a string literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgenius::parse_svg;
    ///
    /// let document = parse_svg("<svg viewBox=\"0 0 1 1\"><path d=\"M0 0\"></path></svg>")
    ///     .expect("valid svg");
    /// assert_eq!(
    ///     document.to_markup(),
    ///     "<svg viewBox=\"0 0 1 1\"><path d=\"M0 0\"/></svg>"
    /// );
    /// ```
    pub fn to_markup(&self) -> String {
        let mut buffer = String::with_capacity(256);
        write_element(&mut buffer, &self.root);
        buffer
    }
}

impl Element {
    /// Creates an element without attributes or children.
    pub fn new<N>(name: N) -> Self
    where
        N: Into<String>
    {
        Self {
            name:       name.into(),
            attributes: Attributes::new(),
            children:   Vec::new()
        }
    }

    /// Returns `true` when the tag name is `svg`, ignoring ASCII case.
    pub fn is_svg(&self) -> bool {
        self.name.eq_ignore_ascii_case("svg")
    }

    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterates over the direct element children, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None
        })
    }
}

fn write_element(buffer: &mut String, element: &Element) {
    buffer.push('<');
    buffer.push_str(&element.name);
    for (name, value) in &element.attributes {
        let _ = write!(buffer, " {name}=\"{}\"", escape_xml(value));
    }

    if element.children.is_empty() {
        buffer.push_str("/>");
        return;
    }

    buffer.push('>');
    for child in &element.children {
        match child {
            Node::Element(nested) => write_element(buffer, nested),
            Node::Text(text) => write_text(buffer, text)
        }
    }
    let _ = write!(buffer, "</{}>", element.name);
}

fn write_text(buffer: &mut String, text: &str) {
    if text.contains(['{', '}']) {
        // serde_json string literals are valid JavaScript string literals
        let literal = serde_json::Value::String(text.to_owned()).to_string();
        let _ = write!(buffer, "{{{literal}}}");
    } else {
        buffer.push_str(&escape_xml(text));
    }
}

fn escape_xml(value: &str) -> Cow<'_, str> {
    if value
        .chars()
        .any(|character| matches!(character, '&' | '<' | '>' | '\"' | '\''))
    {
        let mut escaped = String::with_capacity(value.len());
        for character in value.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                other => escaped.push(other)
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(value)
    }
}

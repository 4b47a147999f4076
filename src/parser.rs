// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Markup parser that loads SVG text into an owned [`SvgDocument`].
//!
//! The parser drives `quick-xml`'s pull reader, builds the full element forest
//! and then selects the first `svg` element in document order as the root.
//! Comments, processing instructions, declarations and doctypes are discarded
//! because they have no JSX representation. Entities declared in the
//! doctype's internal subset are still honoured when values are unescaped.

use std::{borrow::Cow, collections::HashMap};

use quick_xml::{
    Reader,
    events::{BytesStart, Event}
};

use crate::{
    document::{Element, Node, SvgDocument},
    error::Error
};

/// Parses SVG markup into a document rooted at its `svg` element.
///
/// Attribute order and element order are preserved exactly as written.
///
/// # Errors
///
/// Returns [`Error::Parse`](Error::Parse) when the input is blank, when the
/// markup is not well-formed, or when it contains no `svg` element.
///
/// # Examples
///
/// ```
/// use svgenius::parse_svg;
///
/// let document = parse_svg("<svg width=\"24\"><circle r=\"4\"/></svg>").expect("valid svg");
/// assert_eq!(document.root().attribute("width"), Some("24"));
/// assert!(parse_svg("<div></div>").is_err());
/// ```
pub fn parse_svg(text: &str) -> Result<SvgDocument, Error> {
    if text.trim().is_empty() {
        return Err(Error::parse("document is empty"));
    }

    let forest = read_forest(text)?;
    take_first_svg(forest)
        .map(SvgDocument::from_root)
        .ok_or_else(|| Error::parse("no <svg> element found"))
}

/// Reads every top-level node of the document.
fn read_forest(text: &str) -> Result<Vec<Node>, Error> {
    let mut reader = Reader::from_str(text);
    let mut open: Vec<Element> = Vec::new();
    let mut forest = Vec::new();
    let mut entities = Entities::default();

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(source) => {
                return Err(Error::parse(format!(
                    "{source} (at byte {})",
                    reader.buffer_position()
                )));
            }
        };

        match event {
            Event::Start(start) => open.push(element_from_start(&start, &entities)?),
            Event::Empty(start) => {
                let element = element_from_start(&start, &entities)?;
                attach(&mut open, &mut forest, Node::Element(element));
            }
            Event::End(end) => {
                let element = open.pop().ok_or_else(|| {
                    Error::parse(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    ))
                })?;
                attach(&mut open, &mut forest, Node::Element(element));
            }
            Event::Text(content) => {
                let value = or_raw(
                    content.unescape_with(|name| entities.resolve(name)),
                    &content
                );
                attach_text(&mut open, value);
            }
            Event::CData(content) => {
                let value = String::from_utf8(content.into_inner().into_owned())
                    .map_err(|source| Error::parse(source.to_string()))?;
                attach_text(&mut open, value);
            }
            Event::Eof => break,
            Event::DocType(content) => {
                entities = Entities::from_doctype(&String::from_utf8_lossy(&content));
            }
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(Error::parse(format!(
            "element <{}> is never closed",
            unclosed.name
        )));
    }

    Ok(forest)
}

fn element_from_start(start: &BytesStart<'_>, entities: &Entities) -> Result<Element, Error> {
    let name = utf8(start.name().as_ref())?;
    let mut element = Element::new(name);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|source| Error::parse(source.to_string()))?;
        let key = utf8(attribute.key.as_ref())?;
        let value = or_raw(
            attribute.unescape_value_with(|name| entities.resolve(name)),
            &attribute.value
        );
        element.attributes.insert(key, value);
    }

    Ok(element)
}

/// Falls back to the undecoded text when a reference cannot be resolved.
fn or_raw<E>(unescaped: Result<Cow<'_, str>, E>, raw: &[u8]) -> String {
    match unescaped {
        Ok(value) => value.into_owned(),
        Err(_) => String::from_utf8_lossy(raw).into_owned()
    }
}

/// General entities available while unescaping: declarations from the
/// doctype's internal subset plus common HTML names.
#[derive(Debug, Default)]
struct Entities {
    declared: HashMap<String, String>
}

impl Entities {
    /// Collects `<!ENTITY name "value">` declarations. Parameter entities and
    /// external (`SYSTEM`/`PUBLIC`) entities are skipped.
    fn from_doctype(doctype: &str) -> Self {
        let mut declared = HashMap::new();
        let mut rest = doctype;

        while let Some(start) = rest.find("<!ENTITY") {
            rest = rest[start + "<!ENTITY".len()..].trim_start();
            if rest.starts_with('%') {
                continue;
            }

            let name_end = rest
                .find(|ch: char| ch.is_whitespace())
                .unwrap_or(rest.len());
            let name = &rest[..name_end];
            rest = rest[name_end..].trim_start();

            let Some(quote) = rest.chars().next().filter(|ch| *ch == '"' || *ch == '\'') else {
                continue;
            };
            let body = &rest[1..];
            let Some(value_end) = body.find(quote) else {
                break;
            };
            if !name.is_empty() {
                declared
                    .entry(name.to_owned())
                    .or_insert_with(|| body[..value_end].to_owned());
            }
            rest = &body[value_end + 1..];
        }

        Self {
            declared
        }
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        self.declared
            .get(name)
            .map(String::as_str)
            .or_else(|| html_entity(name))
    }
}

/// Named HTML entities that commonly leak into hand-edited SVG text.
fn html_entity(name: &str) -> Option<&'static str> {
    let value = match name {
        "nbsp" => "\u{a0}",
        "copy" => "\u{a9}",
        "reg" => "\u{ae}",
        "trade" => "\u{2122}",
        "deg" => "\u{b0}",
        "middot" => "\u{b7}",
        "times" => "\u{d7}",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "laquo" => "\u{ab}",
        "raquo" => "\u{bb}",
        "hellip" => "\u{2026}",
        "bull" => "\u{2022}",
        "euro" => "\u{20ac}",
        _ => return None
    };
    Some(value)
}

fn utf8(bytes: &[u8]) -> Result<String, Error> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|source| Error::parse(source.to_string()))
}

fn attach(open: &mut [Element], forest: &mut Vec<Node>, node: Node) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => forest.push(node)
    }
}

/// Appends text to the innermost open element. Text outside of any element
/// carries no meaning for the component and is dropped.
fn attach_text(open: &mut [Element], text: String) {
    if let Some(parent) = open.last_mut() {
        parent.children.push(Node::Text(text));
    }
}

/// Depth-first, pre-order search for the first `svg` element.
fn take_first_svg(nodes: Vec<Node>) -> Option<Element> {
    for node in nodes {
        if let Node::Element(element) = node {
            if element.is_svg() {
                return Some(element);
            }
            if let Some(found) = take_first_svg(element.children) {
                return Some(found);
            }
        }
    }
    None
}

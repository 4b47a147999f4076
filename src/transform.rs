// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Attribute rewriting that makes parsed SVG markup valid inside a React
//! component.
//!
//! The rewrite is a recursive function from an owned tree to a new owned tree.
//! Every element is rewritten with the same fixed rule table:
//!
//! | Attribute            | Rule                      |
//! |----------------------|---------------------------|
//! | `xmlns`, `version`   | dropped                   |
//! | `class`              | renamed to `className`    |
//! | any name with `-`    | renamed to its camelCase  |
//! | `width`, `height`    | dropped on the root only  |

use std::collections::HashSet;

use serde::Serialize;

use crate::document::{Attributes, Element, Node, SvgDocument};

/// Attributes removed from every element.
const DROPPED_ATTRIBUTES: [&str; 2] = ["xmlns", "version"];
/// Attributes removed from the root so the SVG scales with its container.
const ROOT_SIZE_ATTRIBUTES: [&str; 2] = ["width", "height"];

/// Outcome of the rule table for a single attribute name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeRule {
    /// Keep the attribute untouched.
    Keep,
    /// Remove the attribute.
    Drop,
    /// Move the value to a new attribute name.
    Rename(String)
}

/// Record of a rename that overwrote an attribute already present under the
/// target name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameCollision {
    /// Tag name of the element carrying both attributes.
    pub element: String,
    /// Original attribute name that was renamed.
    pub from:    String,
    /// Target name that already existed.
    pub to:      String
}

/// Looks up the rewrite rule for an attribute name.
///
/// # Examples
///
/// ```
/// use svgenius::{AttributeRule, attribute_rule};
///
/// assert_eq!(attribute_rule("class"), AttributeRule::Rename("className".to_owned()));
/// assert_eq!(attribute_rule("stroke-width"), AttributeRule::Rename("strokeWidth".to_owned()));
/// assert_eq!(attribute_rule("xmlns"), AttributeRule::Drop);
/// assert_eq!(attribute_rule("viewBox"), AttributeRule::Keep);
/// ```
pub fn attribute_rule(name: &str) -> AttributeRule {
    if DROPPED_ATTRIBUTES.contains(&name) {
        return AttributeRule::Drop;
    }
    if name == "class" {
        return AttributeRule::Rename("className".to_owned());
    }
    if name.contains('-') {
        let renamed = camel_case(name);
        if renamed.is_empty() {
            return AttributeRule::Keep;
        }
        // the camelCase form has no hyphen, so this lookup terminates
        return match attribute_rule(&renamed) {
            AttributeRule::Keep => AttributeRule::Rename(renamed),
            other => other
        };
    }
    AttributeRule::Keep
}

/// Rewrites the document for embedding in a component.
///
/// Rename collisions are resolved in favour of the renamed attribute. Use
/// [`transform_with_collisions`] to learn which attributes were overwritten.
pub fn transform(document: SvgDocument) -> SvgDocument {
    transform_with_collisions(document).0
}

/// Rewrites the document and reports every rename that overwrote an existing
/// attribute.
///
/// The returned collisions are listed in document order.
///
/// # Examples
///
/// ```
/// use svgenius::{parse_svg, transform_with_collisions};
///
/// let document = parse_svg("<svg className=\"a\" class=\"b\"/>").expect("valid svg");
/// let (document, collisions) = transform_with_collisions(document);
/// assert_eq!(document.root().attribute("className"), Some("b"));
/// assert_eq!(collisions.len(), 1);
/// ```
pub fn transform_with_collisions(document: SvgDocument) -> (SvgDocument, Vec<RenameCollision>) {
    let mut collisions = Vec::new();
    let mut root = rewrite_element(document.into_root(), &mut collisions);
    for name in ROOT_SIZE_ATTRIBUTES {
        root.attributes.shift_remove(name);
    }
    (SvgDocument::from_root(root), collisions)
}

fn rewrite_element(element: Element, collisions: &mut Vec<RenameCollision>) -> Element {
    let Element {
        name,
        attributes,
        children
    } = element;

    let attributes = rewrite_attributes(&name, attributes, collisions);
    let children = children
        .into_iter()
        .map(|child| match child {
            Node::Element(nested) => Node::Element(rewrite_element(nested, collisions)),
            text @ Node::Text(_) => text
        })
        .collect();

    Element {
        name,
        attributes,
        children
    }
}

fn rewrite_attributes(
    element: &str,
    attributes: Attributes,
    collisions: &mut Vec<RenameCollision>
) -> Attributes {
    let mut rewritten = Attributes::with_capacity(attributes.len());
    let mut renamed_targets = HashSet::new();

    for (name, value) in attributes {
        match attribute_rule(&name) {
            AttributeRule::Drop => {}
            AttributeRule::Keep => {
                if renamed_targets.contains(&name) {
                    collisions.push(collision(element, &name, &name));
                    continue;
                }
                rewritten.insert(name, value);
            }
            AttributeRule::Rename(target) => {
                if rewritten.contains_key(&target) {
                    collisions.push(collision(element, &name, &target));
                }
                renamed_targets.insert(target.clone());
                rewritten.insert(target, value);
            }
        }
    }

    rewritten
}

/// A plain attribute arriving after a rename that already claimed its name is
/// recorded with `from == to`.
fn collision(element: &str, from: &str, to: &str) -> RenameCollision {
    RenameCollision {
        element: element.to_owned(),
        from:    from.to_owned(),
        to:      to.to_owned()
    }
}

/// Converts a hyphenated attribute name to camelCase.
fn camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for (index, segment) in name.split('-').filter(|part| !part.is_empty()).enumerate() {
        if index == 0 {
            result.push_str(&segment.to_ascii_lowercase());
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

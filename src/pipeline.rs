// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Single-document conversion: parse, transform, name and emit.
//!
//! The pipeline is a pure function of its inputs. It never touches the file
//! system and never logs; callers decide how to persist or report results.

use serde::Serialize;

use crate::{
    emitter::{ComponentSpec, LanguageMode},
    error::Error,
    name::ComponentName,
    parser::parse_svg,
    transform::{RenameCollision, transform, transform_with_collisions}
};

/// Component name used when the caller supplies none.
pub const DEFAULT_COMPONENT_NAME: &str = "SvgComponent";

/// Generated component handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// Exported component identifier, also used as the file stem.
    pub component_name: ComponentName,
    /// Complete component source.
    pub code:           String,
    /// Attributes overwritten by renames during transformation.
    pub collisions:     Vec<RenameCollision>
}

/// Converts SVG source text into a React component.
///
/// `component_name` is normalized through [`ComponentName::derive`]; when it
/// is `None` the component is called [`DEFAULT_COMPONENT_NAME`].
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for blank input (checked before parsing),
/// [`Error::Parse`] for malformed markup and [`Error::Name`] when the
/// requested name contains no alphanumeric characters.
///
/// # Examples
///
/// ```
/// use svgenius::{LanguageMode, convert};
///
/// let result = convert(
///     "<svg width=\"10\" class=\"a\"><rect fill-rule=\"evenodd\"/></svg>",
///     Some("my-icon"),
///     LanguageMode::Typed,
/// )
/// .expect("conversion succeeds");
///
/// assert_eq!(result.component_name.as_str(), "MyIcon");
/// assert!(result.code.contains("<svg {...props} className=\"a\"><rect fillRule=\"evenodd\"/></svg>"));
/// ```
pub fn convert(
    source: &str,
    component_name: Option<&str>,
    mode: LanguageMode
) -> Result<ConversionResult, Error> {
    ensure_not_empty(source)?;

    let document = parse_svg(source)?;
    let (document, collisions) = transform_with_collisions(document);
    let name = ComponentName::derive(component_name.unwrap_or(DEFAULT_COMPONENT_NAME))?;

    let spec = ComponentSpec {
        name,
        mode,
        markup: document.to_markup()
    };
    let code = spec.emit();

    Ok(ConversionResult {
        component_name: spec.name,
        code,
        collisions
    })
}

/// Parses and transforms SVG source text, returning only the JSX-ready
/// markup without a component wrapper.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for blank input and [`Error::Parse`] for
/// malformed markup.
pub fn convert_to_markup(source: &str) -> Result<String, Error> {
    ensure_not_empty(source)?;
    let document = parse_svg(source)?;
    Ok(transform(document).to_markup())
}

fn ensure_not_empty(source: &str) -> Result<(), Error> {
    if source.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

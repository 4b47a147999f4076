// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! React component source generation.
//!
//! Emission is plain string templating around markup that has already been
//! transformed. The markup is trusted and never re-parsed here.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::name::ComponentName;

/// Marker inserted after the root tag name to forward component props.
const PROPS_SPREAD: &str = " {...props}";
/// Type annotation applied to typed exports.
const TYPED_SIGNATURE: &str = ": React.FC<React.SVGProps<SVGSVGElement>>";

/// Output language of generated components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageMode {
    /// TypeScript with a typed export signature (`.tsx`).
    #[default]
    #[serde(alias = "typescript", alias = "ts")]
    Typed,
    /// JavaScript without annotations (`.jsx`).
    #[serde(alias = "javascript", alias = "js")]
    Untyped
}

impl LanguageMode {
    /// File extension for generated component files.
    pub fn component_extension(self) -> &'static str {
        match self {
            Self::Typed => "tsx",
            Self::Untyped => "jsx"
        }
    }

    /// File name of the manifest re-exporting a batch of components.
    pub fn manifest_file_name(self) -> &'static str {
        match self {
            Self::Typed => "index.ts",
            Self::Untyped => "index.js"
        }
    }
}

/// Transformed markup bound to a component name and language mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Exported component identifier.
    pub name:   ComponentName,
    /// Output language.
    pub mode:   LanguageMode,
    /// JSX-ready markup rooted at the `svg` element.
    pub markup: String
}

impl ComponentSpec {
    /// Renders the component source for this spec.
    pub fn emit(&self) -> String {
        emit(&self.markup, &self.name, self.mode)
    }
}

/// Wraps transformed markup in a React component source unit.
///
/// The root element receives a props spread right after its tag name.
///
/// # Examples
///
/// ```
/// use svgenius::{ComponentName, LanguageMode, emit};
///
/// let name = ComponentName::derive("dot").expect("valid name");
/// let code = emit("<svg viewBox=\"0 0 1 1\"/>", &name, LanguageMode::Untyped);
/// assert!(code.contains("export const Dot = (props) => ("));
/// assert!(code.contains("<svg {...props} viewBox=\"0 0 1 1\"/>"));
/// ```
pub fn emit(markup: &str, name: &ComponentName, mode: LanguageMode) -> String {
    let signature = match mode {
        LanguageMode::Typed => TYPED_SIGNATURE,
        LanguageMode::Untyped => ""
    };

    let mut code = String::with_capacity(markup.len() + 160);
    code.push_str("import * as React from \"react\";\n\n");
    let _ = writeln!(code, "export const {name}{signature} = (props) => (");
    let _ = writeln!(code, "  {}", spread_props(markup));
    code.push_str(");\n");
    code
}

/// Inserts the props spread after the root tag name.
fn spread_props(markup: &str) -> String {
    let trimmed = markup.trim_start();
    let Some(rest) = trimmed.strip_prefix('<') else {
        return markup.to_owned();
    };

    let name_len = rest
        .find(|ch: char| ch.is_whitespace() || ch == '/' || ch == '>')
        .unwrap_or(rest.len());
    let insert_at = markup.len() - trimmed.len() + 1 + name_len;

    let mut spread = String::with_capacity(markup.len() + PROPS_SPREAD.len());
    spread.push_str(&markup[..insert_at]);
    spread.push_str(PROPS_SPREAD);
    spread.push_str(&markup[insert_at..]);
    spread
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> ComponentName {
        ComponentName::derive(raw).expect("valid name")
    }

    #[test]
    fn typed_component_matches_template() {
        let code = emit(
            "<svg viewBox=\"0 0 24 24\"><path d=\"M0 0\"/></svg>",
            &name("arrow-left"),
            LanguageMode::Typed
        );
        assert_eq!(
            code,
            "import * as React from \"react\";\n\nexport const ArrowLeft: React.FC<React.SVGProps<SVGSVGElement>> = (props) => (\n  <svg {...props} viewBox=\"0 0 24 24\"><path d=\"M0 0\"/></svg>\n);\n"
        );
    }

    #[test]
    fn untyped_component_has_no_annotation() {
        let code = emit("<svg/>", &name("star"), LanguageMode::Untyped);
        assert_eq!(
            code,
            "import * as React from \"react\";\n\nexport const Star = (props) => (\n  <svg {...props}/>\n);\n"
        );
        assert!(!code.contains("React.FC"));
    }

    #[test]
    fn spread_goes_after_root_tag_only() {
        let spread = spread_props("<svg><svg/></svg>");
        assert_eq!(spread, "<svg {...props}><svg/></svg>");
    }

    #[test]
    fn spread_keeps_uppercase_root_name() {
        assert_eq!(spread_props("<SVG x=\"1\"/>"), "<SVG {...props} x=\"1\"/>");
    }

    #[test]
    fn spread_leaves_non_markup_untouched() {
        assert_eq!(spread_props("plain"), "plain");
    }

    #[test]
    fn component_spec_emits_with_its_own_fields() {
        let spec = ComponentSpec {
            name:   name("logo"),
            mode:   LanguageMode::Typed,
            markup: "<svg/>".to_owned()
        };
        assert_eq!(spec.emit(), emit("<svg/>", &spec.name, LanguageMode::Typed));
    }

    #[test]
    fn language_mode_defaults_to_typed() {
        assert_eq!(LanguageMode::default(), LanguageMode::Typed);
    }

    #[test]
    fn language_mode_file_names() {
        assert_eq!(LanguageMode::Typed.component_extension(), "tsx");
        assert_eq!(LanguageMode::Untyped.component_extension(), "jsx");
        assert_eq!(LanguageMode::Typed.manifest_file_name(), "index.ts");
        assert_eq!(LanguageMode::Untyped.manifest_file_name(), "index.js");
    }

    #[test]
    fn language_mode_accepts_aliases() {
        let mode: LanguageMode = serde_yaml::from_str("javascript").expect("alias");
        assert_eq!(mode, LanguageMode::Untyped);
        let mode: LanguageMode = serde_yaml::from_str("typed").expect("canonical");
        assert_eq!(mode, LanguageMode::Typed);
    }
}

#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the svgenius crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the conversion pipeline, the batch
/// orchestrator and the CLI.
///
/// Conversion failures (`EmptyInput`, `Parse`, `Name`, `EmptyBatch`,
/// `DuplicateComponent`) are produced by the pure core and never touch the
/// file system. The remaining variants belong to the file and configuration
/// adapters wrapped around it.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Returned when the SVG source is empty after trimming whitespace.
    #[error("empty SVG content provided")]
    EmptyInput,
    /// Returned when the markup is malformed or contains no `svg` element.
    #[error("failed to parse SVG: {message}")]
    Parse {
        /// Human readable message describing the parse failure.
        message: String
    },
    /// Returned when no component name can be derived from the input.
    #[error("cannot derive a component name from {input:?}")]
    Name {
        /// Raw value the name was derived from.
        input: String
    },
    /// Returned when a batch run receives no source documents.
    #[error("batch contains no SVG documents")]
    EmptyBatch,
    /// Returned for a batch item whose component name is already taken by an
    /// earlier item of the same batch.
    #[error("component name '{name}' is already produced by '{first}'")]
    DuplicateComponent {
        /// Component name claimed twice.
        name:  String,
        /// Identifier of the batch item that claimed the name first.
        first: String
    },
    /// Wraps I/O errors that occur while reading sources or writing
    /// generated components.
    #[error("failed to access {path:?}: {source}")]
    Io {
        /// Location of the file or directory being processed.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors raised by the configuration loader.
    #[error("failed to parse configuration: {source}")]
    Config {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Wraps serialization errors when writing the JSON batch summary.
    #[error("failed to serialize batch summary: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Returned when CLI arguments or inputs violate invariants.
    #[error("invalid input: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a parse error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the parse failure.
    pub fn parse<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Parse {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Config {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the file or directory that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

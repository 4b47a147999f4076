// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Batch orchestration over many SVG documents.
//!
//! Items are converted on the `rayon` pool and reassembled in input order.
//! Failures are collected alongside successes: every item is attempted, each
//! failure is reported with its input position, and successful items are
//! never dropped because a sibling failed.

use std::{collections::HashMap, path::PathBuf};

use rayon::prelude::*;

use crate::{
    emitter::LanguageMode,
    error::Error,
    pipeline::{ConversionResult, convert}
};

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Options controlling a batch run. Built once at the orchestration boundary
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Output language of every component in the batch.
    pub language_mode:    LanguageMode,
    /// Directory receiving the generated files.
    pub output_directory: PathBuf,
    /// Whether to build a manifest re-exporting every component.
    pub emit_manifest:    bool
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            language_mode:    LanguageMode::Typed,
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            emit_manifest:    false
        }
    }
}

/// One input of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Identifier of the source, typically the file stem.
    pub id:             String,
    /// Decoded SVG text.
    pub text:           String,
    /// Optional name override; the component name derives from `id`
    /// otherwise.
    pub component_name: Option<String>
}

impl SourceDocument {
    /// Creates a source document whose component name derives from `id`.
    pub fn new<I, T>(id: I, text: T) -> Self
    where
        I: Into<String>,
        T: Into<String>
    {
        Self {
            id:             id.into(),
            text:           text.into(),
            component_name: None
        }
    }

    /// Overrides the component name for this item.
    pub fn with_component_name<N>(mut self, name: N) -> Self
    where
        N: Into<String>
    {
        self.component_name = Some(name.into());
        self
    }

    fn requested_name(&self) -> &str {
        self.component_name.as_deref().unwrap_or(&self.id)
    }
}

/// Batch input as produced by a source adapter: either a loaded document or
/// an entry whose text could not be obtained.
#[derive(Debug)]
pub enum BatchItem {
    /// Source text loaded successfully.
    Loaded(SourceDocument),
    /// Source that failed before conversion, e.g. an unreadable file.
    Unreadable {
        /// Identifier of the source.
        id:    String,
        /// Reason the source could not be loaded.
        error: Error
    }
}

impl BatchItem {
    /// Identifier of the item regardless of its state.
    pub fn id(&self) -> &str {
        match self {
            Self::Loaded(source) => &source.id,
            Self::Unreadable {
                id, ..
            } => id
        }
    }
}

/// Item that could not be converted.
#[derive(Debug)]
pub struct BatchFailure {
    /// Position of the item in the batch input.
    pub index: usize,
    /// Identifier of the failing source.
    pub id:    String,
    /// Reason for the failure.
    pub error: Error
}

/// Outcome of a batch run.
#[derive(Debug)]
pub struct BatchReport {
    /// Successful conversions in input order.
    pub results:  Vec<ConversionResult>,
    /// Failed items in input order.
    pub failures: Vec<BatchFailure>,
    /// Manifest text re-exporting every successful component, when requested.
    pub manifest: Option<String>
}

impl BatchReport {
    /// Returns `true` when every item converted successfully.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Converts every source document and optionally builds a manifest.
///
/// Items run in parallel; `results` and `failures` both follow input order
/// regardless of scheduling. When two items derive the same component name,
/// compared ASCII case-insensitively, the first keeps it and each later one fails with
/// [`Error::DuplicateComponent`].
///
/// # Errors
///
/// Returns [`Error::EmptyBatch`] when `sources` is empty. Item-level errors
/// are reported through [`BatchReport::failures`].
///
/// # Examples
///
/// ```
/// use svgenius::{BatchOptions, SourceDocument, run_batch};
///
/// let sources = vec![
///     SourceDocument::new("arrow-up", "<svg><path d=\"M0 0\"/></svg>"),
///     SourceDocument::new("broken", "<svg>"),
/// ];
/// let options = BatchOptions {
///     emit_manifest: true,
///     ..BatchOptions::default()
/// };
///
/// let report = run_batch(&sources, &options).expect("non-empty batch");
/// assert_eq!(report.results.len(), 1);
/// assert_eq!(report.failures[0].id, "broken");
/// assert_eq!(report.manifest.as_deref(), Some("export * from \"./ArrowUp\";\n"));
/// ```
pub fn run_batch(sources: &[SourceDocument], options: &BatchOptions) -> Result<BatchReport, Error> {
    if sources.is_empty() {
        return Err(Error::EmptyBatch);
    }

    let indexed: Vec<(usize, &SourceDocument)> = sources.iter().enumerate().collect();
    Ok(convert_indexed(&indexed, Vec::new(), options))
}

/// Runs a batch over items that may already have failed to load.
///
/// Unreadable items are reported as failures at their position in `items`;
/// every loaded item is converted exactly as [`run_batch`] would.
///
/// # Errors
///
/// Returns [`Error::EmptyBatch`] when `items` is empty.
pub fn run_batch_items(items: Vec<BatchItem>, options: &BatchOptions) -> Result<BatchReport, Error> {
    if items.is_empty() {
        return Err(Error::EmptyBatch);
    }

    let mut loaded = Vec::with_capacity(items.len());
    let mut unreadable = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match item {
            BatchItem::Loaded(source) => loaded.push((index, source)),
            BatchItem::Unreadable {
                id,
                error
            } => unreadable.push(BatchFailure {
                index,
                id,
                error
            })
        }
    }

    let indexed: Vec<(usize, &SourceDocument)> =
        loaded.iter().map(|(index, source)| (*index, source)).collect();
    Ok(convert_indexed(&indexed, unreadable, options))
}

fn convert_indexed(
    sources: &[(usize, &SourceDocument)],
    mut failures: Vec<BatchFailure>,
    options: &BatchOptions
) -> BatchReport {
    let outcomes: Vec<Result<ConversionResult, Error>> = sources
        .par_iter()
        .map(|(_, source)| {
            convert(
                &source.text,
                Some(source.requested_name()),
                options.language_mode
            )
        })
        .collect();

    let mut results = Vec::with_capacity(sources.len());
    // keyed case-insensitively: `Icon.tsx` and `ICON.tsx` clash on some file systems
    let mut claimed: HashMap<String, &str> = HashMap::with_capacity(sources.len());

    for (&(index, source), outcome) in sources.iter().zip(outcomes) {
        let outcome = outcome.and_then(|result| {
            let key = result.component_name.as_str().to_ascii_lowercase();
            if let Some(&first) = claimed.get(&key) {
                return Err(Error::DuplicateComponent {
                    name:  result.component_name.into_string(),
                    first: first.to_owned()
                });
            }
            claimed.insert(key, &source.id);
            Ok(result)
        });

        match outcome {
            Ok(result) => results.push(result),
            Err(error) => failures.push(BatchFailure {
                index,
                id: source.id.clone(),
                error
            })
        }
    }
    failures.sort_by_key(|failure| failure.index);

    let manifest = options.emit_manifest.then(|| build_manifest(&results));

    BatchReport {
        results,
        failures,
        manifest
    }
}

/// Builds manifest text with one re-export line per component.
///
/// # Examples
///
/// ```
/// use svgenius::{LanguageMode, build_manifest, convert};
///
/// let results = vec![
///     convert("<svg/>", Some("a"), LanguageMode::Typed).expect("valid"),
///     convert("<svg/>", Some("b"), LanguageMode::Typed).expect("valid"),
/// ];
/// assert_eq!(build_manifest(&results), "export * from \"./A\";\nexport * from \"./B\";\n");
/// ```
pub fn build_manifest(results: &[ConversionResult]) -> String {
    let mut manifest = String::with_capacity(results.len() * 32);
    for result in results {
        manifest.push_str("export * from \"./");
        manifest.push_str(result.component_name.as_str());
        manifest.push_str("\";\n");
    }
    manifest
}

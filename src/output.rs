// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! File-system adapter around the pure conversion core.
//!
//! Reads SVG sources from disk, turns a folder into batch inputs and writes
//! generated components and the manifest. All blocking I/O of the crate lives
//! here.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf}
};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::{
    batch::{BatchItem, BatchOptions, BatchReport, SourceDocument},
    error::{self, Error},
    pipeline::ConversionResult
};

/// Extension identifying SVG sources, compared case-insensitively.
const SVG_EXTENSION: &str = "svg";

/// Paths written by [`write_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    /// Component files in batch result order.
    pub components: Vec<PathBuf>,
    /// Manifest file, when one was requested.
    pub manifest:   Option<PathBuf>
}

/// Returns `true` when the path carries an `.svg` extension.
pub fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(SVG_EXTENSION))
}

/// Reads an SVG file into a string.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read or is not
/// valid UTF-8.
pub fn read_svg(path: &Path) -> Result<String, Error> {
    debug!("Reading SVG from {}", path.display());
    fs::read_to_string(path).map_err(|source| error::io_error(path, source))
}

/// Collects every `.svg` file directly inside `folder` as batch inputs.
///
/// Files are sorted by name so that batch order does not depend on the
/// directory listing order of the platform. Each source is identified by its
/// file stem. A file that cannot be read, or is not valid UTF-8, becomes a
/// [`BatchItem::Unreadable`] entry at its listing position instead of
/// aborting the collection.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the folder itself cannot be listed.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use svgenius::{BatchOptions, collect_svg_sources, run_batch_items};
///
/// # fn main() -> Result<(), svgenius::Error> {
/// let items = collect_svg_sources(Path::new("assets/icons"))?;
/// let report = run_batch_items(items, &BatchOptions::default())?;
/// println!("converted {} icons", report.results.len());
/// # Ok(())
/// # }
/// ```
pub fn collect_svg_sources(folder: &Path) -> Result<Vec<BatchItem>, Error> {
    let entries = fs::read_dir(folder).map_err(|source| error::io_error(folder, source))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| error::io_error(folder, source))?;
        let path = entry.path();
        if path.is_file() && is_svg_path(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    info!("Found {} SVG files in {}", paths.len(), folder.display());

    let items = paths
        .iter()
        .map(|path| {
            let id = file_stem(path);
            match read_svg(path) {
                Ok(text) => BatchItem::Loaded(SourceDocument::new(id, text)),
                Err(error) => {
                    warn!("Skipping unreadable {}: {error}", path.display());
                    BatchItem::Unreadable {
                        id,
                        error
                    }
                }
            }
        })
        .collect();
    Ok(items)
}

/// Writes a single component to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when directories or the file cannot be
/// created.
pub fn write_component(path: &Path, result: &ConversionResult) -> Result<(), Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| error::io_error(parent, source))?;
    }
    write_text(path, &result.code)
}

/// Writes every successful batch result and the manifest into the output
/// directory from `options`.
///
/// Component files are named `<Component>.tsx` or `<Component>.jsx`; the
/// manifest is `index.ts` or `index.js` depending on the language mode.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the directory or any file cannot be
/// written.
pub fn write_batch(report: &BatchReport, options: &BatchOptions) -> Result<WrittenFiles, Error> {
    let output_dir = options.output_directory.as_path();
    fs::create_dir_all(output_dir).map_err(|source| error::io_error(output_dir, source))?;

    let pb = ProgressBar::new(report.results.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    );

    let extension = options.language_mode.component_extension();
    let mut components = Vec::with_capacity(report.results.len());
    for result in &report.results {
        let path = output_dir.join(format!("{}.{extension}", result.component_name));
        pb.set_message(result.component_name.to_string());
        debug!("Writing component to {}", path.display());
        write_text(&path, &result.code)?;
        components.push(path);
        pb.inc(1);
    }

    let manifest = match report.manifest.as_deref() {
        Some(text) => {
            let path = output_dir.join(options.language_mode.manifest_file_name());
            info!("Writing manifest to {}", path.display());
            write_text(&path, text)?;
            Some(path)
        }
        None => None
    };

    pb.finish_with_message(format!("{} components written", components.len()));

    Ok(WrittenFiles {
        components,
        manifest
    })
}

fn write_text(path: &Path, contents: &str) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| error::io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|source| error::io_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::io_error(path, source))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

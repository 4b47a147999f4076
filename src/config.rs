//! Configuration document types describing conversion defaults.
//!
//! The types in this module mirror the structure of the optional YAML file
//! consumed by the CLI. Every field is optional so that command-line flags can
//! override individual values, and helper methods resolve the final
//! [`BatchOptions`] in a single place.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    batch::{BatchOptions, DEFAULT_OUTPUT_DIR},
    emitter::LanguageMode,
    error::{self, Error},
};

/// Root configuration document.
///
/// # Examples
///
/// ```
/// use svgenius::{ConversionConfig, LanguageMode};
///
/// let yaml = r#"
/// language: untyped
/// barrel: true
/// output: generated/icons
/// "#;
/// let config: ConversionConfig = serde_yaml::from_str(yaml,).expect("valid configuration",);
/// assert_eq!(config.language, Some(LanguageMode::Untyped));
/// assert_eq!(config.manifest, Some(true));
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq,)]
#[serde(deny_unknown_fields)]
pub struct ConversionConfig
{
    /// Optional output language for generated components.
    #[serde(default, alias = "mode", alias = "language_mode", alias = "languageMode")]
    pub language: Option<LanguageMode,>,

    /// Optional flag enabling the manifest (barrel) file in batch runs.
    #[serde(default, alias = "barrel", alias = "emit_manifest", alias = "emitManifest")]
    pub manifest: Option<bool,>,

    /// Optional output directory for batch runs.
    #[serde(default, alias = "out_dir", alias = "outDir", alias = "output_directory")]
    pub output: Option<String,>,
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct ConfigOverrides
{
    /// Language requested by a CLI flag.
    pub language: Option<LanguageMode,>,
    /// Manifest flag requested on the CLI.
    pub manifest: Option<bool,>,
    /// Output directory requested on the CLI.
    pub output:   Option<String,>,
}

impl ConversionConfig
{
    /// Resolves the language mode, preferring `overrides` over file values.
    pub fn resolved_language(&self, overrides: &ConfigOverrides,) -> LanguageMode
    {
        overrides.language.or(self.language,).unwrap_or_default()
    }

    /// Builds batch options from file values, CLI overrides and defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when the resolved
    /// output directory is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    ///
    /// use svgenius::{ConfigOverrides, ConversionConfig, LanguageMode};
    ///
    /// let config = ConversionConfig {
    ///     language: Some(LanguageMode::Untyped,),
    ///     manifest: Some(true,),
    ///     output:   Some("icons".to_owned(),),
    /// };
    /// let overrides = ConfigOverrides {
    ///     output: Some("build/icons".to_owned(),), ..ConfigOverrides::default()
    /// };
    ///
    /// let options = config.batch_options(&overrides,).expect("valid options",);
    /// assert_eq!(options.output_directory, Path::new("build/icons"));
    /// assert_eq!(options.language_mode, LanguageMode::Untyped);
    /// assert!(options.emit_manifest);
    /// ```
    pub fn batch_options(&self, overrides: &ConfigOverrides,) -> Result<BatchOptions, Error,>
    {
        let output = overrides
            .output
            .as_deref()
            .or(self.output.as_deref(),)
            .unwrap_or(DEFAULT_OUTPUT_DIR,);
        let output = normalize_path_like(output, "output",)?;

        Ok(BatchOptions {
            language_mode:    self.resolved_language(overrides,),
            output_directory: output.into(),
            emit_manifest:    overrides.manifest.or(self.manifest,).unwrap_or(false,),
        },)
    }
}

/// Loads configuration from the provided YAML file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read or the YAML cannot be
/// deserialized.
pub fn load_config(path: &Path,) -> Result<ConversionConfig, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses configuration from a YAML document string. A blank document yields
/// the default configuration.
///
/// # Errors
///
/// Propagates [`Error::Config`](Error::Config) when the YAML cannot be
/// decoded or contains unknown fields.
pub fn parse_config(contents: &str,) -> Result<ConversionConfig, Error,>
{
    if contents.trim().is_empty() {
        return Ok(ConversionConfig::default(),);
    }
    Ok(serde_yaml::from_str(contents,)?,)
}

/// Validates path-like values.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when the value is blank
/// after trimming whitespace.
fn normalize_path_like(input: &str, field: &str,) -> Result<String, Error,>
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty"),),);
    }
    Ok(trimmed.to_owned(),)
}

#[cfg(test)]
mod tests
{
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn defaults_apply_without_file_or_flags()
    {
        let options = ConversionConfig::default()
            .batch_options(&ConfigOverrides::default(),)
            .expect("defaults are valid",);
        assert_eq!(options, BatchOptions::default());
    }

    #[test]
    fn file_values_apply_when_flags_are_absent()
    {
        let config = parse_config("language: js\nmanifest: true\noutput: ' icons '\n",)
            .expect("valid configuration",);
        let options = config.batch_options(&ConfigOverrides::default(),).expect("valid options",);

        assert_eq!(options.language_mode, LanguageMode::Untyped);
        assert!(options.emit_manifest);
        assert_eq!(options.output_directory, PathBuf::from("icons"));
    }

    #[test]
    fn flags_override_file_values()
    {
        let config = ConversionConfig {
            language: Some(LanguageMode::Untyped,),
            manifest: Some(true,),
            output:   Some("icons".to_owned(),),
        };
        let overrides = ConfigOverrides {
            language: Some(LanguageMode::Typed,),
            manifest: Some(false,),
            output:   Some("dist".to_owned(),),
        };

        let options = config.batch_options(&overrides,).expect("valid options",);
        assert_eq!(options.language_mode, LanguageMode::Typed);
        assert!(!options.emit_manifest);
        assert_eq!(options.output_directory, PathBuf::from("dist"));
    }

    #[test]
    fn blank_output_is_rejected()
    {
        let overrides = ConfigOverrides {
            output: Some("   ".to_owned(),), ..ConfigOverrides::default()
        };
        let error = ConversionConfig::default().batch_options(&overrides,).unwrap_err();
        match error {
            Error::Validation {
                message,
            } => assert_eq!(message, "output cannot be empty"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn aliases_are_accepted()
    {
        let config = parse_config("mode: typescript\nemitManifest: true\noutDir: out\n",)
            .expect("aliases deserialize",);
        assert_eq!(config.language, Some(LanguageMode::Typed));
        assert_eq!(config.manifest, Some(true));
        assert_eq!(config.output.as_deref(), Some("out"));
    }

    #[test]
    fn unknown_fields_are_rejected()
    {
        let error = parse_config("typescript: true\n",).unwrap_err();
        assert!(matches!(error, Error::Config { .. }));
    }

    #[test]
    fn blank_document_yields_defaults()
    {
        assert_eq!(parse_config("  \n",).expect("blank is fine",), ConversionConfig::default());
    }

    #[test]
    fn load_config_reads_file()
    {
        let directory = tempdir().expect("failed to create temp dir",);
        let path = directory.path().join("svgenius.yaml",);
        fs::write(&path, "manifest: true\n",).expect("failed to write config",);

        let config = load_config(&path,).expect("config loads",);
        assert_eq!(config.manifest, Some(true));
    }

    #[test]
    fn load_config_reports_missing_file()
    {
        let directory = tempdir().expect("failed to create temp dir",);
        let path = directory.path().join("missing.yaml",);

        match load_config(&path,).unwrap_err() {
            Error::Io {
                path: stored, ..
            } => assert_eq!(stored, path),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}

//! Command-line interface for the svgenius binary.
//!
//! The CLI exposes a `convert` subcommand for single SVG files and a `batch`
//! subcommand that converts every SVG file in a folder and optionally writes
//! a manifest re-exporting the generated components.

use std::{
    io,
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use svgenius::{
    BatchReport, ConfigOverrides, ConversionConfig, ConversionResult, Error, LanguageMode,
    WrittenFiles, collect_svg_sources, convert, is_svg_path, load_config, read_svg,
    run_batch_items, write_batch, write_component,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Command line interface for converting SVG files into React components.
#[derive(Debug, Parser,)]
#[command(name = "svgenius", version, about = "Convert SVG files into React components")]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Convert a single SVG file into a component.
    Convert(ConvertArgs,),
    /// Convert every SVG file in a folder.
    Batch(BatchArgs,),
}

/// Flags shared by every subcommand.
#[derive(Debug, Args,)]
struct LanguageArgs
{
    /// Generate TypeScript components (the default).
    #[arg(short = 't', long = "typescript", action = ArgAction::SetTrue, conflicts_with = "untyped")]
    typescript: bool,

    /// Generate JavaScript components without type annotations.
    #[arg(long = "untyped", alias = "javascript", action = ArgAction::SetTrue)]
    untyped: bool,

    /// Optional YAML configuration file with conversion defaults.
    #[arg(long = "config", value_name = "PATH", env = "SVGENIUS_CONFIG")]
    config: Option<PathBuf,>,
}

impl LanguageArgs
{
    fn language(&self,) -> Option<LanguageMode,>
    {
        if self.untyped {
            Some(LanguageMode::Untyped,)
        } else if self.typescript {
            Some(LanguageMode::Typed,)
        } else {
            None
        }
    }

    fn load_config(&self,) -> Result<ConversionConfig, Error,>
    {
        match self.config.as_deref() {
            Some(path,) => load_config(path,),
            None => Ok(ConversionConfig::default(),),
        }
    }
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `convert` subcommand.
struct ConvertArgs
{
    /// SVG file to convert.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file path; defaults to `<Component>.tsx` in the current
    /// directory.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,

    /// Component name; defaults to the input file stem.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    name: Option<String,>,

    #[command(flatten)]
    language: LanguageArgs,
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `batch` subcommand.
struct BatchArgs
{
    /// Folder containing the SVG files to convert.
    #[arg(value_name = "FOLDER")]
    folder: PathBuf,

    /// Output folder; defaults to `./output`.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    output: Option<String,>,

    /// Generate a manifest (barrel) file re-exporting every component.
    #[arg(short = 'b', long = "barrel", action = ArgAction::SetTrue)]
    barrel: bool,

    /// Print a JSON summary of written files and failures.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    #[command(flatten)]
    language: LanguageArgs,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from configuration loading, conversion and
/// file output.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();

    match cli.command {
        Command::Convert(args,) => run_convert(&args,).map(|_| (),),
        Command::Batch(args,) => run_batch_command(&args,),
    }
}

/// Handles the `convert` subcommand and returns the written path.
fn run_convert(args: &ConvertArgs,) -> Result<PathBuf, Error,>
{
    let input = args.input.as_path();
    if !input.is_file() {
        return Err(Error::validation(format!("SVG file not found: {}", input.display()),),);
    }
    if !is_svg_path(input,) {
        return Err(Error::validation(format!(
            "invalid file type: {} (expected an .svg file)",
            input.display()
        ),),);
    }

    let config = args.language.load_config()?;
    let overrides = ConfigOverrides {
        language: args.language.language(),
        ..ConfigOverrides::default()
    };
    let mode = config.resolved_language(&overrides,);

    let text = read_svg(input,)?;
    let stem = input.file_stem().map(|stem| stem.to_string_lossy().into_owned(),);
    let requested = args.name.as_deref().or(stem.as_deref(),);
    let result = convert(&text, requested, mode,)?;
    report_collisions(&input.display().to_string(), &result,);

    let output = args.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!("{}.{}", result.component_name, mode.component_extension()),)
    },);
    write_component(&output, &result,)?;

    info!("Converted {} into component {}", input.display(), result.component_name);
    println!("{} -> {} ({})", input.display(), output.display(), result.component_name);

    Ok(output,)
}

/// Handles the `batch` subcommand.
///
/// Every successful item is written even when others fail; the command then
/// returns an error summarizing the failures.
fn run_batch_command(args: &BatchArgs,) -> Result<(), Error,>
{
    if !args.folder.is_dir() {
        return Err(Error::validation(format!("folder not found: {}", args.folder.display()),),);
    }

    let config = args.language.load_config()?;
    let overrides = ConfigOverrides {
        language: args.language.language(),
        manifest: args.barrel.then_some(true,),
        output:   args.output.clone(),
    };
    let options = config.batch_options(&overrides,)?;

    let items = collect_svg_sources(&args.folder,)?;
    let total = items.len();
    let report = run_batch_items(items, &options,)?;
    for result in &report.results {
        report_collisions(result.component_name.as_str(), result,);
    }

    let written = write_batch(&report, &options,)?;
    for failure in &report.failures {
        error!("{}: {}", failure.id, failure.error);
    }

    if args.json {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_batch_summary(&mut handle, &report, &written,)?;
    } else {
        println!(
            "{} components written to {}",
            written.components.len(),
            options.output_directory.display()
        );
        if let Some(manifest,) = written.manifest.as_deref() {
            println!("manifest: {}", manifest.display());
        }
    }

    if report.is_complete() {
        Ok((),)
    } else {
        Err(Error::validation(format!(
            "{} of {} SVG files failed to convert",
            report.failures.len(),
            total
        ),),)
    }
}

fn report_collisions(source: &str, result: &ConversionResult,)
{
    for collision in &result.collisions {
        warn!(
            "{source}: <{}> attribute '{}' overwrote existing '{}'",
            collision.element, collision.from, collision.to
        );
    }
}

#[derive(Serialize,)]
struct BatchSummary<'a,>
{
    components: Vec<String,>,
    #[serde(skip_serializing_if = "Option::is_none")]
    manifest:   Option<String,>,
    failures:   Vec<FailureSummary<'a,>,>,
}

#[derive(Serialize,)]
struct FailureSummary<'a,>
{
    index: usize,
    id:    &'a str,
    error: String,
}

fn write_batch_summary<W: io::Write,>(
    writer: &mut W,
    report: &BatchReport,
    written: &WrittenFiles,
) -> Result<(), Error,>
{
    let summary = BatchSummary {
        components: written.components.iter().map(|path| path_to_string(path,),).collect(),
        manifest:   written.manifest.as_deref().map(path_to_string,),
        failures:   report
            .failures
            .iter()
            .map(|failure| FailureSummary {
                index: failure.index,
                id:    &failure.id,
                error: failure.error.to_display_string(),
            },)
            .collect(),
    };

    serde_json::to_writer_pretty(writer, &summary,)?;
    Ok((),)
}

fn path_to_string(path: &Path,) -> String
{
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests
{
    use std::{fs, io::Cursor};

    use clap::Parser;
    use serde_json::Value;
    use svgenius::LanguageMode;
    use tempfile::tempdir;

    use super::{Cli, Command, run_batch_command, run_convert, write_batch_summary};

    const VALID: &str = "<svg width=\"24\" class=\"icon\"><path stroke-width=\"2\" d=\"M0 0\"/></svg>";

    fn parse(args: &[&str],) -> Command
    {
        let mut argv = vec![env!("CARGO_PKG_NAME")];
        argv.extend_from_slice(args,);
        Cli::try_parse_from(argv,).expect("failed to parse CLI",).command
    }

    #[test]
    fn convert_defaults_to_typed_output()
    {
        let args = match parse(&["convert", "icon.svg"],) {
            Command::Convert(args,) => args,
            other => panic!("unexpected command variant: {other:?}"),
        };
        assert_eq!(args.input, std::path::Path::new("icon.svg"));
        assert!(args.output.is_none());
        assert_eq!(args.language.language(), None);
    }

    #[test]
    fn untyped_and_typescript_flags_conflict()
    {
        let result = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "convert",
            "icon.svg",
            "--untyped",
            "--typescript",
        ],);
        assert!(result.is_err());
    }

    #[test]
    fn convert_writes_component_named_after_file_stem()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let input = temp.path().join("arrow-left.svg",);
        let output = temp.path().join("out/ArrowLeft.tsx",);
        fs::write(&input, VALID,).expect("failed to write svg",);

        let args = match parse(&[
            "convert",
            input.to_str().expect("utf8",),
            "--output",
            output.to_str().expect("utf8",),
        ],) {
            Command::Convert(args,) => args,
            other => panic!("unexpected command variant: {other:?}"),
        };

        let written = run_convert(&args,).expect("conversion succeeds",);
        assert_eq!(written, output);
        let code = fs::read_to_string(&output,).expect("component readable",);
        assert!(code.contains("export const ArrowLeft: React.FC<React.SVGProps<SVGSVGElement>>"));
        assert!(code.contains("<svg {...props} className=\"icon\"><path strokeWidth=\"2\" d=\"M0 0\"/></svg>"));
    }

    #[test]
    fn convert_honours_name_and_untyped_flags()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let input = temp.path().join("raw.svg",);
        let output = temp.path().join("Custom.jsx",);
        fs::write(&input, VALID,).expect("failed to write svg",);

        let args = match parse(&[
            "convert",
            input.to_str().expect("utf8",),
            "-o",
            output.to_str().expect("utf8",),
            "-n",
            "custom",
            "--untyped",
        ],) {
            Command::Convert(args,) => args,
            other => panic!("unexpected command variant: {other:?}"),
        };
        assert_eq!(args.language.language(), Some(LanguageMode::Untyped));

        run_convert(&args,).expect("conversion succeeds",);
        let code = fs::read_to_string(&output,).expect("component readable",);
        assert!(code.contains("export const Custom = (props) => ("));
    }

    #[test]
    fn convert_rejects_missing_and_non_svg_inputs()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let missing = temp.path().join("missing.svg",);
        let text = temp.path().join("notes.txt",);
        fs::write(&text, VALID,).expect("failed to write text",);

        for (path, expected,) in [(&missing, "SVG file not found"), (&text, "invalid file type"),] {
            let args = match parse(&["convert", path.to_str().expect("utf8",)],) {
                Command::Convert(args,) => args,
                other => panic!("unexpected command variant: {other:?}"),
            };
            match run_convert(&args,).expect_err("expected validation error",) {
                svgenius::Error::Validation {
                    message,
                } => assert!(message.contains(expected), "{message}"),
                other => panic!("unexpected error variant: {other:?}"),
            }
        }
    }

    #[test]
    fn convert_reports_empty_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let input = temp.path().join("empty.svg",);
        fs::write(&input, "  \n",).expect("failed to write svg",);

        let args = match parse(&["convert", input.to_str().expect("utf8",)],) {
            Command::Convert(args,) => args,
            other => panic!("unexpected command variant: {other:?}"),
        };
        let error = run_convert(&args,).expect_err("expected empty input error",);
        assert!(matches!(error, svgenius::Error::EmptyInput));
    }

    #[test]
    fn batch_writes_successes_and_reports_failures()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let input = temp.path().join("icons",);
        let output = temp.path().join("generated",);
        fs::create_dir(&input,).expect("failed to create input dir",);
        fs::write(input.join("a.svg",), VALID,).expect("write a",);
        fs::write(input.join("b.svg",), "<svg>",).expect("write b",);
        fs::write(input.join("c.svg",), VALID,).expect("write c",);

        let args = match parse(&[
            "batch",
            input.to_str().expect("utf8",),
            "--output",
            output.to_str().expect("utf8",),
            "--barrel",
        ],) {
            Command::Batch(args,) => args,
            other => panic!("unexpected command variant: {other:?}"),
        };

        let error = run_batch_command(&args,).expect_err("expected batch failure summary",);
        match error {
            svgenius::Error::Validation {
                message,
            } => assert_eq!(message, "1 of 3 SVG files failed to convert"),
            other => panic!("unexpected error variant: {other:?}"),
        }

        assert!(output.join("A.tsx",).exists());
        assert!(output.join("C.tsx",).exists());
        assert!(!output.join("B.tsx",).exists());
        let manifest = fs::read_to_string(output.join("index.ts",),).expect("manifest readable",);
        assert_eq!(manifest, "export * from \"./A\";\nexport * from \"./C\";\n");
    }

    #[test]
    fn batch_converts_siblings_of_an_unreadable_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let input = temp.path().join("icons",);
        let output = temp.path().join("generated",);
        fs::create_dir(&input,).expect("failed to create input dir",);
        fs::write(input.join("a.svg",), VALID,).expect("write a",);
        fs::write(input.join("b.svg",), [0xFF_u8, 0xFE, 0x00],).expect("write b",);
        fs::write(input.join("c.svg",), VALID,).expect("write c",);

        let args = match parse(&[
            "batch",
            input.to_str().expect("utf8",),
            "-o",
            output.to_str().expect("utf8",),
        ],) {
            Command::Batch(args,) => args,
            other => panic!("unexpected command variant: {other:?}"),
        };

        match run_batch_command(&args,).expect_err("expected batch failure summary",) {
            svgenius::Error::Validation {
                message,
            } => assert_eq!(message, "1 of 3 SVG files failed to convert"),
            other => panic!("unexpected error variant: {other:?}"),
        }
        assert!(output.join("A.tsx",).exists());
        assert!(output.join("C.tsx",).exists());
        assert!(!output.join("B.tsx",).exists());
    }

    #[test]
    fn batch_reads_defaults_from_config_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let input = temp.path().join("icons",);
        let output = temp.path().join("from-config",);
        let config = temp.path().join("svgenius.yaml",);
        fs::create_dir(&input,).expect("failed to create input dir",);
        fs::write(input.join("star.svg",), VALID,).expect("write star",);
        fs::write(
            &config,
            format!("language: untyped\nmanifest: true\noutput: {}\n", output.display()),
        )
        .expect("write config",);

        let args = match parse(&[
            "batch",
            input.to_str().expect("utf8",),
            "--config",
            config.to_str().expect("utf8",),
        ],) {
            Command::Batch(args,) => args,
            other => panic!("unexpected command variant: {other:?}"),
        };

        run_batch_command(&args,).expect("batch succeeds",);
        assert!(output.join("Star.jsx",).exists());
        assert!(output.join("index.js",).exists());
    }

    #[test]
    fn batch_rejects_missing_folder()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let missing = temp.path().join("missing",);
        let args = match parse(&["batch", missing.to_str().expect("utf8",)],) {
            Command::Batch(args,) => args,
            other => panic!("unexpected command variant: {other:?}"),
        };
        assert!(matches!(
            run_batch_command(&args,),
            Err(svgenius::Error::Validation { .. })
        ));
    }

    #[test]
    fn batch_summary_lists_components_and_failures()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let options = svgenius::BatchOptions {
            output_directory: temp.path().to_path_buf(),
            ..svgenius::BatchOptions::default()
        };
        let sources = vec![
            svgenius::SourceDocument::new("ok", VALID),
            svgenius::SourceDocument::new("broken", ""),
        ];
        let report = svgenius::run_batch(&sources, &options,).expect("batch",);
        let written = svgenius::write_batch(&report, &options,).expect("write",);

        let mut buffer = Cursor::new(Vec::new(),);
        write_batch_summary(&mut buffer, &report, &written,).expect("summary serializes",);

        let value: Value = serde_json::from_slice(&buffer.into_inner(),).expect("valid json",);
        assert_eq!(value["components"].as_array().map(Vec::len), Some(1));
        assert!(value.get("manifest").is_none());
        assert_eq!(value["failures"][0]["id"], "broken");
        assert_eq!(value["failures"][0]["index"], 1);
        assert_eq!(value["failures"][0]["error"], "empty SVG content provided");
    }
}

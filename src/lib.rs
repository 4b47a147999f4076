//! Utilities for converting SVG markup into React components.
//!
//! The library exposes a pure conversion core (parse, transform, name, emit)
//! together with a batch orchestrator that converts many documents in
//! parallel and builds a manifest re-exporting every generated component.
//! File-system helpers and YAML configuration loading sit beside the core for
//! the CLI and other integrations.

mod batch;
mod config;
mod document;
mod emitter;
mod error;
mod name;
mod output;
mod parser;
mod pipeline;
mod transform;

pub use batch::{
    BatchFailure, BatchItem, BatchOptions, BatchReport, DEFAULT_OUTPUT_DIR, SourceDocument,
    build_manifest, run_batch, run_batch_items,
};
pub use config::{ConfigOverrides, ConversionConfig, load_config, parse_config};
pub use document::{Attributes, Element, Node, SvgDocument};
pub use emitter::{ComponentSpec, LanguageMode, emit};
pub use error::{Error, io_error};
pub use name::ComponentName;
pub use output::{
    WrittenFiles, collect_svg_sources, is_svg_path, read_svg, write_batch, write_component,
};
pub use parser::parse_svg;
pub use pipeline::{ConversionResult, DEFAULT_COMPONENT_NAME, convert, convert_to_markup};
pub use transform::{
    AttributeRule, RenameCollision, attribute_rule, transform, transform_with_collisions,
};

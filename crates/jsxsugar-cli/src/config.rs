//! Option resolution: defaults < configuration file < command-line flags.

use anyhow::{Context, Result};
use jsxsugar_emitter::{Extensions, GenerationOptions, GeneratorConfig};
use std::path::Path;

use crate::args::CliArgs;

/// Fully resolved settings for one CLI run.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub options: GenerationOptions,
    pub extensions: Extensions,
}

pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    GeneratorConfig::from_json_str(&source)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Configuration layer built from flags. Boolean switches only override
/// when they are given.
pub fn config_from_args(args: &CliArgs) -> GeneratorConfig {
    GeneratorConfig {
        factory: args.factory.clone(),
        spread_fn: args.spread_fn.clone(),
        unknown_tag_pattern: args.unknown_tag_pattern.clone(),
        pass_unknown_tags_to_factory: args.pass_unknown_tags_to_factory.then_some(true),
        unknown_tags_as_string: args.unknown_tags_as_string.then_some(true),
        array_children: args.no_array_children.then_some(false),
        source_file_name: None,
        extensions: args.extensions.clone(),
    }
}

pub fn resolve_config(args: &CliArgs) -> Result<ResolvedConfig> {
    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    let config = base.merge(config_from_args(args));

    let options = GenerationOptions::resolve(&config)
        .context("pass --factory or set \"factory\" in the config file")?;
    let extensions = match &config.extensions {
        Some(list) => Extensions::new(list),
        None => Extensions::default(),
    };

    Ok(ResolvedConfig {
        options,
        extensions,
    })
}

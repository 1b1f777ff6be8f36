use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the jsxsugar binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsxsugar",
    version,
    about = "Desugar JSX into factory calls, with a position map back to the source"
)]
pub struct CliArgs {
    /// Input files. Files outside the extension allow-list are printed unchanged.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// JSON configuration file (camelCase option names).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // ==================== Generation ====================
    /// Factory function called for every element (e.g. 'h', 'React.createElement').
    #[arg(short = 'f', long)]
    pub factory: Option<String>,

    /// Function that merges attribute objects when spreads are present.
    #[arg(long = "spread-fn", alias = "spreadFn")]
    pub spread_fn: Option<String>,

    /// Callee template for component tags; every `{tag}` is replaced by the tag name.
    #[arg(long = "unknown-tag-pattern", alias = "unknownTagPattern")]
    pub unknown_tag_pattern: Option<String>,

    /// Pass component tags to the factory instead of the tag pattern.
    #[arg(long = "pass-unknown-tags-to-factory", alias = "passUnknownTagsToFactory")]
    pub pass_unknown_tags_to_factory: bool,

    /// Pass component tags to the factory as strings.
    #[arg(long = "unknown-tags-as-string", alias = "unknownTagsAsString")]
    pub unknown_tags_as_string: bool,

    /// Pass children as trailing arguments instead of one array.
    #[arg(long = "no-array-children")]
    pub no_array_children: bool,

    // ==================== Files ====================
    /// Extensions to transform (comma separated, default .js,.jsx,.es,.es6).
    #[arg(long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    // ==================== Output ====================
    /// Print a JSON document with the code and mapping list of every file.
    #[arg(long = "emit-map")]
    pub emit_map: bool,
}

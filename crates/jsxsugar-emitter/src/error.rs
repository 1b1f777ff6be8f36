use jsxsugar_syntax::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by generation and the transform entry points.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No (non-empty) factory name was configured.
    #[error("missing options.factory function name")]
    MissingFactory,

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Syntax error from the markup reader, passed through untouched.
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file} is not valid UTF-8")]
    InvalidUtf8 { file: String },
}

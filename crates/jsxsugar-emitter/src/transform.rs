//! File-level entry points.
//!
//! `transform_source` and `transform_path` run the reader and the generator
//! over a whole buffer. `BufferedTransform` is the streaming form: it
//! collects written chunks and transforms them on `finish`, passing files
//! outside the extension allow-list through untouched.

use crate::driver::{Generated, generate};
use crate::error::GenerateError;
use crate::options::GenerationOptions;
use jsxsugar_syntax::parse;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Extensions transformed when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".es", ".es6"];

/// Extension allow-list. Entries are stored with a leading dot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extensions {
    list: Vec<String>,
}

impl Default for Extensions {
    fn default() -> Self {
        Extensions::new(DEFAULT_EXTENSIONS.iter().copied())
    }
}

impl Extensions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().to_string())
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        Extensions { list }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.list
    }

    /// Whether `path` has one of the listed extensions (case-sensitive).
    pub fn participates(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        self.list
            .iter()
            .any(|listed| listed.strip_prefix('.') == Some(ext))
    }
}

/// Parse and generate one source text.
pub fn transform_source(
    source: &str,
    options: &GenerationOptions,
) -> Result<Generated, GenerateError> {
    options.validate()?;
    let parsed = parse(source, Some(&options.source_file_name))?;
    generate(source, &parsed.arena, parsed.root, options)
}

/// Read and transform a file; mapping entries name the file's base name.
pub fn transform_path(path: &Path, options: &GenerationOptions) -> Result<Generated, GenerateError> {
    let bytes = std::fs::read(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options = options.clone().with_source_file_name(base_name(path));
    let source = String::from_utf8(bytes).map_err(|_| GenerateError::InvalidUtf8 {
        file: options.source_file_name.clone(),
    })?;
    debug!(file = %path.display(), "transforming file");
    transform_source(&source, &options)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Result of finishing a `BufferedTransform`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformOutput {
    /// The file is outside the allow-list; its bytes are unchanged.
    Passthrough(Vec<u8>),
    Transformed(Generated),
}

impl TransformOutput {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            TransformOutput::Passthrough(bytes) => bytes,
            TransformOutput::Transformed(generated) => generated.code.into_bytes(),
        }
    }
}

/// Buffers every chunk written to it and transforms the whole file on
/// `finish`.
#[derive(Debug)]
pub struct BufferedTransform {
    path: PathBuf,
    participates: bool,
    options: GenerationOptions,
    buffer: Vec<u8>,
}

impl BufferedTransform {
    pub fn new(path: impl AsRef<Path>, extensions: &Extensions, options: &GenerationOptions) -> Self {
        let path = path.as_ref().to_path_buf();
        let participates = extensions.participates(&path);
        let options = options.clone().with_source_file_name(base_name(&path));
        BufferedTransform {
            path,
            participates,
            options,
            buffer: Vec::new(),
        }
    }

    pub fn participates(&self) -> bool {
        self.participates
    }

    pub fn finish(self) -> Result<TransformOutput, GenerateError> {
        if !self.participates {
            trace!(file = %self.path.display(), "passing through");
            return Ok(TransformOutput::Passthrough(self.buffer));
        }
        let source = String::from_utf8(self.buffer).map_err(|_| GenerateError::InvalidUtf8 {
            file: self.options.source_file_name.clone(),
        })?;
        debug!(file = %self.path.display(), bytes = source.len(), "transforming buffer");
        transform_source(&source, &self.options).map(TransformOutput::Transformed)
    }
}

impl io::Write for BufferedTransform {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

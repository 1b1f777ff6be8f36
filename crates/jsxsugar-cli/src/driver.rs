use anyhow::{Context, Result};
use jsxsugar_emitter::{BufferedTransform, MappingEntry, TransformOutput};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

use crate::args::CliArgs;
use crate::config::{ResolvedConfig, resolve_config};

/// Result for one input file.
#[derive(Debug, Clone)]
pub struct FileOutput {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    /// `None` for files passed through unchanged
    pub map: Option<Vec<MappingEntry>>,
}

impl FileOutput {
    pub fn transformed(&self) -> bool {
        self.map.is_some()
    }
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    transformed: bool,
    code: String,
    map: Option<&'a [MappingEntry]>,
}

/// Transform every input file. Stops at the first failing file.
pub fn run(args: &CliArgs) -> Result<Vec<FileOutput>> {
    let config = resolve_config(args)?;
    args.files
        .iter()
        .map(|path| transform_file(path, &config))
        .collect()
}

fn transform_file(path: &Path, config: &ResolvedConfig) -> Result<FileOutput> {
    let _span = info_span!("transform_file", file = %path.display()).entered();
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let mut transform = BufferedTransform::new(path, &config.extensions, &config.options);
    transform
        .write_all(&bytes)
        .with_context(|| format!("failed to buffer {}", path.display()))?;

    let output = transform
        .finish()
        .with_context(|| format!("failed to transform {}", path.display()))?;
    let (bytes, map) = match output {
        TransformOutput::Passthrough(bytes) => (bytes, None),
        TransformOutput::Transformed(generated) => {
            debug!(mappings = generated.map.len(), "transformed");
            (generated.code.into_bytes(), Some(generated.map))
        }
    };

    Ok(FileOutput {
        path: path.to_path_buf(),
        bytes,
        map,
    })
}

/// Render outputs for stdout: concatenated code, or a JSON report with
/// `--emit-map`.
pub fn render(outputs: &[FileOutput], emit_map: bool) -> Result<Vec<u8>> {
    if !emit_map {
        return Ok(outputs
            .iter()
            .flat_map(|output| output.bytes.iter().copied())
            .collect());
    }

    let reports: Vec<FileReport<'_>> = outputs
        .iter()
        .map(|output| FileReport {
            file: output.path.display().to_string(),
            transformed: output.transformed(),
            code: String::from_utf8_lossy(&output.bytes).into_owned(),
            map: output.map.as_deref(),
        })
        .collect();
    let mut json = serde_json::to_vec_pretty(&reports).context("failed to serialize report")?;
    json.push(b'\n');
    Ok(json)
}

//! Generation driver.

use crate::annotator::annotate;
use crate::emitter::Emitter;
use crate::error::GenerateError;
use crate::options::GenerationOptions;
use crate::source_writer::MappingEntry;
use jsxsugar_syntax::{NodeArena, NodeIndex, Position};
use serde::Serialize;
use tracing::debug;

/// Generated code and its mapping list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Generated {
    pub code: String,
    /// Entries in generated-position order.
    pub map: Vec<MappingEntry>,
}

/// Desugar every markup island in the tree rooted at `root`.
///
/// Options are validated before the walk starts, so a configuration error
/// never produces partial output.
pub fn generate(
    source: &str,
    arena: &NodeArena,
    root: NodeIndex,
    options: &GenerationOptions,
) -> Result<Generated, GenerateError> {
    options.validate()?;

    let subnodes = annotate(arena, root);
    let emitter = Emitter::new(source, arena, &subnodes, options);
    let fragment = emitter.emit(root, Position::START);

    debug!(
        source = emitter.source_name(),
        bytes = fragment.text.len(),
        mappings = fragment.mappings.len(),
        "generated"
    );
    Ok(Generated {
        code: fragment.text,
        map: fragment.mappings,
    })
}

//! Subnode annotation.
//!
//! Nodes without a dedicated emit handler are reconstructed generically from
//! their source text and their direct structural children. The annotator
//! computes those child lists once, up front, into a side table keyed by
//! node index; the tree itself is never modified.

use jsxsugar_syntax::{NodeArena, NodeIndex, SyntaxKind};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Direct structural children of every generically emitted node, sorted by
/// start offset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubnodeTable {
    entries: FxHashMap<NodeIndex, Vec<NodeIndex>>,
}

impl SubnodeTable {
    /// Subnodes of `index`; empty when the node has none or is handled by a
    /// dedicated emitter.
    pub fn get(&self, index: NodeIndex) -> &[NodeIndex] {
        self.entries.get(&index).map_or(&[], Vec::as_slice)
    }

    /// Number of nodes with at least one subnode.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether nodes of `kind` are emitted generically.
#[inline]
pub fn is_generic_kind(kind: SyntaxKind) -> bool {
    !kind.is_jsx()
}

/// Walk the tree under `root` and record subnodes for every generic node.
pub fn annotate(arena: &NodeArena, root: NodeIndex) -> SubnodeTable {
    let mut entries = FxHashMap::default();
    let mut stack = vec![root];

    while let Some(index) = stack.pop() {
        let Some(node) = arena.get(index) else {
            continue;
        };
        let children = arena.structural_children(index);
        stack.extend(children.iter().copied());

        if is_generic_kind(node.kind) && !children.is_empty() {
            let mut sorted = children;
            sorted.sort_by_key(|&child| arena.get(child).map_or(u32::MAX, |c| c.pos));
            entries.insert(index, sorted);
        }
    }

    debug!(generic_nodes = entries.len(), "annotated subnodes");
    SubnodeTable { entries }
}

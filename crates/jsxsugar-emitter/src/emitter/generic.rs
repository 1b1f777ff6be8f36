use super::Emitter;
use crate::source_writer::EmittedFragment;
use jsxsugar_syntax::{Node, NodeIndex, Position};

impl<'a> Emitter<'a> {
    // =========================================================================
    // Generic reconstruction
    // =========================================================================

    /// Source text copied around the recursively emitted subnodes.
    pub(super) fn emit_generic(&self, idx: NodeIndex, node: &Node, at: Position) -> EmittedFragment {
        let subnodes = self.subnodes.get(idx);
        let mut w = self.writer(at);

        let Some(&first) = subnodes.first() else {
            w.write_mapped(self.node_text(node), node.loc.start);
            return w.finish();
        };
        let Some(first_node) = self.arena.get(first) else {
            w.write_mapped(self.node_text(node), node.loc.start);
            return w.finish();
        };

        w.map(node.loc.start);
        w.write(self.slice(node.pos, first_node.pos));

        for (i, &child) in subnodes.iter().enumerate() {
            let Some(child_node) = self.arena.get(child) else {
                continue;
            };
            let child_fragment = self.emit(child, w.cursor());
            w.append(child_fragment);

            let gap_end = subnodes
                .get(i + 1)
                .and_then(|&next| self.arena.get(next))
                .map_or(node.end, |next| next.pos);
            w.write_mapped(self.slice(child_node.end, gap_end), child_node.loc.end);
        }

        w.finish()
    }
}

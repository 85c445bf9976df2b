use crate::*;
use petgraph::graph::NodeIndex;

/// The caller's record of where a frontier node hangs.
///
/// Kept on the coordinating side while the node's position is solved
/// elsewhere. Recombination finds the slot again through `link`, the
/// (parent, move) pair recorded at expansion time; `index` is only used
/// to check that the link still points where it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<M> {
    pub index: NodeIndex,
    pub link: Option<Link<M>>,
}

impl<M> Slot<M> {
    pub fn is_root(&self) -> bool {
        self.index == NodeIndex::new(0)
    }
}

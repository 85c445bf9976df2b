use petgraph::graph::NodeIndex;

/// Where a node hangs in its tree: the parent's index and the move that
/// produced it.
///
/// A link is bookkeeping, not ownership. The parent owns the child
/// through the graph edge; the link only lets a detached copy of the
/// child find its way back to the same slot after it has been solved
/// elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link<M> {
    pub parent: NodeIndex,
    pub edge: M,
}

impl<M> From<(NodeIndex, M)> for Link<M> {
    fn from((parent, edge): (NodeIndex, M)) -> Self {
        Self { parent, edge }
    }
}

use crate::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// A lightweight handle to a node in the game tree.
///
/// Stores only an index and a reference to the underlying graph,
/// making nodes cheap to copy and pass around. All navigation is
/// read-only; structural changes go through [`Tree`].
///
/// Children are always reported in ascending move order, whatever
/// order the arena happens to hold them in.
pub struct Node<'tree, G>
where
    G: Game,
{
    index: NodeIndex,
    graph: &'tree DiGraph<Data<G>, G::M>,
}

impl<'tree, G> Node<'tree, G>
where
    G: Game,
{
    /// Creates a node handle from an index and graph reference.
    pub fn from(index: NodeIndex, graph: &'tree DiGraph<Data<G>, G::M>) -> Self {
        Self { index, graph }
    }
    /// The petgraph index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    /// Reference to the underlying graph.
    pub fn graph(&self) -> &'tree DiGraph<Data<G>, G::M> {
        self.graph
    }
    pub fn data(&self) -> &'tree Data<G> {
        self.graph
            .node_weight(self.index)
            .expect("node handle outlived its index")
    }
    /// The position at this node, unless pruned.
    pub fn game(&self) -> Option<&'tree G> {
        self.data().game()
    }
    pub fn turn(&self) -> G::T {
        self.data().turn()
    }
    pub fn outcome(&self) -> Option<&'tree G::O> {
        self.data().outcome()
    }
    pub fn link(&self) -> Option<&'tree Link<G::M>> {
        self.data().link()
    }
    /// Creates a node handle at a different index in the same tree.
    pub fn at(&self, index: NodeIndex) -> Self {
        Self::from(index, self.graph)
    }

    /// Returns parent node and incoming edge, if not at root.
    pub fn up(&self) -> Option<(Self, &'tree G::M)> {
        match (self.parent(), self.incoming()) {
            (None, None) => None,
            (Some(parent), Some(incoming)) => Some((parent, incoming)),
            (Some(_), _) => unreachable!("tree property violation"),
            (_, Some(_)) => unreachable!("tree property violation"),
        }
    }
    /// Parent node (None if this is the root).
    pub fn parent(&self) -> Option<Self> {
        self.graph
            .neighbors_directed(self.index, petgraph::Direction::Incoming)
            .next()
            .map(|index| self.at(index))
    }
    /// The move taken to reach this node from its parent.
    pub fn incoming(&self) -> Option<&'tree G::M> {
        self.graph
            .edges_directed(self.index, petgraph::Direction::Incoming)
            .next()
            .map(|edge| edge.weight())
    }
    /// (move, child) pairs in ascending move order.
    pub fn branches(&self) -> Vec<(&'tree G::M, Self)> {
        let mut branches = self
            .graph
            .edges_directed(self.index, petgraph::Direction::Outgoing)
            .map(|edge| (edge.weight(), self.at(edge.target())))
            .collect::<Vec<_>>();
        branches.sort_by(|a, b| a.0.cmp(b.0));
        branches
    }
    /// All outgoing moves, ascending.
    pub fn outgoing(&self) -> Vec<&'tree G::M> {
        self.branches().into_iter().map(|(edge, _)| edge).collect()
    }
    /// All direct children, ordered by the move that reaches them.
    pub fn children(&self) -> Vec<Self> {
        self.branches().into_iter().map(|(_, child)| child).collect()
    }
    /// Child reached by taking a specific move.
    pub fn follow(&self, edge: &G::M) -> Option<Self> {
        self.graph
            .edges_directed(self.index, petgraph::Direction::Outgoing)
            .find(|e| e.weight() == edge)
            .map(|e| self.at(e.target()))
    }
    /// Count of direct children (no allocation).
    pub fn width(&self) -> usize {
        self.graph
            .neighbors_directed(self.index, petgraph::Direction::Outgoing)
            .count()
    }
    /// Plies between the root and this node.
    pub fn depth(&self) -> usize {
        (*self).count()
    }
    /// Moves from the root down to this node.
    pub fn path(&self) -> Vec<G::M> {
        let mut path = (*self).map(|(_, edge)| edge).collect::<Vec<_>>();
        path.reverse();
        path
    }

    pub fn is_terminal(&self) -> bool {
        self.data().is_terminal()
    }
    pub fn is_expanded(&self) -> bool {
        self.width() > 0
    }
    /// Neither expanded nor terminal: still waiting to be searched.
    pub fn is_pending(&self) -> bool {
        !self.is_terminal() && !self.is_expanded()
    }
    /// Lazy walk over the pending leaves below (and including) this node.
    pub fn leaves(&self) -> Leaves<'tree, G> {
        Leaves::from(*self)
    }
    /// Every node below (and including) this one, breadth-first.
    pub fn descendants(&self) -> Vec<Self> {
        let mut queue = std::collections::VecDeque::from([*self]);
        let mut found = Vec::new();
        while let Some(node) = queue.pop_front() {
            queue.extend(node.children());
            found.push(node);
        }
        found
    }
}

/// Node naturally implements Iterator by recursing upward through its tree.
/// Each iteration yields the parent node and the move taken from it,
/// walking from any node back to the root.
impl<'tree, G> Iterator for Node<'tree, G>
where
    G: Game,
{
    type Item = (Self, G::M);
    fn next(&mut self) -> Option<Self::Item> {
        let (ref mut parent, edge) = self.up()?;
        std::mem::swap(self, parent);
        Some((*self, *edge))
    }
}

impl<'tree, G> Clone for Node<'tree, G>
where
    G: Game,
{
    fn clone(&self) -> Self {
        *self
    }
}
impl<'tree, G> Copy for Node<'tree, G> where G: Game {}

impl<'tree, G> std::fmt::Debug for Node<'tree, G>
where
    G: Game,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} ({}/{})",
            self.data(),
            self.index().index(),
            self.graph().node_count()
        )
    }
}

/// Eq implementation will assume that any two
/// Nodes being compared to one another belong
/// to the same tree/graph. such that, we only
/// care about comparing indices.
impl<'tree, G> PartialEq for Node<'tree, G>
where
    G: Game,
{
    fn eq(&self, other: &Self) -> bool {
        self.index() == other.index() && std::ptr::eq(self.graph(), other.graph())
    }
}
impl<'tree, G> Eq for Node<'tree, G> where G: Game {}

#[cfg(test)]
mod tests {
    use crate::games::*;
    use crate::*;

    #[test]
    fn navigation_agrees_with_itself() {
        let tree = solve(Tree::seed(Nim::new(5))).unwrap();
        let root = tree.root();
        assert_eq!(root.outgoing(), vec![&Take(1), &Take(2)]);
        assert_eq!(root.width(), 2);
        assert!(root.incoming().is_none());
        let child = root.follow(&Take(2)).unwrap();
        assert_eq!(child.incoming(), Some(&Take(2)));
        assert_eq!(child.parent(), Some(root));
        assert_eq!(child.depth(), 1);
        let deep = child.follow(&Take(1)).and_then(|n| n.follow(&Take(2))).unwrap();
        assert_eq!(deep.path(), vec![Take(2), Take(1), Take(2)]);
        assert_eq!(deep.depth(), 3);
        assert!(deep.is_terminal());
    }

    #[test]
    fn descendants_cover_the_subtree() {
        let tree = solve(Tree::seed(Nim::new(6))).unwrap();
        assert_eq!(tree.root().descendants().len(), tree.n());
        let child = tree.root().follow(&Take(1)).unwrap();
        assert_eq!(child.descendants().len(), Nim::size(5));
        assert_eq!(child.descendants()[0], child);
    }
}

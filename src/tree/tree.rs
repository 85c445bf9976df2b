use crate::*;
use petgraph::graph::DiGraph;
use petgraph::graph::EdgeIndex;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// The game tree, stored as an arena.
///
/// Each vertex stores a [`Data`] weight; each edge is labelled with the
/// move that leads from parent to child. The root is always index 0.
///
/// # Growth
///
/// - `seed(game)` — a one-node tree
/// - `grow(head, edge, data)` — attach a child under an existing node
///
/// Nodes are never removed. Subtrees are only ever replaced wholesale
/// (see grafting in [`crate::search`]) or stripped of their positions by
/// pruning, so every `NodeIndex` handed out stays valid.
///
/// # Traversal
///
/// - `at(index)` / `root()` — get a [`Node`] handle
/// - `all()` — iterate over all nodes in index order
/// - `bfs()` / `postorder()` — ordered traversal for top-down or bottom-up passes
pub struct Tree<G>
where
    G: Game,
{
    graph: DiGraph<Data<G>, G::M>,
}

impl<G> Tree<G>
where
    G: Game,
{
    /// A tree holding only the given position.
    pub fn seed(game: G) -> Self {
        Self::from(Data::root(game))
    }
    /// Number of nodes in the tree.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    /// get all Nodes in the Tree
    pub fn all(&self) -> impl Iterator<Item = Node<'_, G>> {
        self.graph.node_indices().map(|n| self.at(n))
    }
    /// get a Node by index
    pub fn at(&self, index: NodeIndex) -> Node<'_, G> {
        Node::from(index, &self.graph)
    }
    pub fn root(&self) -> Node<'_, G> {
        self.at(NodeIndex::new(0))
    }
    pub fn graph(&self) -> &DiGraph<Data<G>, G::M> {
        &self.graph
    }
    /// attach a child below `head`, reached by `edge`
    pub fn grow(&mut self, head: NodeIndex, edge: G::M, data: Data<G>) -> NodeIndex {
        let tail = self.graph.add_node(data);
        let from = self.graph.add_edge(head, tail, edge);
        debug_assert!(from.index() == tail.index() - 1);
        tail
    }
    pub(crate) fn graph_mut(&mut self) -> &mut DiGraph<Data<G>, G::M> {
        &mut self.graph
    }
    pub(crate) fn into_graph(self) -> DiGraph<Data<G>, G::M> {
        self.graph
    }
    /// mutable access to a node weight
    pub(crate) fn data_mut(&mut self, index: NodeIndex) -> Option<&mut Data<G>> {
        self.graph.node_weight_mut(index)
    }
    /// the edge joining `head` to its child along `edge`, if any
    pub(crate) fn slot(&self, head: NodeIndex, edge: &G::M) -> Option<(EdgeIndex, NodeIndex)> {
        self.graph
            .edges_directed(head, petgraph::Direction::Outgoing)
            .find(|e| e.weight() == edge)
            .map(|e| (e.id(), e.target()))
    }
    /// release spare arena capacity once growth is over
    pub(crate) fn shrink(&mut self) {
        self.graph.shrink_to_fit();
    }

    /// Iterate nodes in BFS order (root first) for top-down traversal.
    /// Returns a Vec that visits parents before children.
    pub fn bfs(&self) -> Vec<NodeIndex> {
        use petgraph::visit::Walker;
        petgraph::visit::Bfs::new(&self.graph, NodeIndex::new(0))
            .iter(&self.graph)
            .collect()
    }
    /// Iterate nodes in postorder (leaves first) for bottom-up traversal.
    /// Returns a Vec since we need to reverse the DFS order.
    pub fn postorder(&self) -> Vec<NodeIndex> {
        let mut result = Vec::with_capacity(self.n());
        let mut stack = vec![(NodeIndex::new(0), false)];
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                result.push(node);
            } else {
                stack.push((node, true));
                for child in self.at(node).children() {
                    stack.push((child.index(), false));
                }
            }
        }
        result
    }
    /// Every terminal position as (move path from root, outcome),
    /// sorted by path. Two trees with equal terminals reach the same
    /// finished games with the same results.
    pub fn terminals(&self) -> Vec<(Vec<G::M>, G::O)> {
        let mut terminals = self
            .all()
            .filter_map(|node| node.outcome().map(|o| (node.path(), *o)))
            .collect::<Vec<_>>();
        terminals.sort_by(|a, b| a.0.cmp(&b.0));
        terminals
    }

    /// display the Tree in a human-readable format
    /// be careful because it's really big and recursive
    fn show(&self, f: &mut std::fmt::Formatter, x: NodeIndex, prefix: &str) -> std::fmt::Result {
        if x == NodeIndex::new(0) {
            writeln!(f, "ROOT   {}", self.at(x).data())?;
        }
        let branches = self.at(x).branches();
        let n = branches.len();
        for (i, (edge, child)) in branches.into_iter().enumerate() {
            let last = i == n - 1;
            let gaps = if last { "    " } else { "│   " };
            let stem = if last { "└" } else { "├" };
            writeln!(f, "{}{}──{:?} → {}", prefix, stem, edge, child.data())?;
            self.show(f, child.index(), &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
}

impl<G> From<Data<G>> for Tree<G>
where
    G: Game,
{
    fn from(data: Data<G>) -> Self {
        let mut graph = DiGraph::default();
        graph.add_node(data);
        Self { graph }
    }
}

impl<G> std::fmt::Display for Tree<G>
where
    G: Game,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.show(f, NodeIndex::new(0), "")
    }
}

impl<G> std::fmt::Debug for Tree<G>
where
    G: Game,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree").field("n", &self.n()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::games::*;
    use crate::*;

    fn nim(stones: u8) -> Tree<Nim> {
        solve(Tree::seed(Nim::new(stones))).unwrap()
    }

    #[test]
    fn bfs_visits_parents_first() {
        let tree = nim(6);
        let order = tree.bfs();
        assert_eq!(order.len(), tree.n());
        let rank = |i: petgraph::graph::NodeIndex| order.iter().position(|x| *x == i);
        for node in tree.all().skip(1) {
            let parent = node.parent().unwrap();
            assert!(rank(parent.index()) < rank(node.index()));
        }
    }

    #[test]
    fn postorder_visits_children_first() {
        let tree = nim(6);
        let order = tree.postorder();
        assert_eq!(order.len(), tree.n());
        assert_eq!(order.last(), Some(&tree.root().index()));
        let rank = |i: petgraph::graph::NodeIndex| order.iter().position(|x| *x == i);
        for node in tree.all().skip(1) {
            let parent = node.parent().unwrap();
            assert!(rank(node.index()) < rank(parent.index()));
        }
    }

    #[test]
    fn terminals_are_sorted_paths() {
        let terminals = nim(3).terminals();
        let paths = terminals.iter().map(|(p, _)| p.clone()).collect::<Vec<_>>();
        assert_eq!(
            paths,
            vec![
                vec![Take(1), Take(1), Take(1)],
                vec![Take(1), Take(2)],
                vec![Take(2), Take(1)],
            ]
        );
        assert_eq!(terminals[0].1, Winner(Player::P1));
        assert_eq!(terminals[1].1, Winner(Player::P2));
    }

    #[test]
    fn display_draws_every_node() {
        let tree = nim(3);
        let drawn = tree.to_string();
        assert!(drawn.starts_with("ROOT"));
        assert_eq!(drawn.lines().count(), tree.n());
    }
}

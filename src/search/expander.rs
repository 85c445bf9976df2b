use crate::*;
use petgraph::graph::NodeIndex;
use std::collections::VecDeque;

/// Breadth-first tree growth.
///
/// Every node at depth `d` is expanded before any node at depth `d + 1`,
/// so stopping at a fixed depth leaves a frontier that is cut cleanly at
/// that depth. Paths that reach a terminal position stop early.
///
/// `depth: None` expands without limit until every leaf is terminal.
/// `linked` makes every new child remember its (parent, move) [`Link`],
/// which it needs if it is going to be detached and grafted back later.
///
/// Expansion is resumable: nodes that already have children are walked
/// through, not re-expanded, so a tree can be grown deeper in stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expander {
    depth: Option<usize>,
    linked: bool,
}

impl Expander {
    /// Expand up to `depth` plies below the root.
    pub fn new(depth: usize, linked: bool) -> Self {
        Self {
            depth: Some(depth),
            linked,
        }
    }
    /// Expand until every leaf is terminal.
    pub fn exhaustive() -> Self {
        Self {
            depth: None,
            linked: false,
        }
    }

    /// Grow `tree` in place. Any failure from the rules engine aborts the
    /// whole expansion; the tree is then incomplete and must be discarded.
    pub fn expand<G>(&self, tree: &mut Tree<G>) -> Result<()>
    where
        G: Game,
    {
        let mut created = 0;
        let mut queue = VecDeque::from([(NodeIndex::new(0), 0)]);
        while let Some((index, depth)) = queue.pop_front() {
            let node = tree.at(index);
            if node.is_terminal() {
                continue;
            }
            if node.is_expanded() {
                queue.extend(node.children().iter().map(|c| (c.index(), depth + 1)));
                continue;
            }
            if self.depth.is_some_and(|limit| depth >= limit) {
                continue;
            }
            for (edge, data) in self.spawn(node, depth)? {
                let tail = tree.grow(index, edge, data);
                queue.push_back((tail, depth + 1));
                created += 1;
            }
        }
        log::trace!("expanded {} nodes", created);
        Ok(())
    }

    /// One child weight per legal move at `node`.
    fn spawn<G>(&self, node: Node<'_, G>, depth: usize) -> Result<Vec<(G::M, Data<G>)>>
    where
        G: Game,
    {
        let game = node.game().ok_or_else(|| {
            SearchError::adapter(
                depth,
                anyhow::anyhow!("pending node {} has no position", node.index().index()),
            )
        })?;
        let moves = game.moves();
        if moves.is_empty() {
            return Err(SearchError::adapter(
                depth,
                anyhow::anyhow!("live position has no legal moves and no outcome"),
            ));
        }
        moves
            .into_iter()
            .map(|edge| {
                let mut next = game.clone();
                let outcome = next
                    .play(edge)
                    .map_err(|e| SearchError::adapter(depth, e))?;
                let link = self.linked.then(|| Link::from((node.index(), edge)));
                Ok((edge, Data::child(next, outcome, link)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::*;

    #[test]
    fn exhaustive_nim_matches_closed_form() {
        for stones in 1..=10 {
            let mut tree = Tree::seed(Nim::new(stones));
            Expander::exhaustive().expand(&mut tree).unwrap();
            assert_eq!(tree.n(), Nim::size(stones), "pile of {}", stones);
            assert_eq!(tree.root().leaves().count(), 0);
        }
    }

    #[test]
    fn exhaustive_tictactoe_visits_every_game() {
        let mut tree = Tree::seed(TicTacToe::default());
        Expander::exhaustive().expand(&mut tree).unwrap();
        assert_eq!(tree.n(), 549_946);
        let terminals = tree.all().filter(|n| n.is_terminal()).collect::<Vec<_>>();
        assert_eq!(terminals.len(), 255_168);
        let wins = |mark| {
            terminals
                .iter()
                .filter(|n| n.outcome() == Some(&Verdict::Win(mark)))
                .count()
        };
        assert_eq!(wins(Mark::X), 131_184);
        assert_eq!(wins(Mark::O), 77_904);
    }

    #[test]
    fn frontier_is_cut_at_depth() {
        for depth in 0..=5 {
            let mut tree = Tree::seed(TicTacToe::default());
            Expander::new(depth, true).expand(&mut tree).unwrap();
            for leaf in tree.root().leaves() {
                assert_eq!(leaf.depth(), depth);
            }
            for node in tree.all().filter(|n| n.is_terminal()) {
                assert!(node.depth() <= depth);
            }
            for node in tree.all().filter(|n| n.depth() < depth) {
                assert!(node.is_expanded() || node.is_terminal());
            }
        }
    }

    #[test]
    fn frontier_width_matches_full_tree() {
        let mut full = Tree::seed(Nim::new(9));
        Expander::exhaustive().expand(&mut full).unwrap();
        for depth in 0..=9 {
            let mut tree = Tree::seed(Nim::new(9));
            Expander::new(depth, true).expand(&mut tree).unwrap();
            let expected = full
                .all()
                .filter(|n| n.depth() == depth && !n.is_terminal())
                .count();
            assert_eq!(tree.root().leaves().count(), expected);
        }
    }

    #[test]
    fn links_follow_parent_pointers() {
        let mut tree = Tree::seed(Nim::new(5));
        Expander::new(3, true).expand(&mut tree).unwrap();
        assert!(tree.root().link().is_none());
        for node in tree.all().skip(1) {
            let (parent, edge) = node.up().unwrap();
            let link = node.link().unwrap();
            assert_eq!(link.parent, parent.index());
            assert_eq!(&link.edge, edge);
            assert_eq!(parent.follow(edge), Some(node));
        }
    }

    #[test]
    fn unlinked_expansion_records_nothing() {
        let mut tree = Tree::seed(Nim::new(5));
        Expander::new(3, false).expand(&mut tree).unwrap();
        assert!(tree.all().all(|n| n.link().is_none()));
    }

    #[test]
    fn expansion_resumes_deeper() {
        let mut staged = Tree::seed(Nim::new(7));
        Expander::new(2, false).expand(&mut staged).unwrap();
        Expander::new(4, false).expand(&mut staged).unwrap();
        Expander::exhaustive().expand(&mut staged).unwrap();
        assert_eq!(staged.n(), Nim::size(7));
    }

    #[test]
    fn stuck_position_is_an_adapter_error() {
        let mut tree = Tree::seed(Nim::new(0));
        let err = Expander::exhaustive().expand(&mut tree).unwrap_err();
        assert!(matches!(err, SearchError::Adapter { depth: 0, .. }));
    }
}

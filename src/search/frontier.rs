use crate::*;
use petgraph::graph::NodeIndex;

/// One pending leaf, detached from its tree and ready to be solved.
///
/// `seed` is a one-node tree that owns the leaf's position. `slot` is
/// the coordinator's own record of where that position came from, and
/// never travels with the seed.
pub struct Leaf<G>
where
    G: Game,
{
    pub slot: Slot<G::M>,
    pub seed: Tree<G>,
}

/// Every pending leaf of a tree, materialized in [`Node::leaves`] order.
///
/// The order is the contract between fan-out and fan-in: the `i`-th
/// solved subtree belongs in the `i`-th slot.
pub struct Frontier<G>(Vec<Leaf<G>>)
where
    G: Game;

impl<G> Frontier<G>
where
    G: Game,
{
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Leaf<G>> {
        self.0.iter()
    }
    /// Separate the coordinator's slots from the seeds handed to workers.
    pub fn split(self) -> (Vec<Slot<G::M>>, Vec<Tree<G>>) {
        self.0.into_iter().map(|leaf| (leaf.slot, leaf.seed)).unzip()
    }
}

impl<G> Tree<G>
where
    G: Game,
{
    /// Detach every pending leaf into a [`Frontier`].
    ///
    /// Positions are moved, not copied, out of the tree. The leaves stay in
    /// place as placeholders (same turn, same link) until their solved
    /// subtrees are grafted back with [`Tree::recombine`].
    pub fn frontier(&mut self) -> Frontier<G> {
        let indices = self
            .root()
            .leaves()
            .map(|leaf| leaf.index())
            .collect::<Vec<NodeIndex>>();
        Frontier(
            indices
                .into_iter()
                .filter_map(|index| {
                    let data = self.data_mut(index)?;
                    let link = data.link().copied();
                    let seed = Tree::from(data.detach());
                    Some(Leaf {
                        slot: Slot { index, link },
                        seed,
                    })
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::*;

    #[test]
    fn frontier_moves_positions_out() {
        let mut tree = Tree::seed(Nim::new(6));
        Expander::new(2, true).expand(&mut tree).unwrap();
        let expected = tree.root().leaves().map(|n| n.index()).collect::<Vec<_>>();
        let frontier = tree.frontier();
        assert_eq!(frontier.len(), expected.len());
        for (leaf, index) in frontier.iter().zip(expected) {
            assert_eq!(leaf.slot.index, index);
            assert_eq!(leaf.seed.n(), 1);
            assert!(leaf.seed.root().game().is_some());
            assert!(leaf.seed.root().link().is_none());
            assert!(tree.at(index).game().is_none());
            assert_eq!(tree.at(index).link(), leaf.slot.link.as_ref());
        }
    }

    #[test]
    fn frontier_order_is_stable() {
        let order = || {
            let mut tree = Tree::seed(TicTacToe::default());
            Expander::new(3, true).expand(&mut tree).unwrap();
            tree.frontier()
                .iter()
                .map(|leaf| leaf.slot.link.map(|l| l.edge))
                .collect::<Vec<_>>()
        };
        assert_eq!(order(), order());
    }

    #[test]
    fn depth_zero_frontier_is_the_root() {
        let mut tree = Tree::seed(Nim::new(4));
        Expander::new(0, true).expand(&mut tree).unwrap();
        let (slots, seeds) = tree.frontier().split();
        assert_eq!(slots.len(), 1);
        assert!(slots[0].is_root());
        assert!(slots[0].link.is_none());
        assert_eq!(seeds[0].root().game().map(Nim::stones), Some(4));
    }
}

use crate::*;

impl<G> Tree<G>
where
    G: Game,
{
    /// Drop the position held by every node that is already expanded or
    /// terminal, and release spare arena capacity.
    ///
    /// Structure, turns, terminal outcomes and links are kept, which is
    /// everything backward induction reads. Pending leaves keep their
    /// positions so they can still be expanded. Returns how many
    /// positions were dropped.
    pub fn prune(&mut self) -> usize {
        let settled = self
            .all()
            .filter(|node| !node.is_pending())
            .map(|node| node.index())
            .collect::<Vec<_>>();
        let dropped = settled
            .into_iter()
            .filter_map(|index| self.data_mut(index).and_then(Data::prune))
            .count();
        self.shrink();
        dropped
    }
}

#[cfg(test)]
mod tests {
    use crate::games::*;
    use crate::*;

    #[test]
    fn prune_keeps_pending_positions() {
        let mut tree = Tree::seed(Nim::new(6));
        Expander::new(2, false).expand(&mut tree).unwrap();
        let pending = tree.root().leaves().count();
        let dropped = tree.prune();
        assert_eq!(dropped, tree.n() - pending);
        assert!(tree.root().leaves().all(|n| n.game().is_some()));
        Expander::exhaustive().expand(&mut tree).unwrap();
        assert_eq!(tree.n(), Nim::size(6));
    }

    #[test]
    fn prune_preserves_values() {
        let opening = [Square(0), Square(4), Square(8)];
        let mut tree = Tree::seed(TicTacToe::replay(&opening).unwrap());
        Expander::exhaustive().expand(&mut tree).unwrap();
        let before = tree.optimal_play().unwrap();
        let terminals = tree.terminals();
        tree.prune();
        assert_eq!(tree.optimal_play().unwrap(), before);
        assert_eq!(tree.terminals(), terminals);
    }
}

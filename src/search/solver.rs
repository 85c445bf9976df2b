use crate::*;

/// Solve one detached frontier position to completion.
///
/// Expands `seed` breadth-first without a depth limit until every leaf is
/// terminal, prunes the positions it no longer needs, and hands the same
/// tree back as a solved subtree. Reads and writes nothing but `seed`, so
/// any number of calls may run at once.
pub fn solve<G>(mut seed: Tree<G>) -> Result<Tree<G>>
where
    G: Game,
{
    Expander::exhaustive().expand(&mut seed)?;
    seed.prune();
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::*;

    #[test]
    fn solved_subtree_is_complete_and_pruned() {
        let tree = solve(Tree::seed(Nim::new(6))).unwrap();
        assert_eq!(tree.n(), Nim::size(6));
        assert_eq!(tree.root().leaves().count(), 0);
        assert!(tree.all().all(|n| n.game().is_none()));
    }

    #[test]
    fn solving_is_repeatable() {
        let opening = [Square(4), Square(0)];
        let a = solve(Tree::seed(TicTacToe::replay(&opening).unwrap())).unwrap();
        let b = solve(Tree::seed(TicTacToe::replay(&opening).unwrap())).unwrap();
        assert_eq!(a.n(), b.n());
        assert_eq!(a.terminals(), b.terminals());
    }
}

use crate::*;
use petgraph::graph::NodeIndex;

/// Backed-up value of a node, and the branch that achieves it.
type Entry<G> = (<G as Game>::O, Option<(<G as Game>::M, NodeIndex)>);

impl<G> Tree<G>
where
    G: Game,
{
    /// The outcome reached under optimal play from every node, indexed
    /// by `NodeIndex`. `None` while any leaf is still unexpanded.
    pub fn values(&self) -> Option<Vec<G::O>> {
        Some(
            self.backup()?
                .into_iter()
                .map(|(outcome, _)| outcome)
                .collect(),
        )
    }

    /// The principal variation from the root.
    ///
    /// At every node the mover picks the child whose backed-up outcome
    /// pays them the most. Among equally good children the one reached by
    /// the smallest move wins, so the line is the same on every run.
    /// Read-only; `None` while any leaf is still unexpanded.
    pub fn optimal_play(&self) -> Option<Line<G>> {
        let table = self.backup()?;
        let mut moves = Vec::new();
        let mut index = NodeIndex::new(0);
        while let Some((edge, next)) = table[index.index()].1 {
            moves.push(edge);
            index = next;
        }
        Some(Line::new(moves, table[0].0))
    }

    /// Bottom-up minimax over the whole tree.
    fn backup(&self) -> Option<Vec<Entry<G>>> {
        let mut table = vec![None::<Entry<G>>; self.n()];
        for index in self.postorder() {
            let node = self.at(index);
            let entry = match node.outcome() {
                Some(outcome) => (*outcome, None),
                None => {
                    let turn = node.turn();
                    let mut best = None::<(G::O, G::M, NodeIndex)>;
                    for (edge, child) in node.branches() {
                        let (value, _) = table[child.index().index()]?;
                        if best.is_none_or(|(b, _, _)| value.payoff(turn) > b.payoff(turn)) {
                            best = Some((value, *edge, child.index()));
                        }
                    }
                    let (value, edge, child) = best?;
                    (value, Some((edge, child)))
                }
            };
            table[index.index()] = Some(entry);
        }
        table.into_iter().collect()
    }
}

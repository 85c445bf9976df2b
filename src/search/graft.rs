use crate::*;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;

impl<G> Tree<G>
where
    G: Game,
{
    /// Graft solved subtrees back into the slots they were detached from.
    ///
    /// `slots` and `solved` are paired by position: `solved[i]` replaces the
    /// placeholder at `slots[i]`. Each slot is located through its recorded
    /// (parent, move) link. A root slot with no link stands for the whole
    /// tree and replaces it.
    ///
    /// Every slot is checked before anything is written, so a rejected
    /// call leaves the tree as it was.
    pub fn recombine(&mut self, slots: &[Slot<G::M>], solved: Vec<Tree<G>>) -> Result<()> {
        if slots.len() != solved.len() {
            return Err(SearchError::Mismatch {
                slots: slots.len(),
                solved: solved.len(),
            });
        }
        let mut seen = HashSet::with_capacity(slots.len());
        for (i, slot) in slots.iter().enumerate() {
            self.locate(i, slot)?;
            if !seen.insert(slot.index) {
                return Err(SearchError::Vacant { index: i });
            }
        }
        for (slot, subtree) in slots.iter().zip(solved) {
            match slot.link {
                None => *self = subtree,
                Some(_) => self.graft(slot, subtree),
            }
        }
        log::debug!("recombined {} subtrees into {} nodes", slots.len(), self.n());
        Ok(())
    }

    /// Check that `slot` still names a pending placeholder in this tree.
    fn locate(&self, i: usize, slot: &Slot<G::M>) -> Result<()> {
        match slot.link {
            None if !slot.is_root() => Err(SearchError::Unlinked { index: i }),
            None if self.root().is_pending() => Ok(()),
            None => Err(SearchError::Vacant { index: i }),
            Some(link) => match self.slot(link.parent, &link.edge) {
                Some((_, target)) if target == slot.index && self.at(target).is_pending() => Ok(()),
                _ => Err(SearchError::Vacant { index: i }),
            },
        }
    }

    /// Overwrite the placeholder with the subtree's root and append the
    /// rest of the subtree below it.
    fn graft(&mut self, slot: &Slot<G::M>, subtree: Tree<G>) {
        let (nodes, edges) = subtree.into_graph().into_nodes_edges();
        let mut index = Vec::<NodeIndex>::with_capacity(nodes.len());
        for (i, node) in nodes.into_iter().enumerate() {
            if i == 0 {
                if let Some(data) = self.data_mut(slot.index) {
                    *data = node.weight.relink(slot.link);
                }
                index.push(slot.index);
            } else {
                index.push(self.graph_mut().add_node(node.weight));
            }
        }
        for edge in edges {
            let head = index[edge.source().index()];
            let tail = index[edge.target().index()];
            self.graph_mut().add_edge(head, tail, edge.weight);
        }
    }
}

use crate::*;

/// The result of a [`Search`]: the fully solved tree and the principal
/// variation read off it.
pub struct Solution<G>
where
    G: Game,
{
    pub tree: Tree<G>,
    pub line: Line<G>,
}

impl<G> std::fmt::Display for Solution<G>
where
    G: Game,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} nodes, {}", self.tree.n(), self.line)
    }
}

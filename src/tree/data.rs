use crate::*;

/// The weight stored at every vertex of the tree.
///
/// `game` is the heavy part. It is present while the node may still be
/// expanded and is dropped by pruning once the subtree below is complete.
/// Everything backward induction needs (`turn` and `outcome`) survives.
#[derive(Clone)]
pub struct Data<G>
where
    G: Game,
{
    game: Option<G>,
    turn: G::T,
    outcome: Option<G::O>,
    link: Option<Link<G::M>>,
}

impl<G> Data<G>
where
    G: Game,
{
    /// A live position with no recorded parent.
    pub fn root(game: G) -> Self {
        Self {
            turn: game.turn(),
            game: Some(game),
            outcome: None,
            link: None,
        }
    }
    /// A position reached by a move, optionally remembering where it hangs.
    pub fn child(game: G, outcome: Option<G::O>, link: Option<Link<G::M>>) -> Self {
        Self {
            turn: game.turn(),
            game: Some(game),
            outcome,
            link,
        }
    }
    pub fn game(&self) -> Option<&G> {
        self.game.as_ref()
    }
    pub fn turn(&self) -> G::T {
        self.turn
    }
    pub fn outcome(&self) -> Option<&G::O> {
        self.outcome.as_ref()
    }
    pub fn link(&self) -> Option<&Link<G::M>> {
        self.link.as_ref()
    }
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
    /// Drop the position, keeping turn, outcome and link.
    pub fn prune(&mut self) -> Option<G> {
        self.game.take()
    }
    /// Move the position out into an unlinked weight, as handed to a worker.
    /// This weight keeps its link and becomes a placeholder until the
    /// solved subtree is grafted back over it.
    pub fn detach(&mut self) -> Self {
        Self {
            game: self.game.take(),
            turn: self.turn,
            outcome: self.outcome,
            link: None,
        }
    }
    /// Take over the link of the slot this weight is grafted into.
    pub fn relink(mut self, link: Option<Link<G::M>>) -> Self {
        self.link = link;
        self
    }
}

impl<G> std::fmt::Debug for Data<G>
where
    G: Game,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("turn", &self.turn)
            .field("outcome", &self.outcome)
            .field("pruned", &self.game.is_none())
            .field("link", &self.link)
            .finish()
    }
}

impl<G> std::fmt::Display for Data<G>
where
    G: Game,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            Some(ref outcome) => write!(f, "{:?}", outcome),
            None => write!(f, "{:?} to move", self.turn),
        }
    }
}

use crate::*;

/// A principal variation: the moves optimal play makes from the root,
/// and the terminal outcome they lead to.
pub struct Line<G>
where
    G: Game,
{
    moves: Vec<G::M>,
    outcome: G::O,
}

impl<G> Line<G>
where
    G: Game,
{
    pub fn new(moves: Vec<G::M>, outcome: G::O) -> Self {
        Self { moves, outcome }
    }
    pub fn moves(&self) -> &[G::M] {
        &self.moves
    }
    pub fn outcome(&self) -> &G::O {
        &self.outcome
    }
    pub fn into_parts(self) -> (Vec<G::M>, G::O) {
        (self.moves, self.outcome)
    }
    /// Number of plies until the game ends.
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    /// Apply the line to `game`, yielding every position along the way
    /// after the move that reached it.
    pub fn replay(&self, mut game: G) -> anyhow::Result<Vec<(G::M, G)>> {
        let mut positions = Vec::with_capacity(self.moves.len());
        for edge in self.moves.iter().copied() {
            game.play(edge)?;
            positions.push((edge, game.clone()));
        }
        Ok(positions)
    }
}

impl<G> Clone for Line<G>
where
    G: Game,
{
    fn clone(&self) -> Self {
        Self {
            moves: self.moves.clone(),
            outcome: self.outcome,
        }
    }
}

impl<G> PartialEq for Line<G>
where
    G: Game,
{
    fn eq(&self, other: &Self) -> bool {
        self.moves == other.moves && self.outcome == other.outcome
    }
}

impl<G> std::fmt::Debug for Line<G>
where
    G: Game,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Line")
            .field("moves", &self.moves)
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl<G> std::fmt::Display for Line<G>
where
    G: Game,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let moves = self
            .moves
            .iter()
            .map(|m| format!("{:?}", m))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}] -> {:?}", moves, self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::*;

    #[test]
    fn replay_walks_the_line() {
        let line = Line::<Nim>::new(vec![Take(2), Take(2)], Winner(Player::P2));
        let positions = line.replay(Nim::new(4)).unwrap();
        let piles = positions.iter().map(|(_, g)| g.stones()).collect::<Vec<_>>();
        assert_eq!(piles, vec![2, 0]);
        assert_eq!(line.len(), 2);
    }

    #[test]
    fn replay_surfaces_illegal_moves() {
        let line = Line::<Nim>::new(vec![Take(2), Take(2)], Winner(Player::P2));
        assert!(line.replay(Nim::new(3)).is_err());
    }

    #[test]
    fn display_lists_moves_then_outcome() {
        let line = Line::<Nim>::new(vec![Take(1), Take(2)], Winner(Player::P2));
        assert_eq!(
            line.to_string(),
            format!("[{:?} {:?}] -> {:?}", Take(1), Take(2), Winner(Player::P2))
        );
    }
}

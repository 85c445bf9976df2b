use super::*;
use crate::Score;

/// The result of a finished game.
///
/// Outcomes are only ever compared through [`Outcome::payoff`], so the
/// same type serves zero-sum scoring games, team games, and win/draw/loss
/// games alike: the player to act picks the child whose outcome pays
/// them the most.
pub trait Outcome: Clone + Copy + PartialEq + Send + Sync + std::fmt::Debug {
    type T: Turn;
    /// Utility of this outcome for `turn`. Larger is better.
    fn payoff(&self, turn: Self::T) -> Score;
}

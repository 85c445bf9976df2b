use super::*;
use crate::*;

/// Whoever took the last stone.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Winner(pub Player);

impl Outcome for Winner {
    type T = Player;
    fn payoff(&self, turn: Self::T) -> Score {
        if self.0 == turn { 1 } else { -1 }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins", self.0)
    }
}

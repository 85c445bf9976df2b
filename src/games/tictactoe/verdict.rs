use super::*;
use crate::*;

/// How a game of tic-tac-toe ended.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Verdict {
    Win(Mark),
    Draw,
}

impl Outcome for Verdict {
    type T = Mark;
    fn payoff(&self, turn: Self::T) -> Score {
        match self {
            Self::Win(mark) if *mark == turn => 1,
            Self::Win(_) => -1,
            Self::Draw => 0,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win(mark) => write!(f, "{} wins", mark),
            Self::Draw => write!(f, "draw"),
        }
    }
}

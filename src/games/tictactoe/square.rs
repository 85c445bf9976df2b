use crate::*;

/// A cell on the board, numbered 0..9 in reading order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Square(pub u8);

impl Square {
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).map(Self)
    }
    pub fn row(&self) -> u8 {
        self.0 / 3
    }
    pub fn col(&self) -> u8 {
        self.0 % 3
    }
}

impl Move for Square {}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

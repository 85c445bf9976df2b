use super::*;
use crate::*;

/// A Nim position: stones left and who is to move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Nim {
    stones: u8,
    turn: Player,
}

impl Nim {
    /// Largest number of stones a single move may take.
    pub const REACH: u8 = 2;

    pub fn new(stones: u8) -> Self {
        Self {
            stones,
            turn: Player::P1,
        }
    }
    pub fn stones(&self) -> u8 {
        self.stones
    }
    /// Nodes in the full tree below a pile of `stones`, root included.
    pub fn size(stones: u8) -> usize {
        let (mut a, mut b) = (1, 2);
        for _ in 0..stones {
            (a, b) = (b, a + b);
        }
        b - 1
    }
}

impl Game for Nim {
    type M = Take;
    type T = Player;
    type O = Winner;
    fn turn(&self) -> Self::T {
        self.turn
    }
    fn moves(&self) -> Vec<Self::M> {
        (1..=Self::REACH)
            .filter(|n| *n <= self.stones)
            .map(Take)
            .collect()
    }
    fn play(&mut self, edge: Self::M) -> anyhow::Result<Option<Self::O>> {
        let Take(n) = edge;
        if n == 0 || n > Self::REACH || n > self.stones {
            anyhow::bail!("cannot take {} from a pile of {}", n, self.stones);
        }
        let mover = self.turn;
        self.stones -= n;
        self.turn = mover.other();
        Ok((self.stones == 0).then_some(Winner(mover)))
    }
}

impl std::fmt::Display for Nim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} stones, {} to move", self.stones, self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_form_size() {
        assert_eq!(Nim::size(0), 1);
        assert_eq!(Nim::size(1), 2);
        assert_eq!(Nim::size(2), 4);
        assert_eq!(Nim::size(3), 7);
        assert_eq!(Nim::size(4), 12);
        assert_eq!(Nim::size(8), 88);
    }

    #[test]
    fn last_stone_wins() {
        let mut nim = Nim::new(2);
        assert_eq!(nim.play(Take(1)).unwrap(), None);
        assert_eq!(nim.turn(), Player::P2);
        assert_eq!(nim.play(Take(1)).unwrap(), Some(Winner(Player::P2)));
        assert!(nim.moves().is_empty());
    }

    #[test]
    fn overdraw_is_rejected() {
        let mut nim = Nim::new(1);
        assert_eq!(nim.moves(), vec![Take(1)]);
        assert!(nim.play(Take(2)).is_err());
        assert!(nim.play(Take(0)).is_err());
    }
}

use super::*;
use crate::*;

/// A tic-tac-toe position.
///
/// `history` records the squares played so far, for display only.
/// [`Game::compact`] drops it, which is what the search does before
/// building the tree so that millions of cloned positions stay small.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    cells: [Option<Mark>; 9],
    turn: Mark,
    history: Vec<Square>,
}

impl TicTacToe {
    const LINES: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    /// The position reached by playing `squares` in order from an empty board.
    pub fn replay(squares: &[Square]) -> anyhow::Result<Self> {
        let mut game = Self::default();
        for square in squares {
            game.play(*square)?;
        }
        Ok(game)
    }
    pub fn history(&self) -> &[Square] {
        &self.history
    }
    pub fn at(&self, square: Square) -> Option<Mark> {
        self.cells[square.0 as usize]
    }
    pub fn winner(&self) -> Option<Mark> {
        Self::LINES.iter().find_map(|line| {
            match (self.cells[line[0]], self.cells[line[1]], self.cells[line[2]]) {
                (Some(a), Some(b), Some(c)) if a == b && b == c => Some(a),
                _ => None,
            }
        })
    }
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
    pub fn verdict(&self) -> Option<Verdict> {
        match self.winner() {
            Some(mark) => Some(Verdict::Win(mark)),
            None if self.is_full() => Some(Verdict::Draw),
            None => None,
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self {
            cells: [None; 9],
            turn: Mark::X,
            history: Vec::new(),
        }
    }
}

impl Game for TicTacToe {
    type M = Square;
    type T = Mark;
    type O = Verdict;
    fn turn(&self) -> Self::T {
        self.turn
    }
    fn moves(&self) -> Vec<Self::M> {
        match self.verdict() {
            Some(_) => vec![],
            None => Square::all().filter(|s| self.at(*s).is_none()).collect(),
        }
    }
    fn play(&mut self, edge: Self::M) -> anyhow::Result<Option<Self::O>> {
        if edge.0 >= 9 {
            anyhow::bail!("square {} is off the board", edge.0);
        }
        if let Some(verdict) = self.verdict() {
            anyhow::bail!("game already over ({})", verdict);
        }
        if let Some(mark) = self.at(edge) {
            anyhow::bail!("square {} already holds {}", edge, mark);
        }
        self.cells[edge.0 as usize] = Some(self.turn);
        self.turn = self.turn.other();
        self.history.push(edge);
        Ok(self.verdict())
    }
    fn compact(&mut self) {
        self.history = Vec::new();
    }
}

impl std::fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let line = (0..3)
                .map(|col| match self.cells[row * 3 + col] {
                    Some(mark) => format!("{}", mark),
                    None => String::from("."),
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(squares: &[u8]) -> (TicTacToe, Option<Verdict>) {
        let mut game = TicTacToe::default();
        let mut verdict = None;
        for s in squares {
            verdict = game.play(Square(*s)).unwrap();
        }
        (game, verdict)
    }

    #[test]
    fn row_wins() {
        let (game, verdict) = moves(&[0, 3, 1, 4, 2]);
        assert_eq!(verdict, Some(Verdict::Win(Mark::X)));
        assert!(game.moves().is_empty());
    }

    #[test]
    fn full_board_draws() {
        let (_, verdict) = moves(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(verdict, Some(Verdict::Draw));
    }

    #[test]
    fn occupied_square_is_rejected() {
        let (mut game, _) = moves(&[4]);
        assert!(game.play(Square(4)).is_err());
        assert!(game.play(Square(9)).is_err());
    }

    #[test]
    fn compact_keeps_position() {
        let (mut game, _) = moves(&[4, 0]);
        let before = game.moves();
        game.compact();
        assert!(game.history().is_empty());
        assert_eq!(game.moves(), before);
        assert_eq!(game.turn(), Mark::X);
    }

    #[test]
    fn replay_reaches_position() {
        let game = TicTacToe::replay(&[Square(4), Square(0)]).unwrap();
        assert_eq!(game.at(Square(4)), Some(Mark::X));
        assert_eq!(game.at(Square(0)), Some(Mark::O));
        assert_eq!(game.history(), &[Square(4), Square(0)]);
        assert!(TicTacToe::replay(&[Square(4), Square(4)]).is_err());
    }

    #[test]
    fn payoff_perspective() {
        assert_eq!(Verdict::Win(Mark::O).payoff(Mark::O), 1);
        assert_eq!(Verdict::Win(Mark::O).payoff(Mark::X), -1);
        assert_eq!(Verdict::Draw.payoff(Mark::X), 0);
    }
}

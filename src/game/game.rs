use super::*;

/// A position in a finite two-player perfect-information game.
///
/// This is the only boundary between the search and a rules engine.
///
/// # Required Methods
///
/// - `turn()` — who moves next
/// - `moves()` — every legal move; empty only at a finished position
/// - `play(edge)` — apply a move in place, returning the outcome if it ended the game
///
/// # Provided Methods
///
/// - `compact()` — shrink the in-memory representation; called once
///   on the root before the tree is built
///
/// # Design Notes
///
/// `Clone` must produce an independent snapshot: the expander clones a
/// parent before playing each child's move on the copy. Positions must be
/// `Send + Sync` because frontier positions are solved on worker threads.
pub trait Game: Clone + Send + Sync {
    type M: Move;
    type T: Turn;
    type O: Outcome<T = Self::T>;
    fn turn(&self) -> Self::T;
    fn moves(&self) -> Vec<Self::M>;
    fn play(&mut self, edge: Self::M) -> anyhow::Result<Option<Self::O>>;
    fn compact(&mut self) {}
}

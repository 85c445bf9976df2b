/// The player to act at a position.
///
/// Stored on every tree node, including pruned ones, so backward
/// induction knows whose objective to apply without the position itself.
pub trait Turn: Clone + Copy + PartialEq + Eq + Send + Sync + std::fmt::Debug + std::hash::Hash {}

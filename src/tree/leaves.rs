use crate::*;
use std::collections::VecDeque;

/// Breadth-first walk yielding every pending leaf below a node.
///
/// A pending leaf has no children and no outcome: it is where the
/// next round of expansion starts. Terminal leaves are skipped.
/// The walk is lazy and visits children in ascending move order, so
/// two walks over the same tree yield the same sequence. Each call to
/// [`Node::leaves`] starts a fresh walk.
pub struct Leaves<'tree, G>
where
    G: Game,
{
    queue: VecDeque<Node<'tree, G>>,
}

impl<'tree, G> From<Node<'tree, G>> for Leaves<'tree, G>
where
    G: Game,
{
    fn from(node: Node<'tree, G>) -> Self {
        Self {
            queue: VecDeque::from([node]),
        }
    }
}

impl<'tree, G> Iterator for Leaves<'tree, G>
where
    G: Game,
{
    type Item = Node<'tree, G>;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.queue.pop_front() {
            if node.is_pending() {
                return Some(node);
            }
            self.queue.extend(node.children());
        }
        None
    }
}

use crate::game::stack::Stack;
use crate::game::tile::TileIndex;
use log::trace;

/// The hidden stacks, indexed in construction order. Each stack keeps its own
/// cursor, so a partially drawn stack resumes where it stopped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawPool {
    stacks: Vec<Stack>,
}

impl DrawPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stack(&mut self, stack: Stack) {
        self.stacks.push(stack);
    }

    /// True when no stack has an undrawn tile left.
    pub fn is_exhausted(&self) -> bool {
        self.stacks.iter().all(|s| !s.has_tiles())
    }

    /// Lowest stack index still holding tiles.
    pub fn first_non_exhausted_index(&self) -> Option<usize> {
        self.stacks.iter().position(Stack::has_tiles)
    }

    /// Draws one tile from stack `index`; `None` if the index is out of range
    /// or that stack is spent.
    pub fn draw_from(&mut self, index: usize) -> Option<TileIndex> {
        let tile = self.stacks.get_mut(index)?.draw_next()?;
        trace!("drew tile #{} from stack {}", tile.get(), index);
        Some(tile)
    }

    /// Undrawn tiles over all stacks.
    pub fn remaining(&self) -> usize {
        self.stacks.iter().map(Stack::remaining).sum()
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

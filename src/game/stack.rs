use crate::game::tile::TileIndex;

/// A draw stack: filled once at build time, then consumed front to back
/// through a cursor that never moves backwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    capacity: usize,
    tiles: Vec<TileIndex>,
    cursor: usize,
}

impl Stack {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            tiles: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Appends a tile. Returns `false` and leaves the stack untouched once it
    /// is at capacity.
    pub fn push(&mut self, tile: TileIndex) -> bool {
        if self.tiles.len() >= self.capacity {
            return false;
        }
        self.tiles.push(tile);
        true
    }

    /// Returns the tile under the cursor and advances it.
    pub fn draw_next(&mut self) -> Option<TileIndex> {
        let tile = self.tiles.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(tile)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of tiles stored, drawn or not.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.tiles.len() - self.cursor
    }

    pub fn has_tiles(&self) -> bool {
        self.cursor < self.tiles.len()
    }

    /// Tiles not drawn yet, in draw order.
    pub fn pending(&self) -> &[TileIndex] {
        &self.tiles[self.cursor..]
    }

    /// Every tile stored, in draw order.
    pub fn tiles(&self) -> &[TileIndex] {
        &self.tiles
    }
}

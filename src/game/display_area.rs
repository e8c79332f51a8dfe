use crate::game::draw_pool::DrawPool;
use crate::game::player_count::PlayerCount;
use crate::game::tile::TileIndex;
use crate::game::tile_pool::TilePool;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Size class of the visible row, which decides what `refill` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    Empty,
    Single,
    Multi,
}

/// Which refill branch ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefillKind {
    /// Two or more tiles were still visible.
    Skipped,
    /// The row was empty and got topped up.
    General,
    /// One tile was left: it was re-seated at position 0, then the row topped up.
    SingleTile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefillReport {
    pub kind: RefillKind,
    pub from_reservoir: usize,
    pub from_stacks: usize,
}

impl RefillReport {
    fn skipped() -> Self {
        Self {
            kind: RefillKind::Skipped,
            from_reservoir: 0,
            from_stacks: 0,
        }
    }

    pub fn pulled(&self) -> usize {
        self.from_reservoir + self.from_stacks
    }
}

/// The table: a bounded row of visible tiles, where a tile's cost is its
/// position, backed by a reservoir drained from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayArea {
    capacity: usize,
    visible: Vec<TileIndex>,
    reservoir: VecDeque<TileIndex>,
}

impl DisplayArea {
    /// Table for `players` players, filled from `reservoir`.
    pub fn new(players: PlayerCount, reservoir: impl IntoIterator<Item = TileIndex>) -> Self {
        Self::with_capacity(players.table_capacity(), reservoir)
    }

    pub fn with_capacity(capacity: usize, reservoir: impl IntoIterator<Item = TileIndex>) -> Self {
        let mut table = Self {
            capacity,
            visible: Vec::with_capacity(capacity),
            reservoir: reservoir.into_iter().collect(),
        };
        table.initial_fill();
        table
    }

    /// Moves reservoir tiles into the row until it is full or the reservoir
    /// runs dry. Returns how many tiles moved.
    pub fn initial_fill(&mut self) -> usize {
        self.fill_from_reservoir()
    }

    /// Removes the tile at `position`; the tiles after it each get one cheaper.
    pub fn take(&mut self, position: usize) -> Option<TileIndex> {
        if position >= self.visible.len() {
            return None;
        }
        Some(self.visible.remove(position))
    }

    /// Restores the row after a take. Does nothing while two or more tiles
    /// are visible.
    pub fn refill(&mut self, pool: &mut DrawPool) -> RefillReport {
        let kind = match self.state() {
            TableState::Multi => return RefillReport::skipped(),
            TableState::Single => {
                self.reseat_single_tile();
                RefillKind::SingleTile
            }
            TableState::Empty => RefillKind::General,
        };
        let (from_reservoir, from_stacks) = self.fill_from_reservoir_or_stacks(pool);
        debug!(
            "refill {:?}: {} from reservoir, {} from stacks, table {}/{}",
            kind,
            from_reservoir,
            from_stacks,
            self.visible.len(),
            self.capacity
        );
        RefillReport {
            kind,
            from_reservoir,
            from_stacks,
        }
    }

    // The lone tile already sits at position 0; moving it there explicitly
    // keeps the free slot occupied by it before anything new is appended.
    fn reseat_single_tile(&mut self) {
        if self.visible.len() != 1 {
            return;
        }
        let tile = self.visible.remove(0);
        self.visible.insert(0, tile);
    }

    fn fill_from_reservoir(&mut self) -> usize {
        let mut moved = 0;
        while self.visible.len() < self.capacity {
            let Some(tile) = self.reservoir.pop_front() else {
                break;
            };
            self.visible.push(tile);
            moved += 1;
        }
        moved
    }

    fn fill_from_reservoir_or_stacks(&mut self, pool: &mut DrawPool) -> (usize, usize) {
        let from_reservoir = self.fill_from_reservoir();
        let mut from_stacks = 0;
        while self.visible.len() < self.capacity {
            let Some(index) = pool.first_non_exhausted_index() else {
                break;
            };
            while self.visible.len() < self.capacity {
                let Some(tile) = pool.draw_from(index) else {
                    break;
                };
                self.visible.push(tile);
                from_stacks += 1;
            }
        }
        (from_reservoir, from_stacks)
    }

    pub fn state(&self) -> TableState {
        match self.visible.len() {
            0 => TableState::Empty,
            1 => TableState::Single,
            _ => TableState::Multi,
        }
    }

    /// Acquisition cost of the tile at `position`, if there is one.
    pub fn cost(&self, position: usize) -> Option<usize> {
        (position < self.visible.len()).then_some(position)
    }

    pub fn size(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn reservoir_count(&self) -> usize {
        self.reservoir.len()
    }

    pub fn visible(&self) -> &[TileIndex] {
        &self.visible
    }

    pub fn reservoir(&self) -> impl Iterator<Item = &TileIndex> {
        self.reservoir.iter()
    }

    /// Renders the table with tile details looked up in `pool`.
    pub fn view<'a>(&'a self, pool: &'a TilePool) -> TableView<'a> {
        TableView { table: self, pool }
    }
}

pub struct TableView<'a> {
    table: &'a DisplayArea,
    pool: &'a TilePool,
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Table ({}/{}) [cost = index]",
            self.table.size(),
            self.table.capacity()
        )?;
        for (position, &index) in self.table.visible().iter().enumerate() {
            let tile = &self.pool[index];
            writeln!(
                f,
                "  [{}] {}  (min players: {}, cost: {})",
                position, tile.id, tile.min_players, position
            )?;
        }
        write!(f, "Reservoir remaining: {}", self.table.reservoir_count())
    }
}

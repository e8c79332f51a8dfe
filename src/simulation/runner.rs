use crate::game::display_area::{DisplayArea, RefillReport};
use crate::game::draw_pool::DrawPool;
use crate::game::player_count::PlayerCount;
use crate::game::supply::Supply;
use crate::game::tile::TileIndex;
use crate::game::tile_pool::TilePool;
use log::info;
use serde::{Deserialize, Serialize};

/// What happened during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub turn: usize,
    /// The free tile taken at the start of the turn, if the table had one.
    pub taken: Option<TileIndex>,
    pub refill: RefillReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub players: PlayerCount,
    pub turns: usize,
    pub tiles_taken: usize,
}

/// Automatic play: every turn takes the free tile (position 0), then lets the
/// table refill. The run ends once table, reservoir and stacks are all empty.
#[derive(Debug, Clone)]
pub struct Simulation {
    tiles: TilePool,
    players: PlayerCount,
    draw_pool: DrawPool,
    table: DisplayArea,
    turn: usize,
    tiles_taken: usize,
}

impl Simulation {
    pub fn new(supply: Supply) -> Self {
        let players = supply.players;
        let (tiles, draw_pool, table) = supply.into_parts();
        Self {
            tiles,
            players,
            draw_pool,
            table,
            turn: 0,
            tiles_taken: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.table.is_empty() && self.table.reservoir_count() == 0 && self.draw_pool.is_exhausted()
    }

    /// Plays one turn, or returns `None` when the run is over.
    pub fn step(&mut self) -> Option<TurnOutcome> {
        if self.is_finished() {
            return None;
        }
        self.turn += 1;
        let taken = self.table.take(0);
        if taken.is_some() {
            self.tiles_taken += 1;
        }
        let refill = self.table.refill(&mut self.draw_pool);
        Some(TurnOutcome {
            turn: self.turn,
            taken,
            refill,
        })
    }

    /// Plays until the end, handing every turn to `observer` once the table
    /// has been refilled.
    pub fn run<F>(&mut self, mut observer: F) -> SimulationSummary
    where
        F: FnMut(&Simulation, &TurnOutcome),
    {
        info!(
            "starting run for {} players: {} tiles in play",
            self.players,
            self.tiles_in_play()
        );
        while let Some(outcome) = self.step() {
            observer(self, &outcome);
        }
        let summary = self.summary();
        info!(
            "run finished after {} turns, {} tiles taken",
            summary.turns, summary.tiles_taken
        );
        summary
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            players: self.players,
            turns: self.turn,
            tiles_taken: self.tiles_taken,
        }
    }

    /// Tiles still on the table, in the reservoir or in the stacks.
    pub fn tiles_in_play(&self) -> usize {
        self.table.size() + self.table.reservoir_count() + self.draw_pool.remaining()
    }

    pub fn tiles(&self) -> &TilePool {
        &self.tiles
    }

    pub fn table(&self) -> &DisplayArea {
        &self.table
    }

    pub fn draw_pool(&self) -> &DrawPool {
        &self.draw_pool
    }

    pub fn players(&self) -> PlayerCount {
        self.players
    }

    pub fn turn(&self) -> usize {
        self.turn
    }
}

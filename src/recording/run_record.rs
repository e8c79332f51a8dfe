//! Data structures for run records.

use crate::game::display_area::RefillReport;
use crate::game::player_count::PlayerCount;
use crate::game::supply::ShuffleMode;
use crate::simulation::SimulationSummary;
use serde::{Deserialize, Serialize};

/// Record of a single turn, taken after the table was refilled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: usize,
    /// Id of the free tile taken this turn
    pub taken: Option<String>,
    pub refill: RefillReport,
    /// Visible tile ids, cheapest first
    pub visible: Vec<String>,
    pub reservoir_remaining: usize,
    pub stack_tiles_remaining: usize,
}

/// Complete record of one run, from the initial partition to the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub player_count: PlayerCount,
    pub shuffle: ShuffleMode,
    /// Tile ids of each stack, in construction order
    pub stacks: Vec<Vec<String>>,
    pub initial_reservoir: Vec<String>,
    pub turns: Vec<TurnRecord>,
    pub summary: Option<SimulationSummary>,
}

impl SimulationRecord {
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }

    /// Ids of the taken tiles in turn order.
    pub fn taken_ids(&self) -> Vec<&str> {
        self.turns
            .iter()
            .filter_map(|t| t.taken.as_deref())
            .collect()
    }
}

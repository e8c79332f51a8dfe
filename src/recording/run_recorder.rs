//! Builds a [`SimulationRecord`] while a simulation plays.

use crate::game::supply::{ShuffleMode, Supply};
use crate::recording::run_record::{SimulationRecord, TurnRecord};
use crate::simulation::{Simulation, SimulationSummary, TurnOutcome};

pub struct RunRecorder {
    record: SimulationRecord,
}

impl RunRecorder {
    /// Starts a record from the supply as built, before the table is filled.
    pub fn start(supply: &Supply, shuffle: ShuffleMode) -> Self {
        let stacks = supply
            .draw_pool
            .stacks()
            .iter()
            .map(|stack| supply.tiles.ids(stack.tiles()))
            .collect();
        let record = SimulationRecord {
            player_count: supply.players,
            shuffle,
            stacks,
            initial_reservoir: supply.tiles.ids(&supply.reservoir),
            turns: Vec::new(),
            summary: None,
        };
        Self { record }
    }

    pub fn record_turn(&mut self, simulation: &Simulation, outcome: &TurnOutcome) {
        let tiles = simulation.tiles();
        let table = simulation.table();
        self.record.turns.push(TurnRecord {
            turn: outcome.turn,
            taken: outcome.taken.map(|index| tiles[index].id.clone()),
            refill: outcome.refill,
            visible: tiles.ids(table.visible()),
            reservoir_remaining: table.reservoir_count(),
            stack_tiles_remaining: simulation.draw_pool().remaining(),
        });
    }

    pub fn finish(mut self, summary: SimulationSummary) -> SimulationRecord {
        log::debug!("recorded {} turns", self.record.turns.len());
        self.record.summary = Some(summary);
        self.record
    }
}

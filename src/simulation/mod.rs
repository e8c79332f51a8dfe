//! The turn loop driving a supply until no tile is left anywhere.

pub mod runner;

pub use runner::{Simulation, SimulationSummary, TurnOutcome};

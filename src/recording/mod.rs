//! Run recording.
//!
//! Captures a whole simulation as plain data (tile ids rather than handles)
//! so it can be inspected or replayed outside the process.
//!
//! # Components
//!
//! - `run_record`: Data structures for run records
//! - `run_recorder`: Builds a record while a simulation plays
//! - `json_writer`: JSON persistence

pub mod json_writer;
pub mod run_record;
pub mod run_recorder;

pub use json_writer::{load_record, save_record};
pub use run_record::{SimulationRecord, TurnRecord};
pub use run_recorder::RunRecorder;

//! # Akropolis Supply
//!
//! Tile supply engine for an Akropolis-style board game.
//!
//! ## Features
//!
//! - **Supply Builder**: filters the tile box by player count, shuffles it and
//!   deals it into eleven hidden draw stacks plus a reservoir
//! - **Draw Pool**: the stacks, drawn in construction order
//! - **Table**: the visible row of tiles whose cost is their position, and the
//!   refill policy pulling from the reservoir, then the stacks
//! - **Simulation**: automatic play taking the free tile every turn
//! - **Recording**: JSON capture of a whole run
//!
//! ## Usage
//!
//! ```rust
//! use akropolis_supply::{game::{ShuffleMode, Supply}, simulation::Simulation};
//!
//! let supply = Supply::build(3, ShuffleMode::Seeded(2025)).unwrap();
//! let summary = Simulation::new(supply).run(|_, _| {});
//! assert_eq!(summary.tiles_taken, 49);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Tiles, stacks, draw pool, table and supply builder
pub mod game;

/// Turn loop driving a supply to exhaustion
pub mod simulation;

/// Serializable run records
pub mod recording;

/// Console prompt and turn rendering
pub mod console;

/// Logger bootstrap
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::*;

pub use simulation::{Simulation, SimulationSummary, TurnOutcome};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the supply library
#[derive(Debug, thiserror::Error)]
pub enum SupplyError {
    #[error("Invalid player count {0}: expected 2 to 4")]
    InvalidPlayerCount(u8),

    #[error("Invalid tile {id}: minimum player count {min_players} outside 2 to 4")]
    InvalidTile { id: String, min_players: u8 },

    #[error("Duplicate tile id: {0}")]
    DuplicateTileId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SupplyError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

use serde::{Deserialize, Serialize};
use std::fmt;

/// A drawable tile: a unique label plus the smallest player count it is used with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub min_players: u8,
}

impl Tile {
    pub fn new(id: impl Into<String>, min_players: u8) -> Self {
        Self {
            id: id.into(),
            min_players,
        }
    }

    /// Whether the tile is part of a game with `players` players.
    pub fn is_eligible(&self, players: u8) -> bool {
        self.min_players <= players
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (min players: {})", self.id, self.min_players)
    }
}

/// Non-owning handle to a tile held by a [`TilePool`](crate::game::tile_pool::TilePool).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileIndex(pub(crate) usize);

impl TileIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

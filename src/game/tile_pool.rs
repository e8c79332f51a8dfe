use crate::game::player_count::{MAX_PLAYERS, MIN_PLAYERS};
use crate::game::tile::{Tile, TileIndex};
use crate::{Result, SupplyError};
use std::collections::HashSet;
use std::ops::Index;

/// Number of tiles in the standard box, per minimum player count.
pub const TWO_PLAYER_TILES: usize = 37;
pub const THREE_PLAYER_TILES: usize = 12;
pub const FOUR_PLAYER_TILES: usize = 12;

/// Owner of every tile of a run. Never mutated once built, so the
/// [`TileIndex`] handles it gives out stay valid for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePool {
    tiles: Vec<Tile>,
}

impl TilePool {
    /// The 61-tile catalogue: `T2_01..T2_37`, `T3_01..T3_12`, `T4_01..T4_12`.
    pub fn standard() -> Self {
        let mut tiles =
            Vec::with_capacity(TWO_PLAYER_TILES + THREE_PLAYER_TILES + FOUR_PLAYER_TILES);
        for (min_players, count) in [
            (2, TWO_PLAYER_TILES),
            (3, THREE_PLAYER_TILES),
            (4, FOUR_PLAYER_TILES),
        ] {
            tiles.extend((1..=count).map(|n| new_tile(min_players, n)));
        }
        Self { tiles }
    }

    /// Builds a pool from a custom catalogue, rejecting thresholds outside the
    /// supported player range and repeated ids.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tiles.len());
        for tile in &tiles {
            if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&tile.min_players) {
                return Err(SupplyError::InvalidTile {
                    id: tile.id.clone(),
                    min_players: tile.min_players,
                });
            }
            if !seen.insert(tile.id.as_str()) {
                return Err(SupplyError::DuplicateTileId(tile.id.clone()));
            }
        }
        Ok(Self { tiles })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: TileIndex) -> Option<&Tile> {
        self.tiles.get(index.0)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Handles of the tiles used with `players` players, in catalogue order.
    pub fn eligible(&self, players: u8) -> Vec<TileIndex> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_eligible(players))
            .map(|(i, _)| TileIndex(i))
            .collect()
    }

    /// Ids of the given handles, in order.
    pub fn ids<'i>(&self, indices: impl IntoIterator<Item = &'i TileIndex>) -> Vec<String> {
        indices.into_iter().map(|&i| self[i].id.clone()).collect()
    }
}

impl Index<TileIndex> for TilePool {
    type Output = Tile;

    fn index(&self, index: TileIndex) -> &Tile {
        &self.tiles[index.0]
    }
}

fn new_tile(min_players: u8, n: usize) -> Tile {
    Tile::new(format!("T{}_{:02}", min_players, n), min_players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_standard_pool_composition() {
        let pool = TilePool::standard();

        assert_eq!(pool.len(), 61, "The standard box holds 61 tiles, found {}", pool.len());
        let count = |m: u8| pool.tiles().iter().filter(|t| t.min_players == m).count();
        assert_eq!(count(2), 37);
        assert_eq!(count(3), 12);
        assert_eq!(count(4), 12);

        assert_eq!(pool.tiles()[0].id, "T2_01");
        assert_eq!(pool.tiles()[36].id, "T2_37");
        assert_eq!(pool.tiles()[37].id, "T3_01");
        assert_eq!(pool.tiles()[60].id, "T4_12");
    }

    #[test]
    fn test_standard_pool_ids_are_unique() {
        let pool = TilePool::standard();
        let ids: HashSet<&str> = pool.tiles().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), pool.len());
    }

    #[test]
    fn test_eligible_counts_per_player_count() {
        let pool = TilePool::standard();

        assert_eq!(pool.eligible(2).len(), 37);
        assert_eq!(pool.eligible(3).len(), 49);
        assert_eq!(pool.eligible(4).len(), 61);
    }

    #[test]
    fn test_eligible_keeps_catalogue_order() {
        let pool = TilePool::standard();
        let eligible = pool.eligible(3);

        assert!(eligible.windows(2).all(|w| w[0] < w[1]));
        assert!(eligible.iter().all(|&i| pool[i].min_players <= 3));
    }

    #[test]
    fn test_from_tiles_rejects_bad_threshold() {
        let result = TilePool::from_tiles(vec![Tile::new("A", 2), Tile::new("B", 5)]);
        assert_matches!(result, Err(SupplyError::InvalidTile { ref id, min_players: 5 }) if id == "B");
    }

    #[test]
    fn test_from_tiles_rejects_duplicate_id() {
        let result = TilePool::from_tiles(vec![Tile::new("A", 2), Tile::new("A", 3)]);
        assert_matches!(result, Err(SupplyError::DuplicateTileId(id)) if id == "A");
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let pool = TilePool::standard();
        assert!(pool.get(TileIndex(61)).is_none());
        assert_eq!(pool.get(TileIndex(0)).map(|t| t.id.as_str()), Some("T2_01"));
    }
}

use crate::game::display_area::DisplayArea;
use crate::game::draw_pool::DrawPool;
use crate::game::player_count::{PlayerCount, STACK_COUNT};
use crate::game::stack::Stack;
use crate::game::tile::TileIndex;
use crate::game::tile_pool::TilePool;
use crate::Result;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How the eligible tiles are ordered before they are split into stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "seed", rename_all = "snake_case")]
pub enum ShuffleMode {
    /// Uniform shuffle seeded from the OS.
    Entropy,
    /// Uniform shuffle, reproducible from the seed.
    Seeded(u64),
    /// Keep catalogue order.
    Identity,
}

/// Everything set up before the first turn: the tile pool, the stacks
/// registered with the draw pool, and the leftovers that seed the table.
#[derive(Debug, Clone)]
pub struct Supply {
    pub tiles: TilePool,
    pub players: PlayerCount,
    pub draw_pool: DrawPool,
    pub reservoir: Vec<TileIndex>,
}

impl Supply {
    /// Builds the supply from the standard 61-tile box.
    pub fn build(players: u8, mode: ShuffleMode) -> Result<Self> {
        Self::build_from_pool(TilePool::standard(), players, mode)
    }

    pub fn build_from_pool(tiles: TilePool, players: u8, mode: ShuffleMode) -> Result<Self> {
        let players = PlayerCount::new(players)?;
        let supply = match mode {
            ShuffleMode::Entropy => {
                Self::build_with_rng(tiles, players, &mut rand::make_rng::<StdRng>())
            }
            ShuffleMode::Seeded(seed) => {
                Self::build_with_rng(tiles, players, &mut StdRng::seed_from_u64(seed))
            }
            ShuffleMode::Identity => {
                let eligible = tiles.eligible(players.get());
                Self::partition(tiles, players, eligible)
            }
        };
        Ok(supply)
    }

    /// Filters `tiles` for `players`, shuffles with `rng` and partitions.
    pub fn build_with_rng<R: Rng + ?Sized>(
        tiles: TilePool,
        players: PlayerCount,
        rng: &mut R,
    ) -> Self {
        let mut eligible = tiles.eligible(players.get());
        eligible.shuffle(rng);
        Self::partition(tiles, players, eligible)
    }

    // Stacks are filled one after the other; a stack only starts once the
    // previous one holds `stack_size` tiles.
    fn partition(tiles: TilePool, players: PlayerCount, eligible: Vec<TileIndex>) -> Self {
        let eligible_count = eligible.len();
        let stack_size = players.stack_size();
        let mut remaining = eligible.into_iter();

        let mut draw_pool = DrawPool::new();
        for _ in 0..STACK_COUNT {
            let mut stack = Stack::new(stack_size);
            for tile in remaining.by_ref().take(stack_size) {
                stack.push(tile);
            }
            draw_pool.add_stack(stack);
        }
        let reservoir: Vec<TileIndex> = remaining.collect();

        debug!(
            "built supply for {} players: {} eligible tiles, {} stacks of {}, {} in reservoir",
            players,
            eligible_count,
            draw_pool.len(),
            stack_size,
            reservoir.len()
        );

        Self {
            tiles,
            players,
            draw_pool,
            reservoir,
        }
    }

    /// Tiles handed out to the stacks and the reservoir.
    pub fn distributed(&self) -> usize {
        self.draw_pool.remaining() + self.reservoir.len()
    }

    /// Splits the supply into the pieces a run works with, the table being
    /// filled from the reservoir.
    pub fn into_parts(self) -> (TilePool, DrawPool, DisplayArea) {
        let table = DisplayArea::new(self.players, self.reservoir);
        (self.tiles, self.draw_pool, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::Tile;
    use crate::SupplyError;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    fn ids(supply: &Supply, tiles: &[TileIndex]) -> Vec<String> {
        supply.tiles.ids(tiles)
    }

    #[test]
    fn test_identity_build_for_two_players() {
        let supply = Supply::build(2, ShuffleMode::Identity).unwrap();

        assert_eq!(supply.draw_pool.len(), STACK_COUNT);
        let stacks = supply.draw_pool.stacks();
        assert_eq!(ids(&supply, stacks[0].tiles()), ["T2_01", "T2_02", "T2_03"]);
        assert_eq!(ids(&supply, stacks[1].tiles()), ["T2_04", "T2_05", "T2_06"]);
        assert_eq!(ids(&supply, stacks[10].tiles()), ["T2_31", "T2_32", "T2_33"]);
        assert_eq!(
            ids(&supply, &supply.reservoir),
            ["T2_34", "T2_35", "T2_36", "T2_37"]
        );
    }

    #[test]
    fn test_distributed_matches_eligible_count() {
        for (players, eligible) in [(2, 37), (3, 49), (4, 61)] {
            let supply = Supply::build(players, ShuffleMode::Seeded(7)).unwrap();
            assert_eq!(
                supply.distributed(),
                eligible,
                "All eligible tiles must be distributed for {} players",
                players
            );
            let stacked: usize = supply.draw_pool.stacks().iter().map(|s| s.len()).sum();
            assert_eq!(stacked, STACK_COUNT * (usize::from(players) + 1));
        }
    }

    #[test]
    fn test_no_ineligible_or_duplicate_tile() {
        for players in 2..=4 {
            let supply = Supply::build(players, ShuffleMode::Seeded(42)).unwrap();
            let mut seen = HashSet::new();
            let all = supply
                .draw_pool
                .stacks()
                .iter()
                .flat_map(|s| s.tiles().iter())
                .chain(supply.reservoir.iter());
            for &index in all {
                assert!(seen.insert(index), "Tile {:?} handed out twice", index);
                assert!(supply.tiles[index].min_players <= players);
            }
        }
    }

    #[test]
    fn test_stack_sizes_bounded() {
        let supply = Supply::build(4, ShuffleMode::Entropy).unwrap();
        for stack in supply.draw_pool.stacks() {
            assert!(stack.len() <= 5);
            assert_eq!(stack.capacity(), 5);
        }
    }

    #[test]
    fn test_same_seed_same_partition() {
        let a = Supply::build(3, ShuffleMode::Seeded(2025)).unwrap();
        let b = Supply::build(3, ShuffleMode::Seeded(2025)).unwrap();

        assert_eq!(a.draw_pool, b.draw_pool);
        assert_eq!(a.reservoir, b.reservoir);
    }

    #[test]
    fn test_shuffle_changes_order() {
        let identity = Supply::build(4, ShuffleMode::Identity).unwrap();
        let shuffled = Supply::build(4, ShuffleMode::Seeded(1)).unwrap();
        assert_ne!(identity.draw_pool, shuffled.draw_pool);
    }

    #[test]
    fn test_short_pool_leaves_trailing_stacks_empty() {
        let tiles = TilePool::from_tiles(
            (1..=5).map(|n| Tile::new(format!("X{}", n), 2)).collect(),
        )
        .unwrap();

        let supply = Supply::build_from_pool(tiles, 2, ShuffleMode::Identity).unwrap();
        let lens: Vec<usize> = supply.draw_pool.stacks().iter().map(|s| s.len()).collect();

        assert_eq!(lens, [3, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(supply.reservoir.is_empty());
    }

    #[test]
    fn test_invalid_player_count_rejected() {
        assert_matches!(
            Supply::build(1, ShuffleMode::Identity),
            Err(SupplyError::InvalidPlayerCount(1))
        );
        assert_matches!(
            Supply::build(5, ShuffleMode::Seeded(3)),
            Err(SupplyError::InvalidPlayerCount(5))
        );
    }

    #[test]
    fn test_into_parts_fills_table_from_reservoir() {
        let (tiles, pool, table) = Supply::build(2, ShuffleMode::Identity).unwrap().into_parts();

        assert_eq!(table.capacity(), 4);
        assert_eq!(
            tiles.ids(table.visible()),
            ["T2_34", "T2_35", "T2_36", "T2_37"]
        );
        assert_eq!(table.reservoir_count(), 0);
        assert_eq!(pool.remaining(), 33);
    }
}

use crate::{Result, SupplyError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 4;

/// Number of draw stacks set aside at build time, whatever the player count.
pub const STACK_COUNT: usize = 11;

/// A player count the supply can be built for (2 to 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerCount(u8);

impl PlayerCount {
    pub fn new(players: u8) -> Result<Self> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            Ok(Self(players))
        } else {
            Err(SupplyError::InvalidPlayerCount(players))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Tiles per draw stack.
    pub fn stack_size(self) -> usize {
        usize::from(self.0) + 1
    }

    /// Visible slots on the table.
    pub fn table_capacity(self) -> usize {
        usize::from(self.0) + 2
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = SupplyError;

    fn try_from(players: u8) -> Result<Self> {
        Self::new(players)
    }
}

impl From<PlayerCount> for u8 {
    fn from(count: PlayerCount) -> u8 {
        count.0
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_valid_player_counts() {
        for players in 2..=4 {
            let count = PlayerCount::new(players).unwrap();
            assert_eq!(count.get(), players);
            assert_eq!(count.stack_size(), usize::from(players) + 1);
            assert_eq!(count.table_capacity(), usize::from(players) + 2);
        }
    }

    #[test]
    fn test_out_of_range_player_counts() {
        for players in [0, 1, 5, 255] {
            assert_matches!(
                PlayerCount::try_from(players),
                Err(SupplyError::InvalidPlayerCount(p)) if p == players
            );
        }
    }

    #[test]
    fn test_serde_rejects_invalid_count() {
        assert!(serde_json::from_str::<PlayerCount>("3").is_ok());
        assert!(serde_json::from_str::<PlayerCount>("7").is_err());
    }
}

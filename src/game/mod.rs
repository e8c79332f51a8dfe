pub mod display_area;
pub mod draw_pool;
pub mod player_count;
pub mod stack;
pub mod supply;
pub mod tile;
pub mod tile_pool;

pub use display_area::{DisplayArea, RefillKind, RefillReport, TableState, TableView};
pub use draw_pool::DrawPool;
pub use player_count::{PlayerCount, MAX_PLAYERS, MIN_PLAYERS, STACK_COUNT};
pub use stack::Stack;
pub use supply::{ShuffleMode, Supply};
pub use tile::{Tile, TileIndex};
pub use tile_pool::TilePool;

//! The flip-capture game itself: grid, capture resolution and turn sequencing.

pub use board::{FlipBoard, LevelSettings, State, DEFAULT_SIZE};
pub use grid::{Grid, Group, Score, TileSet};
pub use io::{player_symbol, InvalidFen, InvalidTile};
pub use tile::{Direction, FlatTile, Tile};

/// The largest supported board size.
pub const MAX_SIZE: u8 = 25;

mod board;
mod grid;
mod io;
mod tile;

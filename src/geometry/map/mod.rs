// This interior module is private; we reexport its contents.
#[allow(clippy::module_inception)]
mod map;

pub mod tile;

pub use map::{tile_count, Map, MapError};
pub use tile::{tile_color, Color, Tile, TileType};

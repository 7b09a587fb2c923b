pub mod hex;
pub mod layout;
pub mod map;
pub mod point;

pub use hex::{Direction, FractionalHex, Hex, InvalidCoordinate};
pub use layout::{Layout, Orientation};
pub use map::{tile, Map, MapError};
pub use point::Point;

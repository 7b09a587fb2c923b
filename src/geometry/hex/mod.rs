//! Hexagonal geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod coordinate;
pub mod direction;
pub mod fractional;

pub use coordinate::{Hex, InvalidCoordinate, ParseHexError};
pub use direction::Direction;
pub use fractional::FractionalHex;

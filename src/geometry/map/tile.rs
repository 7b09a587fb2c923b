use crate::geometry::Hex;
use serde::{Deserialize, Serialize};

/// An RGBA display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: u8::MAX }
    }

    /// Shown for anything which has no color of its own.
    pub const LIGHT_GRAY: Color = Color::opaque(200, 200, 200);
}

/// Terrain of a single tile.
///
/// The discriminant doubles as an index into external color or texture tables.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TileType {
    #[default]
    Grass = 0,
    Water = 1,
    Rocks = 2,
    Sand = 3,
    Forest = 4,
}

impl TileType {
    pub const COUNT: usize = 5;

    /// All tile types, in ordinal order.
    pub const ALL: [TileType; TileType::COUNT] = [
        TileType::Grass,
        TileType::Water,
        TileType::Rocks,
        TileType::Sand,
        TileType::Forest,
    ];

    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Single character used when printing a map.
    pub fn symbol(self) -> char {
        match self {
            TileType::Grass => '.',
            TileType::Water => '~',
            TileType::Rocks => '#',
            TileType::Sand => ':',
            TileType::Forest => 'T',
        }
    }

    /// Can units move across this terrain?
    pub fn is_walkable(self) -> bool {
        !matches!(self, TileType::Water | TileType::Rocks)
    }

    /// The following tile type, wrapping after the last.
    pub fn next(self) -> TileType {
        TileType::ALL[(self.ordinal() as usize + 1) % TileType::COUNT]
    }

    pub fn color(self) -> Color {
        match self {
            // forest green
            TileType::Grass => Color::opaque(34, 139, 34),
            // dodger blue
            TileType::Water => Color::opaque(30, 144, 255),
            TileType::Rocks => Color::opaque(128, 128, 128),
            // sandy brown
            TileType::Sand => Color::opaque(244, 164, 96),
            // dark green
            TileType::Forest => Color::opaque(0, 100, 0),
        }
    }
}

impl TryFrom<u8> for TileType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TileType::ALL.get(value as usize).copied().ok_or(())
    }
}

impl From<TileType> for u8 {
    fn from(tile_type: TileType) -> u8 {
        tile_type.ordinal()
    }
}

/// Display color for a raw tile type ordinal.
///
/// Ordinals which do not name a [`TileType`] get [`Color::LIGHT_GRAY`].
pub fn tile_color(ordinal: u8) -> Color {
    TileType::try_from(ordinal)
        .map(TileType::color)
        .unwrap_or(Color::LIGHT_GRAY)
}

/// A single cell of a [`Map`][crate::geometry::Map].
///
/// Only the map can change a tile, so walkability always follows the tile type and
/// selection stays exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    position: Hex,
    tile_type: TileType,
    walkable: bool,
    selected: bool,
}

impl Tile {
    pub(crate) fn new(position: Hex) -> Tile {
        let tile_type = TileType::default();
        Tile {
            position,
            tile_type,
            walkable: tile_type.is_walkable(),
            selected: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Hex {
        self.position
    }

    #[inline]
    pub fn tile_type(&self) -> TileType {
        self.tile_type
    }

    #[inline]
    pub fn is_walkable(&self) -> bool {
        self.walkable
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn color(&self) -> Color {
        self.tile_type.color()
    }

    pub(crate) fn set_tile_type(&mut self, tile_type: TileType) {
        self.tile_type = tile_type;
        self.walkable = tile_type.is_walkable();
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

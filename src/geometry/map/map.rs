use super::tile::{Tile, TileType};
use crate::geometry::{Hex, Layout, Orientation, Point};
use itertools::Itertools;
use std::{
    collections::{HashMap, TryReserveError},
    fmt,
};

/// Number of tiles in a hexagonal map of the given radius: `3r² + 3r + 1`.
///
/// `None` if that does not fit in a `usize`.
pub fn tile_count(radius: u32) -> Option<usize> {
    let radius = usize::try_from(radius).ok()?;
    radius
        .checked_mul(radius)?
        .checked_add(radius)?
        .checked_mul(3)?
        .checked_add(1)
}

/// A Map owns every tile of a filled hexagon of hexes centered on [`Hex::ORIGIN`].
///
/// The set of tiles is fixed when the map is created: there is exactly one tile
/// for each hex within `radius` steps of the origin. Tiles can only be changed
/// through the map, which keeps each tile's walkability in line with its terrain
/// and keeps at most one tile selected.
///
/// `center` and `hex_size` record the pixel geometry the map was built for; see
/// [`Map::layout`].
///
/// ## Entry Points
///
/// - [`Map::new`] builds an all-grass map.
/// - [`Config::build_map`][crate::config::Config::build_map] builds one from configuration.
#[derive(Clone)]
pub struct Map {
    tiles: Vec<Tile>,
    index: HashMap<Hex, usize>,
    center: Point,
    hex_size: Point,
    radius: u32,
    selected: Option<usize>,
}

impl Map {
    /// Create a map of grass tiles within `radius` of the origin.
    ///
    /// Tiles are stored in order of `q` ascending, then `r` ascending.
    pub fn new(center: Point, hex_size: Point, radius: u32) -> Result<Map, MapError> {
        if i32::try_from(radius).is_err() {
            return Err(MapError::RadiusTooLarge(radius));
        }
        let count = tile_count(radius).ok_or(MapError::RadiusTooLarge(radius))?;

        let mut tiles: Vec<Tile> = Vec::new();
        tiles.try_reserve_exact(count)?;
        let mut index: HashMap<Hex, usize> = HashMap::new();
        index.try_reserve(count)?;

        for position in Hex::ORIGIN.range(radius) {
            index.insert(position, tiles.len());
            tiles.push(Tile::new(position));
        }
        debug_assert_eq!(tiles.len(), count);

        log::debug!(
            "created hex map: radius {}, {} tiles, center {:?}, hex size {:?}",
            radius,
            tiles.len(),
            center,
            hex_size,
        );

        Ok(Map {
            tiles,
            index,
            center,
            hex_size,
            radius,
            selected: None,
        })
    }

    /// Release this map and all of its tiles.
    ///
    /// Dropping the map does the same; this exists for callers which want the
    /// end of the map's life to be explicit.
    pub fn destroy(self) {
        log::debug!(
            "destroying hex map: radius {}, {} tiles",
            self.radius,
            self.tiles.len()
        );
    }

    /// Number of tiles in this map.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Never true for a map built by [`Map::new`]; radius 0 still has one tile.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Pixel position of the origin hex.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn hex_size(&self) -> Point {
        self.hex_size
    }

    /// A layout placing this map's origin hex at its center, with its hex size.
    pub fn layout(&self, orientation: Orientation) -> Layout {
        Layout::new(orientation, self.hex_size, self.center)
    }

    /// The tiles of this map, in creation order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate over the tiles of this map, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Iterate over the positions of this map without depending on the lifetime of `self`.
    pub fn positions(&self) -> impl Iterator<Item = Hex> {
        Hex::ORIGIN.range(self.radius)
    }

    /// `true` when a hex is within this map.
    #[inline]
    pub fn contains(&self, position: Hex) -> bool {
        self.index.contains_key(&position)
    }

    fn index_of(&self, position: Hex) -> Option<usize> {
        let idx = self.index.get(&position).copied();
        if idx.is_none() {
            log::trace!("no tile at {}", position);
        }
        idx
    }

    /// The tile at a position, if that position is within the map.
    pub fn tile_at(&self, position: Hex) -> Option<&Tile> {
        self.index_of(position).map(|idx| &self.tiles[idx])
    }

    /// As [`Map::tile_at`], but a missing tile is an error.
    pub fn try_tile_at(&self, position: Hex) -> Result<&Tile, MapError> {
        self.tile_at(position)
            .ok_or(MapError::TileNotFound(position))
    }

    /// The tile under a pixel.
    ///
    /// `None` if the pixel is outside the map, or has no position in hex space at all.
    pub fn tile_at_pixel(&self, layout: &Layout, point: Point) -> Option<&Tile> {
        match layout.pixel_to_hex(point) {
            Ok(position) => self.tile_at(position),
            Err(err) => {
                log::trace!("no hex under {:?}: {}", point, err);
                None
            }
        }
    }

    /// Change the terrain of a tile; its walkability follows.
    ///
    /// Returns `false`, changing nothing, if the position is outside the map.
    pub fn set_tile_type(&mut self, position: Hex, tile_type: TileType) -> bool {
        match self.index_of(position) {
            Some(idx) => {
                self.tiles[idx].set_tile_type(tile_type);
                true
            }
            None => false,
        }
    }

    /// Advance a tile to the next terrain type, wrapping after the last.
    ///
    /// Returns the new terrain, or `None` if the position is outside the map.
    pub fn cycle_tile_type(&mut self, position: Hex) -> Option<TileType> {
        let idx = self.index_of(position)?;
        let tile_type = self.tiles[idx].tile_type().next();
        self.tiles[idx].set_tile_type(tile_type);
        Some(tile_type)
    }

    /// Select or deselect a tile.
    ///
    /// Selecting a tile first deselects whichever tile was selected, even if the
    /// position turns out to be outside the map. Deselecting only touches the
    /// given tile.
    ///
    /// Returns `false` if the position is outside the map.
    pub fn set_tile_selected(&mut self, position: Hex, selected: bool) -> bool {
        if selected {
            if let Some(previous) = self.selected.take() {
                self.tiles[previous].set_selected(false);
            }
        }

        let Some(idx) = self.index_of(position) else {
            return false;
        };

        self.tiles[idx].set_selected(selected);
        if selected {
            self.selected = Some(idx);
        } else if self.selected == Some(idx) {
            self.selected = None;
        }
        log::trace!("tile {} selected: {}", position, selected);
        true
    }

    /// The selected tile, if any.
    pub fn selected_tile(&self) -> Option<&Tile> {
        self.selected.map(|idx| &self.tiles[idx])
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("radius", &self.radius)
            .field("center", &self.center)
            .field("hex_size", &self.hex_size)
            .field("selected", &self.selected_tile().map(Tile::position))
            .field("tiles", &format_args!("[...; {}]", self.tiles.len()))
            .finish()
    }
}

impl fmt::Display for Map {
    /// One line per `r`, each indented so the rows mesh like a pointy-top layout.
    ///
    /// Each tile shows as its [`TileType::symbol`]; the selected tile shows as `*`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let radius = self.radius as i32;
        for r in -radius..=radius {
            let row = self
                .tiles
                .iter()
                .filter(|tile| tile.position().r() == r)
                .map(|tile| {
                    if tile.is_selected() {
                        '*'
                    } else {
                        tile.tile_type().symbol()
                    }
                })
                .join(" ");
            writeln!(f, "{:indent$}{}", "", row, indent = r.unsigned_abs() as usize)?;
        }
        Ok(())
    }
}

/// An error which can arise while building or querying a [`Map`].
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("no tile at {0}")]
    TileNotFound(Hex),
    #[error("map radius {0} is too large")]
    RadiusTooLarge(u32),
    #[error("allocating tile storage")]
    Allocation(#[from] TryReserveError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn map(radius: u32) -> Map {
        Map::new(Point::default(), Point::new(24.0, 24.0), radius).unwrap()
    }

    fn hex(q: i32, r: i32, s: i32) -> Hex {
        Hex::new(q, r, s).unwrap()
    }

    fn selected(map: &Map) -> Vec<Hex> {
        map.iter()
            .filter(|tile| tile.is_selected())
            .map(Tile::position)
            .collect()
    }

    #[test]
    fn test_tile_count() {
        assert_eq!(tile_count(0), Some(1));
        assert_eq!(tile_count(1), Some(7));
        assert_eq!(tile_count(2), Some(19));
        assert_eq!(tile_count(5), Some(91));
    }

    #[test]
    fn test_new_is_complete() {
        for radius in 0..8 {
            let map = map(radius);
            assert_eq!(Some(map.len()), tile_count(radius));

            let positions: HashSet<_> = map.iter().map(Tile::position).collect();
            assert_eq!(positions.len(), map.len(), "no duplicate tiles");
            for q in -(radius as i32)..=radius as i32 {
                for r in -(radius as i32)..=radius as i32 {
                    let position = Hex::axial(q, r);
                    let inside = position.length() <= radius as i32;
                    assert_eq!(positions.contains(&position), inside);
                    assert_eq!(map.contains(position), inside);
                }
            }
        }
    }

    #[test]
    fn test_new_defaults() {
        let map = map(3);
        assert!(map.iter().all(|tile| tile.tile_type() == TileType::Grass
            && tile.is_walkable()
            && !tile.is_selected()));
        assert!(map.selected_tile().is_none());
    }

    #[test]
    fn test_creation_order() {
        let map = map(1);
        let positions: Vec<_> = map.iter().map(Tile::position).collect();
        assert_eq!(
            positions,
            vec![
                hex(-1, 0, 1),
                hex(-1, 1, 0),
                hex(0, -1, 1),
                hex(0, 0, 0),
                hex(0, 1, -1),
                hex(1, -1, 0),
                hex(1, 0, -1),
            ]
        );
        assert_eq!(map.positions().collect::<Vec<_>>(), positions);
    }

    #[test]
    fn test_radius_too_large() {
        assert!(matches!(
            Map::new(Point::default(), Point::new(1.0, 1.0), u32::MAX),
            Err(MapError::RadiusTooLarge(u32::MAX))
        ));
    }

    #[test]
    fn test_tile_at() {
        let map = map(2);
        let tile = map.tile_at(hex(1, 1, -2)).unwrap();
        assert_eq!(tile.position(), hex(1, 1, -2));
        assert!(map.tile_at(hex(5, 5, -10)).is_none());
        assert!(matches!(
            map.try_tile_at(hex(3, 0, -3)),
            Err(MapError::TileNotFound(position)) if position == hex(3, 0, -3)
        ));
    }

    #[test]
    fn test_set_tile_type() {
        let mut map = map(2);
        for tile_type in TileType::ALL.iter().copied() {
            assert!(map.set_tile_type(Hex::ORIGIN, tile_type));
            let tile = map.tile_at(Hex::ORIGIN).unwrap();
            assert_eq!(tile.tile_type(), tile_type);
            assert_eq!(tile.is_walkable(), tile_type.is_walkable());
        }

        assert!(!map.set_tile_type(hex(3, -3, 0), TileType::Water));
        assert_eq!(
            map.iter()
                .filter(|tile| tile.tile_type() != TileType::Grass)
                .count(),
            1
        );
    }

    #[test]
    fn test_cycle_tile_type() {
        let mut map = map(1);
        let position = hex(0, 1, -1);
        assert_eq!(map.cycle_tile_type(position), Some(TileType::Water));
        assert!(!map.tile_at(position).unwrap().is_walkable());
        assert_eq!(map.cycle_tile_type(position), Some(TileType::Rocks));
        assert_eq!(map.cycle_tile_type(position), Some(TileType::Sand));
        assert_eq!(map.cycle_tile_type(position), Some(TileType::Forest));
        assert_eq!(map.cycle_tile_type(position), Some(TileType::Grass));
        assert_eq!(map.cycle_tile_type(hex(2, 0, -2)), None);
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut map = map(2);
        assert!(map.set_tile_selected(Hex::ORIGIN, true));
        assert!(map.set_tile_selected(hex(1, -1, 0), true));
        assert_eq!(selected(&map), vec![hex(1, -1, 0)]);
        assert_eq!(map.selected_tile().map(Tile::position), Some(hex(1, -1, 0)));

        // reselecting the same tile keeps it selected
        assert!(map.set_tile_selected(hex(1, -1, 0), true));
        assert_eq!(selected(&map), vec![hex(1, -1, 0)]);
    }

    #[test]
    fn test_select_outside_clears() {
        let mut map = map(2);
        map.set_tile_selected(Hex::ORIGIN, true);
        assert!(!map.set_tile_selected(hex(7, 0, -7), true));
        assert!(selected(&map).is_empty());
        assert!(map.selected_tile().is_none());
    }

    #[test]
    fn test_deselect_only_touches_target() {
        let mut map = map(2);
        map.set_tile_selected(Hex::ORIGIN, true);

        assert!(map.set_tile_selected(hex(0, 1, -1), false));
        assert_eq!(selected(&map), vec![Hex::ORIGIN]);

        assert!(!map.set_tile_selected(hex(9, -9, 0), false));
        assert_eq!(selected(&map), vec![Hex::ORIGIN]);

        assert!(map.set_tile_selected(Hex::ORIGIN, false));
        assert!(selected(&map).is_empty());
        assert!(map.selected_tile().is_none());
    }

    #[test]
    fn test_tile_at_pixel() {
        let map = Map::new(Point::new(400.0, 225.0), Point::new(24.0, 24.0), 5).unwrap();
        let layout = map.layout(Orientation::Pointy);
        assert_eq!(
            map.tile_at_pixel(&layout, Point::new(401.0, 224.0))
                .map(Tile::position),
            Some(Hex::ORIGIN)
        );
        let far = layout.hex_to_pixel(hex(6, 0, -6));
        assert!(map.tile_at_pixel(&layout, far).is_none());
    }

    #[test]
    fn test_tile_at_pixel_rejects_non_finite() {
        let map = Map::new(Point::new(400.0, 225.0), Point::new(24.0, 24.0), 5).unwrap();
        let layout = map.layout(Orientation::Pointy);
        for point in [
            Point::new(f64::NAN, 10.0),
            Point::new(f64::INFINITY, 225.0),
            Point::new(400.0, f64::NEG_INFINITY),
        ] {
            assert!(map.tile_at_pixel(&layout, point).is_none(), "{:?}", point);
        }

        let degenerate = Layout::pointy(Point::new(0.0, 0.0), map.center());
        assert!(map.tile_at_pixel(&degenerate, map.center()).is_none());
    }

    #[test]
    fn test_display() {
        let mut map = map(1);
        map.set_tile_type(hex(-1, 0, 1), TileType::Water);
        map.set_tile_type(hex(1, 0, -1), TileType::Forest);
        map.set_tile_selected(hex(0, 1, -1), true);
        assert_eq!(map.to_string(), " . .\n~ . T\n . *\n");
    }

    #[test]
    fn test_destroy() {
        let map = map(3);
        map.destroy();
    }
}

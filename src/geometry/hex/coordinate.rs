use super::direction::Direction;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

/// Cube hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`. Every constructor upholds it, so the fields are
/// only readable through accessors.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "RawHex", into = "RawHex")]
pub struct Hex {
    q: i32,
    r: i32,
    s: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex { q: 0, r: 0, s: 0 };

    /// Construct a hex from all three cube components.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Hex, InvalidCoordinate> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            return Err(InvalidCoordinate::Cube { q, r, s });
        }
        Ok(Hex { q, r, s })
    }

    /// Construct a hex from axial coordinates; `s` is derived.
    pub const fn axial(q: i32, r: i32) -> Hex {
        Hex { q, r, s: -q - r }
    }

    #[inline]
    pub fn q(self) -> i32 {
        self.q
    }

    #[inline]
    pub fn r(self) -> i32 {
        self.r
    }

    #[inline]
    pub fn s(self) -> i32 {
        self.s
    }

    pub fn scale(self, k: i32) -> Hex {
        Hex::axial(self.q * k, self.r * k)
    }

    /// Number of steps from the origin to this hex.
    pub fn length(self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }

    /// Number of steps between two hexes.
    pub fn distance(self, other: Hex) -> i32 {
        (self - other).length()
    }

    /// Unit vector for an arbitrary direction index; see [`Direction::from_index`].
    pub fn direction(index: i32) -> Hex {
        Direction::from_index(index).to_hex()
    }

    pub fn neighbor(self, direction: Direction) -> Hex {
        self + direction
    }

    /// The six adjacent hexes, in direction order.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = Hex> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// All hexes exactly `radius` steps from this one.
    ///
    /// Starts `radius` steps toward `SouthWest` and proceeds clockwise. A radius of 0
    /// yields only `self`.
    pub fn ring(self, radius: u32) -> impl Iterator<Item = Hex> {
        let radius = radius as i32;
        let start = self + Direction::SouthWest.to_hex().scale(radius);
        let steps = if radius == 0 { 1 } else { 6 * radius };
        let mut position = start;
        (0..steps).map(move |idx| {
            let current = position;
            if radius != 0 {
                // the first leg heads NorthWest so the walk stays on the ring
                let leg = Direction::from_index(idx / radius + Direction::NorthWest as i32);
                position = position + leg;
            }
            current
        })
    }

    /// All hexes within `radius` steps of this one, rings outward from the center.
    pub fn spiral(self, radius: u32) -> impl Iterator<Item = Hex> {
        (0..=radius).flat_map(move |ring| self.ring(ring))
    }

    /// All hexes within `radius` steps of this one.
    ///
    /// Ordered by `q` ascending, then `r` ascending.
    pub fn range(self, radius: u32) -> impl Iterator<Item = Hex> {
        let radius = radius as i32;
        (-radius..=radius).flat_map(move |dq| {
            let low = (-radius).max(-dq - radius);
            let high = radius.min(-dq + radius);
            (low..=high).map(move |dr| self + Hex::axial(dq, dr))
        })
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        Hex::axial(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Add<Direction> for Hex {
    type Output = Hex;

    fn add(self, rhs: Direction) -> Hex {
        self + rhs.to_hex()
    }
}

impl Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        Hex::axial(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, k: i32) -> Hex {
        self.scale(k)
    }
}

impl Neg for Hex {
    type Output = Hex;

    fn neg(self) -> Hex {
        Hex::axial(-self.q, -self.r)
    }
}

impl TryFrom<(i32, i32, i32)> for Hex {
    type Error = InvalidCoordinate;

    fn try_from((q, r, s): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Hex::new(q, r, s)
    }
}

impl From<Hex> for (i32, i32, i32) {
    fn from(hex: Hex) -> Self {
        (hex.q, hex.r, hex.s)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

impl FromStr for Hex {
    type Err = ParseHexError;

    /// Parse the `(q, r, s)` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawHex = s.trim().parse()?;
        Hex::try_from(raw).map_err(Into::into)
    }
}

/// Unvalidated cube components, used for serde and text parsing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, parse_display::FromStr)]
#[from_str(regex = r"\(\s*(?P<q>-?\d+)\s*,\s*(?P<r>-?\d+)\s*,\s*(?P<s>-?\d+)\s*\)")]
struct RawHex {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<RawHex> for Hex {
    type Error = InvalidCoordinate;

    fn try_from(RawHex { q, r, s }: RawHex) -> Result<Self, Self::Error> {
        Hex::new(q, r, s)
    }
}

impl From<Hex> for RawHex {
    fn from(Hex { q, r, s }: Hex) -> Self {
        RawHex { q, r, s }
    }
}

/// A cube coordinate failed the `q + r + s == 0` constraint.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidCoordinate {
    #[error("invalid cube coordinates: q={q}, r={r}, s={s} (sum must be 0)")]
    Cube { q: i32, r: i32, s: i32 },
    #[error("invalid fractional cube coordinates: q={q}, r={r}, s={s} (sum must be 0)")]
    Fractional { q: f64, r: f64, s: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum ParseHexError {
    #[error("hex must be written as \"(q, r, s)\"")]
    Syntax(#[from] parse_display::ParseError),
    #[error(transparent)]
    Invalid(#[from] InvalidCoordinate),
}

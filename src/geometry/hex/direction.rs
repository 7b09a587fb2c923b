use super::coordinate::Hex;

/// Direction in a hexagonal coordinate system.
///
/// Names assume a pointy-top layout with y growing downward. Consecutive variants
/// are adjacent 60° steps, clockwise from `NorthEast`; callers may rely on direction
/// `i` and `(i + 1) % 6` sharing a corner.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("ne")]
    NorthEast,
    #[display("e")]
    East,
    #[display("se")]
    SouthEast,
    #[display("sw")]
    SouthWest,
    #[display("w")]
    West,
    #[display("nw")]
    NorthWest,
}

impl Direction {
    pub const COUNT: usize = 6;

    /// All directions, in index order.
    pub const ALL: [Direction; Direction::COUNT] = [
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Iterate through all `Direction`s, clockwise from `NorthEast`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::NorthEast), |direction| {
            use Direction::*;

            match direction {
                NorthEast => Some(East),
                East => Some(SouthEast),
                SouthEast => Some(SouthWest),
                SouthWest => Some(West),
                West => Some(NorthWest),
                NorthWest => None,
            }
        })
    }

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction for an arbitrary index.
    ///
    /// The index wraps with floored modulo, so `-1` is `NorthWest` and `6` is `NorthEast`.
    /// This never fails.
    pub fn from_index(index: i32) -> Direction {
        Direction::ALL[index.rem_euclid(Direction::COUNT as i32) as usize]
    }

    /// Unit vector of this direction.
    pub fn to_hex(self) -> Hex {
        use Direction::*;

        match self {
            NorthEast => Hex::axial(1, -1),
            East => Hex::axial(1, 0),
            SouthEast => Hex::axial(0, 1),
            SouthWest => Hex::axial(-1, 1),
            West => Hex::axial(-1, 0),
            NorthWest => Hex::axial(0, -1),
        }
    }

    /// Next direction clockwise.
    pub fn clockwise(self) -> Direction {
        Direction::from_index(self as i32 + 1)
    }

    /// Next direction counter-clockwise.
    pub fn counter_clockwise(self) -> Direction {
        Direction::from_index(self as i32 - 1)
    }

    /// The opposite direction.
    pub fn reverse(self) -> Direction {
        Direction::from_index(self as i32 + 3)
    }
}

impl From<Direction> for Hex {
    fn from(direction: Direction) -> Hex {
        direction.to_hex()
    }
}

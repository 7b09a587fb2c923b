//! Conversion between hex space and pixel space.

use super::{
    hex::{FractionalHex, Hex, InvalidCoordinate},
    Point,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Which pair of sides of each hexagon is horizontal.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Flat top and bottom edges; corners point left and right.
    Flat,
    /// Corners point up and down.
    #[default]
    Pointy,
}

/// Basis coefficients for an [`Orientation`].
///
/// `f0..f3` map axial `(q, r)` into unscaled pixel space; `b0..b3` are the inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    /// Angle of corner 0, in multiples of 60°.
    pub start_angle: f64,
}

const FLAT: Matrix = Matrix {
    f0: 3.0 / 2.0,
    f1: 0.0,
    f2: SQRT_3 / 2.0,
    f3: SQRT_3,
    b0: 2.0 / 3.0,
    b1: 0.0,
    b2: -1.0 / 3.0,
    b3: SQRT_3 / 3.0,
    start_angle: 0.0,
};

const POINTY: Matrix = Matrix {
    f0: SQRT_3,
    f1: SQRT_3 / 2.0,
    f2: 0.0,
    f3: 3.0 / 2.0,
    b0: SQRT_3 / 3.0,
    b1: -1.0 / 3.0,
    b2: 0.0,
    b3: 2.0 / 3.0,
    start_angle: 0.5,
};

impl Orientation {
    pub fn matrix(self) -> &'static Matrix {
        match self {
            Orientation::Flat => &FLAT,
            Orientation::Pointy => &POINTY,
        }
    }
}

/// An orientation, hex size and pixel origin.
///
/// `size` is the distance from a hex's center to its corners, independently along
/// each axis; unequal components stretch the grid. `origin` is the pixel position
/// of the center of [`Hex::ORIGIN`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    orientation: Orientation,
    size: Point,
    origin: Point,
}

impl Layout {
    pub fn new(orientation: Orientation, size: Point, origin: Point) -> Layout {
        Layout {
            orientation,
            size,
            origin,
        }
    }

    pub fn flat(size: Point, origin: Point) -> Layout {
        Layout::new(Orientation::Flat, size, origin)
    }

    pub fn pointy(size: Point, origin: Point) -> Layout {
        Layout::new(Orientation::Pointy, size, origin)
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Pixel position of the center of `hex`.
    pub fn hex_to_pixel(&self, hex: Hex) -> Point {
        let m = self.orientation.matrix();
        let (q, r) = (f64::from(hex.q()), f64::from(hex.r()));
        let x = (m.f0 * q + m.f1 * r) * self.size.x;
        let y = (m.f2 * q + m.f3 * r) * self.size.y;
        Point::new(x + self.origin.x, y + self.origin.y)
    }

    /// Fractional cube coordinates of a pixel, before snapping to a hex.
    ///
    /// Non-finite pixels, or a zero hex size, have no position in hex space.
    pub fn pixel_to_fractional_hex(
        &self,
        point: Point,
    ) -> Result<FractionalHex, InvalidCoordinate> {
        let m = self.orientation.matrix();
        let x = (point.x - self.origin.x) / self.size.x;
        let y = (point.y - self.origin.y) / self.size.y;
        FractionalHex::axial(m.b0 * x + m.b1 * y, m.b2 * x + m.b3 * y)
    }

    /// The hex containing a pixel.
    ///
    /// Fails rather than guessing when the pixel has no representable hex.
    pub fn pixel_to_hex(&self, point: Point) -> Result<Hex, InvalidCoordinate> {
        self.pixel_to_fractional_hex(point)?.round()
    }

    /// Offset from a hex's center to one of its corners.
    ///
    /// Corners are numbered from `0`; indices outside `0..6` wrap around.
    pub fn hex_corner_offset(&self, corner: i32) -> Point {
        let start_angle = self.orientation.matrix().start_angle;
        let angle = 2.0 * PI * (start_angle + f64::from(corner)) / 6.0;
        Point::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// The six corners of `hex`, in corner order.
    pub fn polygon_corners(&self, hex: Hex) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        let mut corners = [center; 6];
        for (corner, point) in (0..).zip(corners.iter_mut()) {
            *point += self.hex_corner_offset(corner);
        }
        corners
    }
}

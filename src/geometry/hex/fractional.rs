use super::coordinate::{Hex, InvalidCoordinate};

/// Tolerance for the `q + r + s == 0` constraint on fractional coordinates.
pub const EPSILON: f64 = 1e-4;

/// Cube coordinates which have not yet been snapped to a hex.
///
/// These only exist on the way from pixel space to a [`Hex`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHex {
    /// Every component must be finite, and their sum within [`EPSILON`] of zero.
    pub fn new(q: f64, r: f64, s: f64) -> Result<FractionalHex, InvalidCoordinate> {
        let finite = q.is_finite() && r.is_finite() && s.is_finite();
        if !finite || (q + r + s).abs() > EPSILON {
            return Err(InvalidCoordinate::Fractional { q, r, s });
        }
        Ok(FractionalHex { q, r, s })
    }

    /// Construct from axial coordinates; `s` is derived.
    pub fn axial(q: f64, r: f64) -> Result<FractionalHex, InvalidCoordinate> {
        FractionalHex::new(q, r, -q - r)
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Snap to the nearest hex.
    ///
    /// Each axis is rounded independently; the axis which moved furthest is then
    /// recomputed from the other two. Ties go to `s`, then `r`, never `q`.
    ///
    /// Fails when the nearest hex cannot be represented with `i32` components.
    pub fn round(&self) -> Result<Hex, InvalidCoordinate> {
        let invalid = InvalidCoordinate::Fractional {
            q: self.q,
            r: self.r,
            s: self.s,
        };

        let q = self.q.round();
        let r = self.r.round();
        let s = self.s.round();
        let limit = f64::from(i32::MAX);
        if ![q, r, s].iter().all(|axis| axis.abs() <= limit) {
            return Err(invalid);
        }

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        // within i32 range, so these casts are exact and the sums below cannot overflow
        let (q, r, s) = (q as i64, r as i64, s as i64);
        let (q, r, s) = if q_diff > r_diff && q_diff > s_diff {
            (-r - s, r, s)
        } else if r_diff > s_diff {
            (q, -q - s, s)
        } else {
            (q, r, -q - r)
        };

        match (i32::try_from(q), i32::try_from(r), i32::try_from(s)) {
            (Ok(q), Ok(r), Ok(s)) => Hex::new(q, r, s),
            _ => Err(invalid),
        }
    }

    /// Linear interpolation toward `other`.
    pub fn lerp(&self, other: &FractionalHex, t: f64) -> FractionalHex {
        FractionalHex {
            q: self.q + (other.q - self.q) * t,
            r: self.r + (other.r - self.r) * t,
            s: self.s + (other.s - self.s) * t,
        }
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        FractionalHex {
            q: hex.q().into(),
            r: hex.r().into(),
            s: hex.s().into(),
        }
    }
}

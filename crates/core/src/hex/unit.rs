//! This sub-module contains the [Hex] coordinate type and its arithmetic. See
//! the parent module documentation for more info on the coordinate system.

use crate::error::HexError;
use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::ops;

/// A hex tile, addressed by axial coordinates. Only `q` and `r` are stored;
/// the third cube component `s` is derived as `-q - r`, so every value of this
/// type satisfies `q + r + s = 0` by construction.
///
/// Two hexes are equal iff their `(q, r)` pairs match. Serializes as just the
/// two stored integers.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "Hex({}, {}, {})", q, r, "self.s()")]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 1);

    /// Construct a new hex from its axial coordinates. Since q+r+s=0 for all
    /// hexes, s is derived from q & r.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a hex with both axial coordinates set to the same value
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v)
    }

    /// Construct a new hex from all three cube components. Returns an error if
    /// the components don't fall on the plane `q + r + s = 0`. The input is
    /// never corrected.
    pub fn new_cube(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        if q + r + s != 0 {
            Err(HexError::InvalidCubeCoordinates { q, r, s }.into())
        } else {
            Ok(Self::new(q, r))
        }
    }

    /// The derived third cube component
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Distance from this hex to the origin, in steps. This is the hex-grid
    /// analog of Manhattan distance in cube space.
    pub const fn length(self) -> i32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // IMPORTANT: We divide by 2 here because two adjacent hex centers
        // are always separated by two cube edges
        (self.q.abs() + self.r.abs() + self.s().abs()) / 2
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they are adjacent, 2 if there is 1 hex between them, etc.
    pub fn distance_to(self, other: Self) -> i32 {
        (self - other).length()
    }

    /// Rotate 60 degrees counter-clockwise around the origin:
    /// `(q, r, s) -> (-s, -q, -r)`
    pub const fn rotate_left(self) -> Self {
        Self::new(-self.s(), -self.q)
    }

    /// Rotate 60 degrees clockwise around the origin:
    /// `(q, r, s) -> (-r, -s, -q)`. Inverse of [Self::rotate_left].
    pub const fn rotate_right(self) -> Self {
        Self::new(-self.r, -self.s())
    }

    /// Rotate counter-clockwise by `amount` sixth-turns. The amount is reduced
    /// modulo 6, so 6 is the identity and 3 is a negation.
    pub fn rotate_left_by(self, amount: u32) -> Self {
        match amount % 6 {
            0 => self,
            1 => self.rotate_left(),
            2 => self.rotate_left().rotate_left(),
            3 => -self,
            4 => self.rotate_right().rotate_right(),
            _ => self.rotate_right(),
        }
    }

    /// Rotate clockwise by `amount` sixth-turns. The amount is reduced modulo
    /// 6, so 6 is the identity and 3 is a negation.
    pub fn rotate_right_by(self, amount: u32) -> Self {
        match amount % 6 {
            0 => self,
            1 => self.rotate_right(),
            2 => self.rotate_right().rotate_right(),
            3 => -self,
            4 => self.rotate_left().rotate_left(),
            _ => self.rotate_left(),
        }
    }

    /// Rotate counter-clockwise around some other hex instead of the origin
    pub fn rotate_left_around(self, anchor: Self) -> Self {
        (self - anchor).rotate_left() + anchor
    }

    /// Rotate clockwise around some other hex instead of the origin
    pub fn rotate_right_around(self, anchor: Self) -> Self {
        (self - anchor).rotate_right() + anchor
    }

    /// Linearly interpolate between two hexes, returning the fractional axial
    /// `(q, r)` at parameter `t`. Feed the result to [Self::round] to snap it
    /// back onto the grid.
    pub fn lerp(a: Self, b: Self, t: f64) -> (f64, f64) {
        let lerp = |from: i32, to: i32| {
            let from = f64::from(from);
            from + (f64::from(to) - from) * t
        };
        (lerp(a.q, b.q), lerp(a.r, b.r))
    }

    /// Round a fractional axial coordinate `(x, y)` (standing in for the cube
    /// coordinate `(x, y, -x-y)`) to the nearest hex.
    ///
    /// Both axes are rounded independently, then whichever of the two had the
    /// larger remainder gets corrected so the implied third component
    /// absorbs the rounding error properly. Ties (`x'² == y'²`) correct `q`.
    /// Halves round to even, on both passes.
    pub fn round(x: f64, y: f64) -> Self {
        let (q, r) = (x.round_ties_even(), y.round_ties_even());
        // Remainders
        let (x, y) = (x - q, y - r);
        let (mut q, mut r) = (q as i32, r as i32);
        if x * x >= y * y {
            q += (x + 0.5 * y).round_ties_even() as i32;
        } else {
            r += (y + 0.5 * x).round_ties_even() as i32;
        }
        Self::new(q, r)
    }
}

impl From<(i32, i32)> for Hex {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

impl From<Hex> for (i32, i32) {
    fn from(hex: Hex) -> Self {
        (hex.q, hex.r)
    }
}

impl TryFrom<(i32, i32, i32)> for Hex {
    type Error = anyhow::Error;

    fn try_from((q, r, s): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new_cube(q, r, s)
    }
}

// Component-wise ops against another hex. Add/Sub/Neg are derived; these are
// the ones derive_more can't express without clashing with the scalar forms

impl ops::Mul<Hex> for Hex {
    type Output = Hex;

    fn mul(self, rhs: Hex) -> Self::Output {
        Self::new(self.q * rhs.q, self.r * rhs.r)
    }
}

impl ops::Div<Hex> for Hex {
    type Output = Hex;

    /// Component-wise integer division. Panics if either component of `rhs` is
    /// zero.
    fn div(self, rhs: Hex) -> Self::Output {
        Self::new(self.q / rhs.q, self.r / rhs.r)
    }
}

// Scalar ops, broadcasting the scalar to both axial components

impl ops::Add<i32> for Hex {
    type Output = Hex;

    fn add(self, rhs: i32) -> Self::Output {
        Self::new(self.q + rhs, self.r + rhs)
    }
}

impl ops::Sub<i32> for Hex {
    type Output = Hex;

    fn sub(self, rhs: i32) -> Self::Output {
        Self::new(self.q - rhs, self.r - rhs)
    }
}

impl ops::Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new(self.q * rhs, self.r * rhs)
    }
}

impl ops::Div<i32> for Hex {
    type Output = Hex;

    /// Integer division of both components. Panics if `rhs` is zero.
    fn div(self, rhs: i32) -> Self::Output {
        Self::new(self.q / rhs, self.r / rhs)
    }
}

impl ops::MulAssign<i32> for Hex {
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

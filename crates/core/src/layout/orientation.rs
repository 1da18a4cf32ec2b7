use crate::hex::Direction;
use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::{Display, EnumIter, EnumString};

/// `√3`, which shows up everywhere in hex geometry. `std` only has this as an
/// unstable constant.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The two ways to tessellate the plane with hexagons. This is the
/// serializable tag for an [Orientation].
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrientationKind {
    /// Corners at the top and bottom, flat sides on the left and right
    Pointy,
    /// Corners on the left and right, flat sides at the top and bottom
    Flat,
}

/// The pixel transform for one hex tessellation. Holds the forward matrix
/// (axial -> world), its inverse, and the rotation of the first corner.
///
/// Values are constants; get one with [Orientation::pointy],
/// [Orientation::flat], or by converting an [OrientationKind]. Serializes as
/// just its kind.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrientationKind", into = "OrientationKind")]
pub struct Orientation {
    kind: OrientationKind,
    forward: Matrix2<f64>,
    inverse: Matrix2<f64>,
    start_rotation: f64,
}

impl Orientation {
    /// Pointy-top hexes. Corner 0 sits 30 degrees above the `+x` axis.
    pub fn pointy() -> Self {
        Self {
            kind: OrientationKind::Pointy,
            forward: Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0),
            inverse: Matrix2::new(SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0),
            start_rotation: 0.5,
        }
    }

    /// Flat-top hexes. Corner 0 sits on the `+x` axis.
    pub fn flat() -> Self {
        Self {
            kind: OrientationKind::Flat,
            forward: Matrix2::new(3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3),
            inverse: Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0),
            start_rotation: 0.0,
        }
    }

    pub fn kind(&self) -> OrientationKind {
        self.kind
    }

    /// Matrix that maps axial `(q, r)` onto world space, before scaling by the
    /// layout size
    pub fn forward(&self) -> &Matrix2<f64> {
        &self.forward
    }

    /// Matrix that maps (unscaled) world space back onto fractional axial
    /// coordinates
    pub fn inverse(&self) -> &Matrix2<f64> {
        &self.inverse
    }

    /// Fraction of a sixth-turn that corner 0 is rotated off the `+x` axis
    pub fn start_rotation(&self) -> f64 {
        self.start_rotation
    }

    /// Angle (radians) from a hex center to one of its corners. Corners are
    /// numbered counter-clockwise (in a `y`-up frame); the index wraps at 6.
    pub fn corner_angle(&self, corner: usize) -> f64 {
        2.0 * PI * (self.start_rotation + (corner % 6) as f64) / 6.0
    }

    /// Index of the corner where the side facing `direction` begins, walking
    /// corners in increasing index order. The side ends at the next corner.
    ///
    /// Neighbor directions run the opposite way around a hex from corner
    /// indices, so as the direction index goes up the corner index goes down.
    pub fn edge_start_corner(&self, direction: Direction) -> usize {
        let d = direction.index();
        match self.kind {
            // Side d spans angles -60d-30 to -60d+30; corner i is at 30+60i
            OrientationKind::Pointy => (11 - d) % 6,
            // Side d spans angles -60d to -60d+60; corner i is at 60i
            OrientationKind::Flat => (6 - d) % 6,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::pointy()
    }
}

impl From<OrientationKind> for Orientation {
    fn from(kind: OrientationKind) -> Self {
        match kind {
            OrientationKind::Pointy => Self::pointy(),
            OrientationKind::Flat => Self::flat(),
        }
    }
}

impl From<Orientation> for OrientationKind {
    fn from(orientation: Orientation) -> Self {
        orientation.kind
    }
}

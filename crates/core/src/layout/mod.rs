//! Mapping between hex coordinates and continuous world coordinates. A
//! [Layout] bundles everything that mapping depends on: the tessellation
//! [Orientation], where the hex `(0, 0)` lands, and how big each hex is.
//!
//! World space is `y`-up: corner angles increase counter-clockwise from the
//! `+x` axis. Hosts that render `y`-down just get a mirrored picture.

mod orientation;

pub use self::orientation::*;

use crate::hex::{Direction, Hex, HexSet};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Configuration for placing a hex grid in world space. All fields are public
/// and can be changed at any time; every conversion reads them fresh.
///
/// `size` is the distance between the centers of two adjacent hexes, per
/// axis. Both components should be finite and non-zero. A zero component
/// makes [Layout::world_pos_to_hex] divide by zero, which is a caller error.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub orientation: Orientation,
    pub origin: Point2<f64>,
    pub size: Vector2<f64>,
}

impl Layout {
    pub fn new(
        orientation: Orientation,
        origin: Point2<f64>,
        size: Vector2<f64>,
    ) -> Self {
        Self {
            orientation,
            origin,
            size,
        }
    }

    /// Per-axis scale applied on top of the orientation matrices. The forward
    /// matrices put adjacent centers `√3` apart, so this normalizes them to
    /// `size`.
    fn scale(&self) -> Vector2<f64> {
        self.size / SQRT_3
    }

    /// Get the world position of a hex's center
    pub fn hex_to_world_point(&self, hex: Hex) -> Point2<f64> {
        let axial = Vector2::new(f64::from(hex.q), f64::from(hex.r));
        let unscaled = self.orientation.forward() * axial;
        self.origin + unscaled.component_mul(&self.scale())
    }

    /// Get the hex that contains a world position. Positions exactly on an
    /// edge or corner resolve to one of the touching hexes, using the
    /// tie-breaking of [Hex::round].
    pub fn world_pos_to_hex(&self, point: Point2<f64>) -> Hex {
        let unscaled = (point - self.origin).component_div(&self.scale());
        let axial = self.orientation.inverse() * unscaled;
        Hex::round(axial.x, axial.y)
    }

    /// World position of a single corner of a hex. The index wraps at 6.
    pub fn hex_corner(&self, hex: Hex, corner: usize) -> Point2<f64> {
        let center = self.hex_to_world_point(hex);
        let angle = self.orientation.corner_angle(corner);
        let scale = self.scale();
        center + Vector2::new(scale.x * angle.cos(), scale.y * angle.sin())
    }

    /// World positions of all 6 corners of a hex, in counter-clockwise order
    /// starting from the orientation's first corner
    pub fn hex_corners(&self, hex: Hex) -> [Point2<f64>; 6] {
        let mut corners = [Point2::origin(); 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = self.hex_corner(hex, i);
        }
        corners
    }

    /// Trace the outer boundary of a set of hexes, returning its corners in
    /// polygon order (counter-clockwise). Every boundary corner shows up
    /// once; corners shared by two hexes in the set are not duplicated. A
    /// single hex gives back its own 6 corners. An empty input gives an empty
    /// outline.
    ///
    /// The walk follows the perimeter of the connected region containing the
    /// topmost hex (lowest `r`, then lowest `q`). Hexes in other disconnected
    /// regions, and the edges of any holes, are not included.
    pub fn outline(
        &self,
        hexes: impl IntoIterator<Item = Hex>,
    ) -> Vec<Point2<f64>> {
        let hexes: HexSet = hexes.into_iter().collect();

        // Nothing can sit above the topmost hex, so its top side is always on
        // the outer boundary
        let start_hex = match hexes.iter().min_by_key(|hex| (hex.r, hex.q)) {
            Some(hex) => *hex,
            None => return Vec::new(),
        };
        let start = (start_hex, Direction::Top);

        let mut outline = Vec::new();
        let (mut hex, mut side) = start;
        loop {
            outline.push(
                self.hex_corner(hex, self.orientation.edge_start_corner(side)),
            );

            // The side after this one (in corner order) borders the neighbor
            // one step clockwise. If that neighbor is in the set, the
            // boundary pivots onto it instead.
            let next_side = side.clockwise();
            let neighbor = hex.neighbor(next_side);
            if hexes.contains(&neighbor) {
                hex = neighbor;
                side = side.counter_clockwise();
            } else {
                side = next_side;
            }

            if (hex, side) == start {
                break;
            }
        }
        outline
    }
}

impl Default for Layout {
    /// Pointy hexes centered on the world origin, with unit spacing
    fn default() -> Self {
        Self::new(
            Orientation::pointy(),
            Point2::origin(),
            Vector2::new(1.0, 1.0),
        )
    }
}

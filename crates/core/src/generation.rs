//! Shape builders that enumerate regions of hexes. Every builder is a pure
//! function of its arguments, and the output order is deterministic so it can
//! be used as a stable iteration order for a grid.

use crate::{
    error::ensure_range,
    hex::{Direction, Hex},
};
use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

/// Every hex with `q` in `[min.q, max.q]` and `r` in `[min.r, max.r]`, both
/// inclusive. Iterates `q` in the outer loop. An inverted range on either
/// axis yields nothing.
pub fn parallelogram(min: Hex, max: Hex) -> Vec<Hex> {
    let mut hexes = Vec::new();
    for q in min.q..=max.q {
        for r in min.r..=max.r {
            hexes.push(Hex::new(q, r));
        }
    }
    hexes
}

/// A triangular wedge with its right angle (in axial space) at `origin`.
/// Column `q = origin.q + x` holds `size - x + 1` hexes starting at
/// `origin.r`, so the wedge has `size + 1` columns and shrinks to a single hex
/// at `origin.q + size`. Fails if `size` is negative, or if the triangle has
/// too many hexes to allocate.
pub fn triangle(origin: Hex, size: i32) -> anyhow::Result<Vec<Hex>> {
    ensure_range(size)?;
    let len = triangle_len(size)
        .with_context(|| format!("triangle of size {} is too large", size))?;
    let mut hexes = Vec::new();
    hexes.try_reserve_exact(len)?;
    for x in 0..=size {
        for y in 0..=(size - x) {
            hexes.push(origin + Hex::new(x, y));
        }
    }
    Ok(hexes)
}

/// Number of hexes in a triangle of the given size, or `None` if the size is
/// negative or the count doesn't fit in a `usize`
fn triangle_len(size: i32) -> Option<usize> {
    let columns = usize::try_from(size).ok()?.checked_add(1)?;
    Some(columns.checked_mul(columns.checked_add(1)?)? / 2)
}

/// A hexagonal disk of the given radius around `origin`. This is
/// [Hex::range] under a different name.
pub fn hexagon(origin: Hex, radius: i32) -> anyhow::Result<Vec<Hex>> {
    origin.range(radius)
}

/// A rectangle of pointy-top hexes. Rows run from `top` to `bottom` (`r`) and
/// each row spans `left` to `right` in offset columns. Every other row is
/// shifted by half a hex on screen, so each row's `q` range is pulled back by
/// `r >> 1` to keep the left and right edges straight.
pub fn pointy_rectangle(
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
) -> Vec<Hex> {
    let mut hexes = Vec::new();
    for r in top..=bottom {
        let offset = r >> 1;
        for q in (left - offset)..=(right - offset) {
            hexes.push(Hex::new(q, r));
        }
    }
    hexes
}

/// A rectangle of flat-top hexes. The transpose of [pointy_rectangle]:
/// columns run from `left` to `right` (`q`) and each column's `r` range is
/// pulled back by `q >> 1`.
pub fn flat_rectangle(
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
) -> Vec<Hex> {
    let mut hexes = Vec::new();
    for q in left..=right {
        let offset = q >> 1;
        for r in (top - offset)..=(bottom - offset) {
            hexes.push(Hex::new(q, r));
        }
    }
    hexes
}

fn default_ring_start() -> Direction {
    Direction::BottomLeft
}

/// A serializable description of a region of hexes. Each variant maps onto
/// one of the builder functions in this module (or a traversal on [Hex]).
// Plain values are declared before hexes, since TOML can't have a value after
// a table
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// See [parallelogram]
    Parallelogram { min: Hex, max: Hex },
    /// See [triangle]
    Triangle { size: u16, origin: Hex },
    /// See [hexagon]
    Hexagon { radius: u16, origin: Hex },
    /// See [pointy_rectangle]
    PointyRectangle {
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
    },
    /// See [flat_rectangle]
    FlatRectangle {
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
    },
    /// A single ring. See [Hex::custom_ring]
    Ring {
        radius: u16,
        #[serde(default = "default_ring_start")]
        start: Direction,
        #[serde(default)]
        clockwise: bool,
        center: Hex,
    },
    /// A disk, in ring-by-ring order. See [Hex::custom_spiral_range]
    Spiral {
        radius: u16,
        #[serde(default = "default_ring_start")]
        start: Direction,
        #[serde(default)]
        clockwise: bool,
        center: Hex,
    },
}

impl Shape {
    /// Enumerate the hexes in this shape
    pub fn generate(&self) -> anyhow::Result<Vec<Hex>> {
        let hexes = match *self {
            Self::Parallelogram { min, max } => parallelogram(min, max),
            Self::Triangle { origin, size } => triangle(origin, size.into())?,
            Self::Hexagon { origin, radius } => {
                hexagon(origin, radius.into())?
            }
            Self::PointyRectangle {
                left,
                right,
                top,
                bottom,
            } => pointy_rectangle(left, right, top, bottom),
            Self::FlatRectangle {
                left,
                right,
                top,
                bottom,
            } => flat_rectangle(left, right, top, bottom),
            Self::Ring {
                center,
                radius,
                start,
                clockwise,
            } => center.custom_ring(radius.into(), start, clockwise)?,
            Self::Spiral {
                center,
                radius,
                start,
                clockwise,
            } => center.custom_spiral_range(radius.into(), start, clockwise)?,
        };
        debug!("Generated {} hexes for {:?}", hexes.len(), self);
        Ok(hexes)
    }

    /// The largest extent of this shape along any one axis, in hexes. Used to
    /// bound the amount of work a config can ask for.
    pub fn extent(&self) -> u64 {
        fn span(from: i32, to: i32) -> u64 {
            (i64::from(to) - i64::from(from)).max(0) as u64
        }

        match *self {
            Self::Parallelogram { min, max } => {
                span(min.q, max.q).max(span(min.r, max.r))
            }
            Self::Triangle { size, .. } => size.into(),
            Self::Hexagon { radius, .. }
            | Self::Ring { radius, .. }
            | Self::Spiral { radius, .. } => radius.into(),
            Self::PointyRectangle {
                left,
                right,
                top,
                bottom,
            }
            | Self::FlatRectangle {
                left,
                right,
                top,
                bottom,
            } => span(left, right).max(span(top, bottom)),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::Hexagon {
            origin: Hex::ZERO,
            radius: 5,
        }
    }
}

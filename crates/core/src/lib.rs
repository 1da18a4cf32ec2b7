//! Hextile is a coordinate and geometry library for hexagonal tile grids. It
//! covers the hex coordinate algebra (distance, rotation, neighbors, rings,
//! lines, wraparound), mapping between hexes and world space for both
//! pointy-top and flat-top tilings, and builders for common grid shapes.
//! Rendering is left to the host; this crate only hands out coordinates.
//!
//! ```
//! use hextile::{GridConfig, Hex, HexGrid};
//!
//! let grid = HexGrid::generate(GridConfig::default()).unwrap();
//! assert!(grid.contains(Hex::new(2, -1)));
//! for tile in grid.tiles() {
//!     // Place something at tile.center, draw a polygon through tile.corners
//!     println!("{} at {}", tile.hex, tile.center);
//! }
//! ```
//!
//! See [GridConfig] for details on how a grid can be customized, and the
//! [hex] and [layout] modules for the lower-level building blocks.

mod config;
mod error;
pub mod generation;
mod grid;
pub mod hex;
pub mod layout;
mod util;

pub use crate::{
    config::{GridConfig, MAX_EXTENT},
    error::HexError,
    generation::Shape,
    grid::{HexGrid, Tile},
    hex::{Direction, Hex, HexIndexSet, HexMap, HexSet},
    layout::{Layout, Orientation, OrientationKind},
    util::hexagon_len,
};

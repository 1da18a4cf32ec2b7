//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! Hextile uses two different coordinate systems:
//!
//! ### Hex Coordinates
//!
//! Hex coordinates address whole tiles in the grid. The system we use is the
//! [axial coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial),
//! which is a two-component projection of the cube coordinate system.
//!
//! #### Basic Description
//!
//! Each tile has three cube components (`q`, `r`, and `s`). **For any tile,
//! all three components are integers and `q + r + s = 0`.** Because of that
//! constraint, only `q` and `r` are stored and `s` is always derived. Even
//! though tiles are laid out in two dimensions, the third component makes math
//! around hexagonal grids much simpler: distance is half the Manhattan
//! distance in cube space, and a 60 degree rotation is just a signed rotation
//! of the three components.
//!
//! Fractional coordinates show up in intermediate math (line drawing, mapping
//! world positions onto the grid). Those get snapped back onto the grid with
//! [Hex::round], which corrects whichever component drifted the furthest so
//! the constraint above holds again.
//!
//! ### World Coordinates
//!
//! World coordinates are continuous 2D positions, used strictly for rendering
//! and for picking (mapping a cursor position back to a tile). The mapping
//! between the two systems depends on whether tiles are drawn pointy-top or
//! flat-top, where the origin is, and how large each tile is. All of that is
//! captured by a [Layout](crate::Layout); see the [layout](crate::layout)
//! module.
//!
//! ### Wraparound
//!
//! A hexagonal map of radius `r` can be made to wrap around on itself (like a
//! torus) by surrounding it with 6 translated copies. The translations are the
//! "mirrors" computed by [Hex::wraparound_mirrors], and [Hex::wrap_in_range]
//! uses them to fold any hex that walked off the edge back onto the map.

mod data_structure;
mod direction;
mod traversal;
mod unit;

pub use self::{data_structure::*, direction::*, unit::*};

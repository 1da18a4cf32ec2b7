use crate::{generation::Shape, layout::Layout};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// The largest radius (or side length) any config may ask for. Keeps grid
/// generation bounded.
pub const MAX_EXTENT: u64 = 10000;

/// Configuration that defines a hex grid. Two grids generated from the same
/// config will always be identical.
///
/// The default config is a hexagon of radius 5 around the origin, in a
/// unit-sized pointy layout, with no wrapping.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    Validate,
)]
#[serde(default)]
pub struct GridConfig {
    /// If set, the grid wraps around on itself as a hexagonal map of this
    /// radius, centered on the origin. Lookups that fall off one edge come
    /// back in on the opposite edge. This only makes sense when the shape is
    /// a hexagon of the same radius around the origin, but that isn't
    /// enforced.
    #[validate(range(min = 0, max = 10000))]
    pub wrap_radius: Option<u16>,

    /// How the grid is placed in world space. Both size components must be
    /// finite and non-zero, otherwise world positions can't be mapped back
    /// onto hexes.
    #[validate(custom = "validate_layout")]
    pub layout: Layout,

    /// The region of hexes that make up the grid
    #[validate(custom = "validate_shape")]
    pub shape: Shape,
}

fn validate_layout(layout: &Layout) -> Result<(), ValidationError> {
    let size = layout.size;
    if size.iter().all(|v| v.is_finite() && *v != 0.0) {
        Ok(())
    } else {
        Err(ValidationError::new("layout_size"))
    }
}

fn validate_shape(shape: &Shape) -> Result<(), ValidationError> {
    if shape.extent() <= MAX_EXTENT {
        Ok(())
    } else {
        Err(ValidationError::new("shape_extent"))
    }
}

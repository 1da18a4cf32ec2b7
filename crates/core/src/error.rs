use derive_more::Display;

/// Domain errors raised by the hex algebra. Public functions return these
/// wrapped in an [anyhow::Error], so callers that care about the exact failure
/// can recover it with [anyhow::Error::downcast_ref].
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum HexError {
    /// Three cube components were given that don't fall on the plane
    /// `q + r + s = 0`
    #[display(
        fmt = "invalid cube coordinates ({}, {}, {}); q + r + s must equal 0, \
               got {}",
        q,
        r,
        s,
        "q + r + s"
    )]
    InvalidCubeCoordinates { q: i32, r: i32, s: i32 },

    /// A ring, spiral or disk was requested with a negative range
    #[display(fmt = "range must be non-negative, got {}", _0)]
    NegativeRange(i32),

    /// A wraparound map is so large that its mirror offsets don't fit in an
    /// `i32`
    #[display(fmt = "wraparound radius {} is too large", _0)]
    RadiusTooLarge(u32),
}

impl std::error::Error for HexError {}

/// Fail with [HexError::NegativeRange] if the range is below zero. Zero is a
/// valid range everywhere (it means "just the center").
pub(crate) fn ensure_range(range: i32) -> anyhow::Result<()> {
    if range < 0 {
        Err(HexError::NegativeRange(range).into())
    } else {
        Ok(())
    }
}

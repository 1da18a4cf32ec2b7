use crate::hex::Hex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The 6 directions in which hexes can line up side-to-side. For any given
/// hex, a direction denotes the step to one neighboring hex.
///
/// Variants are ordered (index 0 through 5) so that stepping the index up by
/// one moves counter-clockwise around a hex, and stepping it down moves
/// clockwise. The names describe a pointy-top layout drawn with `y` growing
/// downward.
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
pub enum Direction {
    /// `(1, 0)`
    BottomRight = 0,
    /// `(1, -1)`
    TopRight = 1,
    /// `(0, -1)`
    Top = 2,
    /// `(-1, 0)`
    TopLeft = 3,
    /// `(-1, 1)`
    BottomLeft = 4,
    /// `(0, 1)`
    Bottom = 5,
}

impl Direction {
    /// Every direction, in index order
    pub const ALL: [Self; 6] = [
        Self::BottomRight,
        Self::TopRight,
        Self::Top,
        Self::TopLeft,
        Self::BottomLeft,
        Self::Bottom,
    ];

    /// The unit offset for each direction, indexed by [Direction::index]
    const OFFSETS: [Hex; 6] = [
        Hex::new(1, 0),
        Hex::new(1, -1),
        Hex::new(0, -1),
        Hex::new(-1, 0),
        Hex::new(-1, 1),
        Hex::new(0, 1),
    ];

    /// Position of this direction in the rotational ordering, `0..6`
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the direction at the given index. The index wraps around, so any
    /// value (including negatives) maps onto one of the six directions.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(6) as usize]
    }

    /// Get a vector offset that would move a hex one step in this direction
    pub const fn offset(self) -> Hex {
        Self::OFFSETS[self as usize]
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        self.rotate(3, false)
    }

    /// The next direction going counter-clockwise (index + 1)
    pub fn counter_clockwise(self) -> Self {
        self.rotate(1, false)
    }

    /// The next direction going clockwise (index - 1)
    pub fn clockwise(self) -> Self {
        self.rotate(1, true)
    }

    /// Rotate this direction by some number of sixth-turns
    pub fn rotate(self, amount: u32, clockwise: bool) -> Self {
        let amount = i64::from(amount);
        let index = self.index() as i64;
        if clockwise {
            Self::from_index(index - amount)
        } else {
            Self::from_index(index + amount)
        }
    }
}

//! Neighbor lookups and the multi-hex walks built on top of them: rings,
//! spirals, lines, filled disks and wraparound addressing.

use crate::{
    error::{ensure_range, HexError},
    hex::{Direction, Hex},
    util::hexagon_len,
};
use std::cmp;

impl Hex {
    /// Offsets to the 6 diagonal hexes, i.e. the hexes two steps away that
    /// share a single vertex with this one
    pub const DIAGONAL_OFFSETS: [Hex; 6] = [
        Hex::new(2, -1),
        Hex::new(1, -2),
        Hex::new(-1, -1),
        Hex::new(-2, 1),
        Hex::new(-1, 2),
        Hex::new(1, 1),
    ];

    /// Get the unit offset that moves a hex one step in the given direction
    pub const fn neighbor_coord(direction: Direction) -> Hex {
        direction.offset()
    }

    /// Get the location of a particular hex adjacent to this one
    pub fn neighbor(self, direction: Direction) -> Hex {
        self + Self::neighbor_coord(direction)
    }

    /// Get all hexes directly adjacent to this one, in direction index order
    pub fn neighbors(self) -> [Hex; 6] {
        Direction::ALL.map(|direction| self.neighbor(direction))
    }

    /// Get the 6 hexes that touch this one only at a vertex
    pub fn diagonal_neighbors(self) -> [Hex; 6] {
        Self::DIAGONAL_OFFSETS.map(|offset| self + offset)
    }

    /// Get the ring of hexes that are exactly `range` steps from this one.
    /// The walk starts at the [Direction::BottomLeft] corner and goes
    /// counter-clockwise. See [Self::custom_ring].
    pub fn ring(self, range: i32) -> anyhow::Result<Vec<Hex>> {
        self.custom_ring(range, Direction::BottomLeft, false)
    }

    /// Get the ring of hexes that are exactly `range` steps from this one,
    /// starting at the corner of the ring that lines up with `start` and
    /// walking the perimeter in the requested rotational sense.
    ///
    /// A range of 0 gives just this hex. Otherwise the output has exactly
    /// `6 * range` hexes with no duplicates. Fails if `range` is negative.
    pub fn custom_ring(
        self,
        range: i32,
        start: Direction,
        clockwise: bool,
    ) -> anyhow::Result<Vec<Hex>> {
        ensure_range(range)?;
        if range == 0 {
            return Ok(vec![self]);
        }

        // Each side of the ring runs parallel to the direction two steps
        // around from the corner it starts at. Going counter-clockwise that's
        // start+2, start+3, ...; going clockwise it's start-2, start-3, ...
        // Anything else leaves gaps or steps off the ring.
        let first_side = start.rotate(2, clockwise);
        let mut hex = self + Self::neighbor_coord(start) * range;
        let mut ring = Vec::with_capacity(6 * range as usize);
        for side in 0..6 {
            let step = Self::neighbor_coord(first_side.rotate(side, clockwise));
            for _ in 0..range {
                ring.push(hex);
                hex += step;
            }
        }
        Ok(ring)
    }

    /// Get every hex within `range` steps of this one, as concentric rings
    /// from the center out. See [Self::custom_spiral_range].
    pub fn spiral_range(self, range: i32) -> anyhow::Result<Vec<Hex>> {
        self.custom_spiral_range(range, Direction::BottomLeft, false)
    }

    /// Get every hex within `range` steps of this one, as the concatenation of
    /// [Self::custom_ring] for each distance from 0 to `range` inclusive. The
    /// output has exactly `3 * range * (range + 1) + 1` hexes.
    pub fn custom_spiral_range(
        self,
        range: i32,
        start: Direction,
        clockwise: bool,
    ) -> anyhow::Result<Vec<Hex>> {
        ensure_range(range)?;
        let mut hexes = Vec::with_capacity(hexagon_len(range as u32));
        for distance in 0..=range {
            hexes.extend(self.custom_ring(distance, start, clockwise)?);
        }
        Ok(hexes)
    }

    /// Get every hex within `range` steps of this one, i.e. a filled hexagon
    /// centered here. The order is row by row, not by distance; use
    /// [Self::spiral_range] if you need rings. Fails if `range` is negative.
    pub fn range(self, range: i32) -> anyhow::Result<Vec<Hex>> {
        ensure_range(range)?;
        let mut hexes = Vec::with_capacity(hexagon_len(range as u32));
        for q in -range..=range {
            // If we just do [-range, range] for r as well, then we end up with
            // a diamond pattern instead of a hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let r_min = cmp::max(-range, -q - range);
            let r_max = cmp::min(range, -q + range);
            for r in r_min..=r_max {
                hexes.push(self + Hex::new(q, r));
            }
        }
        debug_assert_eq!(hexes.len(), hexagon_len(range as u32));
        Ok(hexes)
    }

    /// Draw a line from this hex towards `other`. The output has one hex per
    /// step of distance between the two, sampled at `t = step / distance` for
    /// `step` in `0..distance`. That means it **starts with this hex and stops
    /// just short of `other`**; push `other` onto the result if you need the
    /// closed segment. Two equal hexes give an empty line.
    pub fn line_to(self, other: Hex) -> Vec<Hex> {
        let distance = self.distance_to(other);
        (0..distance)
            .map(|step| {
                let t = f64::from(step) / f64::from(distance);
                let (x, y) = Self::lerp(self, other, t);
                Self::round(x, y)
            })
            .collect()
    }

    /// Get the 6 mirror centers for a wrapping hexagonal map of the given
    /// radius, centered on the origin. Translating a hex by one of these moves
    /// it into the matching copy of the map, so together they tile the plane
    /// with copies of the map.
    ///
    /// The order is the primary mirror's left rotation, the primary mirror,
    /// its right rotation, then the negations of those three.
    ///
    /// Fails with [HexError::RadiusTooLarge] if `2 * radius + 1` doesn't fit
    /// in an `i32`.
    pub fn wraparound_mirrors(radius: u32) -> anyhow::Result<[Hex; 6]> {
        let bounds = i32::try_from(radius)
            .ok()
            .and_then(|r| r.checked_mul(2)?.checked_add(1).map(|o| (r, o)));
        let (radius, offset) =
            bounds.ok_or(HexError::RadiusTooLarge(radius))?;
        let mirror = Hex::new(offset, -radius);
        let left = mirror.rotate_left();
        let right = mirror.rotate_right();
        Ok([left, mirror, right, -left, -mirror, -right])
    }

    /// Map this hex onto a wrapping hexagonal map of the given radius,
    /// centered on the origin. See [Self::wrap_with]. If the radius is too
    /// large to build mirrors for, the hex is returned unchanged.
    pub fn wrap_in_range(self, radius: u32) -> Hex {
        match Self::wraparound_mirrors(radius) {
            Ok(mirrors) => self.wrap_with(radius, &mirrors),
            Err(_) => self,
        }
    }

    /// Map this hex back into the hexagon of `radius` around the origin by
    /// translating it by whichever mirror lands it there. Hexes already in
    /// range come back unchanged. The first qualifying mirror wins; if none
    /// qualifies (the hex is further out than the neighboring copies of the
    /// map), the hex is returned unchanged.
    pub fn wrap_with(self, radius: u32, mirrors: &[Hex]) -> Hex {
        // Anything past i32::MAX covers every hex
        let radius = match i32::try_from(radius) {
            Ok(radius) if self.length() > radius => radius,
            _ => return self,
        };
        mirrors
            .iter()
            .map(|mirror| self + *mirror)
            .find(|candidate| candidate.length() <= radius)
            .unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::HexError, hex::HexSet};
    use proptest::prelude::*;

    fn any_hex() -> impl Strategy<Value = Hex> {
        (-500i32..500, -500i32..500).prop_map(Hex::from)
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        (0i64..6).prop_map(Direction::from_index)
    }

    fn to_set(hexes: &[Hex]) -> HexSet {
        hexes.iter().copied().collect()
    }

    #[test]
    fn test_neighbor() {
        assert_eq!(Hex::new(1, 0).neighbor(Direction::Top), Hex::new(1, -1));
        assert_eq!(
            Hex::new(3, 3).neighbors(),
            [
                Hex::new(4, 3),
                Hex::new(4, 2),
                Hex::new(3, 2),
                Hex::new(2, 3),
                Hex::new(2, 4),
                Hex::new(3, 4),
            ]
        );
    }

    #[test]
    fn test_diagonal_neighbors() {
        for diagonal in Hex::ZERO.diagonal_neighbors() {
            assert_eq!(diagonal.length(), 2);
            // A diagonal shares exactly two neighbors with the center
            let shared = diagonal
                .neighbors()
                .iter()
                .filter(|hex| hex.length() == 1)
                .count();
            assert_eq!(shared, 2);
        }
    }

    #[test]
    fn test_ring_default() {
        let ring = Hex::ZERO.ring(2).unwrap();
        assert_eq!(ring.len(), 12);
        assert!(ring.iter().all(|hex| hex.length() == 2));
        // Starts at the bottom-left corner and heads towards bottom-right
        assert_eq!(ring[0], Hex::new(-2, 2));
        assert_eq!(ring[1], Hex::new(-1, 2));
        assert_eq!(ring[2], Hex::new(0, 2));
        assert_eq!(ring[3], Hex::new(1, 1));
    }

    #[test]
    fn test_ring_zero() {
        let center = Hex::new(4, -7);
        assert_eq!(center.ring(0).unwrap(), vec![center]);
        assert_eq!(
            center.custom_ring(0, Direction::Top, true).unwrap(),
            vec![center]
        );
    }

    #[test]
    fn test_ring_clockwise() {
        let ring = Hex::ZERO.custom_ring(1, Direction::Top, true).unwrap();
        assert_eq!(
            ring,
            vec![
                Hex::new(0, -1),
                Hex::new(1, -1),
                Hex::new(1, 0),
                Hex::new(0, 1),
                Hex::new(-1, 1),
                Hex::new(-1, 0),
            ]
        );

        let ring = Hex::ZERO.custom_ring(1, Direction::Top, false).unwrap();
        assert_eq!(
            ring,
            vec![
                Hex::new(0, -1),
                Hex::new(-1, 0),
                Hex::new(-1, 1),
                Hex::new(0, 1),
                Hex::new(1, 0),
                Hex::new(1, -1),
            ]
        );
    }

    #[test]
    fn test_negative_range() {
        for result in [
            Hex::ZERO.ring(-1),
            Hex::ZERO.custom_ring(-3, Direction::Top, true),
            Hex::ZERO.spiral_range(-1),
            Hex::ZERO.range(-2),
        ] {
            let err = result.unwrap_err();
            assert!(matches!(
                err.downcast_ref::<HexError>(),
                Some(HexError::NegativeRange(_))
            ));
        }
    }

    #[test]
    fn test_spiral_range() {
        let spiral = Hex::ZERO.spiral_range(2).unwrap();
        assert_eq!(spiral.len(), 19);
        assert_eq!(spiral[0], Hex::ZERO);
        // Rings come out in order of distance
        let lengths: Vec<i32> = spiral.iter().map(|hex| hex.length()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_unstable();
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn test_range() {
        assert_eq!(Hex::ZERO.range(0).unwrap(), vec![Hex::ZERO]);
        let disk = Hex::new(2, 2).range(1).unwrap();
        assert_eq!(disk.len(), 7);
        let expected: HexSet = std::iter::once(Hex::new(2, 2))
            .chain(Hex::new(2, 2).neighbors())
            .collect();
        assert_eq!(to_set(&disk), expected);
    }

    #[test]
    fn test_line_to() {
        assert!(Hex::new(3, 1).line_to(Hex::new(3, 1)).is_empty());
        assert_eq!(
            Hex::ZERO.line_to(Hex::new(3, 0)),
            vec![Hex::new(0, 0), Hex::new(1, 0), Hex::new(2, 0)]
        );
        assert_eq!(
            Hex::new(1, 1).line_to(Hex::new(1, -2)),
            vec![Hex::new(1, 1), Hex::new(1, 0), Hex::new(1, -1)]
        );
        assert_eq!(Hex::ZERO.line_to(Hex::new(0, 1)), vec![Hex::ZERO]);
    }

    #[test]
    fn test_line_to_ties() {
        // The midpoint sample (0.5, 0.5) is equidistant from (1, 0) and
        // (0, 1). Ties correct q, which picks (1, 0).
        assert_eq!(
            Hex::ZERO.line_to(Hex::new(1, 1)),
            vec![Hex::ZERO, Hex::new(1, 0)]
        );
        // Same again at (0.5, 0.5) and (1.5, 1.5)
        assert_eq!(
            Hex::ZERO.line_to(Hex::new(2, 2)),
            vec![Hex::ZERO, Hex::new(1, 0), Hex::new(1, 1), Hex::new(1, 2)]
        );
    }

    #[test]
    fn test_wraparound_mirrors() {
        let mirrors = Hex::wraparound_mirrors(2).unwrap();
        assert_eq!(mirrors[1], Hex::new(5, -2));
        assert_eq!(mirrors[0], Hex::new(5, -2).rotate_left());
        assert_eq!(mirrors[2], Hex::new(5, -2).rotate_right());
        assert_eq!(mirrors[4], Hex::new(-5, 2));
        for mirror in mirrors {
            assert_eq!(mirror.length(), 5);
        }
        // All six are distinct
        assert_eq!(to_set(&mirrors).len(), 6);
    }

    #[test]
    fn test_wraparound_radius_bounds() {
        // Largest radius whose mirror offset 2r + 1 still fits in an i32
        let max = (i32::MAX as u32 - 1) / 2;
        let mirrors = Hex::wraparound_mirrors(max).unwrap();
        assert_eq!(mirrors[1], Hex::new(i32::MAX, -(max as i32)));

        for radius in &[max + 1, i32::MAX as u32 + 1, u32::MAX] {
            let err = Hex::wraparound_mirrors(*radius).unwrap_err();
            assert_eq!(
                err.downcast_ref::<HexError>(),
                Some(&HexError::RadiusTooLarge(*radius))
            );
            assert_eq!(Hex::new(7, -3).wrap_in_range(*radius), Hex::new(7, -3));
        }
        let far = Hex::new(i32::MAX / 2, 0);
        assert_eq!(far.wrap_with(u32::MAX, &[Hex::new(-1, 0)]), far);
    }

    #[test]
    fn test_wrap_in_range() {
        // Already in range
        assert_eq!(Hex::new(1, 1).wrap_in_range(2), Hex::new(1, 1));
        // Step off the right edge of a radius 2 map, come back on the left
        let off_edge = Hex::new(3, -1);
        let wrapped = off_edge.wrap_in_range(2);
        assert!(wrapped.length() <= 2);
        assert_eq!(wrapped, Hex::new(-2, 1));
        // Way too far out to be fixed by a single mirror
        let far = Hex::new(40, 0);
        assert_eq!(far.wrap_in_range(2), far);
        // Degenerate single-hex map: every neighbor wraps onto the origin
        for neighbor in Hex::ZERO.neighbors() {
            assert_eq!(neighbor.wrap_in_range(0), Hex::ZERO);
        }
    }

    #[test]
    fn test_wrap_with_custom_mirrors() {
        // No mirrors means nothing can wrap
        assert_eq!(Hex::new(5, 0).wrap_with(2, &[]), Hex::new(5, 0));
        // First qualifying mirror wins
        let mirrors = [Hex::new(-4, 0), Hex::new(-5, 0)];
        assert_eq!(Hex::new(5, 0).wrap_with(2, &mirrors), Hex::new(1, 0));
    }

    proptest! {
        #[test]
        fn test_neighbor_reciprocity(
            hex in any_hex(),
            direction in any_direction(),
        ) {
            prop_assert_eq!(
                hex.neighbor(direction).neighbor(direction.opposite()),
                hex
            );
            prop_assert_eq!(hex.distance_to(hex.neighbor(direction)), 1);
        }

        #[test]
        fn test_ring_properties(
            center in any_hex(),
            range in 0i32..12,
            start in any_direction(),
            clockwise in any::<bool>(),
        ) {
            let ring = center.custom_ring(range, start, clockwise).unwrap();
            let expected_len = if range == 0 { 1 } else { 6 * range as usize };
            prop_assert_eq!(ring.len(), expected_len);
            prop_assert_eq!(to_set(&ring).len(), expected_len);
            prop_assert_eq!(ring[0], center + start.offset() * range);
            for hex in &ring {
                prop_assert_eq!(center.distance_to(*hex), range);
            }
            // The walk is contiguous, including the wrap back to the start
            if range > 0 {
                for i in 0..ring.len() {
                    let next = ring[(i + 1) % ring.len()];
                    prop_assert_eq!(ring[i].distance_to(next), 1);
                }
            }
        }

        #[test]
        fn test_spiral_matches_range(
            center in any_hex(),
            range in 0i32..12,
            start in any_direction(),
            clockwise in any::<bool>(),
        ) {
            let spiral = center
                .custom_spiral_range(range, start, clockwise)
                .unwrap();
            let disk = center.range(range).unwrap();
            let expected_len = (3 * range * (range + 1) + 1) as usize;
            prop_assert_eq!(spiral.len(), expected_len);
            prop_assert_eq!(disk.len(), expected_len);
            prop_assert_eq!(to_set(&disk).len(), expected_len);
            prop_assert_eq!(to_set(&spiral), to_set(&disk));
            for hex in &disk {
                prop_assert!(center.distance_to(*hex) <= range);
            }
        }

        #[test]
        fn test_line_properties(a in any_hex(), b in any_hex()) {
            let line = a.line_to(b);
            prop_assert_eq!(line.len() as i32, a.distance_to(b));
            if let Some(first) = line.first() {
                prop_assert_eq!(*first, a);
            }
        }

        #[test]
        fn test_wraparound_canonical(
            hex in (-6i32..=6, -6i32..=6).prop_map(Hex::from),
            radius in 6u32..20,
            mirror_index in 0usize..6,
        ) {
            prop_assume!(hex.length() <= radius as i32);
            let mirror = Hex::wraparound_mirrors(radius).unwrap()[mirror_index];
            let shifted = hex + mirror;
            prop_assert!(shifted.length() > radius as i32);
            prop_assert_eq!(shifted.wrap_in_range(radius), hex);
        }

        #[test]
        fn test_wrap_is_idempotent(hex in any_hex(), radius in 0u32..30) {
            let wrapped = hex.wrap_in_range(radius);
            prop_assert_eq!(wrapped.wrap_in_range(radius), wrapped);
            if hex.length() <= radius as i32 {
                prop_assert_eq!(wrapped, hex);
            }
        }
    }
}

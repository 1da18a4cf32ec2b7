use crate::hex::Hex;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};

/// A set of hexes
pub type HexSet = HashSet<Hex, FnvBuildHasher>;
/// A map of hexes to some `T`. Hosts that attach their own objects (meshes,
/// entities, etc.) to grid cells should key them with this.
pub type HexMap<T> = HashMap<Hex, T, FnvBuildHasher>;
/// An ORDERED set of hexes. This has some extra memory overhead, so we should
/// only use it when we actually need the ordering.
pub type HexIndexSet = IndexSet<Hex, FnvBuildHasher>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_set_keeps_first_insertion_order() {
        let set: HexIndexSet = vec![
            Hex::new(2, 0),
            Hex::ZERO,
            Hex::new(2, 0),
            Hex::new(-1, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            set.iter().copied().collect::<Vec<_>>(),
            vec![Hex::new(2, 0), Hex::ZERO, Hex::new(-1, 1)]
        );
    }

    #[test]
    fn test_hex_map() {
        let mut map: HexMap<&str> = HexMap::default();
        map.insert(Hex::ZERO, "center");
        map.insert(Hex::new(0, -1), "top");
        assert_eq!(map.get(&Hex::new(0, -1)), Some(&"top"));
        assert_eq!(map.get(&Hex::new(0, 1)), None);
    }
}

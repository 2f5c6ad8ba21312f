//! Comparison of maps by the entries they contain. One map is a subset of
//! another when every one of its key-value pairs is present in the other with
//! an equal value. A strict subset additionally has fewer entries.
//!
//! Both sides may be any [`AssociativeContainer`], and they need not be the
//! same kind of container, so a `LinkedHashMap` can be checked against a
//! `BTreeMap` directly.

use std::cmp::Ordering;

use tracing::trace;

use crate::container::AssociativeContainer;

/// Whether `left` is a strict subset of `right`: every entry of `left` is in
/// `right` with an equal value, and `left` has strictly fewer entries.
///
/// A map is never a strict subset of itself, and the empty map is a strict
/// subset of every non-empty map.
pub fn is_strict_subset<K, V, L, R>(left: &L, right: &R) -> bool
where
    L: AssociativeContainer<K, V> + ?Sized,
    R: AssociativeContainer<K, V> + ?Sized,
    V: PartialEq,
{
    if left.len() >= right.len() {
        trace!(
            left = left.len(),
            right = right.len(),
            "not a strict subset: left is not smaller than right"
        );
        return false;
    }

    contains_all(left, right)
}

/// Whether `left` is a subset of `right`. Unlike [`is_strict_subset`], two
/// maps with the same entries are subsets of one another.
pub fn is_subset<K, V, L, R>(left: &L, right: &R) -> bool
where
    L: AssociativeContainer<K, V> + ?Sized,
    R: AssociativeContainer<K, V> + ?Sized,
    V: PartialEq,
{
    if left.len() > right.len() {
        trace!(
            left = left.len(),
            right = right.len(),
            "not a subset: left is larger than right"
        );
        return false;
    }

    contains_all(left, right)
}

/// Whether `left` strictly contains `right`.
pub fn is_strict_superset<K, V, L, R>(left: &L, right: &R) -> bool
where
    L: AssociativeContainer<K, V> + ?Sized,
    R: AssociativeContainer<K, V> + ?Sized,
    V: PartialEq,
{
    is_strict_subset(right, left)
}

/// Whether `left` contains every entry of `right`.
pub fn is_superset<K, V, L, R>(left: &L, right: &R) -> bool
where
    L: AssociativeContainer<K, V> + ?Sized,
    R: AssociativeContainer<K, V> + ?Sized,
    V: PartialEq,
{
    is_subset(right, left)
}

/// Orders two maps by containment. `Less` when `left` is a strict subset of
/// `right`, `Equal` when they hold the same entries, `Greater` when `left` is
/// a strict superset, and `None` when neither contains the other.
pub fn compare<K, V, L, R>(left: &L, right: &R) -> Option<Ordering>
where
    L: AssociativeContainer<K, V> + ?Sized,
    R: AssociativeContainer<K, V> + ?Sized,
    V: PartialEq,
{
    // keys are unique, so containment between maps of equal length is
    // equality
    match left.len().cmp(&right.len()) {
        Ordering::Less if contains_all(left, right) => Some(Ordering::Less),
        Ordering::Equal if contains_all(left, right) => Some(Ordering::Equal),
        Ordering::Greater if contains_all(right, left) => {
            Some(Ordering::Greater)
        }
        _ => None,
    }
}

/// Every entry of `needles` is found in `haystack` with an equal value.
fn contains_all<K, V, L, R>(needles: &L, haystack: &R) -> bool
where
    L: AssociativeContainer<K, V> + ?Sized,
    R: AssociativeContainer<K, V> + ?Sized,
    V: PartialEq,
{
    needles.entries().all(|(k, v)| match haystack.lookup(k) {
        Some(other) if other == v => true,
        Some(_) => {
            trace!("value differs for a shared key");
            false
        }
        None => {
            trace!("key missing from the other map");
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use std::{
        cmp::Ordering,
        collections::{BTreeMap, HashMap},
    };

    use super::{
        compare, is_strict_subset, is_strict_superset, is_subset,
        is_superset,
    };

    fn map(pairs: &[(char, u32)]) -> BTreeMap<char, u32> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn empty_map_is_a_strict_subset_of_any_nonempty_map() {
        let empty = map(&[]);
        let one = map(&[('a', 1)]);

        assert!(is_strict_subset(&empty, &one));
        assert!(!is_strict_subset(&empty, &empty));
        assert!(is_subset(&empty, &empty));
        assert_eq!(Some(Ordering::Equal), compare(&empty, &empty));
    }

    #[test]
    fn subset_allows_equal_maps_strict_subset_does_not() {
        let hash = map(&[('a', 1), ('b', 2)]);
        let copy = map(&[('b', 2), ('a', 1)]);

        assert!(is_subset(&hash, &copy));
        assert!(is_superset(&hash, &copy));
        assert!(!is_strict_subset(&hash, &copy));
        assert!(!is_strict_superset(&hash, &copy));
    }

    #[test]
    fn superset_mirrors_subset() {
        let hash = map(&[('a', 1), ('b', 2)]);
        let bigger = map(&[('a', 1), ('b', 2), ('c', 3)]);

        assert!(is_strict_superset(&bigger, &hash));
        assert!(is_superset(&bigger, &hash));
        assert!(!is_strict_superset(&hash, &bigger));
        assert!(!is_superset(&hash, &bigger));
    }

    #[test]
    fn compare_orders_by_containment() {
        let hash = map(&[('a', 1), ('b', 2)]);
        let bigger = map(&[('a', 1), ('b', 2), ('c', 3)]);
        let unrelated = map(&[('c', 3), ('d', 4)]);
        let similar = map(&[('a', 2), ('b', 3)]);

        assert_eq!(Some(Ordering::Less), compare(&hash, &bigger));
        assert_eq!(Some(Ordering::Greater), compare(&bigger, &hash));
        assert_eq!(None, compare(&hash, &unrelated));
        assert_eq!(None, compare(&hash, &similar));
        assert_eq!(None, compare(&bigger, &unrelated));
    }

    #[test]
    fn different_container_kinds_compare() {
        let btree = map(&[('a', 1)]);
        let hash_map: HashMap<char, u32> =
            vec![('a', 1), ('b', 2)].into_iter().collect();

        assert!(is_strict_subset(&btree, &hash_map));
        assert!(is_strict_superset(&hash_map, &btree));
    }
}

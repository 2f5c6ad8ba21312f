//! Property tests for the containment comparisons.

use std::collections::BTreeMap;

use mysterious_map::{
    compare, is_strict_subset, is_strict_superset, is_subset, LinkedHashMap,
};
use proptest::prelude::*;

fn small_map() -> impl Strategy<Value = BTreeMap<u8, u8>> {
    // a narrow key and value range so that overlaps are common
    prop::collection::btree_map(0u8..6, 0u8..3, 0..6)
}

fn linked(map: &BTreeMap<u8, u8>) -> LinkedHashMap<u8, u8> {
    map.iter().map(|(k, v)| (*k, *v)).collect()
}

proptest! {
    #[test]
    fn strict_subset_is_irreflexive(a in small_map()) {
        prop_assert!(!is_strict_subset(&a, &a));
        prop_assert!(is_subset(&a, &a));
    }

    #[test]
    fn strict_subset_is_antisymmetric(a in small_map(), b in small_map()) {
        if is_strict_subset(&a, &b) {
            prop_assert!(!is_strict_subset(&b, &a));
            prop_assert!(a.len() < b.len());
            prop_assert!(is_strict_superset(&b, &a));
        }
    }

    #[test]
    fn strict_subset_matches_the_definition(a in small_map(), b in small_map()) {
        let expected = a.len() < b.len()
            && a.iter().all(|(k, v)| b.get(k) == Some(v));
        prop_assert_eq!(expected, is_strict_subset(&a, &b));
    }

    #[test]
    fn adding_a_fresh_entry_makes_a_strict_superset(a in small_map(), v in 0u8..3) {
        let mut bigger = a.clone();
        bigger.insert(200, v);
        prop_assert!(is_strict_subset(&a, &bigger));
        prop_assert!(!is_strict_subset(&bigger, &a));
    }

    #[test]
    fn containers_agree(a in small_map(), b in small_map()) {
        let la = linked(&a);
        let lb = linked(&b);

        prop_assert_eq!(is_strict_subset(&a, &b), la < lb);
        prop_assert_eq!(is_subset(&a, &b), la <= lb);
        prop_assert_eq!(compare(&a, &b), la.partial_cmp(&lb));
        prop_assert_eq!(a == b, la == lb);
        prop_assert_eq!(is_strict_subset(&a, &b), is_strict_subset(&la, &b));
    }
}

//! Strict-subset comparison over the four fixture maps, run against every
//! container the crate knows about.

use std::collections::{BTreeMap, HashMap};

use mysterious_map::{is_strict_subset, AssociativeContainer, LinkedHashMap};

const HASH: &[(char, i32)] = &[('a', 1), ('b', 2)];
const BIGGER: &[(char, i32)] = &[('a', 1), ('b', 2), ('c', 3)];
const UNRELATED: &[(char, i32)] = &[('c', 3), ('d', 4)];
const SIMILAR: &[(char, i32)] = &[('a', 2), ('b', 3)];

fn check<C>(build: impl Fn(&[(char, i32)]) -> C)
where
    C: AssociativeContainer<char, i32>,
{
    let hash = build(HASH);
    let bigger = build(BIGGER);
    let unrelated = build(UNRELATED);
    let similar = build(SIMILAR);

    // receiver size is larger than argument
    assert!(!is_strict_subset(&bigger, &hash));
    assert!(!is_strict_subset(&bigger, &unrelated));

    // receiver size is the same as argument
    assert!(!is_strict_subset(&hash, &hash));
    assert!(!is_strict_subset(&hash, &unrelated));
    assert!(!is_strict_subset(&unrelated, &hash));

    // receiver is a subset of argument
    assert!(is_strict_subset(&hash, &bigger));

    // keys match but values don't
    assert!(!is_strict_subset(&hash, &similar));
    assert!(!is_strict_subset(&similar, &hash));
}

#[test]
fn linked_hash_map() {
    check(|pairs| pairs.iter().copied().collect::<LinkedHashMap<_, _>>());
}

#[test]
fn std_hash_map() {
    check(|pairs| pairs.iter().copied().collect::<HashMap<_, _>>());
}

#[test]
fn std_btree_map() {
    check(|pairs| pairs.iter().copied().collect::<BTreeMap<_, _>>());
}

#[test]
fn operators_match_the_fixture_expectations() {
    let build = |pairs: &[(char, i32)]| -> LinkedHashMap<char, i32> {
        pairs.iter().copied().collect()
    };
    let hash = build(HASH);
    let bigger = build(BIGGER);
    let unrelated = build(UNRELATED);
    let similar = build(SIMILAR);

    assert!(!(bigger < hash));
    assert!(!(bigger < unrelated));
    assert!(!(hash < hash));
    assert!(!(hash < unrelated));
    assert!(!(unrelated < hash));
    assert!(hash < bigger);
    assert!(!(hash < similar));
    assert!(!(similar < hash));
}

#[test]
fn mixed_container_kinds() {
    let hash: LinkedHashMap<char, i32> = HASH.iter().copied().collect();
    let bigger: BTreeMap<char, i32> = BIGGER.iter().copied().collect();
    let similar: HashMap<char, i32> = SIMILAR.iter().copied().collect();

    assert!(is_strict_subset(&hash, &bigger));
    assert!(!is_strict_subset(&bigger, &hash));
    assert!(!is_strict_subset(&hash, &similar));
}

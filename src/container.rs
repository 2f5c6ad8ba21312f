use std::{
    collections::{btree_map, hash_map, BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// Describes what an associative container is, as far as comparing two of
/// them goes: a count of entries, a way to find the value for a key, and a
/// way to walk every entry once.
pub trait AssociativeContainer<K, V> {
    /// Iterator over every `(key, value)` pair in the container.
    type Entries<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// The number of entries in the container.
    fn len(&self) -> usize;

    /// Whether the container holds no entries at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the value stored at a key, if there is one.
    fn lookup(&self, k: &K) -> Option<&V>;

    /// Walk the entries. Order is whatever the container's natural order is.
    fn entries(&self) -> Self::Entries<'_>;
}

impl<K, V, S> AssociativeContainer<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Entries<'a> = hash_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn lookup(&self, k: &K) -> Option<&V> {
        self.get(k)
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }
}

impl<K, V> AssociativeContainer<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    type Entries<'a> = btree_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn lookup(&self, k: &K) -> Option<&V> {
        self.get(k)
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }
}

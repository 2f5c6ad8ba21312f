use parking_lot::RwLock;
use std::{
    cmp::Ordering,
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash},
    sync::Arc,
};

use crate::{compare, container::AssociativeContainer, LinkedHashMap};

/// Wrapper for a LinkedHashMap which is shareable across thread boundaries.
/// Clones share the same map.
pub struct SharedMap<K, V, S = RandomState>(Arc<RwLock<LinkedHashMap<K, V, S>>>)
where
    K: Eq + Hash,
    S: BuildHasher;

impl<K, V, S> SharedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Wraps a map into a shared map accessor, making it safe to move across
    /// thread boundaries.
    pub fn with_map(map: LinkedHashMap<K, V, S>) -> Self {
        Self(Arc::from(RwLock::from(map)))
    }

    /// Inserts an item into the map.
    pub fn insert(&self, k: K, v: V) -> Option<V> {
        self.0.write().insert(k, v)
    }

    /// Get an item from the map. This clones it to minimize the lock time of
    /// the map.
    pub fn get(&self, k: &K) -> Option<V>
    where
        V: Clone,
    {
        self.0.read().get(k).cloned()
    }

    /// Remove an item from the map, returning the removed item if it existed.
    pub fn remove(&self, k: &K) -> Option<V> {
        self.0.write().remove(k)
    }

    /// Clears the map.
    pub fn clear(&self) {
        self.0.write().clear()
    }

    /// The number of elements in the map at present.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Whether this map is a strict subset of any other container.
    pub fn is_strict_subset_of_map<R>(&self, right: &R) -> bool
    where
        R: AssociativeContainer<K, V> + ?Sized,
        V: PartialEq,
    {
        compare::is_strict_subset::<K, V, _, _>(&*self.0.read(), right)
    }

    /// Whether this map is a strict subset of another shared map.
    pub fn is_strict_subset_of(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        if Arc::ptr_eq(&self.0, &other.0) {
            return false;
        }

        self.with_both(other, |l, r| compare::is_strict_subset::<K, V, _, _>(l, r))
    }

    /// Whether this map is a subset of another shared map.
    pub fn is_subset_of(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }

        self.with_both(other, |l, r| compare::is_subset::<K, V, _, _>(l, r))
    }

    /// Orders this map against another shared map by containment.
    pub fn compare_with(&self, other: &Self) -> Option<Ordering>
    where
        V: PartialEq,
    {
        if Arc::ptr_eq(&self.0, &other.0) {
            return Some(Ordering::Equal);
        }

        self.with_both(other, |l, r| compare::compare::<K, V, _, _>(l, r))
    }

    /// Holds read locks on both maps while `f` runs. Callers must rule out
    /// `other` sharing this map first.
    fn with_both<T>(
        &self,
        other: &Self,
        f: impl FnOnce(&LinkedHashMap<K, V, S>, &LinkedHashMap<K, V, S>) -> T,
    ) -> T {
        let left = self.0.read();
        // writers only ever hold one lock, so skipping the writer queue on the
        // second map cannot close a cycle
        let right = other.0.read_recursive();
        f(&*left, &*right)
    }
}

impl<K, V, S> Clone for SharedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn clone(&self) -> Self {
        SharedMap(self.0.clone())
    }
}

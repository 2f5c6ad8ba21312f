use super::{KeyHash, LinkedMapNode, NodeHandle};
use crate::{compare, container::AssociativeContainer, null_hasher::BuildNullHasher};
use std::{
    borrow::Borrow,
    cmp::Ordering,
    collections::{hash_map::RandomState, HashMap},
    fmt,
    hash::{BuildHasher, Hash, Hasher},
    iter::FusedIterator,
    mem,
};

type Slot<K, V> = Option<LinkedMapNode<K, V>>;

/// A layer on top of [`HashMap`] that internally links nodes together
/// so they can be iterated over in insertion order.
///
/// Entries live in a single Vec of slots. Removed slots go on a freelist and
/// get reused by later inserts, so a map that churns at a steady size doesn't
/// keep growing. Keys are hashed once with `S` and the hash is used to find a
/// bucket of candidate slots; the stored keys are compared to pick the right
/// one, so two keys with the same hash never clobber one another.
///
/// Two maps are equal when they hold the same entries, whatever the order.
/// They're ordered by containment: `a < b` when `a` is a strict subset of
/// `b`, and maps where neither contains the other aren't comparable at all.
#[derive(Clone)]
pub struct LinkedHashMap<K, V, S = RandomState>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    hash_builder: S,
    index: HashMap<KeyHash, Vec<NodeHandle>, BuildNullHasher>,
    slots: Vec<Slot<K, V>>,
    free: Vec<NodeHandle>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
}

/// Borrowing iterator over a [`LinkedHashMap`], oldest entry first.
pub struct Iter<'a, K, V> {
    slots: &'a [Slot<K, V>],
    front: Option<NodeHandle>,
    back: Option<NodeHandle>,
    remaining: usize,
}

/// Owning iterator over a [`LinkedHashMap`], oldest entry first.
pub struct IntoIter<K, V> {
    slots: Vec<Slot<K, V>>,
    front: Option<NodeHandle>,
    remaining: usize,
}

impl<K, V> LinkedHashMap<K, V, RandomState>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        LinkedHashMap::with_hasher(Default::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LinkedHashMap::with_capacity_and_hash_builder(
            capacity,
            Default::default(),
        )
    }
}

impl<K, V, S> LinkedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hash_builder: S) -> Self {
        LinkedHashMap::with_capacity_and_hash_builder(0, hash_builder)
    }

    pub fn with_capacity_and_hash_builder(
        capacity: usize,
        hash_builder: S,
    ) -> Self {
        Self {
            hash_builder,
            index: HashMap::with_capacity_and_hasher(
                capacity,
                BuildNullHasher,
            ),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    pub fn keys(
        &self,
    ) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(
        &self,
    ) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Inserts a value at a key, returning the previous value at that key.
    /// A key that's already present keeps its place in the insertion order;
    /// a new key goes on the end.
    pub fn insert(&mut self, k: K, v: V) -> Option<V> {
        #[cfg(test)]
        let original_len = self.len();
        let k_hash = self.k_hash(&k);

        if let Some(handle) = self.find(k_hash, &k) {
            let previous = self
                .node_mut(handle)
                .map(|node| mem::replace(&mut node.value, v));

            #[cfg(test)]
            {
                assert_eq!(original_len, self.len());
                self.continuity_test();
            }

            return previous;
        }

        let handle = self.allocate(LinkedMapNode {
            key: k,
            value: v,
            left: self.tail,
            right: None,
        });

        // link the previous tail to the new node
        if let Some(tail) = self.tail {
            if let Some(tail_node) = self.node_mut(tail) {
                tail_node.right = Some(handle);
            }
        } else {
            self.head = Some(handle);
        }

        self.tail = Some(handle);
        self.index.entry(k_hash).or_default().push(handle);

        #[cfg(test)]
        {
            assert_eq!(original_len + 1, self.len());
            assert!(self.head.is_some());
            assert!(self.tail.is_some());
            self.continuity_test();
        }

        None
    }

    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(self.k_hash(k), k).is_some()
    }

    pub fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_key_value(k).map(|(_, v)| v)
    }

    pub fn get_key_value<Q>(&self, k: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.find(self.k_hash(k), k)?;
        self.node(handle).map(|node| (&node.key, &node.value))
    }

    pub fn get_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.find(self.k_hash(k), k)?;
        self.node_mut(handle).map(|node| &mut node.value)
    }

    pub fn remove<Q>(&mut self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(k).map(|(_, v)| v)
    }

    /// Removes a key from the map, handing back both the stored key and its
    /// value. The freed slot is reused by a later insert.
    pub fn remove_entry<Q>(&mut self, k: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(test)]
        let original_len = self.len();
        let k_hash = self.k_hash(k);
        let handle = self.find(k_hash, k)?;

        if let Some(bucket) = self.index.get_mut(&k_hash) {
            bucket.retain(|h| *h != handle);
            if bucket.is_empty() {
                self.index.remove(&k_hash);
            }
        }

        let removed_node = self.slots.get_mut(handle.0).and_then(Option::take)?;
        self.free.push(handle);

        // link the nodes on either side together, moving the head or tail
        // along if the removed node was at either end
        if let Some(left) = removed_node.left {
            if let Some(left_node) = self.node_mut(left) {
                left_node.right = removed_node.right;
            }
        } else {
            self.head = removed_node.right;
        }

        if let Some(right) = removed_node.right {
            if let Some(right_node) = self.node_mut(right) {
                right_node.left = removed_node.left;
            }
        } else {
            self.tail = removed_node.left;
        }

        #[cfg(test)]
        {
            assert_eq!(original_len - 1, self.len());

            if self.len() > 0 {
                assert!(self.head.is_some());
                assert!(self.tail.is_some());
            }

            self.continuity_test();
        }

        Some((removed_node.key, removed_node.value))
    }

    /// Clears the map. Does not free the underlying buffers.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;

        #[cfg(test)]
        {
            assert_eq!(0, self.len());
            self.continuity_test();
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn k_hash<Q>(&self, k: &Q) -> KeyHash
    where
        Q: Hash + ?Sized,
    {
        let mut h = self.hash_builder.build_hasher();
        k.hash(&mut h);
        h.finish()
    }

    /// Finds the slot holding `k` among those whose keys share its hash.
    fn find<Q>(&self, k_hash: KeyHash, k: &Q) -> Option<NodeHandle>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.index.get(&k_hash)?.iter().copied().find(|handle| {
            self.node(*handle)
                .map_or(false, |node| Borrow::<Q>::borrow(&node.key) == k)
        })
    }

    fn node(&self, handle: NodeHandle) -> Option<&LinkedMapNode<K, V>> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    fn node_mut(
        &mut self,
        handle: NodeHandle,
    ) -> Option<&mut LinkedMapNode<K, V>> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    /// Places a node in the first free slot, or on the end of the slot Vec
    /// when none are free.
    fn allocate(&mut self, node: LinkedMapNode<K, V>) -> NodeHandle {
        match self.free.pop() {
            Some(handle) => {
                self.slots[handle.0] = Some(node);
                handle
            }
            None => {
                self.slots.push(Some(node));
                NodeHandle(self.slots.len() - 1)
            }
        }
    }

    #[cfg(test)]
    fn continuity_test(&self) {
        let mut count = 0;

        // walk the links from the head and make sure they reach as many
        // nodes as the map says it holds
        let mut cursor = self.head;
        while let Some(handle) = cursor {
            count += 1;
            assert!(count <= self.len());
            cursor = self.node(handle).expect("link to a free slot").right;
        }

        assert_eq!(self.len(), count);
        count = 0;

        // and again in reverse from the tail
        let mut cursor = self.tail;
        while let Some(handle) = cursor {
            count += 1;
            assert!(count <= self.len());
            cursor = self.node(handle).expect("link to a free slot").left;
        }

        assert_eq!(self.len(), count);

        // every live node is indexed exactly once, under its own key's hash
        let indexed: usize = self.index.values().map(Vec::len).sum();
        assert_eq!(self.len(), indexed);

        for (k_hash, bucket) in &self.index {
            for handle in bucket {
                let node = self.node(*handle).expect("index to a free slot");
                assert_eq!(*k_hash, self.k_hash(&node.key));
            }
        }
    }
}

impl<K, V, S> AssociativeContainer<K, V> for LinkedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Entries<'a> = Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize {
        LinkedHashMap::len(self)
    }

    fn lookup(&self, k: &K) -> Option<&V> {
        self.get(k)
    }

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }
}

impl<K, V, S> Default for LinkedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        LinkedHashMap::with_hasher(Default::default())
    }
}

impl<K, V, S> fmt::Debug for LinkedHashMap<K, V, S>
where
    K: Eq + Hash + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S, S2> PartialEq<LinkedHashMap<K, V, S2>> for LinkedHashMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &LinkedHashMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && compare::is_subset::<K, V, _, _>(self, other)
    }
}

impl<K, V, S> Eq for LinkedHashMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S, S2> PartialOrd<LinkedHashMap<K, V, S2>> for LinkedHashMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn partial_cmp(&self, other: &LinkedHashMap<K, V, S2>) -> Option<Ordering> {
        compare::compare::<K, V, _, _>(self, other)
    }

    fn lt(&self, other: &LinkedHashMap<K, V, S2>) -> bool {
        compare::is_strict_subset::<K, V, _, _>(self, other)
    }

    fn le(&self, other: &LinkedHashMap<K, V, S2>) -> bool {
        compare::is_subset::<K, V, _, _>(self, other)
    }

    fn gt(&self, other: &LinkedHashMap<K, V, S2>) -> bool {
        compare::is_strict_superset::<K, V, _, _>(self, other)
    }

    fn ge(&self, other: &LinkedHashMap<K, V, S2>) -> bool {
        compare::is_superset::<K, V, _, _>(self, other)
    }
}

impl<K, V, S> FromIterator<(K, V)> for LinkedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LinkedHashMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for LinkedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a LinkedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for LinkedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let remaining = self.len();
        IntoIter {
            slots: self.slots,
            front: self.head,
            remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slots = self.slots;
        let node = slots.get(self.front?.0)?.as_ref()?;
        self.front = node.right;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slots = self.slots;
        let node = slots.get(self.back?.0)?.as_ref()?;
        self.back = node.left;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.slots.get_mut(self.front?.0)?.take()?;
        self.front = node.right;
        self.remaining -= 1;
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

pub mod linked_hash_map;
// pub mod linked_btree_map; // TODO: implement, needs an ordered index in place of the hash buckets

pub use linked_hash_map::{IntoIter, Iter, LinkedHashMap};

// It would be tempting to try to adapt both BTreeMap and HashMap into a
// single common trait; for storage that's largely an exercise in futility,
// as the two have very different trait bounds. Comparison only needs
// lookups and iteration, which is what AssociativeContainer covers.

pub(crate) type KeyHash = u64;

/// Index of a node in a map's slot storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeHandle(usize);

/// An entry, along with links to its neighbours in insertion order. `left`
/// is the entry inserted before this one, `right` the one inserted after.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LinkedMapNode<K, V> {
    key: K,
    value: V,
    left: Option<NodeHandle>,
    right: Option<NodeHandle>,
}

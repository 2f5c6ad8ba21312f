//! Maps compared by the entries they contain.
//!
//! The heart of the crate is [`is_strict_subset`]: one map is a strict subset
//! of another when every key-value pair it holds is in the other with an
//! equal value, and it holds fewer pairs. Its siblings [`is_subset`],
//! [`is_strict_superset`], [`is_superset`] and [`compare`] round out the
//! comparisons. They work on anything implementing [`AssociativeContainer`],
//! which covers `HashMap`, `BTreeMap` and this crate's [`LinkedHashMap`].
//!
//! ```
//! use mysterious_map::LinkedHashMap;
//!
//! let hash: LinkedHashMap<&str, u32> = vec![("a", 1), ("b", 2)].into_iter().collect();
//! let bigger: LinkedHashMap<&str, u32> =
//!     vec![("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
//!
//! assert!(hash < bigger);
//! assert!(!(hash < hash));
//! ```

pub mod compare;
pub mod container;
pub mod linked_map;
mod null_hasher;
#[cfg(feature = "serde")]
mod serde_impls;
#[cfg(feature = "shared_map")]
pub mod shared_map;

pub use compare::{
    compare, is_strict_subset, is_strict_superset, is_subset, is_superset,
};
pub use container::AssociativeContainer;
pub use linked_map::LinkedHashMap;
#[cfg(feature = "shared_map")]
pub use shared_map::SharedMap;

//! The index inside `LinkedHashMap` is keyed by hashes the map has already
//! computed with its own hash builder, so hashing them a second time would be
//! wasted work. This hasher hands the `KeyHash` straight back.

use std::hash::{BuildHasher, Hasher};

/// Passes a u64 through as its own hash.
#[derive(Debug, Default)]
pub(crate) struct NullHasher(u64);

impl Hasher for NullHasher {
    fn write(&mut self, bytes: &[u8]) {
        // only KeyHash values are fed through here, but fold anything else in
        // little-endian order rather than dropping it
        for byte in bytes.iter().rev() {
            self.0 = (self.0 << 8) | u64::from(*byte);
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Builds new NullHashers for the key-hash index.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BuildNullHasher;

impl BuildHasher for BuildNullHasher {
    type Hasher = NullHasher;

    fn build_hasher(&self) -> Self::Hasher {
        NullHasher(0)
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasher, Hash, Hasher};

    use super::{BuildNullHasher, NullHasher};

    #[test]
    fn key_hashes_pass_through() {
        let mut h = BuildNullHasher.build_hasher();
        0xc8c8_c8c8_c8c8_c8c8u64.hash(&mut h);
        assert_eq!(0xc8c8_c8c8_c8c8_c8c8, h.finish());
    }

    #[test]
    fn raw_bytes_fold_little_endian() {
        let mut h = NullHasher(0);
        h.write(&0xc8c8c8c8u64.to_le_bytes());
        assert_eq!(0xc8c8c8c8, h.finish());
    }
}

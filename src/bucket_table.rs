//! BucketTable: separate-chaining index of handles into the element log.
//!
//! Each bucket is a chain of non-owning handles whose digest maps to the
//! bucket via `digest % table_size`. The table never owns strings; it is
//! thrown away and rebuilt from cached digests on resize.

use crate::element_log::{ElementLog, Handle};

/// Number of buckets in a fresh or cleared table.
pub const INITIAL_TABLE_SIZE: usize = 1;

/// Growth multiplier applied when the load factor would exceed one.
pub const EXPANSION_FACTOR: usize = 2;

#[derive(Clone, Debug)]
pub(crate) struct BucketTable {
    buckets: Vec<Vec<Handle>>,
}

impl BucketTable {
    pub(crate) fn new() -> Self {
        Self::with_size(INITIAL_TABLE_SIZE)
    }

    fn with_size(size: usize) -> Self {
        let mut buckets = Vec::with_capacity(size);
        buckets.resize_with(size, Vec::new);
        Self { buckets }
    }

    pub(crate) fn table_size(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    fn bucket_of(&self, digest: u64) -> usize {
        // table_size fits in u64 and the remainder is below it, so both casts are lossless.
        (digest % self.buckets.len() as u64) as usize
    }

    /// Handles sharing `digest`'s bucket, in chain order.
    #[inline]
    pub(crate) fn chain(&self, digest: u64) -> &[Handle] {
        let b = self.bucket_of(digest);
        self.buckets.get(b).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append `h` to the tail of its bucket's chain.
    pub(crate) fn insert(&mut self, digest: u64, h: Handle) {
        let b = self.bucket_of(digest);
        if let Some(chain) = self.buckets.get_mut(b) {
            chain.push(h);
        }
    }

    /// Drop `h` from its bucket's chain; returns whether it was there.
    pub(crate) fn unlink(&mut self, digest: u64, h: Handle) -> bool {
        let b = self.bucket_of(digest);
        let Some(chain) = self.buckets.get_mut(b) else {
            return false;
        };
        match chain.iter().position(|&x| x == h) {
            Some(i) => {
                chain.remove(i);
                true
            }
            None => false,
        }
    }

    /// Replace the table with `size` empty buckets and re-chain every
    /// element of `log` using its cached digest.
    pub(crate) fn rebuild(&mut self, size: usize, log: &ElementLog) {
        let mut fresh = Self::with_size(size.max(INITIAL_TABLE_SIZE));
        for (h, e) in log.walk(log.front()) {
            fresh.insert(e.digest, h);
        }
        *self = fresh;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    /// Total chain entries across all buckets.
    #[cfg(test)]
    pub(crate) fn entry_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub(crate) fn buckets(&self) -> &[Vec<Handle>] {
        &self.buckets
    }
}

//! Hasher policy: how a `StringSet` turns a string into a digest.
//!
//! Any `BuildHasher` works out of the box (the default is the standard
//! library's `RandomState`). Plain functions and closures plug in through
//! [`FnHasher`].

use core::hash::BuildHasher;

/// Maps a string to a fixed-width digest.
///
/// Implementations must be deterministic for the lifetime of the set that
/// owns them and must not call back into that set.
pub trait StringHasher {
    fn digest(&self, value: &str) -> u64;
}

impl<S: BuildHasher> StringHasher for S {
    #[inline]
    fn digest(&self, value: &str) -> u64 {
        self.hash_one(value)
    }
}

/// Adapter turning `Fn(&str) -> u64` into a [`StringHasher`].
///
/// ```
/// use string_set::{FnHasher, StringSet};
///
/// let mut set = StringSet::with_hasher(FnHasher(|s: &str| s.len() as u64));
/// assert!(set.add("abc"));
/// assert!(set.add("xyz")); // same digest, different string
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FnHasher<F>(pub F);

impl<F> StringHasher for FnHasher<F>
where
    F: Fn(&str) -> u64,
{
    #[inline]
    fn digest(&self, value: &str) -> u64 {
        (self.0)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::RandomState;

    #[test]
    fn build_hasher_digest_is_deterministic_per_instance() {
        let s = RandomState::new();
        assert_eq!(s.digest("abc"), s.digest("abc"));
        assert_eq!(s.digest("abc"), s.hash_one("abc"));
    }

    #[test]
    fn fn_hasher_delegates_to_closure() {
        let h = FnHasher(|s: &str| s.bytes().map(u64::from).sum::<u64>());
        assert_eq!(h.digest("ab"), 97 + 98);
        assert_eq!(h.digest(""), 0);
    }
}

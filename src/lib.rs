//! string-set: an insertion-ordered hash set of strings built from a
//! separately chained bucket table over an owning element log.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, verifiable set of unique strings with O(1) expected
//!   add/remove/contains and iteration in insertion order.
//! - Layers:
//!   - ElementLog: owns every string together with its cached digest.
//!     Elements sit in a generational slot map and are linked into a
//!     doubly-linked list, which defines iteration order.
//!   - BucketTable: `table_size` chains of non-owning `Handle`s into the
//!     log; `digest % table_size` selects the chain.
//!   - StringHasher: policy turning a string into a `u64` digest; any
//!     `BuildHasher` qualifies, default `RandomState`.
//!   - StringSet: public API; Cursor/CursorMut give read-only and mutable
//!     positions with an end sentinel.
//!
//! Constraints
//! - Single-threaded: `!Sync` (no internal locking). Moving a set to
//!   another thread is fine.
//! - Handles are stable: resizes rebuild only the bucket table, never the
//!   log, and removal invalidates only the removed element's handle.
//! - Load factor never exceeds one after an insertion. The table starts
//!   at one bucket and doubles, rebuilding every chain from cached
//!   digests; the hasher is never re-run on resize.
//!
//! Matching
//! - A chain entry matches a query when the cached digest is equal and
//!   the stored string is equal. Distinct strings with equal digests are
//!   distinct members.
//!
//! Reentrancy
//! - The hasher is the only user code a set calls. Debug builds panic if
//!   it calls back into the set it serves; release builds skip the check.
//!
//! Notes and non-goals
//! - Strings only; no generic key type.
//! - No `&mut String` access: values are replaced through
//!   `CursorMut::replace_current`, which re-hashes and re-chains.
//! - The library logs resizes and clears at `trace` level through the
//!   `log` facade and never installs a logger itself.

mod bucket_table;
mod cursor;
mod element_log;
mod hasher;
mod reentrancy;
mod string_set;
mod string_set_proptest;

// Public surface
pub use bucket_table::{EXPANSION_FACTOR, INITIAL_TABLE_SIZE};
pub use cursor::{Cursor, CursorMut};
pub use element_log::{Handle, IntoIter, Iter};
pub use hasher::{FnHasher, StringHasher};
pub use string_set::{ReplaceError, StringSet};

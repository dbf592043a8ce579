//! StringSet: public container tying the element log, bucket table and
//! hasher policy together.

use crate::bucket_table::{BucketTable, EXPANSION_FACTOR};
use crate::cursor::{Cursor, CursorMut};
use crate::element_log::{ElementLog, Handle, IntoIter, Iter};
use crate::hasher::StringHasher;
use crate::reentrancy::ReentryCheck;
use std::collections::hash_map::RandomState;

/// Failure of [`CursorMut::replace_current`]. Both variants hand back the
/// value that was not stored.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplaceError {
    /// Another element already holds this value.
    Duplicate(String),
    /// The cursor is at the end; there is nothing to replace.
    AtEnd(String),
}

/// An insertion-ordered set of unique strings.
///
/// Lookups hash the query once, pick a bucket by `digest % table_size`
/// and scan only that bucket's chain, comparing the cached digest first
/// and the string second. Iteration follows insertion order.
///
/// ```
/// use string_set::StringSet;
///
/// let mut set = StringSet::new();
/// assert!(set.add("Some data"));
/// assert!(!set.add("Some data"));
/// assert!(set.contains("Some data"));
/// assert!(!set.contains("some data"));
/// assert!(set.remove("Some data"));
/// assert!(!set.remove("some data"));
/// ```
#[derive(Clone)]
pub struct StringSet<S = RandomState> {
    hasher: S,
    log: ElementLog,
    table: BucketTable,
    reentry: ReentryCheck,
}

impl StringSet {
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<S> Default for StringSet<S>
where
    S: StringHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<S> StringSet<S>
where
    S: StringHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            log: ElementLog::new(),
            table: BucketTable::new(),
            reentry: ReentryCheck::new(),
        }
    }

    /// Build a set from `iter` using `hasher`; duplicates are dropped and
    /// the first occurrence keeps its position.
    pub fn from_iter_with_hasher<I, T>(iter: I, hasher: S) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str> + Into<String>,
    {
        let mut set = Self::with_hasher(hasher);
        set.extend(iter);
        set
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// The configured hasher policy.
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Current number of buckets.
    pub fn table_size(&self) -> usize {
        self.table.table_size()
    }

    /// Elements per bucket; at most 1.0 after any insertion.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.table_size() as f64
    }

    /// Insert `value` unless it is already present. Returns whether it was
    /// inserted. Only allocates when inserting a borrowed value.
    pub fn add<T>(&mut self, value: T) -> bool
    where
        T: AsRef<str> + Into<String>,
    {
        let digest = self.digest_of(value.as_ref());
        if self.locate(digest, value.as_ref()).is_some() {
            return false;
        }
        let handle = self.log.push_back(value.into(), digest);
        self.table.insert(digest, handle);
        self.expand_if_needed();
        true
    }

    /// Remove `value`; returns whether it was present.
    pub fn remove(&mut self, value: &str) -> bool {
        self.take(value).is_some()
    }

    /// Remove `value` and hand back the owned string that was stored.
    pub fn take(&mut self, value: &str) -> Option<String> {
        let handle = self.find(value)?;
        self.excise(handle)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    /// Stable handle to the element equal to `value`, if any.
    pub fn find(&self, value: &str) -> Option<Handle> {
        let digest = self.digest_of(value);
        self.locate(digest, value)
    }

    /// Value behind `handle`, or `None` if its element was removed.
    pub fn get(&self, handle: Handle) -> Option<&str> {
        self.log.value(handle)
    }

    /// Read-only position at `value`, or at the end if absent.
    pub fn cursor(&self, value: &str) -> Cursor<'_> {
        Cursor::new(&self.log, self.find(value))
    }

    /// Mutable position at `value`, or at the end if absent.
    pub fn cursor_mut(&mut self, value: &str) -> CursorMut<'_, S> {
        let at = self.find(value);
        CursorMut::new(self, at)
    }

    /// Read-only position at the first element in insertion order.
    pub fn cursor_front(&self) -> Cursor<'_> {
        Cursor::new(&self.log, self.log.front())
    }

    /// Mutable position at the first element in insertion order.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, S> {
        let at = self.log.front();
        CursorMut::new(self, at)
    }

    /// Values in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.log)
    }

    /// Values in insertion order, starting at `handle`. Empty if the
    /// handle is stale.
    pub fn iter_from(&self, handle: Handle) -> Iter<'_> {
        Iter::starting_at(&self.log, Some(handle))
    }

    /// Remove every element and shrink the table back to one bucket.
    pub fn clear(&mut self) {
        log::trace!("string set clear: dropping {} elements", self.log.len());
        self.log.clear();
        self.table.reset();
    }

    fn digest_of(&self, value: &str) -> u64 {
        let _g = self.reentry.enter();
        self.hasher.digest(value)
    }

    fn locate(&self, digest: u64, value: &str) -> Option<Handle> {
        self.table.chain(digest).iter().copied().find(|&h| {
            self.log
                .get(h)
                .map(|e| e.digest == digest && e.value == value)
                .unwrap_or(false)
        })
    }

    /// Unlink `handle` from its chain and free its element.
    pub(crate) fn excise(&mut self, handle: Handle) -> Option<String> {
        let digest = self.log.digest(handle)?;
        let unlinked = self.table.unlink(digest, handle);
        debug_assert!(unlinked, "live element missing from its bucket");
        self.log.remove(handle)
    }

    /// Swap the value at `handle`, re-chaining it under the new digest.
    pub(crate) fn replace_at(&mut self, handle: Handle, value: String) -> Result<String, ReplaceError> {
        let Some(old_digest) = self.log.digest(handle) else {
            return Err(ReplaceError::AtEnd(value));
        };
        let digest = self.digest_of(&value);
        match self.locate(digest, &value) {
            Some(existing) if existing != handle => return Err(ReplaceError::Duplicate(value)),
            _ => {}
        }
        let old = self
            .log
            .replace(handle, value, digest)
            .map_err(ReplaceError::AtEnd)?;
        self.table.unlink(old_digest, handle);
        self.table.insert(digest, handle);
        Ok(old)
    }

    pub(crate) fn next_of(&self, handle: Handle) -> Option<Handle> {
        self.log.next_of(handle)
    }

    pub(crate) fn log(&self) -> &ElementLog {
        &self.log
    }

    fn expand_if_needed(&mut self) {
        let size = self.table.table_size();
        if self.log.len() <= size {
            return;
        }
        let grown = size.saturating_mul(EXPANSION_FACTOR);
        log::trace!(
            "string set resize: {size} -> {grown} buckets for {} elements",
            self.log.len()
        );
        self.table.rebuild(grown, &self.log);
    }

    /// Structural self-check used by tests.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.table.entry_count(), self.log.len());
        assert!(self.log.len() <= self.table.table_size());
        for (h, e) in self.log.walk(self.log.front()) {
            assert!(self.table.chain(e.digest).contains(&h));
        }
    }
}

impl<S> core::fmt::Debug for StringSet<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(Iter::new(&self.log)).finish()
    }
}

/// Set equality: same members, regardless of insertion order.
impl<S> PartialEq for StringSet<S>
where
    S: StringHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl<S> Eq for StringSet<S> where S: StringHasher {}

impl<S, T> Extend<T> for StringSet<S>
where
    S: StringHasher,
    T: AsRef<str> + Into<String>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

impl<S, T> FromIterator<T> for StringSet<S>
where
    S: StringHasher + Default,
    T: AsRef<str> + Into<String>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_hasher(iter, S::default())
    }
}

impl<T, const N: usize> From<[T; N]> for StringSet
where
    T: AsRef<str> + Into<String>,
{
    fn from(values: [T; N]) -> Self {
        Self::from_iter_with_hasher(values, RandomState::new())
    }
}

impl<'a, S> IntoIterator for &'a StringSet<S> {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        Iter::new(&self.log)
    }
}

impl<S> IntoIterator for StringSet<S> {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter { log: self.log }
    }
}

//! ElementLog: owning, insertion-ordered storage with stable handles.
//!
//! Elements live in a generational slot map and are threaded into a
//! doubly-linked list through `prev`/`next` handles. The slot map gives
//! O(1) access from a handle and never moves an element once inserted;
//! the links give insertion order and O(1) excision.

use core::iter::FusedIterator;
use slotmap::{DefaultKey, SlotMap};

/// Stable reference to one element of a [`StringSet`](crate::StringSet).
///
/// A handle stays valid across unrelated insertions, removals and
/// resizes. Once its own element is removed it never resolves again, even
/// if the underlying slot is reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle(DefaultKey);

#[derive(Clone, Debug)]
pub(crate) struct Element {
    pub(crate) value: String,
    pub(crate) digest: u64,
    prev: Option<Handle>,
    next: Option<Handle>,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct ElementLog {
    slots: SlotMap<DefaultKey, Element>,
    head: Option<Handle>,
    tail: Option<Handle>,
}

impl ElementLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn front(&self) -> Option<Handle> {
        self.head
    }

    pub(crate) fn contains(&self, h: Handle) -> bool {
        self.slots.contains_key(h.0)
    }

    pub(crate) fn get(&self, h: Handle) -> Option<&Element> {
        self.slots.get(h.0)
    }

    pub(crate) fn value(&self, h: Handle) -> Option<&str> {
        self.get(h).map(|e| e.value.as_str())
    }

    pub(crate) fn digest(&self, h: Handle) -> Option<u64> {
        self.get(h).map(|e| e.digest)
    }

    pub(crate) fn next_of(&self, h: Handle) -> Option<Handle> {
        self.get(h).and_then(|e| e.next)
    }

    /// Append at the tail; the new element becomes last in iteration order.
    pub(crate) fn push_back(&mut self, value: String, digest: u64) -> Handle {
        let prev = self.tail;
        let handle = Handle(self.slots.insert(Element {
            value,
            digest,
            prev,
            next: None,
        }));
        match prev {
            Some(p) => self.set_next(p, Some(handle)),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        handle
    }

    /// Unlink and free an element, returning its owned value.
    pub(crate) fn remove(&mut self, h: Handle) -> Option<String> {
        let e = self.slots.remove(h.0)?;
        match e.prev {
            Some(p) => self.set_next(p, e.next),
            None => self.head = e.next,
        }
        match e.next {
            Some(n) => self.set_prev(n, e.prev),
            None => self.tail = e.prev,
        }
        Some(e.value)
    }

    pub(crate) fn pop_front(&mut self) -> Option<String> {
        let h = self.head?;
        self.remove(h)
    }

    /// Swap the value (and its digest) in place, keeping the element's
    /// position. A stale handle hands `value` back.
    pub(crate) fn replace(&mut self, h: Handle, value: String, digest: u64) -> Result<String, String> {
        match self.slots.get_mut(h.0) {
            Some(e) => {
                e.digest = digest;
                Ok(core::mem::replace(&mut e.value, value))
            }
            None => Err(value),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
    }

    /// Walk elements in insertion order starting at `from`.
    pub(crate) fn walk(&self, from: Option<Handle>) -> Walk<'_> {
        Walk { log: self, at: from }
    }

    fn set_next(&mut self, h: Handle, next: Option<Handle>) {
        if let Some(e) = self.slots.get_mut(h.0) {
            e.next = next;
        }
    }

    fn set_prev(&mut self, h: Handle, prev: Option<Handle>) {
        if let Some(e) = self.slots.get_mut(h.0) {
            e.prev = prev;
        }
    }
}

/// Link-following walk yielding `(handle, element)` pairs.
#[derive(Clone)]
pub(crate) struct Walk<'a> {
    log: &'a ElementLog,
    at: Option<Handle>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (Handle, &'a Element);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let h = self.at?;
        let e = self.log.get(h)?;
        self.at = e.next;
        Some((h, e))
    }
}

/// Iterator over the values of a `StringSet` in insertion order.
#[derive(Clone)]
pub struct Iter<'a> {
    walk: Walk<'a>,
    // Exact count when iterating from the front, otherwise unknown.
    remaining: Option<usize>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(log: &'a ElementLog) -> Self {
        Iter {
            walk: log.walk(log.front()),
            remaining: Some(log.len()),
        }
    }

    pub(crate) fn starting_at(log: &'a ElementLog, at: Option<Handle>) -> Self {
        let at = at.filter(|&h| log.contains(h));
        let remaining = if at == log.front() {
            Some(log.len())
        } else {
            None
        };
        Iter {
            walk: log.walk(at),
            remaining,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (_, e) = self.walk.next()?;
        if let Some(n) = self.remaining.as_mut() {
            *n = n.saturating_sub(1);
        }
        Some(e.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::from(self.walk.at.is_some()), Some(self.walk.log.len())),
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl core::fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owning iterator over the values of a `StringSet` in insertion order.
#[derive(Debug)]
pub struct IntoIter {
    pub(crate) log: ElementLog,
}

impl Iterator for IntoIter {
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<String> {
        self.log.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.log.len(), Some(self.log.len()))
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

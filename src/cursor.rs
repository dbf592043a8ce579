//! Forward-only positions into a `StringSet`.
//!
//! A cursor points at one element or at the end. `Cursor` is a cheap,
//! copyable read-only position; `CursorMut` borrows the set mutably and
//! can remove or replace the element under it. Neither hands out
//! `&mut String`: a value edited in place would no longer match its
//! cached digest.

use crate::element_log::{ElementLog, Handle, Iter};
use crate::hasher::StringHasher;
use crate::string_set::{ReplaceError, StringSet};

#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    log: &'a ElementLog,
    at: Option<Handle>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(log: &'a ElementLog, at: Option<Handle>) -> Self {
        Cursor { log, at }
    }

    /// Value under the cursor; `None` at the end.
    pub fn current(&self) -> Option<&'a str> {
        self.at.and_then(|h| self.log.value(h))
    }

    pub fn handle(&self) -> Option<Handle> {
        self.at
    }

    pub fn is_end(&self) -> bool {
        self.at.is_none()
    }

    /// Step to the next element in insertion order. The end is terminal.
    pub fn move_next(&mut self) {
        self.at = self.at.and_then(|h| self.log.next_of(h));
    }

    /// Iterator over the current element and everything after it.
    pub fn iter(&self) -> Iter<'a> {
        Iter::starting_at(self.log, self.at)
    }
}

/// Two cursors are equal when they are over the same set and at the same
/// position; all end cursors of one set compare equal.
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.log, other.log) && self.at == other.at
    }
}

impl Eq for Cursor<'_> {}

impl core::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Cursor").field(&self.current()).finish()
    }
}

pub struct CursorMut<'a, S> {
    set: &'a mut StringSet<S>,
    at: Option<Handle>,
}

impl<'a, S> CursorMut<'a, S>
where
    S: StringHasher,
{
    pub(crate) fn new(set: &'a mut StringSet<S>, at: Option<Handle>) -> Self {
        CursorMut { set, at }
    }

    pub fn current(&self) -> Option<&str> {
        self.at.and_then(|h| self.set.get(h))
    }

    pub fn handle(&self) -> Option<Handle> {
        self.at
    }

    pub fn is_end(&self) -> bool {
        self.at.is_none()
    }

    pub fn move_next(&mut self) {
        self.at = self.at.and_then(|h| self.set.next_of(h));
    }

    /// Read-only view of the same position.
    pub fn as_cursor(&self) -> Cursor<'_> {
        Cursor::new(self.set.log(), self.at)
    }

    /// Remove the element under the cursor and advance to its successor.
    /// Returns `None` at the end.
    pub fn remove_current(&mut self) -> Option<String> {
        let h = self.at?;
        self.at = self.set.next_of(h);
        self.set.excise(h)
    }

    /// Swap the value under the cursor for `value`, keeping its position
    /// in iteration order. Fails without changing anything if `value` is
    /// already held by a different element or the cursor is at the end.
    pub fn replace_current(&mut self, value: String) -> Result<String, ReplaceError> {
        match self.at {
            Some(h) => self.set.replace_at(h, value),
            None => Err(ReplaceError::AtEnd(value)),
        }
    }
}

impl<S> core::fmt::Debug for CursorMut<'_, S>
where
    S: StringHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CursorMut").field(&self.current()).finish()
    }
}

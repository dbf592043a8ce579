//! Debug-only check that a set's hasher never calls back into the set.
//!
//! Every hasher invocation runs inside `ReentryCheck::enter`. In debug
//! builds a nested entry panics; in release builds the check compiles
//! away. The `Cell` marker keeps the owning set `!Sync` in every build.

use core::cell::Cell;
use core::marker::PhantomData;

#[derive(Debug, Default)]
pub(crate) struct ReentryCheck {
    #[cfg(debug_assertions)]
    busy: Cell<bool>,
    _unsync: PhantomData<Cell<()>>,
}

impl ReentryCheck {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            busy: Cell::new(false),
            _unsync: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn enter(&self) -> ReentryGuard<'_> {
        #[cfg(debug_assertions)]
        assert!(
            !self.busy.replace(true),
            "string set re-entered from its own hasher"
        );
        ReentryGuard { owner: self }
    }
}

// A cloned set gets its own, idle check.
impl Clone for ReentryCheck {
    fn clone(&self) -> Self {
        Self::new()
    }
}

pub(crate) struct ReentryGuard<'a> {
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    owner: &'a ReentryCheck,
}

impl Drop for ReentryGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.owner.busy.set(false);
    }
}

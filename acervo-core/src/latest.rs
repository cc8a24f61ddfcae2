//! Latest-value coalescing.
//!
//! Rapid query changes do not need to be processed one by one - only the
//! most recent value matters. [`Latest`] is the scheduling policy behind
//! [`Engine::queue_query`](crate::Engine::queue_query): every `set`
//! replaces the pending value, and a single `take` observes whatever was
//! last written. The guarantee is "eventually processes the latest value",
//! not "processes every update".

use crate::engine::Engine;

/// A slot holding at most one pending value; newer writes win.
#[derive(Debug, Clone, Default)]
pub struct Latest<T> {
    pending: Option<T>,
}

impl<T> Latest<T> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Stores a value, replacing any pending one.
    #[inline(always)]
    pub fn set(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// Takes the pending value, leaving the slot empty.
    #[inline(always)]
    #[must_use]
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Returns `true` if a value is waiting.
    #[inline(always)]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops any pending value.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

impl Engine {
    /// Queues a query update without recomputing anything.
    ///
    /// Successive calls coalesce; only the last value queued before
    /// [`Engine::flush_queries`] is ever applied.
    pub fn queue_query(&mut self, query: impl Into<String>) {
        self.deferred.set(query.into());
    }

    /// Applies the most recently queued query, if any.
    ///
    /// Returns `true` if the engine's query changed.
    pub fn flush_queries(&mut self) -> bool {
        match self.deferred.take() {
            Some(query) if query != self.query => {
                self.query = query;
                true
            }
            _ => false,
        }
    }
}

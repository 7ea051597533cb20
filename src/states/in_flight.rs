//! In-Flight Set
//!
//! Handles of operations that are still running, keyed by a reservation id.
//! Starting a new operation never drops an older one; each entry leaves the
//! set when its own operation settles, and `clear` drops whatever is left.

/// Running operations owned by one component
#[derive(Debug)]
pub struct InFlight<T> {
    next_id: u64,
    entries: Vec<(u64, T)>,
}

impl<T> Default for InFlight<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> InFlight<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an id before the handle exists
    pub fn reserve(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Track the handle for a reserved id
    pub fn insert(&mut self, id: u64, handle: T) {
        self.entries.push((id, handle));
    }

    /// Take the handle of a settled operation out of the set
    pub fn remove(&mut self, id: u64) -> Option<T> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.swap_remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every handle still tracked
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::{RetryEffect, RetryEvent, RetryState, settle_refetch};
    use futures::FutureExt;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Flags when dropped, standing in for a cancellable task
    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_new_entry_keeps_older_ones() {
        let first_dropped = Rc::new(Cell::new(false));
        let mut tasks = InFlight::new();

        let first = tasks.reserve();
        tasks.insert(first, DropFlag(first_dropped.clone()));
        let second = tasks.reserve();
        tasks.insert(second, DropFlag(Rc::new(Cell::new(false))));

        assert_ne!(first, second);
        assert_eq!(tasks.len(), 2);
        assert!(!first_dropped.get());
    }

    #[test]
    fn test_remove_only_takes_its_own_entry() {
        let mut tasks = InFlight::new();
        let first = tasks.reserve();
        tasks.insert(first, "first");
        let second = tasks.reserve();
        tasks.insert(second, "second");

        assert_eq!(tasks.remove(first), Some("first"));
        assert_eq!(tasks.remove(first), None);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.remove(second), Some("second"));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_clear_drops_everything() {
        let dropped = Rc::new(Cell::new(false));
        let mut tasks = InFlight::new();
        let id = tasks.reserve();
        tasks.insert(id, DropFlag(dropped.clone()));

        tasks.clear();
        assert!(dropped.get());
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_first_refetch_settles_after_second_retry() {
        let mut retry = RetryState::new();
        let mut tasks = InFlight::new();

        // Press, error cleared by props, error back, press again
        assert_eq!(retry.dispatch(RetryEvent::RetryPressed), RetryEffect::InvokeRefetch);
        let first = tasks.reserve();
        tasks.insert(first, settle_refetch(async { Ok(()) }).boxed_local());
        retry.dispatch(RetryEvent::PropsChanged { error: false });
        assert_eq!(retry.dispatch(RetryEvent::RetryPressed), RetryEffect::InvokeRefetch);
        let second = tasks.reserve();
        tasks.insert(second, settle_refetch(async { Ok(()) }).boxed_local());

        let Some(pending) = tasks.remove(first) else {
            panic!("first refetch should still be tracked");
        };
        let event = futures::executor::block_on(pending);
        assert_eq!(event, RetryEvent::RefetchSettled);
        retry.dispatch(event);

        assert!(retry.has_tested_refetch());
        assert_eq!(tasks.len(), 1);
    }
}

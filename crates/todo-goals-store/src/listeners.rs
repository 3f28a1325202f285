//! Listener registry
//!
//! Listeners are keyed by a monotonically increasing [`SubscriptionId`], so
//! iterating the map in key order yields registration order.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A zero-argument change callback
pub(crate) type Listener = Rc<dyn Fn()>;

/// Stable handle for one registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: BTreeMap<SubscriptionId, Listener>,
}

impl Listeners {
    pub fn insert(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, listener);
        id
    }

    /// Returns false if the id was not registered (already removed)
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Copy of the current listeners in registration order
    ///
    /// Notification iterates the snapshot, so listeners may subscribe,
    /// unsubscribe or dispatch without holding a borrow of the registry.
    pub fn snapshot(&self) -> Vec<Listener> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field("entries", &format!("{} listeners", self.entries.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_ids_are_never_reused() {
        let mut listeners = Listeners::default();
        let first = listeners.insert(Rc::new(|| {}));
        assert!(listeners.remove(first));
        let second = listeners.insert(Rc::new(|| {}));
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut listeners = Listeners::default();
        let id = listeners.insert(Rc::new(|| {}));
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn test_snapshot_keeps_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();
        let mut ids = Vec::new();
        for n in 0..4 {
            let calls = calls.clone();
            ids.push(listeners.insert(Rc::new(move || calls.borrow_mut().push(n))));
        }
        listeners.remove(ids[1]);

        for listener in listeners.snapshot() {
            listener();
        }
        assert_eq!(*calls.borrow(), vec![0, 2, 3]);
    }
}

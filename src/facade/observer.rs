//! Change notification for presentation layers.
//!
//! Observers are told *that* the game changed, never *what* changed; they
//! re-read whatever they display through the facade's queries.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// How a mutation is dispatched.
///
/// Trials are bot search steps that are always rolled back; they must never
/// reach observers. Keeping this an explicit argument means the two paths
/// cannot be confused by a forgotten flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A real state change: notify observers once.
    Commit,
    /// A transient search step: stay silent.
    Trial,
}

/// Something that wants to hear about committed changes.
pub trait Observer {
    fn on_change(&mut self);
}

impl<F: FnMut()> Observer for F {
    fn on_change(&mut self) {
        self()
    }
}

/// Handle returned by [`ObserverRegistry::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Observers in subscription order.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: u32,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer, returns its ID.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if the ID is unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Notify every observer, unless this is a trial.
    pub fn notify(&mut self, dispatch: Dispatch) {
        if dispatch == Dispatch::Trial {
            return;
        }
        trace!(observers = self.observers.len(), "notifying");
        for (_, observer) in &mut self.observers {
            observer.on_change();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_commit_notifies_trial_does_not() {
        let count = Rc::new(Cell::new(0));
        let mut registry = ObserverRegistry::new();
        let seen = Rc::clone(&count);
        registry.subscribe(move || seen.set(seen.get() + 1));

        registry.notify(Dispatch::Trial);
        assert_eq!(count.get(), 0);

        registry.notify(Dispatch::Commit);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(Cell::new(0));
        let mut registry = ObserverRegistry::new();
        let seen = Rc::clone(&count);
        let id = registry.subscribe(move || seen.set(seen.get() + 1));
        assert_eq!(registry.len(), 1);

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.notify(Dispatch::Commit);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = ObserverRegistry::new();
        let a = registry.subscribe(|| {});
        let b = registry.subscribe(|| {});
        assert_ne!(a, b);
        assert_eq!(b.to_string(), "Observer(1)");
    }
}

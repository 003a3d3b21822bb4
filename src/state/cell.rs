//! Observable state container and in-flight tokens.
//!
//! DESIGN
//! ======
//! Each hook owns one [`StateCell`]. A mutation clones the current snapshot,
//! edits the clone, swaps it in, then tells observers. Snapshots are never
//! mutated after publication, so a renderer can hold one across an await.
//!
//! Mutations are synchronous; on a single-threaded executor no other task can
//! observe a half-applied update.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Observer<S> = Rc<dyn Fn(&S)>;

pub struct StateCell<S> {
    current: RefCell<Rc<S>>,
    observers: RefCell<Vec<Observer<S>>>,
}

impl<S: Clone> StateCell<S> {
    pub fn new(initial: S) -> Self {
        Self { current: RefCell::new(Rc::new(initial)), observers: RefCell::new(Vec::new()) }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Rc<S> {
        Rc::clone(&self.current.borrow())
    }

    /// Apply `change` to a copy of the current state, publish it, and notify
    /// observers with the new snapshot.
    pub fn update(&self, change: impl FnOnce(&mut S)) -> Rc<S> {
        let mut next = S::clone(&self.current.borrow());
        change(&mut next);
        let next = Rc::new(next);
        *self.current.borrow_mut() = Rc::clone(&next);

        let observers = self.observers.borrow().clone();
        for observer in observers {
            observer(&next);
        }
        next
    }

    /// Register `observer`; it is called after every later update.
    pub fn subscribe(&self, observer: impl Fn(&S) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }
}

impl<S: Clone + Default> Default for StateCell<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Single-slot in-flight marker. Acquiring is one check-and-set step, so two
/// callers can never both pass.
#[derive(Debug, Default)]
pub struct InFlight {
    busy: Cell<bool>,
}

impl InFlight {
    /// Take the slot, or `None` if a holder is still alive.
    pub fn try_acquire(&self) -> Option<InFlightGuard<'_>> {
        if self.busy.replace(true) {
            return None;
        }
        Some(InFlightGuard { busy: &self.busy })
    }

    #[cfg(test)]
    pub(crate) fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

/// Releases its [`InFlight`] slot on drop.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    busy: &'a Cell<bool>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

//! Guard predicates for controlling state transitions.
//!
//! Guards are zero-argument boolean functions attached to transition rules.
//! They are evaluated fresh on every tick — no memoization — so they can read
//! live external state such as input intent or health through shared handles
//! captured at registration time.

/// Predicate deciding whether a transition rule fires.
///
/// A guard captures non-owning handles (`Rc<Cell<_>>`, `Rc<RefCell<_>>`) to
/// whatever external state it needs and reads them on each [`check`]. It must
/// not mutate the machine it is registered with; the machine is driven
/// strictly from the top level, never re-entrantly from inside a guard.
///
/// # Example
///
/// ```rust
/// use motive::Guard;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let alive = Rc::new(Cell::new(true));
///
/// let watcher = Rc::clone(&alive);
/// let is_dead = Guard::new(move || !watcher.get());
///
/// assert!(!is_dead.check());
/// alive.set(false);
/// assert!(is_dead.check());
/// ```
///
/// [`check`]: Guard::check
pub struct Guard {
    predicate: Box<dyn Fn() -> bool>,
}

impl Guard {
    /// Create a guard from a predicate closure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate against the live external state it captured.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

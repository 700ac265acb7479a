//! Transition rule data.

use crate::core::{Guard, StateId};

/// A guarded edge to a target state.
///
/// Rules carry no source of their own: per-state rules live in the machine's
/// table under their source state, and global rules live in a separate list
/// checked from every state. Registration order is preserved and duplicates
/// are kept — a rule added twice is simply checked twice.
pub struct TransitionRule {
    /// The state this rule resolves to when it fires.
    pub to: StateId,
    /// The guard evaluated fresh on every tick.
    pub guard: Guard,
}

impl TransitionRule {
    /// Evaluate the guard.
    pub fn fires(&self) -> bool {
        self.guard.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn rule_fires_when_guard_is_true() {
        let rule = TransitionRule {
            to: StateId(0),
            guard: Guard::new(|| true),
        };
        assert!(rule.fires());
    }

    #[test]
    fn rule_tracks_guard_environment() {
        let flag = Rc::new(Cell::new(false));

        let watched = Rc::clone(&flag);
        let rule = TransitionRule {
            to: StateId(1),
            guard: Guard::new(move || watched.get()),
        };

        assert!(!rule.fires());
        flag.set(true);
        assert!(rule.fires());
    }
}

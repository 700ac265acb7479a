//! State machine that evaluates guarded transitions once per tick.

use crate::core::{Guard, State, StateHistory, StateId, TransitionRecord};
use crate::machine::error::MachineError;
use crate::machine::transition::TransitionRule;
use chrono::Utc;
use tracing::debug;

/// Predicate-driven finite state machine.
///
/// The machine owns its registered states and two rule tables: an ordered
/// list of per-state rules for each registered state, and an ordered list of
/// global rules checked from every state with higher precedence. An owner
/// registers states and rules, establishes the initial state with
/// [`set_state`], then calls [`tick`] once per external scheduling step.
///
/// The machine is single-threaded and strictly externally driven: guards and
/// lifecycle hooks must not call back into it.
///
/// # Example
///
/// ```rust
/// use motive::{Guard, State, StateMachine};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// struct Mode(&'static str);
///
/// impl State for Mode {
///     fn name(&self) -> &str {
///         self.0
///     }
/// }
///
/// let switch = Rc::new(Cell::new(false));
///
/// let mut machine = StateMachine::new();
/// let off = machine.add_state(Mode("off"));
/// let on = machine.add_state(Mode("on"));
///
/// let watched = Rc::clone(&switch);
/// machine.add_transition(off, on, Guard::new(move || watched.get()))?;
/// machine.set_state(off)?;
///
/// machine.tick()?;
/// assert_eq!(machine.current(), Some(off));
///
/// switch.set(true);
/// machine.tick()?;
/// assert_eq!(machine.current_name(), Some("on"));
/// # Ok::<(), motive::MachineError>(())
/// ```
///
/// [`set_state`]: StateMachine::set_state
/// [`tick`]: StateMachine::tick
pub struct StateMachine {
    states: Vec<Box<dyn State>>,
    rules: Vec<Vec<TransitionRule>>,
    any_rules: Vec<TransitionRule>,
    current: Option<StateId>,
    history: StateHistory,
    ticks: u64,
}

impl StateMachine {
    /// Create a machine with no states and no current state.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            rules: Vec::new(),
            any_rules: Vec::new(),
            current: None,
            history: StateHistory::new(),
            ticks: 0,
        }
    }

    /// Register a state and return its handle.
    pub fn add_state<S: State + 'static>(&mut self, state: S) -> StateId {
        self.add_boxed_state(Box::new(state))
    }

    pub(crate) fn add_boxed_state(&mut self, state: Box<dyn State>) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        self.rules.push(Vec::new());
        id
    }

    /// Register a per-state rule from `from` to `to`.
    ///
    /// Rules are kept in registration order with no deduplication. Unknown
    /// endpoints are rejected immediately.
    pub fn add_transition(
        &mut self,
        from: StateId,
        to: StateId,
        guard: Guard,
    ) -> Result<(), MachineError> {
        self.check_registered(from)?;
        self.check_registered(to)?;
        self.rules[from.0].push(TransitionRule { to, guard });
        Ok(())
    }

    /// Register a global rule, checked from every state before any per-state
    /// rule.
    pub fn add_any_transition(&mut self, to: StateId, guard: Guard) -> Result<(), MachineError> {
        self.check_registered(to)?;
        self.any_rules.push(TransitionRule { to, guard });
        Ok(())
    }

    /// Unconditionally make `target` the current state.
    ///
    /// This is both the way the initial state is established and the escape
    /// hatch for forcing a state outside the declarative rules (for example
    /// forcing idle when the entity is disabled). If a previous, different
    /// state was current its `exit` runs first and the switch is recorded in
    /// the history; then the target's `enter` runs. Setting the state the
    /// machine is already in does nothing — no `exit`, no `enter`, no record.
    pub fn set_state(&mut self, target: StateId) -> Result<(), MachineError> {
        self.check_registered(target)?;

        if self.current == Some(target) {
            return Ok(());
        }

        if let Some(previous) = self.current {
            self.states[previous.0].exit();

            let record = TransitionRecord {
                from: self.states[previous.0].name().to_string(),
                to: self.states[target.0].name().to_string(),
                timestamp: Utc::now(),
                tick: self.ticks,
            };
            debug!(from = %record.from, to = %record.to, tick = record.tick, "state transition");
            self.history = self.history.record(record);
        } else {
            debug!(state = self.states[target.0].name(), "initial state");
        }

        self.current = Some(target);
        self.states[target.0].enter();
        Ok(())
    }

    /// Run one evaluate-and-dispatch step.
    ///
    /// Global rules are checked first, then the current state's rules, each
    /// in registration order; the first guard returning true resolves the
    /// target and the remaining rules are not evaluated. If a target was
    /// resolved the machine switches to it via [`set_state`]. Finally the
    /// now-current state's `tick` runs — a state entered this step receives
    /// its first `tick` in the same step as its `enter`.
    ///
    /// Fails with [`MachineError::NoCurrentState`] when no initial state has
    /// been established yet. Guard or lifecycle panics propagate to the
    /// caller; the machine does not try to continue past them.
    ///
    /// [`set_state`]: StateMachine::set_state
    pub fn tick(&mut self) -> Result<(), MachineError> {
        let current = self.current.ok_or(MachineError::NoCurrentState)?;
        self.ticks += 1;

        let target = self
            .any_rules
            .iter()
            .find(|rule| rule.fires())
            .map(|rule| rule.to)
            .or_else(|| {
                self.rules[current.0]
                    .iter()
                    .find(|rule| rule.fires())
                    .map(|rule| rule.to)
            });

        if let Some(target) = target {
            self.set_state(target)?;
        }

        let active = target.unwrap_or(current);
        self.states[active.0].tick();
        Ok(())
    }

    /// Handle of the current state, or `None` before the first
    /// [`set_state`](StateMachine::set_state).
    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    /// Name of the current state, for logs and assertions.
    pub fn current_name(&self) -> Option<&str> {
        self.current.map(|id| self.states[id.0].name())
    }

    /// The transition history recorded so far.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Number of completed [`tick`](StateMachine::tick) calls.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn check_registered(&self, id: StateId) -> Result<(), MachineError> {
        if id.0 >= self.states.len() {
            return Err(MachineError::UnknownState { index: id.0 });
        }
        Ok(())
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Counters {
        enters: Rc<Cell<u32>>,
        ticks: Rc<Cell<u32>>,
        exits: Rc<Cell<u32>>,
    }

    struct Probe {
        name: &'static str,
        counters: Counters,
    }

    impl Probe {
        fn new(name: &'static str) -> (Self, Counters) {
            let counters = Counters::default();
            (
                Self {
                    name,
                    counters: counters.clone(),
                },
                counters,
            )
        }
    }

    impl State for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn enter(&mut self) {
            self.counters.enters.set(self.counters.enters.get() + 1);
        }

        fn tick(&mut self) {
            self.counters.ticks.set(self.counters.ticks.get() + 1);
        }

        fn exit(&mut self) {
            self.counters.exits.set(self.counters.exits.get() + 1);
        }
    }

    #[test]
    fn set_state_enters_initial_state() {
        let mut machine = StateMachine::new();
        let (probe, counters) = Probe::new("idle");
        let idle = machine.add_state(probe);

        machine.set_state(idle).unwrap();

        assert_eq!(machine.current(), Some(idle));
        assert_eq!(counters.enters.get(), 1);
        assert_eq!(counters.exits.get(), 0);
    }

    #[test]
    fn set_state_exits_previous_state_first() {
        let mut machine = StateMachine::new();
        let (idle_probe, idle_counters) = Probe::new("idle");
        let (move_probe, move_counters) = Probe::new("move");
        let idle = machine.add_state(idle_probe);
        let moving = machine.add_state(move_probe);

        machine.set_state(idle).unwrap();
        machine.set_state(moving).unwrap();

        assert_eq!(machine.current(), Some(moving));
        assert_eq!(idle_counters.exits.get(), 1);
        assert_eq!(move_counters.enters.get(), 1);
    }

    #[test]
    fn set_state_to_current_state_is_a_noop() {
        let mut machine = StateMachine::new();
        let (probe, counters) = Probe::new("idle");
        let idle = machine.add_state(probe);

        machine.set_state(idle).unwrap();
        machine.set_state(idle).unwrap();

        assert_eq!(counters.enters.get(), 1);
        assert_eq!(counters.exits.get(), 0);
        assert!(machine.history().transitions().is_empty());
    }

    #[test]
    fn tick_before_initial_state_fails_fast() {
        let mut machine = StateMachine::new();
        machine.add_state(Probe::new("idle").0);

        let result = machine.tick();

        assert!(matches!(result, Err(MachineError::NoCurrentState)));
    }

    #[test]
    fn tick_without_matching_rule_keeps_state() {
        let mut machine = StateMachine::new();
        let (probe, counters) = Probe::new("idle");
        let idle = machine.add_state(probe);
        let other = machine.add_state(Probe::new("other").0);
        machine
            .add_transition(idle, other, Guard::new(|| false))
            .unwrap();

        machine.set_state(idle).unwrap();
        machine.tick().unwrap();

        assert_eq!(machine.current(), Some(idle));
        assert_eq!(counters.ticks.get(), 1);
        assert_eq!(counters.exits.get(), 0);
    }

    #[test]
    fn first_matching_rule_wins() {
        let mut machine = StateMachine::new();
        let a = machine.add_state(Probe::new("a").0);
        let b = machine.add_state(Probe::new("b").0);
        let c = machine.add_state(Probe::new("c").0);
        machine.add_transition(a, b, Guard::new(|| false)).unwrap();
        machine.add_transition(a, c, Guard::new(|| true)).unwrap();

        machine.set_state(a).unwrap();
        machine.tick().unwrap();

        assert_eq!(machine.current(), Some(c));
    }

    #[test]
    fn earlier_rule_shadows_later_rule() {
        let mut machine = StateMachine::new();
        let a = machine.add_state(Probe::new("a").0);
        let b = machine.add_state(Probe::new("b").0);
        let c = machine.add_state(Probe::new("c").0);
        machine.add_transition(a, b, Guard::new(|| true)).unwrap();
        machine.add_transition(a, c, Guard::new(|| true)).unwrap();

        machine.set_state(a).unwrap();
        machine.tick().unwrap();

        assert_eq!(machine.current(), Some(b));
    }

    #[test]
    fn global_rule_preempts_state_rule() {
        let mut machine = StateMachine::new();
        let a = machine.add_state(Probe::new("a").0);
        let b = machine.add_state(Probe::new("b").0);
        let c = machine.add_state(Probe::new("c").0);
        machine.add_transition(a, c, Guard::new(|| true)).unwrap();
        machine.add_any_transition(b, Guard::new(|| true)).unwrap();

        machine.set_state(a).unwrap();
        machine.tick().unwrap();

        assert_eq!(machine.current(), Some(b));
    }

    #[test]
    fn newly_entered_state_ticks_in_the_same_step() {
        let mut machine = StateMachine::new();
        let (idle_probe, idle_counters) = Probe::new("idle");
        let (move_probe, move_counters) = Probe::new("move");
        let idle = machine.add_state(idle_probe);
        let moving = machine.add_state(move_probe);
        machine
            .add_transition(idle, moving, Guard::new(|| true))
            .unwrap();

        machine.set_state(idle).unwrap();
        machine.tick().unwrap();

        assert_eq!(machine.current(), Some(moving));
        assert_eq!(move_counters.enters.get(), 1);
        assert_eq!(move_counters.ticks.get(), 1);
        assert_eq!(idle_counters.ticks.get(), 0);
    }

    #[test]
    fn duplicate_rules_are_kept_and_harmless() {
        let hits = Rc::new(Cell::new(0u32));
        let mut machine = StateMachine::new();
        let a = machine.add_state(Probe::new("a").0);
        let b = machine.add_state(Probe::new("b").0);

        let counted = Rc::clone(&hits);
        machine
            .add_transition(
                a,
                b,
                Guard::new(move || {
                    counted.set(counted.get() + 1);
                    false
                }),
            )
            .unwrap();
        let counted = Rc::clone(&hits);
        machine
            .add_transition(
                a,
                b,
                Guard::new(move || {
                    counted.set(counted.get() + 1);
                    false
                }),
            )
            .unwrap();

        machine.set_state(a).unwrap();
        machine.tick().unwrap();

        assert_eq!(machine.current(), Some(a));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn winning_rule_short_circuits_later_guards() {
        let evaluated = Rc::new(Cell::new(false));
        let mut machine = StateMachine::new();
        let a = machine.add_state(Probe::new("a").0);
        let b = machine.add_state(Probe::new("b").0);
        machine.add_transition(a, b, Guard::new(|| true)).unwrap();

        let touched = Rc::clone(&evaluated);
        machine
            .add_transition(
                a,
                b,
                Guard::new(move || {
                    touched.set(true);
                    true
                }),
            )
            .unwrap();

        machine.set_state(a).unwrap();
        machine.tick().unwrap();

        assert!(!evaluated.get());
    }

    #[test]
    fn foreign_state_handle_is_rejected() {
        let mut donor = StateMachine::new();
        donor.add_state(Probe::new("a").0);
        let foreign = donor.add_state(Probe::new("b").0);

        let mut machine = StateMachine::new();
        let local = machine.add_state(Probe::new("only").0);

        assert!(matches!(
            machine.set_state(foreign),
            Err(MachineError::UnknownState { index: 1 })
        ));
        assert!(matches!(
            machine.add_transition(local, foreign, Guard::new(|| true)),
            Err(MachineError::UnknownState { index: 1 })
        ));
        assert!(matches!(
            machine.add_any_transition(foreign, Guard::new(|| true)),
            Err(MachineError::UnknownState { index: 1 })
        ));
    }

    #[test]
    fn guard_panic_propagates_to_tick_caller() {
        let mut machine = StateMachine::new();
        let a = machine.add_state(Probe::new("a").0);
        let b = machine.add_state(Probe::new("b").0);
        machine
            .add_transition(a, b, Guard::new(|| panic!("guard fault")))
            .unwrap();

        machine.set_state(a).unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| machine.tick()));

        assert!(result.is_err());
    }

    #[test]
    fn history_records_rule_driven_and_forced_transitions() {
        let moving = Rc::new(Cell::new(false));
        let mut machine = StateMachine::new();
        let idle = machine.add_state(Probe::new("idle").0);
        let walk = machine.add_state(Probe::new("move").0);

        let watched = Rc::clone(&moving);
        machine
            .add_transition(idle, walk, Guard::new(move || watched.get()))
            .unwrap();

        machine.set_state(idle).unwrap();
        moving.set(true);
        machine.tick().unwrap();
        machine.set_state(idle).unwrap();

        let path = machine.history().get_path();
        assert_eq!(path, vec!["idle", "move", "idle"]);
        assert_eq!(machine.history().transitions()[0].tick, 1);
    }
}

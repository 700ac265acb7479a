//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Guard, State, StateId};
use crate::machine::StateMachine;

/// Builder collecting states and rules before assembling a [`StateMachine`].
///
/// Registration order is preserved exactly as with the machine's own
/// methods; the difference is that nothing is validated until
/// [`build`](StateMachineBuilder::build), which checks every endpoint and
/// requires an initial state, then hands back a machine that has already
/// entered it.
///
/// # Example
///
/// ```rust
/// use motive::{Guard, State, StateMachineBuilder};
///
/// struct Mode(&'static str);
///
/// impl State for Mode {
///     fn name(&self) -> &str {
///         self.0
///     }
/// }
///
/// let mut builder = StateMachineBuilder::new();
/// let idle = builder.add_state(Mode("idle"));
/// let work = builder.add_state(Mode("work"));
/// builder.transition(idle, work, Guard::new(|| true));
/// builder.initial(idle);
///
/// let machine = builder.build()?;
/// assert_eq!(machine.current_name(), Some("idle"));
/// # Ok::<(), motive::BuildError>(())
/// ```
pub struct StateMachineBuilder {
    states: Vec<Box<dyn State>>,
    rules: Vec<(StateId, StateId, Guard)>,
    any_rules: Vec<(StateId, Guard)>,
    initial: Option<StateId>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            rules: Vec::new(),
            any_rules: Vec::new(),
            initial: None,
        }
    }

    /// Register a state and return its handle.
    pub fn add_state<S: State + 'static>(&mut self, state: S) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(Box::new(state));
        id
    }

    /// Add a per-state rule from `from` to `to`.
    pub fn transition(&mut self, from: StateId, to: StateId, guard: Guard) -> &mut Self {
        self.rules.push((from, to, guard));
        self
    }

    /// Add a global rule, checked from every state before per-state rules.
    pub fn any_transition(&mut self, to: StateId, guard: Guard) -> &mut Self {
        self.any_rules.push((to, guard));
        self
    }

    /// Set the initial state (required).
    pub fn initial(&mut self, state: StateId) -> &mut Self {
        self.initial = Some(state);
        self
    }

    /// Build the state machine.
    ///
    /// Validates that an initial state was set and that every rule endpoint
    /// refers to a state registered with this builder, then assembles the
    /// machine and enters the initial state.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let registered = self.states.len();
        let check = |id: StateId| {
            if id.0 >= registered {
                Err(BuildError::UnknownState { index: id.0 })
            } else {
                Ok(())
            }
        };

        check(initial)?;
        for (from, to, _) in &self.rules {
            check(*from)?;
            check(*to)?;
        }
        for (to, _) in &self.any_rules {
            check(*to)?;
        }

        let mut machine = StateMachine::new();
        for state in self.states {
            machine.add_boxed_state(state);
        }
        for (from, to, guard) in self.rules {
            machine.add_transition(from, to, guard)?;
        }
        for (to, guard) in self.any_rules {
            machine.add_any_transition(to, guard)?;
        }
        machine.set_state(initial)?;

        Ok(machine)
    }
}

impl Default for StateMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! The State capability trait and its identity handle.
//!
//! A state is one mode of operation for a machine-driven entity. It owns no
//! transitions; those are data registered with the machine that hosts it.

/// Handle identifying a state registered with a [`StateMachine`].
///
/// Returned by [`StateMachine::add_state`]; all transition registration and
/// forced overrides refer to states through this handle. Handles are only
/// meaningful for the machine that issued them.
///
/// [`StateMachine`]: crate::machine::StateMachine
/// [`StateMachine::add_state`]: crate::machine::StateMachine::add_state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// The handle's position in the machine's registration order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One mode of operation, driven by a [`StateMachine`].
///
/// The machine invokes the lifecycle hooks; a state never asks for a
/// transition itself. `enter` runs exactly once when the state becomes
/// current, before any `tick` for that occupancy; `exit` runs exactly once
/// when it stops being current, before the next state's `enter`. `tick` runs
/// once per scheduler step while current — including the very step in which
/// the state was entered.
///
/// All lifecycle hooks default to doing nothing, so a state only implements
/// the ones it cares about.
///
/// # Example
///
/// ```rust
/// use motive::State;
///
/// struct Paused {
///     resumes: u32,
/// }
///
/// impl State for Paused {
///     fn name(&self) -> &str {
///         "paused"
///     }
///
///     fn exit(&mut self) {
///         self.resumes += 1;
///     }
/// }
/// ```
///
/// [`StateMachine`]: crate::machine::StateMachine
pub trait State {
    /// The state's name, used in logs and transition history.
    fn name(&self) -> &str;

    /// Called once when the state becomes current.
    fn enter(&mut self) {}

    /// Called once per scheduler step while the state is current.
    fn tick(&mut self) {}

    /// Called once when the state stops being current.
    fn exit(&mut self) {}
}

//! Errors for state machine operations.

use thiserror::Error;

/// Errors surfaced by [`StateMachine`] operations.
///
/// These are precondition violations, not runtime conditions: a well-wired
/// owner never sees them. They fail fast rather than silently no-op so a
/// wiring bug cannot hide behind a skipped tick.
///
/// [`StateMachine`]: crate::machine::StateMachine
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("Tick called before an initial state was set. Call set_state(initial) first")]
    NoCurrentState,

    #[error("State handle {index} is not registered with this machine")]
    UnknownState { index: usize },
}

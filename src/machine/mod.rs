//! The tick-driven scheduler.
//!
//! This module is the imperative shell around the core types: it owns the
//! registered states, keeps transition rules as plain data, and runs the
//! evaluate-and-dispatch step once per external tick.
//!
//! # Evaluation order
//!
//! Global ("any-state") rules are checked before the current state's own
//! rules. Within each group, rules are checked in registration order and the
//! first one whose guard returns true wins; everything after it is skipped
//! for that tick.

mod error;
mod scheduler;
mod transition;

pub use error::MachineError;
pub use scheduler::StateMachine;
pub use transition::TransitionRule;

//! Builder API for state machine construction.
//!
//! The builder wraps the machine's registration methods with deferred
//! validation: every rule endpoint and the initial state are checked in one
//! pass at [`build`](machine::StateMachineBuilder::build) time, so a
//! mis-wired table surfaces as a [`BuildError`] before the first tick.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::StateMachineBuilder;

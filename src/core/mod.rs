//! Core state machine types.
//!
//! This module contains the leaf types the scheduler is built from:
//! - State behavior via the `State` trait and its `StateId` handle
//! - Guard predicates for transition control
//! - Immutable history tracking
//!
//! Nothing in this module drives anything; the per-tick evaluation loop
//! lives in [`crate::machine`].

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, TransitionRecord};
pub use state::{State, StateId};

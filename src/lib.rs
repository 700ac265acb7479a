//! Motive: a predicate-driven, tick-based finite state machine.
//!
//! Motive separates behavior from control flow. Behavior lives in states —
//! capabilities implementing enter/tick/exit for one mode of operation —
//! while control flow is plain data: guarded transition rules registered
//! with the machine, evaluated fresh on every tick. Global ("any-state")
//! rules take precedence over per-state rules, and within each group the
//! first rule whose guard returns true wins.
//!
//! The machine is synchronous and externally driven: an owner establishes
//! the initial state with `set_state`, then calls `tick` once per discrete
//! step of its own scheduling loop. The machine has no notion of elapsed
//! time and no internal concurrency.
//!
//! # Core Concepts
//!
//! - **State**: lifecycle behavior via the [`State`] trait, identified by a
//!   [`StateId`] handle
//! - **Guards**: predicate closures over live external state, via [`Guard`]
//! - **History**: immutable log of completed transitions, via
//!   [`StateHistory`]
//!
//! # Example
//!
//! ```rust
//! use motive::{Guard, State, StateMachine};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! struct Door(&'static str);
//!
//! impl State for Door {
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//! }
//!
//! let handle_pulled = Rc::new(Cell::new(false));
//!
//! let mut machine = StateMachine::new();
//! let closed = machine.add_state(Door("closed"));
//! let open = machine.add_state(Door("open"));
//!
//! let watched = Rc::clone(&handle_pulled);
//! machine.add_transition(closed, open, Guard::new(move || watched.get()))?;
//! machine.set_state(closed)?;
//!
//! machine.tick()?;
//! assert_eq!(machine.current_name(), Some("closed"));
//!
//! handle_pulled.set(true);
//! machine.tick()?;
//! assert_eq!(machine.current_name(), Some("open"));
//! # Ok::<(), motive::MachineError>(())
//! ```

pub mod actor;
pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Guard, State, StateHistory, StateId, TransitionRecord};
pub use actor::PlayerActor;
pub use builder::{BuildError, StateMachineBuilder};
pub use machine::{MachineError, StateMachine, TransitionRule};

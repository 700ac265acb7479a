//! Player adapter: a thin owner wiring engine services to a state machine.
//!
//! The adapter constructs the concrete states (idle, move, death), registers
//! the guard rules between them, and drives the machine once per external
//! step. Movement, liveness and animation are opaque collaborators reached
//! through the narrow traits in [`services`]; the adapter consumes them but
//! does not manage them.

pub mod player;
pub mod services;
pub mod states;

pub use player::PlayerActor;
pub use services::{AnimationSink, InputSource, Mobility, Vitality};
pub use states::{DeathState, IdleState, MoveState};

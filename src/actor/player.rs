//! The player adapter.

use crate::actor::services::{AnimationSink, InputSource, Mobility, Vitality};
use crate::actor::states::{DeathState, IdleState, MoveState};
use crate::builder::{BuildError, StateMachineBuilder};
use crate::core::{Guard, StateId};
use crate::machine::{MachineError, StateMachine};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Stateful entity driving a [`StateMachine`] over the player's collaborators.
///
/// Wiring, from the transition table:
/// - idle → move while there is movement intent and the actor is active
/// - move → idle while there is none and the actor is active
/// - any → death the moment liveness is lost
///
/// The owner's died callback is subscribed with the liveness collaborator at
/// construction; the collaborator invokes it once on death. [`disable`]
/// clears the active flag, which inertly parks the movement rules, and
/// forces idle outside the declarative rules.
///
/// [`disable`]: PlayerActor::disable
pub struct PlayerActor {
    machine: StateMachine,
    idle: StateId,
    active: Rc<Cell<bool>>,
}

impl PlayerActor {
    /// Construct the states, register the transition table and enter idle.
    pub fn new(
        input: Rc<RefCell<dyn InputSource>>,
        health: Rc<RefCell<dyn Vitality>>,
        mobility: Rc<RefCell<dyn Mobility>>,
        animator: Rc<RefCell<dyn AnimationSink>>,
        on_died: Box<dyn FnOnce()>,
    ) -> Result<Self, BuildError> {
        health.borrow_mut().on_death(on_died);

        let active = Rc::new(Cell::new(true));

        let mut builder = StateMachineBuilder::new();
        let idle = builder.add_state(IdleState::new(Rc::clone(&animator)));
        let moving = builder.add_state(MoveState::new(
            Rc::clone(&animator),
            Rc::clone(&mobility),
            Rc::clone(&input),
        ));
        let death = builder.add_state(DeathState::new(Rc::clone(&animator)));

        let (watched_input, watched_active) = (Rc::clone(&input), Rc::clone(&active));
        builder.transition(
            idle,
            moving,
            Guard::new(move || watched_input.borrow().is_moving() && watched_active.get()),
        );

        let (watched_input, watched_active) = (Rc::clone(&input), Rc::clone(&active));
        builder.transition(
            moving,
            idle,
            Guard::new(move || !watched_input.borrow().is_moving() && watched_active.get()),
        );

        let watched_health = Rc::clone(&health);
        builder.any_transition(
            death,
            Guard::new(move || !watched_health.borrow().is_alive()),
        );

        builder.initial(idle);
        let machine = builder.build()?;

        Ok(Self {
            machine,
            idle,
            active,
        })
    }

    /// Drive one step of the underlying machine.
    pub fn tick(&mut self) -> Result<(), MachineError> {
        self.machine.tick()
    }

    /// Deactivate the actor and force it back to idle.
    pub fn disable(&mut self) -> Result<(), MachineError> {
        self.active.set(false);
        self.machine.set_state(self.idle)
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Name of the current state.
    pub fn state_name(&self) -> Option<&str> {
        self.machine.current_name()
    }

    /// The underlying machine, for inspection.
    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }
}

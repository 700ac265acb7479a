//! Concrete player states.
//!
//! Each state wraps the collaborators it needs behind shared handles and
//! confines its side effects to them: idle and move drive the animator's
//! moving flag, move additionally feeds input intent to the motion sink every
//! tick, and death fires the death trigger once on entry.

use crate::actor::services::{AnimationSink, InputSource, Mobility};
use crate::core::State;
use std::cell::RefCell;
use std::rc::Rc;

/// Animator flag toggled by the idle and move states.
pub const MOVING_FLAG: &str = "moving";

/// Animator trigger fired when the death state is entered.
pub const DEATH_TRIGGER: &str = "death";

/// Standing still; clears the moving flag on entry.
pub struct IdleState {
    animator: Rc<RefCell<dyn AnimationSink>>,
}

impl IdleState {
    pub fn new(animator: Rc<RefCell<dyn AnimationSink>>) -> Self {
        Self { animator }
    }
}

impl State for IdleState {
    fn name(&self) -> &str {
        "idle"
    }

    fn enter(&mut self) {
        self.animator.borrow_mut().set_flag(MOVING_FLAG, false);
    }
}

/// Moving under input control; applies motion every tick.
pub struct MoveState {
    animator: Rc<RefCell<dyn AnimationSink>>,
    mobility: Rc<RefCell<dyn Mobility>>,
    input: Rc<RefCell<dyn InputSource>>,
}

impl MoveState {
    pub fn new(
        animator: Rc<RefCell<dyn AnimationSink>>,
        mobility: Rc<RefCell<dyn Mobility>>,
        input: Rc<RefCell<dyn InputSource>>,
    ) -> Self {
        Self {
            animator,
            mobility,
            input,
        }
    }
}

impl State for MoveState {
    fn name(&self) -> &str {
        "move"
    }

    fn enter(&mut self) {
        self.animator.borrow_mut().set_flag(MOVING_FLAG, true);
    }

    fn tick(&mut self) {
        let (x, y) = self.input.borrow().direction();
        self.mobility.borrow_mut().apply_motion(x, y);
    }

    fn exit(&mut self) {
        self.animator.borrow_mut().set_flag(MOVING_FLAG, false);
    }
}

/// Terminal-by-wiring state entered when liveness is lost.
pub struct DeathState {
    animator: Rc<RefCell<dyn AnimationSink>>,
}

impl DeathState {
    pub fn new(animator: Rc<RefCell<dyn AnimationSink>>) -> Self {
        Self { animator }
    }
}

impl State for DeathState {
    fn name(&self) -> &str {
        "death"
    }

    fn enter(&mut self) {
        self.animator.borrow_mut().trigger(DEATH_TRIGGER);
    }
}

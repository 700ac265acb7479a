//! Collaborator traits consumed by the player adapter.
//!
//! These are the seams to the surrounding engine: input intent, liveness,
//! motion and animation. Each is read or written through the narrowest
//! surface the states and guards need; their internals are someone else's
//! responsibility.

/// Current movement intent, typically backed by an input service.
pub trait InputSource {
    /// The requested movement direction for this step.
    fn direction(&self) -> (f32, f32);

    /// Whether there is any movement intent at all.
    fn is_moving(&self) -> bool {
        self.direction() != (0.0, 0.0)
    }
}

/// Liveness of the entity, with a single-shot death notification.
///
/// The death hook is invoked by this collaborator when the entity dies, not
/// polled by the state machine; the machine learns about death through an
/// ordinary guard over [`is_alive`](Vitality::is_alive).
pub trait Vitality {
    fn is_alive(&self) -> bool;

    /// Subscribe a hook invoked once when the entity dies.
    fn on_death(&mut self, hook: Box<dyn FnOnce()>);
}

/// Sink applying movement to the entity.
pub trait Mobility {
    /// Apply one step of motion toward the given direction.
    fn apply_motion(&mut self, x: f32, y: f32);
}

/// Sink for animation parameters.
pub trait AnimationSink {
    /// Set a named boolean parameter.
    fn set_flag(&mut self, name: &str, value: bool);

    /// Fire a named one-shot trigger.
    fn trigger(&mut self, name: &str);
}

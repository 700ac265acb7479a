//! State transition history tracking.
//!
//! Every completed transition is recorded by state name, wall-clock timestamp
//! and tick number. The history itself is an immutable value: `record`
//! returns a new history rather than mutating in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single completed transition.
///
/// States are identified by their [`State::name`] so records stay plain data
/// and serialize cleanly; the state objects themselves never appear here.
///
/// [`State::name`]: crate::core::State::name
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the state being left.
    pub from: String,
    /// Name of the state being entered.
    pub to: String,
    /// When the transition occurred.
    pub timestamp: DateTime<Utc>,
    /// The machine's tick counter at the time of the transition. Forced
    /// overrides between ticks carry the count of the last completed tick.
    pub tick: u64,
}

/// Ordered history of completed transitions.
///
/// # Example
///
/// ```rust
/// use motive::{StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
///
/// let history = history.record(TransitionRecord {
///     from: "idle".to_string(),
///     to: "move".to_string(),
///     timestamp: Utc::now(),
///     tick: 1,
/// });
///
/// assert_eq!(history.get_path(), vec!["idle", "move"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    records: Vec<TransitionRecord>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of state names traversed.
    ///
    /// Returns the `from` of the first record followed by the `to` of every
    /// record in order; empty if no transition has occurred yet.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Wall-clock span from the first to the last recorded transition.
    ///
    /// Returns `None` while the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.records
    }
}

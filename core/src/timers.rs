//! Deterministic timer queue
//!
//! Timers never fire on their own. The orchestrator drains every timer that
//! is due before it handles an input stamped with a later time, so a timer
//! firing is just another event in the same serialized stream.

use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::resolver::Followup;
use crate::types::Millis;

/// Handle returned when scheduling, used to cancel or match a timer
pub type TimerId = u64;

/// What happens when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TimerKind {
    /// Hold threshold of a finale or destiny charge
    ArmCharge,
    /// Delayed step of an already committed action
    Followup { followup: Followup },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Timer {
    id: TimerId,
    due: Millis,
    kind: TimerKind,
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Millis,
    next_id: TimerId,
    pending: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Move the clock forward. Earlier times are ignored.
    pub fn set_now(&mut self, at: Millis) {
        self.now = self.now.max(at);
    }

    pub fn schedule(&mut self, delay: Millis, kind: TimerKind) -> TimerId {
        self.next_id += 1;
        let id = self.next_id;
        self.pending.push(Timer {
            id,
            due: self.now.saturating_add(delay),
            kind,
        });
        id
    }

    /// Cancel a timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest due time among pending timers
    pub fn next_due(&self) -> Option<Millis> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Remove and return the earliest timer due at or before `until`,
    /// advancing the clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Millis) -> Option<(TimerId, TimerKind)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(idx, _)| idx)?;
        let timer = self.pending.remove(idx);
        self.set_now(timer.due);
        Some((timer.id, timer.kind))
    }
}

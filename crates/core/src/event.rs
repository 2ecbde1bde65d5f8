//! Life events — the persona's long-term episodic memory.
//!
//! Stored newest-first and allowed to grow without bound; only the read side
//! caps how many flow into a prompt.

use serde::{Deserialize, Serialize};

/// A logged life event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    /// Assigned at insertion, derived from the insertion time (millis).
    pub id: String,

    /// Free-form date label, e.g. "2026-08-01"
    pub date: String,

    /// What happened
    pub content: String,

    /// Mood label attached to the event
    pub mood: String,

    /// Significance from 1 to 5; 5 marks a landmark event
    pub weight: u8,
}

/// A life event as submitted by a client, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLifeEvent {
    pub date: String,
    pub content: String,
    pub mood: String,
    pub weight: u8,
}

impl NewLifeEvent {
    /// Attach an id, clamping weight into the valid `[1, 5]` range.
    pub fn into_event(self, id: String) -> LifeEvent {
        LifeEvent {
            id,
            date: self.date,
            content: self.content,
            mood: self.mood,
            weight: self.weight.clamp(1, 5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_clamps_into_range() {
        let raw = NewLifeEvent {
            date: "2026-08-01".into(),
            content: "Shipped the launch".into(),
            mood: "proud".into(),
            weight: 9,
        };
        let event = raw.into_event("123".into());
        assert_eq!(event.weight, 5);
        assert_eq!(event.id, "123");
    }

    #[test]
    fn zero_weight_clamps_up() {
        let raw = NewLifeEvent {
            date: "2026-08-02".into(),
            content: "Quiet day".into(),
            mood: "calm".into(),
            weight: 0,
        };
        assert_eq!(raw.into_event("1".into()).weight, 1);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::zone::{Triggers, ZoneState};

/// Every state change of a zone produces an Event.
/// Callers that dispatch scroll ticks can forward them to analytics or logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ZoneEvent {
    /// The zone started running, from idle or by scrolling back out of
    /// completion.
    ZoneEntered {
        from: ZoneState,
        at: DateTime<Utc>,
    },
    /// The finish line was passed; the bound element was pinned at `top`.
    ZoneCompleted {
        top: f64,
        at: DateTime<Utc>,
    },
    GoalReached {
        at: DateTime<Utc>,
    },
    /// The zone fell back to idle, including through the width or
    /// missing-element guard.
    ZoneLeft {
        from: ZoneState,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: ZoneState,
        active: bool,
        inert: bool,
        scroll_top: f64,
        viewport_width: f64,
        triggers: Option<Triggers>,
        at: DateTime<Utc>,
    },
}

impl ZoneEvent {
    /// Event for a change from `from` to `to`, or `None` if nothing changed.
    ///
    /// `completed_top` is the inline `top` written on completion.
    pub fn transition(from: ZoneState, to: ZoneState, completed_top: Option<f64>) -> Option<Self> {
        if from == to {
            return None;
        }
        let at = Utc::now();
        Some(match to {
            ZoneState::Idle => ZoneEvent::ZoneLeft { from, at },
            ZoneState::Running => ZoneEvent::ZoneEntered { from, at },
            ZoneState::Completed => ZoneEvent::ZoneCompleted {
                top: completed_top.unwrap_or_default(),
                at,
            },
            ZoneState::Won => ZoneEvent::GoalReached { at },
        })
    }
}

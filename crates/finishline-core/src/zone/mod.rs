//! Scroll-zone evaluation.
//!
//! A zone is bound to one element and re-evaluated whenever the caller asks
//! (usually on every scroll or resize tick). Each evaluation recomputes the
//! triggers from live element geometry, classifies the scroll offset against
//! them, and applies the matching classes.
//!
//! ## States
//!
//! ```text
//! finish line:  Idle -> Running -> Completed   (and back, as the page scrolls)
//! goal:         Idle -> Won
//! ```

mod config;
mod direction;
mod evaluator;
mod geometry;

pub use config::{FinishLineOptions, GoalOptions, ZoneConfig, ZoneMode};
pub use direction::Direction;
pub use evaluator::{Evaluation, ScrollZone};
pub use geometry::{goal_trigger, SpanTriggers, Triggers};

use serde::{Deserialize, Serialize};

/// Discrete activation state produced by one evaluation.
///
/// Finish-line zones use `Idle`, `Running` and `Completed`; goal zones use
/// `Idle` and `Won`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneState {
    #[default]
    Idle,
    Running,
    Completed,
    Won,
}

//! Trigger resolution and classification.
//!
//! Pure functions of element geometry, offsets and direction. Nothing here is
//! cached; the evaluator calls in again on every run.

use serde::{Deserialize, Serialize};

use super::{Direction, ZoneState};
use crate::page::Geometry;

/// Start and finish triggers of a finish-line zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanTriggers {
    /// Scroll offset at which the zone starts running.
    pub start: f64,
    /// Scroll offset of the finish line, offset applied.
    pub finish: f64,
    /// Scroll offset at which the zone completes: `finish` less the finish
    /// line's height.
    pub completion: f64,
}

impl SpanTriggers {
    pub fn resolve(
        direction: Direction,
        start_line: Geometry,
        finish_line: Geometry,
        start_offset: f64,
        finish_offset: f64,
    ) -> Self {
        let start = direction.shift(direction.leading_edge(start_line), start_offset);
        let finish = direction.shift(direction.trailing_edge(finish_line), finish_offset);
        Self {
            start,
            finish,
            completion: finish - finish_line.height,
        }
    }

    /// Completed takes precedence over Running.
    pub fn classify(&self, direction: Direction, scroll_top: f64) -> ZoneState {
        if direction.reached(scroll_top, self.completion) {
            ZoneState::Completed
        } else if direction.reached(scroll_top, self.start) {
            ZoneState::Running
        } else {
            ZoneState::Idle
        }
    }
}

/// Single trigger of a goal zone.
pub fn goal_trigger(direction: Direction, goal_line: Geometry, offset: f64) -> f64 {
    direction.shift(direction.leading_edge(goal_line), offset)
}

/// Triggers computed by one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Triggers {
    Span(SpanTriggers),
    Goal { trigger: f64 },
}

impl Triggers {
    pub fn classify(&self, direction: Direction, scroll_top: f64) -> ZoneState {
        match self {
            Triggers::Span(span) => span.classify(direction, scroll_top),
            Triggers::Goal { trigger } => {
                if direction.reached(scroll_top, *trigger) {
                    ZoneState::Won
                } else {
                    ZoneState::Idle
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_line() -> Geometry {
        Geometry::new(500.0, 20.0)
    }

    fn finish_line() -> Geometry {
        Geometry::new(1000.0, 50.0)
    }

    #[test]
    fn south_span_matches_worked_example() {
        let span = SpanTriggers::resolve(Direction::South, start_line(), finish_line(), 0.0, 0.0);
        assert_eq!(span.start, 520.0);
        assert_eq!(span.finish, 1000.0);
        assert_eq!(span.completion, 950.0);

        assert_eq!(span.classify(Direction::South, 300.0), ZoneState::Idle);
        assert_eq!(span.classify(Direction::South, 520.0), ZoneState::Running);
        assert_eq!(span.classify(Direction::South, 600.0), ZoneState::Running);
        assert_eq!(span.classify(Direction::South, 950.0), ZoneState::Completed);
        assert_eq!(span.classify(Direction::South, 980.0), ZoneState::Completed);
    }

    #[test]
    fn offsets_shift_with_direction() {
        let south = SpanTriggers::resolve(Direction::South, start_line(), finish_line(), 30.0, 10.0);
        assert_eq!(south.start, 550.0);
        assert_eq!(south.finish, 1010.0);
        assert_eq!(south.completion, 960.0);

        let north = SpanTriggers::resolve(Direction::North, start_line(), finish_line(), 30.0, 10.0);
        assert_eq!(north.start, 470.0);
        assert_eq!(north.finish, 1040.0);
        assert_eq!(north.completion, 990.0);
    }

    #[test]
    fn north_span_uses_opposite_edges() {
        // Scrolling up: the start line sits below the finish line.
        let start = Geometry::new(2000.0, 40.0);
        let finish = Geometry::new(400.0, 100.0);
        let span = SpanTriggers::resolve(Direction::North, start, finish, 0.0, 0.0);
        assert_eq!(span.start, 2000.0);
        assert_eq!(span.finish, 500.0);
        assert_eq!(span.completion, 400.0);

        assert_eq!(span.classify(Direction::North, 2500.0), ZoneState::Idle);
        assert_eq!(span.classify(Direction::North, 2000.0), ZoneState::Running);
        assert_eq!(span.classify(Direction::North, 1200.0), ZoneState::Running);
        assert_eq!(span.classify(Direction::North, 400.0), ZoneState::Completed);
        assert_eq!(span.classify(Direction::North, 0.0), ZoneState::Completed);
    }

    #[test]
    fn goal_trigger_and_classification() {
        let goal = Geometry::new(800.0, 100.0);
        assert_eq!(goal_trigger(Direction::South, goal, 20.0), 920.0);
        assert_eq!(goal_trigger(Direction::North, goal, 20.0), 780.0);

        let south = Triggers::Goal { trigger: 920.0 };
        assert_eq!(south.classify(Direction::South, 919.0), ZoneState::Idle);
        assert_eq!(south.classify(Direction::South, 920.0), ZoneState::Won);

        let north = Triggers::Goal { trigger: 780.0 };
        assert_eq!(north.classify(Direction::North, 781.0), ZoneState::Idle);
        assert_eq!(north.classify(Direction::North, 780.0), ZoneState::Won);
    }

    #[test]
    fn triggers_serialize_with_kind_tag() {
        let json = serde_json::to_value(Triggers::Goal { trigger: 12.0 }).unwrap();
        assert_eq!(json["kind"], "goal");
        assert_eq!(json["trigger"], 12.0);

        let span = SpanTriggers::resolve(Direction::South, start_line(), finish_line(), 0.0, 0.0);
        let json = serde_json::to_value(Triggers::Span(span)).unwrap();
        assert_eq!(json["kind"], "span");
        assert_eq!(json["completion"], 950.0);
    }
}

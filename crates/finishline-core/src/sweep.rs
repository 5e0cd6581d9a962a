//! Scroll sweeps over a static page.
//!
//! Drives a zone through a range of scroll offsets the way a browser's scroll
//! events would, and records every state change.

use serde::Serialize;

use crate::error::ConfigError;
use crate::events::ZoneEvent;
use crate::page::{ElementId, StaticPage};
use crate::zone::{ScrollZone, ZoneState};

/// Upper bound on the number of offsets a single sweep visits.
pub const MAX_OFFSETS: usize = 1_000_000;

/// A state change observed at one scroll offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub scroll_top: f64,
    pub state: ZoneState,
    pub event: ZoneEvent,
}

/// Scroll offsets from `from` to `to` inclusive, `step` apart. Works in
/// either direction; `to` is always the last offset.
pub fn scroll_offsets(from: f64, to: f64, step: f64) -> Result<Vec<f64>, ConfigError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ConfigError::invalid("step", "must be a positive number"));
    }
    if !from.is_finite() || !to.is_finite() {
        return Err(ConfigError::invalid("range", "bounds must be finite"));
    }

    let steps = ((to - from).abs() / step).floor();
    if steps >= MAX_OFFSETS as f64 {
        return Err(ConfigError::invalid(
            "step",
            format!("range would visit more than {MAX_OFFSETS} offsets"),
        ));
    }

    let sign = if to >= from { 1.0 } else { -1.0 };
    let count = steps as usize;
    let mut offsets: Vec<f64> = (0..=count).map(|i| from + sign * step * i as f64).collect();
    if offsets.last() != Some(&to) {
        offsets.push(to);
    }
    Ok(offsets)
}

/// Run `zone` at every offset between `from` and `to` and collect the
/// transitions. The page is left scrolled to `to`.
pub fn sweep(
    zone: &mut ScrollZone<ElementId>,
    page: &mut StaticPage,
    from: f64,
    to: f64,
    step: f64,
) -> Result<Vec<Transition>, ConfigError> {
    let offsets = scroll_offsets(from, to, step)?;
    let mut transitions = Vec::new();
    for scroll_top in offsets {
        page.set_scroll_top(scroll_top);
        let evaluation = zone.run(page);
        if let Some(event) = evaluation.event {
            transitions.push(Transition {
                scroll_top,
                state: evaluation.state,
                event,
            });
        }
    }
    Ok(transitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    #[test]
    fn offsets_include_both_bounds() {
        assert_eq!(scroll_offsets(0.0, 10.0, 5.0).unwrap(), vec![0.0, 5.0, 10.0]);
        assert_eq!(scroll_offsets(0.0, 12.0, 5.0).unwrap(), vec![0.0, 5.0, 10.0, 12.0]);
        assert_eq!(scroll_offsets(10.0, 0.0, 5.0).unwrap(), vec![10.0, 5.0, 0.0]);
        assert_eq!(scroll_offsets(3.0, 3.0, 1.0).unwrap(), vec![3.0]);
    }

    #[test]
    fn rejects_bad_step() {
        assert!(scroll_offsets(0.0, 10.0, 0.0).is_err());
        assert!(scroll_offsets(0.0, 10.0, -1.0).is_err());
        assert!(scroll_offsets(0.0, 10.0, f64::NAN).is_err());
        assert!(scroll_offsets(0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn rejects_oversized_ranges() {
        let result = scroll_offsets(0.0, 1e15, 1e-3);
        assert!(matches!(result, Err(ConfigError::InvalidValue { ref key, .. }) if key == "step"));
        assert!(scroll_offsets(0.0, 1e12, 1.0).is_err());

        let largest = scroll_offsets(0.0, (MAX_OFFSETS - 1) as f64, 1.0).unwrap();
        assert_eq!(largest.len(), MAX_OFFSETS);
        assert_eq!(largest.last(), Some(&((MAX_OFFSETS - 1) as f64)));
    }

    #[test]
    fn sweep_down_then_up() {
        let (mut page, mut zone) = Scene::example().instantiate().unwrap();

        let down = sweep(&mut zone, &mut page, 0.0, 1200.0, 10.0).unwrap();
        let states: Vec<_> = down.iter().map(|t| (t.scroll_top, t.state)).collect();
        assert_eq!(states, vec![(520.0, ZoneState::Running), (950.0, ZoneState::Completed)]);

        let up = sweep(&mut zone, &mut page, 1200.0, 0.0, 10.0).unwrap();
        let states: Vec<_> = up.iter().map(|t| (t.scroll_top, t.state)).collect();
        assert_eq!(states, vec![(940.0, ZoneState::Running), (510.0, ZoneState::Idle)]);
        assert!(page.classes("#progress").is_empty());
    }
}

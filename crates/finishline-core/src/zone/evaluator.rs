//! Zone evaluator.
//!
//! A caller-driven state machine: it does not listen for scroll events. The
//! caller invokes [`ScrollZone::run`] on every scroll/resize tick.
//!
//! ## Usage
//!
//! ```ignore
//! let body = SharedClassList::named("body");
//! let mut zone = ScrollZone::new(config, &page, body.clone());
//! // On every scroll tick:
//! let evaluation = zone.run(&mut page); // evaluation.event is Some on a state change
//! ```
//!
//! A zone whose options were rejected, or whose bound element was missing
//! at construction, stays inert for its whole lifetime.

use chrono::Utc;
use serde::Serialize;

use super::{goal_trigger, FinishLineOptions, GoalOptions, SpanTriggers, Triggers, ZoneConfig, ZoneMode, ZoneState};
use crate::error::ConfigError;
use crate::events::ZoneEvent;
use crate::page::{Page, SharedClassList};

/// Outcome of one [`ScrollZone::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub state: ZoneState,
    pub scroll_top: f64,
    /// `None` when the zone is inert or a guard short-circuited the run.
    pub triggers: Option<Triggers>,
    /// Set when `state` differs from the previous evaluation.
    pub event: Option<ZoneEvent>,
}

#[derive(Debug, Clone)]
enum Binding<N> {
    /// Options were rejected at construction.
    Rejected,
    /// Options are valid but the bound element did not resolve.
    Unbound(ZoneConfig),
    Bound { config: ZoneConfig, node: N },
}

/// Result of the geometry and classification steps, before any mutation.
enum Assessment {
    /// Finish-line guard tripped, or the goal line is missing.
    Guarded,
    Classified { state: ZoneState, triggers: Triggers },
}

/// One scroll zone bound to one element.
#[derive(Debug, Clone)]
pub struct ScrollZone<N> {
    binding: Binding<N>,
    body: SharedClassList,
    last_state: ZoneState,
}

impl<N: Copy + Eq + std::fmt::Debug> ScrollZone<N> {
    /// Validate `config` and bind to its node.
    ///
    /// A node that does not resolve is not an error; the zone is returned
    /// inert.
    pub fn try_new<P: Page<Node = N>>(
        config: ZoneConfig,
        page: &P,
        body: SharedClassList,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let binding = match page.query(&config.node) {
            Some(node) => Binding::Bound { config, node },
            None => {
                tracing::debug!(node = %config.node, "bound element not found, zone stays inert");
                Binding::Unbound(config)
            }
        };
        Ok(Self {
            binding,
            body,
            last_state: ZoneState::Idle,
        })
    }

    /// Like [`ScrollZone::try_new`], but reports a rejected config through
    /// `tracing` and returns an inert zone instead of an error.
    pub fn new<P: Page<Node = N>>(config: ZoneConfig, page: &P, body: SharedClassList) -> Self {
        Self::try_new(config, page, body.clone()).unwrap_or_else(|err| Self::rejected(err, body))
    }

    /// Read options from an untyped record, then bind.
    pub fn try_from_value<P: Page<Node = N>>(
        value: serde_json::Value,
        page: &P,
        body: SharedClassList,
    ) -> Result<Self, ConfigError> {
        let config = ZoneConfig::from_value(value)?;
        Self::try_new(config, page, body)
    }

    pub fn from_value<P: Page<Node = N>>(
        value: serde_json::Value,
        page: &P,
        body: SharedClassList,
    ) -> Self {
        Self::try_from_value(value, page, body.clone()).unwrap_or_else(|err| Self::rejected(err, body))
    }

    fn rejected(err: ConfigError, body: SharedClassList) -> Self {
        tracing::error!(error = %err, "finish line options set incorrectly");
        Self {
            binding: Binding::Rejected,
            body,
            last_state: ZoneState::Idle,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Stored options, `None` if they were rejected.
    pub fn options(&self) -> Option<&ZoneConfig> {
        match &self.binding {
            Binding::Rejected => None,
            Binding::Unbound(config) | Binding::Bound { config, .. } => Some(config),
        }
    }

    /// Write the options to the log. Returns `false` if they were rejected.
    pub fn log_options(&self) -> bool {
        match self.options() {
            Some(config) => {
                tracing::info!(options = ?config, "finish line options");
                true
            }
            None => false,
        }
    }

    /// Whether the bound element carries the active class right now.
    pub fn is_active<P: Page<Node = N>>(&self, page: &P) -> bool {
        match &self.binding {
            Binding::Bound { config, node } => page.has_class(*node, config.mode.active_class()),
            _ => false,
        }
    }

    /// `true` when options were rejected or the node never resolved.
    pub fn is_inert(&self) -> bool {
        !matches!(self.binding, Binding::Bound { .. })
    }

    pub fn node(&self) -> Option<N> {
        match &self.binding {
            Binding::Bound { node, .. } => Some(*node),
            _ => None,
        }
    }

    pub fn page_classes(&self) -> &SharedClassList {
        &self.body
    }

    /// State classified by the last `run`.
    pub fn last_state(&self) -> ZoneState {
        self.last_state
    }

    /// Triggers for the current layout, without touching the page.
    pub fn triggers<P: Page<Node = N>>(&self, page: &P) -> Option<Triggers> {
        match self.options().map(|config| assess(config, page)) {
            Some(Assessment::Classified { triggers, .. }) => Some(triggers),
            _ => None,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot<P: Page<Node = N>>(&self, page: &P) -> ZoneEvent {
        let viewport = page.viewport();
        ZoneEvent::StateSnapshot {
            state: self.last_state,
            active: self.is_active(page),
            inert: self.is_inert(),
            scroll_top: viewport.scroll_top,
            viewport_width: viewport.width,
            triggers: self.triggers(page),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Re-evaluate against the current scroll offset and layout and apply
    /// the resulting classes.
    pub fn run<P: Page<Node = N>>(&mut self, page: &mut P) -> Evaluation {
        let scroll_top = page.viewport().scroll_top;
        let (state, triggers, completed_top) = match &self.binding {
            Binding::Rejected => (ZoneState::Idle, None, None),
            Binding::Unbound(config) => {
                if let ZoneMode::FinishLine(opts) = &config.mode {
                    deactivate_finish_line(page, None, opts, &self.body);
                }
                (ZoneState::Idle, None, None)
            }
            Binding::Bound { config, node } => match (&config.mode, assess(config, page)) {
                (ZoneMode::FinishLine(opts), Assessment::Guarded) => {
                    deactivate_finish_line(page, Some(*node), opts, &self.body);
                    (ZoneState::Idle, None, None)
                }
                (ZoneMode::FinishLine(opts), Assessment::Classified { state, triggers }) => {
                    let top = match triggers {
                        Triggers::Span(span) => apply_finish_line(page, *node, opts, &self.body, state, &span),
                        Triggers::Goal { .. } => None,
                    };
                    (state, Some(triggers), top)
                }
                (ZoneMode::Goal(opts), Assessment::Guarded) => {
                    apply_goal(page, *node, opts, ZoneState::Idle);
                    (ZoneState::Idle, None, None)
                }
                (ZoneMode::Goal(opts), Assessment::Classified { state, triggers }) => {
                    apply_goal(page, *node, opts, state);
                    (state, Some(triggers), None)
                }
            },
        };

        tracing::trace!(scroll_top, ?state, ?triggers, "zone evaluated");
        let event = ZoneEvent::transition(self.last_state, state, completed_top);
        if event.is_some() {
            tracing::debug!(from = ?self.last_state, to = ?state, "zone state changed");
        }
        self.last_state = state;

        Evaluation {
            state,
            scroll_top,
            triggers,
            event,
        }
    }

    /// Force the inert state: clear the zone's classes from the bound
    /// element and the page-level list. Safe from any state, including
    /// before the first `run`. Always returns `true`.
    pub fn deactivate<P: Page<Node = N>>(&mut self, page: &mut P) -> bool {
        match &self.binding {
            Binding::Rejected => {}
            Binding::Unbound(config) => {
                if let ZoneMode::FinishLine(opts) = &config.mode {
                    deactivate_finish_line(page, None, opts, &self.body);
                }
            }
            Binding::Bound { config, node } => match &config.mode {
                ZoneMode::FinishLine(opts) => deactivate_finish_line(page, Some(*node), opts, &self.body),
                ZoneMode::Goal(opts) => page.remove_class(*node, &opts.active_state),
            },
        }
        self.last_state = ZoneState::Idle;
        true
    }
}

/// Resolve triggers from live geometry and classify the scroll offset.
fn assess<P: Page>(config: &ZoneConfig, page: &P) -> Assessment {
    let direction = config.direction();
    let viewport = page.viewport();
    match &config.mode {
        ZoneMode::FinishLine(opts) => {
            if opts.kill_width.is_some_and(|kill_width| viewport.width <= kill_width) {
                return Assessment::Guarded;
            }
            let (Some(start), Some(finish)) = (page.query(&opts.start_line), page.query(&opts.finish_line)) else {
                return Assessment::Guarded;
            };
            let span = SpanTriggers::resolve(
                direction,
                page.geometry(start),
                page.geometry(finish),
                opts.start_offset,
                opts.finish_offset,
            );
            Assessment::Classified {
                state: span.classify(direction, viewport.scroll_top),
                triggers: Triggers::Span(span),
            }
        }
        ZoneMode::Goal(opts) => {
            let Some(goal) = page.query(&opts.goal_line) else {
                return Assessment::Guarded;
            };
            let triggers = Triggers::Goal {
                trigger: goal_trigger(direction, page.geometry(goal), opts.offset),
            };
            Assessment::Classified {
                state: triggers.classify(direction, viewport.scroll_top),
                triggers,
            }
        }
    }
}

/// Apply a finish-line state. Returns the inline `top` on completion.
fn apply_finish_line<P: Page>(
    page: &mut P,
    node: P::Node,
    opts: &FinishLineOptions,
    body: &SharedClassList,
    state: ZoneState,
    span: &SpanTriggers,
) -> Option<f64> {
    match state {
        ZoneState::Running => {
            page.add_class(node, &opts.running_modifier);
            body.add(&opts.body_class);
            page.remove_class(node, &opts.finish_modifier);
            clear_inline_top(page, node);
            None
        }
        ZoneState::Completed => {
            let top = span.finish + opts.finish_offset;
            body.remove(&opts.body_class);
            page.remove_class(node, &opts.running_modifier);
            page.add_class(node, &opts.finish_modifier);
            if page.inline_top(node) != Some(top) {
                page.set_inline_top(node, top);
            }
            Some(top)
        }
        _ => {
            page.remove_class(node, &opts.running_modifier);
            page.remove_class(node, &opts.finish_modifier);
            body.remove(&opts.body_class);
            clear_inline_top(page, node);
            None
        }
    }
}

fn apply_goal<P: Page>(page: &mut P, node: P::Node, opts: &GoalOptions, state: ZoneState) {
    if state == ZoneState::Won {
        page.add_class(node, &opts.modifier);
    } else {
        page.remove_class(node, &opts.modifier);
    }
}

/// Leaves any inline `top` in place.
fn deactivate_finish_line<P: Page>(
    page: &mut P,
    node: Option<P::Node>,
    opts: &FinishLineOptions,
    body: &SharedClassList,
) {
    if let Some(node) = node {
        page.remove_class(node, &opts.running_modifier);
        page.remove_class(node, &opts.finish_modifier);
    }
    body.remove(&opts.body_class);
}

fn clear_inline_top<P: Page>(page: &mut P, node: P::Node) {
    if page.inline_top(node).is_some() {
        page.clear_inline_style(node);
    }
}

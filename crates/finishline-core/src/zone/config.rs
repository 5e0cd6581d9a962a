//! Zone configuration.
//!
//! Options are read once, at construction, either from a typed
//! [`ZoneConfig`] or from an untyped record (`serde_json::Value`, which is
//! also what a TOML table converts into). They never change afterwards.
//!
//! ```toml
//! node = "#progress"
//! mode = "finish_line"
//! running_modifier = "progress--running"
//! finish_modifier = "progress--finished"
//! body_class = "has-progress"
//! start_line = "#intro"
//! finish_line = "#footer"
//! kill_width = 768
//! ```

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::error::ConfigError;

/// Options of a three-state zone bounded by a start line and a finish line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishLineOptions {
    /// Class on the bound element while the zone is running.
    pub running_modifier: String,
    /// Class on the bound element once the finish line is passed.
    pub finish_modifier: String,
    /// Class on the page-level list while the zone is running.
    pub body_class: String,
    pub start_line: String,
    pub finish_line: String,
    #[serde(default)]
    pub start_offset: f64,
    #[serde(default)]
    pub finish_offset: f64,
    /// Viewport width at or below which the zone is disabled. Unset means
    /// never.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kill_width: Option<f64>,
}

impl FinishLineOptions {
    pub fn new(
        running_modifier: &str,
        finish_modifier: &str,
        body_class: &str,
        start_line: &str,
        finish_line: &str,
    ) -> Self {
        Self {
            running_modifier: running_modifier.to_string(),
            finish_modifier: finish_modifier.to_string(),
            body_class: body_class.to_string(),
            start_line: start_line.to_string(),
            finish_line: finish_line.to_string(),
            start_offset: 0.0,
            finish_offset: 0.0,
            kill_width: None,
        }
    }

    pub fn with_offsets(mut self, start_offset: f64, finish_offset: f64) -> Self {
        self.start_offset = start_offset;
        self.finish_offset = finish_offset;
        self
    }

    pub fn with_kill_width(mut self, kill_width: f64) -> Self {
        self.kill_width = Some(kill_width);
        self
    }
}

/// Options of a two-state zone toggled by a single goal line.
///
/// `modifier` is the class `run` toggles; `active_state` is the class
/// `deactivate` clears. They are kept as two separate names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalOptions {
    pub goal_line: String,
    pub modifier: String,
    pub active_state: String,
    #[serde(default)]
    pub offset: f64,
}

impl GoalOptions {
    pub fn new(goal_line: &str, modifier: &str, active_state: &str) -> Self {
        Self {
            goal_line: goal_line.to_string(),
            modifier: modifier.to_string(),
            active_state: active_state.to_string(),
            offset: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ZoneMode {
    FinishLine(FinishLineOptions),
    Goal(GoalOptions),
}

impl ZoneMode {
    /// Class whose presence on the bound element means "active".
    pub fn active_class(&self) -> &str {
        match self {
            ZoneMode::FinishLine(opts) => &opts.running_modifier,
            ZoneMode::Goal(opts) => &opts.modifier,
        }
    }
}

/// Complete options of one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Selector of the element the zone is bound to.
    pub node: String,
    /// React to upward scrolling instead of downward.
    #[serde(default)]
    pub north: bool,
    #[serde(flatten)]
    pub mode: ZoneMode,
}

impl ZoneConfig {
    pub fn finish_line(node: &str, options: FinishLineOptions) -> Self {
        Self {
            node: node.to_string(),
            north: false,
            mode: ZoneMode::FinishLine(options),
        }
    }

    pub fn goal(node: &str, options: GoalOptions) -> Self {
        Self {
            node: node.to_string(),
            north: false,
            mode: ZoneMode::Goal(options),
        }
    }

    pub fn northbound(mut self) -> Self {
        self.north = true;
        self
    }

    pub fn direction(&self) -> Direction {
        Direction::from_north(self.north)
    }

    /// Read options from an untyped record.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotARecord`] if `value` is not an object,
    /// [`ConfigError::Deserialize`] if fields are missing or mistyped, and
    /// [`ConfigError::InvalidValue`] if [`ZoneConfig::validate`] fails.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::NotARecord {
                found: value_kind(&value),
            });
        }
        let config: ZoneConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Check selectors, class names and numeric fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("node", &self.node)?;
        match &self.mode {
            ZoneMode::FinishLine(opts) => {
                non_empty("running_modifier", &opts.running_modifier)?;
                non_empty("finish_modifier", &opts.finish_modifier)?;
                non_empty("body_class", &opts.body_class)?;
                non_empty("start_line", &opts.start_line)?;
                non_empty("finish_line", &opts.finish_line)?;
                finite("start_offset", opts.start_offset)?;
                finite("finish_offset", opts.finish_offset)?;
                if let Some(kill_width) = opts.kill_width {
                    finite("kill_width", kill_width)?;
                    if kill_width < 0.0 {
                        return Err(ConfigError::invalid("kill_width", "must not be negative"));
                    }
                }
            }
            ZoneMode::Goal(opts) => {
                non_empty("goal_line", &opts.goal_line)?;
                non_empty("modifier", &opts.modifier)?;
                non_empty("active_state", &opts.active_state)?;
                finite("offset", opts.offset)?;
            }
        }
        Ok(())
    }

    /// Get an option as a string by key, e.g. `"start_offset"`.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn non_empty(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(key, "must not be empty"));
    }
    Ok(())
}

fn finite(key: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::invalid(key, format!("{value} is not a finite number")));
    }
    Ok(())
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

//! # FinishLine Core Library
//!
//! Scroll-reactive state toggling for one bound element. A zone compares the
//! viewport's scroll offset against thresholds taken from other elements'
//! positions and applies state classes accordingly.
//!
//! ## Architecture
//!
//! - **Zone evaluator**: a caller-driven state machine; the caller invokes
//!   `run()` on every scroll or resize tick
//! - **Page collaborators**: element lookup, geometry and class mutation
//!   behind the [`Page`] trait, plus an injected page-level class list
//! - **Scenes**: TOML files pairing a zone with a static page, for offline
//!   evaluation and sweeps
//!
//! ## Key Components
//!
//! - [`ScrollZone`]: the evaluator
//! - [`ZoneConfig`]: zone options (finish-line or goal mode)
//! - [`StaticPage`]: in-memory [`Page`]
//! - [`Scene`]: scene file loading and saving

pub mod error;
pub mod events;
pub mod page;
pub mod scene;
pub mod sweep;
pub mod zone;

pub use error::{ConfigError, SceneError};
pub use events::ZoneEvent;
pub use page::{ElementId, Geometry, Page, SharedClassList, StaticPage, Viewport};
pub use scene::Scene;
pub use sweep::{sweep, Transition};
pub use zone::{
    Direction, Evaluation, FinishLineOptions, GoalOptions, ScrollZone, Triggers, ZoneConfig, ZoneMode,
    ZoneState,
};

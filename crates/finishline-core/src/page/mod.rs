//! Page collaborators consumed by the zone evaluator.
//!
//! The evaluator never touches a real document. Everything it reads
//! (element geometry, viewport) and everything it writes (class lists,
//! inline `top`) goes through the [`Page`] trait, and the shared page-level
//! class list is an injected [`SharedClassList`] handle.

mod shared;
mod static_page;

pub use shared::SharedClassList;
pub use static_page::{ElementId, StaticElement, StaticPage};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document-relative position and outer height of an element, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub top: f64,
    pub height: f64,
}

impl Geometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Current viewport width and vertical scroll offset, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    #[serde(default)]
    pub scroll_top: f64,
}

impl Viewport {
    pub fn new(width: f64, scroll_top: f64) -> Self {
        Self { width, scroll_top }
    }
}

/// Element lookup, geometry and mutation for one page.
///
/// Class mutation must be idempotent: adding a class that is already present
/// or removing one that is absent leaves the element unchanged.
pub trait Page {
    /// Handle to a resolved element.
    type Node: Copy + Eq + fmt::Debug;

    /// Resolve a selector. `None` is an empty selection.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// Live geometry of a resolved element.
    fn geometry(&self, node: Self::Node) -> Geometry;

    fn viewport(&self) -> Viewport;

    fn has_class(&self, node: Self::Node, class: &str) -> bool;

    fn add_class(&mut self, node: Self::Node, class: &str);

    fn remove_class(&mut self, node: Self::Node, class: &str);

    /// Inline `top` override currently set on the element, if any.
    fn inline_top(&self, node: Self::Node) -> Option<f64>;

    fn set_inline_top(&mut self, node: Self::Node, top: f64);

    /// Drop every inline style override on the element.
    fn clear_inline_style(&mut self, node: Self::Node);
}

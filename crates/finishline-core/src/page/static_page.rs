//! In-memory page.
//!
//! A fixed list of elements with explicit geometry, class sets and inline
//! `top` overrides. Layout never changes unless the caller moves an element,
//! which makes it the page used by scene files, sweeps and tests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Geometry, Page, Viewport};

/// Index of an element inside a [`StaticPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticElement {
    /// Exact selector this element answers to.
    pub selector: String,
    pub top: f64,
    /// Outer height.
    pub height: f64,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub classes: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_top: Option<f64>,
}

impl StaticElement {
    pub fn new(selector: &str, top: f64, height: f64) -> Self {
        Self {
            selector: selector.to_string(),
            top,
            height,
            classes: BTreeSet::new(),
            inline_top: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticPage {
    pub viewport: Viewport,
    #[serde(default)]
    elements: Vec<StaticElement>,
    /// Number of inline-style writes performed through [`Page`].
    #[serde(skip)]
    style_writes: usize,
}

impl StaticPage {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
            style_writes: 0,
        }
    }

    /// Builder form of [`StaticPage::insert_element`].
    pub fn with_element(mut self, selector: &str, top: f64, height: f64) -> Self {
        self.insert_element(selector, top, height);
        self
    }

    /// Add an element, or update the geometry of the one already answering
    /// to `selector`.
    pub fn insert_element(&mut self, selector: &str, top: f64, height: f64) -> ElementId {
        if let Some(id) = self.position(selector) {
            let element = &mut self.elements[id.0];
            element.top = top;
            element.height = height;
            return id;
        }
        self.elements.push(StaticElement::new(selector, top, height));
        ElementId(self.elements.len() - 1)
    }

    /// Change an existing element's geometry. Returns `false` if no element
    /// answers to `selector`.
    pub fn move_element(&mut self, selector: &str, top: f64, height: f64) -> bool {
        match self.position(selector) {
            Some(id) => {
                let element = &mut self.elements[id.0];
                element.top = top;
                element.height = height;
                true
            }
            None => false,
        }
    }

    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.viewport.scroll_top = scroll_top;
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport.width = width;
    }

    pub fn elements(&self) -> &[StaticElement] {
        &self.elements
    }

    pub fn element(&self, selector: &str) -> Option<&StaticElement> {
        self.position(selector).map(|id| &self.elements[id.0])
    }

    /// Sorted classes of the element, empty if it does not exist.
    pub fn classes(&self, selector: &str) -> Vec<String> {
        self.element(selector)
            .map(|e| e.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn inline_top_of(&self, selector: &str) -> Option<f64> {
        self.element(selector).and_then(|e| e.inline_top)
    }

    pub fn style_writes(&self) -> usize {
        self.style_writes
    }

    fn position(&self, selector: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.selector == selector)
            .map(ElementId)
    }
}

impl Page for StaticPage {
    type Node = ElementId;

    fn query(&self, selector: &str) -> Option<ElementId> {
        self.position(selector)
    }

    fn geometry(&self, node: ElementId) -> Geometry {
        let element = &self.elements[node.0];
        Geometry::new(element.top, element.height)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn has_class(&self, node: ElementId, class: &str) -> bool {
        self.elements[node.0].classes.contains(class)
    }

    fn add_class(&mut self, node: ElementId, class: &str) {
        let classes = &mut self.elements[node.0].classes;
        if !classes.contains(class) {
            classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, node: ElementId, class: &str) {
        self.elements[node.0].classes.remove(class);
    }

    fn inline_top(&self, node: ElementId) -> Option<f64> {
        self.elements[node.0].inline_top
    }

    fn set_inline_top(&mut self, node: ElementId, top: f64) {
        self.elements[node.0].inline_top = Some(top);
        self.style_writes += 1;
    }

    fn clear_inline_style(&mut self, node: ElementId) {
        self.elements[node.0].inline_top = None;
        self.style_writes += 1;
    }
}

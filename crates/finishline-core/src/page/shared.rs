//! Shared page-level class list.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// A named, clonable handle to one page-level class list (the `body` of a
/// document, typically).
///
/// Clones share the same underlying set, so several zones can hold the same
/// handle. There is no coordination between them: the last write wins.
#[derive(Debug, Clone)]
pub struct SharedClassList {
    name: Rc<str>,
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl SharedClassList {
    pub fn named(name: &str) -> Self {
        Self {
            name: Rc::from(name),
            classes: Rc::new(RefCell::new(BTreeSet::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the class was not already present.
    pub fn add(&self, class: &str) -> bool {
        let mut classes = self.classes.borrow_mut();
        if classes.contains(class) {
            return false;
        }
        classes.insert(class.to_string())
    }

    /// Returns `true` if the class was present.
    pub fn remove(&self, class: &str) -> bool {
        self.classes.borrow_mut().remove(class)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.borrow().is_empty()
    }

    /// Sorted copy of the current classes.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl Default for SharedClassList {
    fn default() -> Self {
        Self::named("body")
    }
}

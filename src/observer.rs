//! Viewport-intersection subscription seam.
//!
//! The browser's `IntersectionObserver` is wrapped behind [`Observer`] so the
//! active-link and reveal bookkeeping can be driven by plain entry lists in
//! tests and by real observer callbacks in the page.

use serde::{Deserialize, Serialize};

/// Register/unregister lifecycle for observed targets.
pub trait Observer<T> {
    fn observe(&mut self, target: &T);
    fn unobserve(&mut self, target: &T);
    /// Stop observing everything.
    fn disconnect(&mut self);
}

/// Threshold and root margin passed to an intersection observer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Visible fraction (0..=1) that counts as intersecting.
    pub threshold: f64,
    /// CSS margin shrinking or growing the root box; empty means none.
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self { threshold: 0.0, root_margin: String::new() }
    }
}

impl ObserverOptions {
    #[must_use]
    pub fn new(threshold: f64, root_margin: &str) -> Self {
        Self { threshold, root_margin: root_margin.to_owned() }
    }
}

/// One entry of an observer callback batch.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<T> {
    pub target: T,
    pub is_intersecting: bool,
}

impl<T> IntersectionEntry<T> {
    pub fn new(target: T, is_intersecting: bool) -> Self {
        Self { target, is_intersecting }
    }
}

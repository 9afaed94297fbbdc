//! In-page navigation: fragment scrolling and active-link tracking.
//!
//! DESIGN
//! ======
//! The tracker stores the active *section id*, not a link index. Link state
//! is derived by comparing each link's `href` with `#<id>`, so a section with
//! no matching link simply leaves every link inactive. When several links
//! share the same `href`, only the first of them is marked active.
//!
//! Within one observer batch every intersecting entry overwrites the active
//! id in order, so the last intersecting entry wins. This is not necessarily
//! the topmost visible section.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::observer::IntersectionEntry;

/// Section id referenced by a same-page link, e.g. `"#about"` → `"about"`.
///
/// Returns `None` for non-fragment links and for a bare `"#"`.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// How a programmatic scroll should move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMotion {
    /// Single jump.
    Instant,
    /// Browser-animated scroll.
    Smooth,
}

impl ScrollMotion {
    #[must_use]
    pub fn for_reduced_motion(reduced: bool) -> Self {
        if reduced { Self::Instant } else { Self::Smooth }
    }
}

/// Document offset to scroll to so `target` lands just below the navbar.
///
/// `target_top` is the target's viewport-relative top (bounding rect), so the
/// current `scroll_y` is added to get its document position.
#[must_use]
pub fn fragment_scroll_top(target_top: f64, scroll_y: f64, navbar_height: f64, gap: f64) -> f64 {
    target_top + scroll_y - navbar_height + gap
}

/// Tracks which section the navigation should mark as current.
#[derive(Clone, Debug, Default)]
pub struct ActiveLinkTracker {
    hrefs: Vec<String>,
    active: Option<String>,
}

impl ActiveLinkTracker {
    /// One entry per navigation link, in document order.
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { hrefs: hrefs.into_iter().map(Into::into).collect(), active: None }
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Apply an observer batch. Returns `true` when any entry set the active
    /// section, meaning link state must be re-rendered.
    pub fn apply_entries<'a, I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = IntersectionEntry<&'a str>>,
    {
        let mut touched = false;
        for entry in entries {
            if entry.is_intersecting && !entry.target.is_empty() {
                self.active = Some(entry.target.to_owned());
                touched = true;
            }
        }
        touched
    }

    /// Index of the first link pointing at the active section.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        let id = self.active.as_deref()?;
        self.hrefs.iter().position(|href| fragment_id(href) == Some(id))
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    /// Active flag for every link, in document order.
    #[must_use]
    pub fn link_states(&self) -> Vec<bool> {
        let active = self.active_index();
        (0..self.hrefs.len()).map(|index| active == Some(index)).collect()
    }
}

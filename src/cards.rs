//! Whole-card activation for project cards.
//!
//! A card with at least one link forwards clicks and Enter/Space presses to
//! its first link. Events that start on a link (or inside one) are left to
//! the link itself so navigation never fires twice.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

/// Where a click or key event started, relative to the card's links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOrigin {
    /// On an anchor or a descendant of one.
    Anchor,
    /// Anywhere else on the card.
    Card,
}

impl EventOrigin {
    /// Classify by tag name of the nearest enclosing element, if any.
    #[must_use]
    pub fn from_anchor_tag(closest_tag: Option<&str>) -> Self {
        match closest_tag {
            Some(tag) if tag.eq_ignore_ascii_case("a") => Self::Anchor,
            _ => Self::Card,
        }
    }
}

/// Result of a key press on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyOutcome<'a, T> {
    pub activate: Option<&'a T>,
    pub prevent_default: bool,
}

/// Keys that activate a focused card.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// A project card and the link it forwards to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard<T> {
    primary: T,
}

impl<T> ProjectCard<T> {
    /// Build from the card's links in document order. `None` when the card
    /// has no link and should stay inert.
    pub fn new(links: impl IntoIterator<Item = T>) -> Option<Self> {
        links.into_iter().next().map(|primary| Self { primary })
    }

    #[must_use]
    #[cfg(test)]
    pub(crate) fn primary(&self) -> &T {
        &self.primary
    }

    /// Link to activate for a click, if any.
    #[must_use]
    pub fn on_click(&self, origin: EventOrigin) -> Option<&T> {
        match origin {
            EventOrigin::Card => Some(&self.primary),
            EventOrigin::Anchor => None,
        }
    }

    /// Link to activate for a key press, and whether to suppress the key's
    /// default action (page scroll for Space).
    #[must_use]
    pub fn on_key(&self, key: &str, origin: EventOrigin) -> KeyOutcome<'_, T> {
        if origin == EventOrigin::Card && is_activation_key(key) {
            KeyOutcome { activate: Some(&self.primary), prevent_default: true }
        } else {
            KeyOutcome { activate: None, prevent_default: false }
        }
    }
}

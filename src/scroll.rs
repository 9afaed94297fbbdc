//! Scroll-position-derived UI state (navbar style, back-to-top visibility).

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BACK_TO_TOP_VISIBLE_PX, NAV_SCROLL_GAP_PX, NAVBAR_SCROLLED_PX};

/// Pixel distances used by the scroll behaviors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollThresholds {
    /// Offset past which the navbar is styled as scrolled.
    pub navbar_scrolled_px: f64,
    /// Offset past which the back-to-top button shows.
    pub back_to_top_px: f64,
    /// Gap kept below the navbar when jumping to a section.
    pub nav_gap_px: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            navbar_scrolled_px: NAVBAR_SCROLLED_PX,
            back_to_top_px: BACK_TO_TOP_VISIBLE_PX,
            nav_gap_px: NAV_SCROLL_GAP_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollState {
    /// State for vertical offset `scroll_y`. Both comparisons are strict.
    #[must_use]
    pub fn at(scroll_y: f64, thresholds: &ScrollThresholds) -> Self {
        Self {
            navbar_scrolled: scroll_y > thresholds.navbar_scrolled_px,
            back_to_top_visible: scroll_y > thresholds.back_to_top_px,
        }
    }
}

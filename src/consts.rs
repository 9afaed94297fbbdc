//! Shared constants for the page behaviors.

// ── Scroll ──────────────────────────────────────────────────────

/// Vertical offset past which the navbar gets the `scrolled` style.
pub const NAVBAR_SCROLLED_PX: f64 = 12.0;

/// Vertical offset past which the back-to-top button becomes visible.
pub const BACK_TO_TOP_VISIBLE_PX: f64 = 420.0;

/// Extra gap added below the navbar when jumping to a fragment target.
pub const NAV_SCROLL_GAP_PX: f64 = 8.0;

// ── Intersection observers ──────────────────────────────────────

/// Fraction of a section that must be visible to mark its nav link active.
pub const ACTIVE_SECTION_THRESHOLD: f64 = 0.35;

/// Root margin biasing active-section detection toward the top of the viewport.
pub const ACTIVE_SECTION_ROOT_MARGIN: &str = "-10% 0px -45% 0px";

/// Fraction of a reveal target that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.2;

// ── Timing ──────────────────────────────────────────────────────

/// How long the copy-email button shows its success label.
pub const COPY_REVERT_MS: u32 = 1600;

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "preferred-theme";

// ── Media queries ───────────────────────────────────────────────

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
pub const PREFERS_REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Attributes and classes ──────────────────────────────────────

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const ARIA_CURRENT: &str = "aria-current";
pub const ARIA_LABEL: &str = "aria-label";

pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_REVEAL: &str = "reveal";
pub const CLASS_IN_VIEW: &str = "in-view";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_COPIED: &str = "copied";
pub const CLASS_SCROLL_TOP: &str = "scroll-top";
pub const CLASS_COPY_EMAIL: &str = "copy-email";

// ── Labels ──────────────────────────────────────────────────────

pub const SUN_ICON: &str = "\u{2600}\u{fe0f}";
pub const MOON_ICON: &str = "\u{1f319}";
pub const LIGHT_MODE_LABEL: &str = "Light mode";
pub const DARK_MODE_LABEL: &str = "Dark mode";

pub const BACK_TO_TOP_LABEL: &str = "Back to top";
pub const BACK_TO_TOP_GLYPH: &str = "\u{2191}";

pub const COPY_EMAIL_LABEL: &str = "Copy email";
pub const COPIED_LABEL: &str = "Copied!";
pub const MANUAL_COPY_LABEL: &str = "Press Ctrl+C";

// ── Selectors ───────────────────────────────────────────────────

pub const NAVBAR_SELECTOR: &str = ".Navbar";
pub const NAV_LINKS_SELECTOR: &str = "#Nav a";
pub const SECTIONS_SELECTOR: &str = "section";
pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const THEME_ICON_SELECTOR: &str = ".theme-icon";
pub const THEME_TEXT_SELECTOR: &str = ".theme-text";
pub const PROFILE_IMAGE_SELECTOR: &str = ".Profile img";
pub const FEATURED_SELECTOR: &str = "#p1";
pub const PROJECT_CARDS_SELECTOR: &str = ".Projects > div";
pub const CONTACTS_SELECTOR: &str = ".Contacts";
pub const EMAIL_LINK_SELECTOR: &str = ".email a[href^=\"mailto:\"]";

//! Controller configuration.
//!
//! Every field has a default matching the portfolio page markup, so the host
//! page can pass `{}` (or nothing) and only override what differs. Values are
//! parsed from JSON handed over by the JS loader and validated before any DOM
//! wiring starts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::ConfigError;
use crate::observer::ObserverOptions;
use crate::scroll::ScrollThresholds;
use crate::theme::ThemeHost;

/// Full controller configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub scroll: ScrollThresholds,
    pub observers: ObserverConfig,
    pub timing: TimingConfig,
    pub theme: ThemeConfig,
    /// `log` level name for the console logger (`error` .. `trace`).
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            scroll: ScrollThresholds::default(),
            observers: ObserverConfig::default(),
            timing: TimingConfig::default(),
            theme: ThemeConfig::default(),
            log_level: "info".to_owned(),
        }
    }
}

/// CSS selectors for every element the controller consumes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub navbar: String,
    pub nav_links: String,
    pub sections: String,
    pub theme_toggle: String,
    pub theme_icon: String,
    pub theme_text: String,
    pub profile_image: String,
    pub featured: String,
    pub project_cards: String,
    pub contacts: String,
    pub email_link: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: consts::NAVBAR_SELECTOR.to_owned(),
            nav_links: consts::NAV_LINKS_SELECTOR.to_owned(),
            sections: consts::SECTIONS_SELECTOR.to_owned(),
            theme_toggle: consts::THEME_TOGGLE_SELECTOR.to_owned(),
            theme_icon: consts::THEME_ICON_SELECTOR.to_owned(),
            theme_text: consts::THEME_TEXT_SELECTOR.to_owned(),
            profile_image: consts::PROFILE_IMAGE_SELECTOR.to_owned(),
            featured: consts::FEATURED_SELECTOR.to_owned(),
            project_cards: consts::PROJECT_CARDS_SELECTOR.to_owned(),
            contacts: consts::CONTACTS_SELECTOR.to_owned(),
            email_link: consts::EMAIL_LINK_SELECTOR.to_owned(),
        }
    }
}

impl Selectors {
    fn named(&self) -> [(&'static str, &str); 11] {
        [
            ("selectors.navbar", &self.navbar),
            ("selectors.nav_links", &self.nav_links),
            ("selectors.sections", &self.sections),
            ("selectors.theme_toggle", &self.theme_toggle),
            ("selectors.theme_icon", &self.theme_icon),
            ("selectors.theme_text", &self.theme_text),
            ("selectors.profile_image", &self.profile_image),
            ("selectors.featured", &self.featured),
            ("selectors.project_cards", &self.project_cards),
            ("selectors.contacts", &self.contacts),
            ("selectors.email_link", &self.email_link),
        ]
    }
}

/// Options for the two intersection observers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub active_section: ObserverOptions,
    pub reveal: ObserverOptions,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            active_section: ObserverOptions::new(
                consts::ACTIVE_SECTION_THRESHOLD,
                consts::ACTIVE_SECTION_ROOT_MARGIN,
            ),
            reveal: ObserverOptions::new(consts::REVEAL_THRESHOLD, ""),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay before the copy-email button drops its success label.
    pub copy_revert_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { copy_revert_ms: consts::COPY_REVERT_MS }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub host: ThemeHost,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: consts::THEME_STORAGE_KEY.to_owned(), host: ThemeHost::default() }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and required strings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.selectors.named() {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        if self.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::Empty { field: "theme.storage_key" });
        }

        check_ratio("observers.active_section.threshold", self.observers.active_section.threshold)?;
        check_ratio("observers.reveal.threshold", self.observers.reveal.threshold)?;

        check_distance("scroll.navbar_scrolled_px", self.scroll.navbar_scrolled_px)?;
        check_distance("scroll.back_to_top_px", self.scroll.back_to_top_px)?;
        check_distance("scroll.nav_gap_px", self.scroll.nav_gap_px)?;

        self.log_level()?;
        Ok(())
    }

    /// The configured console log level.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(self.log_level.trim()).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RatioOutOfRange { field, value })
    }
}

fn check_distance(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDistance { field, value })
    }
}

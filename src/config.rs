//! Page configuration: the selectors, classes, and keys the controller uses.
//!
//! DESIGN
//! ======
//! Defaults match the stock markup contract in [`crate::consts`]. Pages with
//! different markup pass a partial JSON object; omitted fields keep their
//! defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub year_selector: String,
    pub nav_toggle_selector: String,
    pub navigation_selector: String,
    pub nav_open_class: String,
    pub nav_link_selector: String,
    pub theme_toggle_selector: String,
    pub theme_toggle_nav_class: String,
    pub body_light_class: String,
    pub theme_storage_key: String,
    pub scroll_target_attr: String,
    pub section_selector: String,
    pub spy_link_selector: String,
    pub active_link_class: String,
    pub spy_threshold: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            year_selector: consts::YEAR_SELECTOR.to_owned(),
            nav_toggle_selector: consts::NAV_TOGGLE_SELECTOR.to_owned(),
            navigation_selector: consts::NAVIGATION_SELECTOR.to_owned(),
            nav_open_class: consts::NAV_OPEN_CLASS.to_owned(),
            nav_link_selector: consts::NAV_LINK_SELECTOR.to_owned(),
            theme_toggle_selector: consts::THEME_TOGGLE_SELECTOR.to_owned(),
            theme_toggle_nav_class: consts::THEME_TOGGLE_NAV_CLASS.to_owned(),
            body_light_class: consts::BODY_LIGHT_CLASS.to_owned(),
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            scroll_target_attr: consts::SCROLL_TARGET_ATTR.to_owned(),
            section_selector: consts::SECTION_SELECTOR.to_owned(),
            spy_link_selector: consts::SPY_LINK_SELECTOR.to_owned(),
            active_link_class: consts::ACTIVE_LINK_CLASS.to_owned(),
            spy_threshold: consts::SPY_THRESHOLD,
        }
    }
}

impl PageConfig {
    /// Parse a partial JSON override object on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, a threshold outside
    /// `0.0..=1.0`, or an empty storage key.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.spy_threshold) {
            return Err(ConfigError::Threshold(self.spy_threshold));
        }
        if self.theme_storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }

    /// Attribute selector matching every scroll button.
    #[must_use]
    pub fn scroll_button_selector(&self) -> String {
        format!("[{}]", self.scroll_target_attr)
    }
}

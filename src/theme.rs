//! Light/dark theme preference.
//!
//! Reads the stored preference from `localStorage`, falls back to the OS
//! color-scheme preference, then to dark. The body carries the light class
//! while the light theme is active, and every theme toggle mirrors the
//! current theme in its pressed state, label, title, and `data-theme`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a storage failure reads as "nothing stored"
//! and a failed write is dropped, so the theme still switches for the rest
//! of the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{
    ARIA_LABEL, ARIA_PRESSED, DATA_THEME, LABEL_SWITCH_TO_DARK, LABEL_SWITCH_TO_LIGHT, TITLE,
};
use crate::host::{Element, Host};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Only the exact strings `"light"` and `"dark"`
    /// are recognized.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label for a toggle, naming the state a click switches to.
    #[must_use]
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Light => LABEL_SWITCH_TO_DARK,
            Self::Dark => LABEL_SWITCH_TO_LIGHT,
        }
    }

    #[must_use]
    pub fn from_prefers_light(prefers_light: bool) -> Self {
        if prefers_light { Self::Light } else { Self::Dark }
    }
}

/// Initial theme: a valid stored value, else the OS preference, else dark.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_light: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    match prefers_light {
        Some(true) => Theme::Light,
        Some(false) | None => Theme::Dark,
    }
}

/// Whether a raw stored value counts as a user choice. Any non-empty string
/// does, even one [`Theme::parse`] rejects.
#[must_use]
pub fn is_stored(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| !value.is_empty())
}

/// Read the raw stored preference. Storage failures read as `None`.
pub fn read_stored_theme<H: Host>(host: &H, key: &str) -> Option<String> {
    match host.storage_get(key) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("theme: storage read skipped: {err}");
            None
        }
    }
}

/// Persist `theme`. Failures are logged and dropped.
pub fn write_stored_theme<H: Host>(host: &H, key: &str, theme: Theme) {
    if let Err(err) = host.storage_set(key, theme.as_str()) {
        log::debug!("theme: storage write skipped: {err}");
    }
}

/// The body element and every theme toggle on the page.
pub struct ThemeSwitcher<E: Element> {
    body: Option<E>,
    toggles: Vec<E>,
    light_class: String,
}

impl<E: Element> ThemeSwitcher<E> {
    #[must_use]
    pub fn new(body: Option<E>, toggles: Vec<E>, light_class: &str) -> Self {
        Self { body, toggles, light_class: light_class.to_owned() }
    }

    /// Theme currently shown, read back from the body class.
    #[must_use]
    pub fn current(&self) -> Theme {
        let light = self.body.as_ref().is_some_and(|body| body.has_class(&self.light_class));
        if light { Theme::Light } else { Theme::Dark }
    }

    /// Show `theme` on the body and every toggle. Never persists.
    pub fn apply(&self, theme: Theme) {
        let light = theme == Theme::Light;
        if let Some(body) = &self.body {
            body.set_class(&self.light_class, light);
        }
        let label = theme.switch_label();
        for toggle in &self.toggles {
            toggle.set_attribute(ARIA_PRESSED, if light { "true" } else { "false" });
            toggle.set_attribute(ARIA_LABEL, label);
            toggle.set_attribute(TITLE, label);
            toggle.set_attribute(DATA_THEME, theme.as_str());
        }
        log::debug!("theme: applied {}", theme.as_str());
    }

    #[must_use]
    pub fn toggles(&self) -> &[E] {
        &self.toggles
    }
}

//! Default markup contract: selectors, class names, attribute names, and keys.
//!
//! [`crate::config::PageConfig::default`] is assembled from these values.

// ── Year stamp ──────────────────────────────────────────────────

/// Element whose text receives the current year.
pub const YEAR_SELECTOR: &str = "#year";

// ── Navigation disclosure ───────────────────────────────────────

/// Control that opens and closes the mobile navigation.
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";

/// Collapsible navigation container.
pub const NAVIGATION_SELECTOR: &str = "#primary-navigation";

/// Class present on the navigation container while it is open.
pub const NAV_OPEN_CLASS: &str = "is-open";

/// Links inside the navigation container that close it when activated.
pub const NAV_LINK_SELECTOR: &str = "a";

/// Mirrors the open state onto the toggle control.
pub const ARIA_EXPANDED: &str = "aria-expanded";

// ── Theme ───────────────────────────────────────────────────────

/// Every control that flips the theme.
pub const THEME_TOGGLE_SELECTOR: &str = "[data-theme-toggle]";

/// Marks the theme toggle that lives inside the navigation menu.
pub const THEME_TOGGLE_NAV_CLASS: &str = "theme-toggle--nav";

/// Body class present while the light theme is active.
pub const BODY_LIGHT_CLASS: &str = "theme-light";

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme-preference";

/// Media query whose match means the OS prefers the light scheme.
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

/// `"true"` on every theme toggle while the light theme is active.
pub const ARIA_PRESSED: &str = "aria-pressed";
/// Accessible name of a theme toggle.
pub const ARIA_LABEL: &str = "aria-label";
/// Tooltip of a theme toggle; same text as its label.
pub const TITLE: &str = "title";
/// Current theme name on every theme toggle.
pub const DATA_THEME: &str = "data-theme";

/// Toggle label while light is showing.
pub const LABEL_SWITCH_TO_DARK: &str = "Switch to dark theme";
/// Toggle label while dark is showing.
pub const LABEL_SWITCH_TO_LIGHT: &str = "Switch to light theme";

// ── Smooth scroll ───────────────────────────────────────────────

/// Attribute naming a scroll button's destination.
pub const SCROLL_TARGET_ATTR: &str = "data-scroll-to";

/// Scroll target value meaning "top of the document".
pub const SCROLL_TOP_SENTINEL: &str = "top";

// ── Scroll-spy ──────────────────────────────────────────────────

/// Content sections tracked for visibility.
pub const SECTION_SELECTOR: &str = "main section[id]";

/// Navigation links highlighted for the visible section.
pub const SPY_LINK_SELECTOR: &str = ".primary-navigation a";

/// Class marking the link of the visible section.
pub const ACTIVE_LINK_CLASS: &str = "is-active";

/// Visible fraction at which a section counts as active.
pub const SPY_THRESHOLD: f64 = 0.4;

//! Page behavior controller: locates elements once and wires every behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once when the document is parsed. Each behavior checks for its own
//! elements and host capabilities and skips itself when they are missing, so
//! one absent feature never disables another. The only cross-feature link is
//! the navigation-embedded theme toggle closing an open menu.
//!
//! DESIGN
//! ======
//! Event callbacks capture an `Rc` of the controller. Listeners live as long
//! as the page, so the controller does too.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::PageConfig;
use crate::host::{Element, Host, Intersection};
use crate::nav::NavDisclosure;
use crate::spy::ScrollSpy;
use crate::theme::{self, Theme, ThemeSwitcher};
use crate::{scroll, year};

/// Which behaviors found what they need at mount time.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Installed {
    pub year_stamp: bool,
    pub nav: bool,
    pub theme_toggles: usize,
    pub preference_watch: bool,
    pub scroll_buttons: usize,
    pub scroll_spy: bool,
}

/// Owns the located elements and the host; every installed listener holds an `Rc` of it.
pub struct Controller<H: Host> {
    host: H,
    config: PageConfig,
    nav: Option<NavDisclosure<H::Element>>,
    themes: ThemeSwitcher<H::Element>,
    installed: Cell<Installed>,
}

impl<H: Host> Controller<H> {
    /// Locate elements, apply the initial theme, and install every listener.
    pub fn mount(host: H, config: PageConfig) -> Rc<Self> {
        let year_stamp = year::stamp(&host, &config.year_selector);
        let nav = NavDisclosure::locate(
            &host,
            &config.nav_toggle_selector,
            &config.navigation_selector,
            &config.nav_open_class,
        );
        let themes = ThemeSwitcher::new(
            host.body(),
            host.query_all(&config.theme_toggle_selector),
            &config.body_light_class,
        );

        let controller = Rc::new(Self {
            host,
            config,
            nav,
            themes,
            installed: Cell::new(Installed { year_stamp, ..Installed::default() }),
        });
        controller.install_nav();
        controller.install_theme();
        controller.install_scroll_buttons();
        controller.install_scroll_spy();

        log::info!("page behaviors mounted: {:?}", controller.installed());
        controller
    }

    #[must_use]
    pub fn installed(&self) -> Installed {
        self.installed.get()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn nav(&self) -> Option<&NavDisclosure<H::Element>> {
        self.nav.as_ref()
    }

    /// Theme currently shown on the page.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.themes.current()
    }

    fn record(&self, update: impl FnOnce(&mut Installed)) {
        let mut installed = self.installed.get();
        update(&mut installed);
        self.installed.set(installed);
    }

    // --- Installation ---

    fn install_nav(self: &Rc<Self>) {
        let Some(nav) = &self.nav else {
            return;
        };

        let this = Rc::clone(self);
        nav.toggle_control().on_click(Box::new(move || this.on_nav_toggle()));

        for link in nav.container().query_all(&self.config.nav_link_selector) {
            let this = Rc::clone(self);
            link.on_click(Box::new(move || this.on_nav_link()));
        }
        self.record(|installed| installed.nav = true);
    }

    fn install_theme(self: &Rc<Self>) {
        let key = &self.config.theme_storage_key;
        let stored = theme::read_stored_theme(&self.host, key);
        let initial = theme::resolve_initial(stored.as_deref(), self.host.prefers_light_scheme());
        self.themes.apply(initial);

        for toggle in self.themes.toggles() {
            let this = Rc::clone(self);
            let clicked = toggle.clone();
            toggle.on_click(Box::new(move || this.on_theme_toggle(&clicked)));
        }

        let mut preference_watch = false;
        if !theme::is_stored(stored.as_deref()) {
            let this = Rc::clone(self);
            preference_watch = self
                .host
                .watch_color_scheme(Box::new(move |prefers_light: bool| this.on_preference_change(prefers_light)));
        }

        let toggles = self.themes.toggles().len();
        self.record(|installed| {
            installed.theme_toggles = toggles;
            installed.preference_watch = preference_watch;
        });
    }

    fn install_scroll_buttons(self: &Rc<Self>) {
        let buttons = self.host.query_all(&self.config.scroll_button_selector());
        for button in &buttons {
            let this = Rc::clone(self);
            let clicked = button.clone();
            button.on_click(Box::new(move || this.on_scroll_button(&clicked)));
        }
        let count = buttons.len();
        self.record(|installed| installed.scroll_buttons = count);
    }

    fn install_scroll_spy(&self) {
        if !self.host.supports_intersection() {
            log::debug!("spy: intersection observation unsupported");
            return;
        }
        let sections = self.host.query_all(&self.config.section_selector);
        if sections.is_empty() {
            return;
        }

        let spy = ScrollSpy::new(self.host.query_all(&self.config.spy_link_selector), &self.config.active_link_class);
        self.host.observe_intersections(
            &sections,
            self.config.spy_threshold,
            Box::new(move |entries: &[Intersection]| spy.on_batch(entries)),
        );
        self.record(|installed| installed.scroll_spy = true);
    }

    // --- Event handlers ---

    pub fn on_nav_toggle(&self) {
        if let Some(nav) = &self.nav {
            nav.toggle();
        }
    }

    pub fn on_nav_link(&self) {
        self.close_nav();
    }

    fn close_nav(&self) {
        if let Some(nav) = &self.nav {
            nav.close();
        }
    }

    /// Flip the theme, persist it, and close the menu when the clicked toggle
    /// is the one inside the navigation.
    pub fn on_theme_toggle(&self, toggle: &H::Element) {
        let next = self.themes.current().opposite();
        self.themes.apply(next);
        theme::write_stored_theme(&self.host, &self.config.theme_storage_key, next);

        if toggle.has_class(&self.config.theme_toggle_nav_class) {
            self.close_nav();
        }
    }

    /// Follow the OS preference unless a choice has been stored since mount.
    pub fn on_preference_change(&self, prefers_light: bool) {
        let stored = theme::read_stored_theme(&self.host, &self.config.theme_storage_key);
        if theme::is_stored(stored.as_deref()) {
            return;
        }
        self.themes.apply(Theme::from_prefers_light(prefers_light));
    }

    pub fn on_scroll_button(&self, button: &H::Element) {
        scroll::scroll_from(&self.host, button, &self.config.scroll_target_attr);
    }
}

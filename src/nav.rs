//! Mobile navigation disclosure.
//!
//! Two states, CLOSED (initial) and OPEN, held as the open class on the
//! navigation container and mirrored into `aria-expanded` on the toggle.
//! Nothing is persisted across page loads.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::ARIA_EXPANDED;
use crate::host::{Element, Host};

/// The toggle control and the container it opens.
#[derive(Clone)]
pub struct NavDisclosure<E: Element> {
    toggle: E,
    container: E,
    open_class: String,
}

impl<E: Element> NavDisclosure<E> {
    #[must_use]
    pub fn new(toggle: E, container: E, open_class: &str) -> Self {
        Self { toggle, container, open_class: open_class.to_owned() }
    }

    /// Find both elements. `None` unless the toggle and the container exist.
    pub fn locate<H: Host<Element = E>>(
        host: &H,
        toggle_selector: &str,
        container_selector: &str,
        open_class: &str,
    ) -> Option<Self> {
        let toggle = host.query(toggle_selector)?;
        let container = host.query(container_selector)?;
        Some(Self::new(toggle, container, open_class))
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.container.has_class(&self.open_class)
    }

    /// Flip between OPEN and CLOSED, returning the new state.
    pub fn toggle(&self) -> bool {
        let open = self.container.toggle_class(&self.open_class);
        self.toggle.set_attribute(ARIA_EXPANDED, if open { "true" } else { "false" });
        log::debug!("nav: open={open}");
        open
    }

    /// Force CLOSED. No-op when already closed; returns whether it closed.
    pub fn close(&self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.container.set_class(&self.open_class, false);
        self.toggle.set_attribute(ARIA_EXPANDED, "false");
        log::debug!("nav: closed");
        true
    }

    #[must_use]
    pub fn toggle_control(&self) -> &E {
        &self.toggle
    }

    #[must_use]
    pub fn container(&self) -> &E {
        &self.container
    }
}

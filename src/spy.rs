//! Scroll-spy: highlight the navigation link of the visible section.
//!
//! Each intersecting entry in a batch recomputes the active set from scratch,
//! so when several sections intersect at once the last entry wins. Entry
//! order is whatever the host delivers.

#[cfg(test)]
#[path = "spy_test.rs"]
mod spy_test;

use crate::host::{Element, Intersection};

/// Navigation links tracked against intersection batches.
pub struct ScrollSpy<E: Element> {
    links: Vec<E>,
    active_class: String,
}

impl<E: Element> ScrollSpy<E> {
    #[must_use]
    pub fn new(links: Vec<E>, active_class: &str) -> Self {
        Self { links, active_class: active_class.to_owned() }
    }

    /// Apply one observer batch.
    pub fn on_batch(&self, entries: &[Intersection]) {
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            self.highlight(entry.section_id.as_deref().unwrap_or_default());
        }
    }

    /// Mark exactly the links pointing at `#section_id`.
    pub fn highlight(&self, section_id: &str) {
        let wanted = format!("#{section_id}");
        for link in &self.links {
            link.set_class(&self.active_class, link.fragment() == wanted);
        }
        log::debug!("spy: active section {section_id:?}");
    }
}

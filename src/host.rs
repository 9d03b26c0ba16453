//! Host abstraction: everything the behaviors need from the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behavior logic in [`crate::controller`] and the per-feature modules only
//! talks to these traits. The browser implementation lives in `web`
//! (feature `hydrate`); tests run against the in-memory fake in
//! `fake_host_test.rs`.
//!
//! TRADE-OFFS
//! ==========
//! DOM mutations are infallible at this seam. The browser host logs the rare
//! `JsValue` failure instead of surfacing it, which keeps a broken attribute
//! write in one feature from aborting the others.

#[cfg(test)]
#[path = "fake_host_test.rs"]
pub(crate) mod fake;

use crate::error::StorageError;

/// Click callback registered on an element.
pub type ClickHandler = Box<dyn Fn()>;

/// Color-scheme change callback; receives whether the light query now matches.
pub type PreferenceHandler = Box<dyn Fn(bool)>;

/// Intersection batch callback; entries arrive in host order.
pub type IntersectionHandler = Box<dyn Fn(&[Intersection])>;

/// One entry of an intersection observer batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intersection {
    /// `id` attribute of the observed section.
    pub section_id: Option<String>,
    /// Whether the section crossed into the threshold.
    pub is_intersecting: bool,
}

/// A handle to one element of the page.
///
/// Handles are cheap to clone and refer to the same underlying node.
pub trait Element: Clone + 'static {
    fn set_text(&self, text: &str);

    fn has_class(&self, class: &str) -> bool;

    /// Add or remove `class` depending on `present`.
    fn set_class(&self, class: &str, present: bool);

    /// Flip `class`, returning whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        let present = !self.has_class(class);
        self.set_class(class, present);
        present
    }

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    /// URL fragment of a link, including the leading `#`. Empty when the
    /// element has no fragment.
    fn fragment(&self) -> String;

    /// Descendants matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self>;

    /// Smoothly scroll this element into view.
    fn scroll_into_view(&self);

    /// Run `handler` on every click.
    fn on_click(&self, handler: ClickHandler);
}

/// The page environment: document queries, storage, and capabilities.
pub trait Host: 'static {
    type Element: Element;

    fn query(&self, selector: &str) -> Option<Self::Element>;

    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn body(&self) -> Option<Self::Element>;

    /// Four-digit calendar year from the host clock.
    fn current_year(&self) -> u32;

    /// Smoothly scroll the viewport to the document origin.
    fn scroll_to_top(&self);

    /// Raw stored value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is missing or refuses access.
    fn storage_get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is missing or refuses the write.
    fn storage_set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Whether the OS prefers the light scheme. `None` when the host cannot
    /// evaluate media queries.
    fn prefers_light_scheme(&self) -> Option<bool>;

    /// Subscribe to color-scheme preference changes. Returns `false` when the
    /// host offers no way to subscribe.
    fn watch_color_scheme(&self, handler: PreferenceHandler) -> bool;

    /// Whether viewport intersection observation is available.
    fn supports_intersection(&self) -> bool;

    /// Observe `targets` at the given visibility `threshold`.
    fn observe_intersections(&self, targets: &[Self::Element], threshold: f64, handler: IntersectionHandler);
}

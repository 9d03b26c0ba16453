//! Browser host backed by `web-sys`.
//!
//! Failed DOM calls are logged at `warn` and otherwise ignored; storage
//! failures are returned as [`StorageError`] for the theme module to absorb.
//! Listener closures are leaked with `Closure::forget` because they live as
//! long as the page.

use js_sys::{Array, Date, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlAnchorElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MediaQueryList, NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Storage, Window,
};

use crate::consts::PREFERS_LIGHT_QUERY;
use crate::error::StorageError;
use crate::host::{ClickHandler, Element, Host, Intersection, IntersectionHandler, PreferenceHandler};
use crate::subscription::ChangeSubscription;

/// Whether `target[name]` is a function.
fn has_function(target: &JsValue, name: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(name)).map_or(false, |value| value.is_function())
}

fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

fn elements_of(list: &NodeList) -> Vec<web_sys::Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned())
        .collect()
}

fn selector_matches(selector: &str, result: Result<NodeList, JsValue>) -> Vec<web_sys::Element> {
    match result {
        Ok(list) => elements_of(&list),
        Err(err) => {
            log::warn!("query {selector:?} failed: {err:?}");
            Vec::new()
        }
    }
}

fn storage_error(err: JsValue) -> StorageError {
    StorageError::Access(format!("{err:?}"))
}

impl Element for web_sys::Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        warn_on_err("classList.toggle", self.class_list().toggle_with_force(class, present));
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                log::warn!("classList.toggle failed: {err:?}");
                self.has_class(class)
            }
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        warn_on_err("setAttribute", web_sys::Element::set_attribute(self, name, value));
    }

    fn fragment(&self) -> String {
        self.dyn_ref::<HtmlAnchorElement>().map(HtmlAnchorElement::hash).unwrap_or_default()
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        selector_matches(selector, self.query_selector_all(selector))
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn on_click(&self, handler: ClickHandler) {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| handler());
        match self.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref()) {
            Ok(()) => callback.forget(),
            Err(err) => log::warn!("click listener not attached: {err:?}"),
        }
    }
}

/// The live browser window and document.
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// `None` outside a browsing context (workers, SSR).
    #[must_use]
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn local_storage(&self) -> Result<Storage, StorageError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable),
            Err(err) => Err(storage_error(err)),
        }
    }

    /// The light-scheme media query, when `matchMedia` exists.
    fn color_scheme_query(&self) -> Option<MediaQueryList> {
        if !has_function(&self.window, "matchMedia") {
            return None;
        }
        match self.window.match_media(PREFERS_LIGHT_QUERY) {
            Ok(query) => query,
            Err(err) => {
                log::warn!("matchMedia failed: {err:?}");
                None
            }
        }
    }
}

/// Register `callback` on `query` through the chosen mechanism.
#[allow(deprecated)]
fn subscribe(subscription: ChangeSubscription, query: &MediaQueryList, callback: &Function) -> Result<(), JsValue> {
    match subscription {
        ChangeSubscription::EventTarget => query.add_event_listener_with_callback("change", callback),
        ChangeSubscription::LegacyListener => query.add_listener_with_opt_callback(Some(callback)),
    }
}

impl Host for WebHost {
    type Element = web_sys::Element;

    fn query(&self, selector: &str) -> Option<web_sys::Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("query {selector:?} failed: {err:?}");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<web_sys::Element> {
        selector_matches(selector, self.document.query_selector_all(selector))
    }

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    fn body(&self) -> Option<web_sys::Element> {
        self.document.body().map(web_sys::Element::from)
    }

    fn current_year(&self) -> u32 {
        Date::new_0().get_full_year()
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn storage_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.local_storage()?.get_item(key).map_err(storage_error)
    }

    fn storage_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.local_storage()?.set_item(key, value).map_err(storage_error)
    }

    fn prefers_light_scheme(&self) -> Option<bool> {
        self.color_scheme_query().map(|query| query.matches())
    }

    fn watch_color_scheme(&self, handler: PreferenceHandler) -> bool {
        let Some(query) = self.color_scheme_query() else {
            return false;
        };
        let Some(subscription) = ChangeSubscription::select(
            has_function(&query, ChangeSubscription::EventTarget.method()),
            has_function(&query, ChangeSubscription::LegacyListener.method()),
        ) else {
            log::debug!("theme: media query change notifications unsupported");
            return false;
        };

        // Modern browsers pass a MediaQueryListEvent, legacy ones the list
        // itself; both carry `matches`.
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |change: JsValue| {
            let matches = Reflect::get(&change, &JsValue::from_str("matches")).map_or(false, |value| value.is_truthy());
            handler(matches);
        });
        match subscribe(subscription, &query, callback.as_ref().unchecked_ref()) {
            Ok(()) => {
                log::debug!("theme: watching color scheme via {}", subscription.method());
                callback.forget();
                true
            }
            Err(err) => {
                log::warn!("color scheme subscription failed: {err:?}");
                false
            }
        }
    }

    fn supports_intersection(&self) -> bool {
        Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    }

    fn observe_intersections(&self, targets: &[web_sys::Element], threshold: f64, handler: IntersectionHandler) {
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            let batch: Vec<Intersection> = entries
                .iter()
                .filter_map(|value| {
                    value.dyn_ref::<IntersectionObserverEntry>().map(|entry| Intersection {
                        section_id: entry.target().get_attribute("id"),
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            handler(&batch);
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver not created: {err:?}");
                return;
            }
        };
        for target in targets {
            observer.observe(target);
        }
        callback.forget();
    }
}

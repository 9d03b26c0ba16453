//! Smooth-scroll buttons.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::SCROLL_TOP_SENTINEL;
use crate::host::{Element, Host};

/// Where a scroll button points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Document origin.
    Top,
    /// Element with this `id`.
    Section(String),
}

impl ScrollTarget {
    /// Interpret a scroll attribute value. Empty values point nowhere.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            SCROLL_TOP_SENTINEL => Some(Self::Top),
            id => Some(Self::Section(id.to_owned())),
        }
    }
}

/// Scroll to the target named by `button`'s `attr`.
///
/// Returns whether a scroll was requested. A missing attribute or a target id
/// with no matching element requests nothing.
pub fn scroll_from<H: Host>(host: &H, button: &H::Element, attr: &str) -> bool {
    let Some(target) = button.attribute(attr).as_deref().and_then(ScrollTarget::parse) else {
        return false;
    };
    match target {
        ScrollTarget::Top => {
            host.scroll_to_top();
            true
        }
        ScrollTarget::Section(id) => {
            let Some(destination) = host.element_by_id(&id) else {
                log::debug!("scroll: no element with id {id:?}");
                return false;
            };
            destination.scroll_into_view();
            true
        }
    }
}

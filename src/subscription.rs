//! Color-scheme change subscription mechanism.
//!
//! Browsers expose two ways to hear about `prefers-color-scheme` changes on a
//! `MediaQueryList`: the `EventTarget` API (`addEventListener("change")`) and
//! the older `addListener`. One is picked once, at startup, and every caller
//! goes through it.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeSubscription {
    /// `addEventListener("change", …)`.
    EventTarget,
    /// `addListener(…)`; the callback may receive the list itself.
    LegacyListener,
}

impl ChangeSubscription {
    /// Pick the mechanism from what the host offers, preferring the modern API.
    #[must_use]
    pub fn select(has_event_target: bool, has_legacy_listener: bool) -> Option<Self> {
        if has_event_target {
            Some(Self::EventTarget)
        } else if has_legacy_listener {
            Some(Self::LegacyListener)
        } else {
            None
        }
    }

    /// JS method used to register the callback.
    #[must_use]
    pub fn method(self) -> &'static str {
        match self {
            Self::EventTarget => "addEventListener",
            Self::LegacyListener => "addListener",
        }
    }
}

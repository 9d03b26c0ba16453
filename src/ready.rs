//! Document parse state.
//!
//! `document.readyState` is `"loading"` until the parser finishes, then
//! `"interactive"` and `"complete"`. Behaviors mount once it has left
//! `"loading"`.

#[cfg(test)]
#[path = "ready_test.rs"]
mod ready_test;

/// `document.readyState` while the parser is still running.
pub const READY_STATE_LOADING: &str = "loading";

/// Whether the document structure is parsed and safe to query.
#[must_use]
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != READY_STATE_LOADING
}

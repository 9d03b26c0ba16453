//! Footer year stamp.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

use crate::host::{Element, Host};

/// Write the host's current year into the element matching `selector`.
///
/// Returns whether an element was found.
pub fn stamp<H: Host>(host: &H, selector: &str) -> bool {
    let Some(node) = host.query(selector) else {
        return false;
    };
    node.set_text(&host.current_year().to_string());
    true
}

use super::*;
use crate::host::fake::{FakeElement, FakeHost};

#[test]
fn stamp_writes_current_year() {
    let host = FakeHost::new();
    let node = FakeElement::with_id("year");
    host.register("#year", std::slice::from_ref(&node));

    assert!(stamp(&host, "#year"));
    assert_eq!(node.text(), "2026");
}

#[test]
fn stamp_uses_host_clock() {
    let mut host = FakeHost::new();
    host.year = 1999;
    let node = FakeElement::new();
    host.register("#year", std::slice::from_ref(&node));

    stamp(&host, "#year");
    assert_eq!(node.text(), "1999");
}

#[test]
fn stamp_without_element_is_noop() {
    let host = FakeHost::new();
    assert!(!stamp(&host, "#year"));
}

use super::*;
use crate::host::fake::FakeElement;

fn entry(id: &str, is_intersecting: bool) -> Intersection {
    Intersection { section_id: Some(id.to_owned()), is_intersecting }
}

fn links() -> Vec<FakeElement> {
    vec![
        FakeElement::link("#features"),
        FakeElement::link("#pricing"),
        FakeElement::link("#features"),
        FakeElement::link("#faq"),
    ]
}

fn active(links: &[FakeElement]) -> Vec<bool> {
    links.iter().map(|l| l.has_class("is-active")).collect()
}

#[test]
fn single_section_marks_matching_links_only() {
    let links = links();
    let spy = ScrollSpy::new(links.clone(), "is-active");
    spy.on_batch(&[entry("features", true)]);
    assert_eq!(active(&links), vec![true, false, true, false]);
}

#[test]
fn new_section_moves_highlight() {
    let links = links();
    let spy = ScrollSpy::new(links.clone(), "is-active");
    spy.on_batch(&[entry("features", true)]);
    spy.on_batch(&[entry("pricing", true)]);
    assert_eq!(active(&links), vec![false, true, false, false]);
}

#[test]
fn non_intersecting_entries_change_nothing() {
    let links = links();
    let spy = ScrollSpy::new(links.clone(), "is-active");
    spy.on_batch(&[entry("faq", true)]);
    spy.on_batch(&[entry("features", false), entry("pricing", false)]);
    assert_eq!(active(&links), vec![false, false, false, true]);
}

#[test]
fn last_intersecting_entry_in_batch_wins() {
    let links = links();
    let spy = ScrollSpy::new(links.clone(), "is-active");
    spy.on_batch(&[entry("features", true), entry("faq", false), entry("pricing", true)]);
    assert_eq!(active(&links), vec![false, true, false, false]);
}

#[test]
fn section_without_links_clears_all() {
    let links = links();
    let spy = ScrollSpy::new(links.clone(), "is-active");
    spy.on_batch(&[entry("features", true)]);
    spy.on_batch(&[entry("testimonials", true)]);
    assert_eq!(active(&links), vec![false; 4]);
}

#[test]
fn entry_without_id_clears_all() {
    let links = links();
    let spy = ScrollSpy::new(links.clone(), "is-active");
    spy.on_batch(&[entry("pricing", true)]);
    spy.on_batch(&[Intersection { section_id: None, is_intersecting: true }]);
    assert_eq!(active(&links), vec![false; 4]);
}

use std::cell::Cell;
use std::rc::Rc;

use pagedom::{propagation_path, Document, Element, Event, ReadyState};

// ============================================================================
// Ready
// ============================================================================

#[test]
fn test_ready_runs_immediately_when_loaded() {
    let mut doc = Document::default();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    doc.ready(move |_| counter.set(counter.get() + 1));

    assert_eq!(calls.get(), 1);
}

#[test]
fn test_ready_waits_for_content_loaded() {
    let mut doc = Document::default().loading();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    doc.ready(move |_| counter.set(counter.get() + 1));
    assert_eq!(calls.get(), 0);

    assert_eq!(doc.content_loaded(), 1);
    assert_eq!(calls.get(), 1);
    assert_eq!(doc.ready_state(), ReadyState::Interactive);

    // Callbacks run once
    assert_eq!(doc.content_loaded(), 0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_ready_callback_can_mutate_document() {
    let mut doc = Document::default().loading();
    doc.ready(|doc| {
        let body_id = doc.body().id.clone();
        doc.append_child(&body_id, Element::new("p").id("added"));
    });
    assert!(doc.get_element_by_id("added").is_none());

    doc.complete();

    assert!(doc.get_element_by_id("added").is_some());
    assert_eq!(doc.ready_state(), ReadyState::Complete);
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_propagation_path_bubbles_to_body() {
    let doc = Document::new(
        Element::new("body").child(
            Element::new("button")
                .id("btn")
                .child(Element::new("span").id("label").with_text("Sort")),
        ),
    );

    let path = propagation_path(&doc, "label");
    assert_eq!(path[0], "label");
    assert_eq!(path[1], "btn");
    assert_eq!(path.last(), Some(&doc.body().id));
}

#[test]
fn test_propagation_path_unknown_target() {
    let doc = Document::default();
    assert!(propagation_path(&doc, "ghost").is_empty());
}

#[test]
fn test_event_target() {
    assert_eq!(Event::click("a").target(), "a");
    assert_eq!(Event::submit("form").target(), "form");
}

use std::cell::RefCell;
use std::rc::Rc;

use dpr_frontend::fixtures;
use dpr_frontend::table_sort::upgrade::button_label;
use dpr_frontend::{
    SortConfig, SortError, SortOrder, SortRequest, TableSorts, handle_sort_request,
};
use pagedom::{Document, Element, Event, ReadyState, Selector};

fn loaded_page() -> (Document, Rc<RefCell<TableSorts>>) {
    let mut doc = fixtures::submissions_page();
    let sorts = TableSorts::attach(&mut doc, SortConfig::default());
    doc.content_loaded();
    (doc, sorts)
}

fn button_for(sorts: &Rc<RefCell<TableSorts>>, column: &str) -> String {
    sorts
        .borrow()
        .control_for_column(column)
        .map(|control| control.button.clone())
        .expect("column has a control")
}

fn live_text(doc: &Document) -> String {
    doc.get_element_by_id("sort-order-live")
        .map(|region| region.text_content())
        .unwrap_or_default()
}

fn column_texts(doc: &Document, column: usize) -> Vec<String> {
    let body = doc.query(&Selector::tag("tbody")).expect("table has a body");
    body.element_children()
        .filter_map(|row| row.element_children().nth(column))
        .map(|cell| cell.text_content().trim().to_string())
        .collect()
}

fn click(doc: &mut Document, sorts: &Rc<RefCell<TableSorts>>, target: &str) {
    sorts
        .borrow_mut()
        .handle_event(doc, &Event::click(target))
        .unwrap()
        .expect("click was handled");
}

// ============================================================================
// Start-up
// ============================================================================

#[test]
fn test_init_waits_for_content_loaded() {
    let mut doc = fixtures::submissions_page();
    let sorts = TableSorts::attach(&mut doc, SortConfig::default());

    assert_eq!(doc.ready_state(), ReadyState::Loading);
    assert!(sorts.borrow().controls().is_empty());
    assert!(doc.get_element_by_id("SVGsprites").is_none());

    assert_eq!(doc.content_loaded(), 1);
    assert_eq!(sorts.borrow().controls().len(), 2);
}

#[test]
fn test_init_runs_immediately_when_ready() {
    let mut doc = fixtures::submissions_page();
    doc.complete();

    let sorts = TableSorts::attach(&mut doc, SortConfig::default());
    assert_eq!(sorts.borrow().controls().len(), 2);
}

#[test]
fn test_links_become_buttons() {
    let (doc, sorts) = loaded_page();

    assert!(doc.query(&Selector::attr_eq("data-link", "sort-link")).is_none());

    let button = doc.get(&button_for(&sorts, "upload-date")).unwrap();
    assert_eq!(button.tag, "button");
    assert_eq!(button.get_attr("type"), Some("button"));
    assert!(button.has_class("govuk-button"));
    assert!(button.has_class("govuk-button--secondary"));
    assert_eq!(button.get_data("sort"), Some("upload-date"));
    assert_eq!(
        button.get_data("query"),
        Some("statuses%5B0%5D=SUCCESS&statuses%5B1%5D=REJECTED&sortOrder=ASC&sortBy=SUBMISSIONDATE")
    );
    assert_eq!(button_label(button), "Upload date");

    let icons: Vec<_> = button.element_children().filter(|c| c.tag == "svg").collect();
    assert_eq!(icons.len(), 2);
    assert!(icons[0].has_class("asc"));
    assert!(icons[1].has_class("des"));
}

#[test]
fn test_button_takes_the_link_place() {
    let (doc, sorts) = loaded_page();
    let control = sorts.borrow().control_for_column("reporting-year").cloned().unwrap();

    let parent = doc.parent(&control.button).unwrap();
    assert_eq!(parent.id, control.header);
    assert_eq!(parent.get_data("column"), Some("reporting-year"));
}

#[test]
fn test_sprite_follows_the_table() {
    let (doc, _sorts) = loaded_page();
    let table = doc.get_element_by_id("xml-subs").unwrap();
    let sprite = doc.get_element_by_id("SVGsprites").unwrap();

    assert_eq!(
        doc.index_in_parent(&sprite.id),
        doc.index_in_parent(&table.id).map(|i| i + 1)
    );
    for symbol in ["icon-sort", "icon-sort-asc", "icon-sort-des"] {
        assert!(doc.get_element_by_id(symbol).is_some(), "missing {symbol}");
    }
}

#[test]
fn test_second_init_adds_nothing() {
    let (mut doc, sorts) = loaded_page();

    assert_eq!(sorts.borrow_mut().init(&mut doc), 0);
    assert_eq!(doc.query_all(&Selector::id("SVGsprites")).len(), 1);
    assert_eq!(doc.query_all(&Selector::tag("button")).len(), 2);
    assert_eq!(sorts.borrow().controls().len(), 2);
}

#[test]
fn test_no_module_marker_no_changes() {
    let mut doc = fixtures::status_table();
    let mut sorts = TableSorts::new(SortConfig::default());

    assert_eq!(sorts.init(&mut doc), 0);
    assert!(doc.get_element_by_id("SVGsprites").is_none());
}

#[test]
fn test_header_without_column_is_skipped() {
    let mut doc = Document::new(
        Element::new("body").child(
            Element::new("table")
                .class("govuk-table")
                .data("module", "table-sorts")
                .child(Element::new("thead").child(
                    Element::new("tr").child(
                        Element::new("th").class("govuk-table__header").child(
                            Element::new("a")
                                .data("link", "sort-link")
                                .attr("href", "/view?sortOrder=ASC")
                                .with_text("Status"),
                        ),
                    ),
                ))
                .child(Element::new("tbody")),
        ),
    );
    let mut sorts = TableSorts::new(SortConfig::default());

    assert_eq!(sorts.init(&mut doc), 0);
    assert!(doc.query(&Selector::attr_eq("data-link", "sort-link")).is_some());
    assert!(doc.get_element_by_id("SVGsprites").is_some());
}

// ============================================================================
// Clicks
// ============================================================================

#[test]
fn test_first_click_announces_descending() {
    let (mut doc, sorts) = loaded_page();
    let button = button_for(&sorts, "upload-date");

    click(&mut doc, &sorts, &button);

    assert_eq!(live_text(&doc), "Upload date is sorted down");
    assert_eq!(column_texts(&doc, 1), ["8 Nov 2024", "27 Nov 2024", "12 Dec 2024"]);
}

#[test]
fn test_second_click_flips_back() {
    let (mut doc, sorts) = loaded_page();
    let button = button_for(&sorts, "upload-date");

    click(&mut doc, &sorts, &button);
    click(&mut doc, &sorts, &button);

    assert_eq!(live_text(&doc), "Upload date is sorted up");
    assert_eq!(column_texts(&doc, 1), ["12 Dec 2024", "27 Nov 2024", "8 Nov 2024"]);
    assert_eq!(
        doc.get(&button).unwrap().get_data("query"),
        Some("statuses%5B0%5D=SUCCESS&statuses%5B1%5D=REJECTED&sortOrder=ASC&sortBy=SUBMISSIONDATE")
    );
}

#[test]
fn test_click_updates_aria_state() {
    let (mut doc, sorts) = loaded_page();
    let control = sorts.borrow().control_for_column("reporting-year").cloned().unwrap();

    click(&mut doc, &sorts, &control.button);

    assert_eq!(live_text(&doc), "Reporting year is sorted up");
    assert_eq!(column_texts(&doc, 3), ["1957", "2023", "2024"]);
    assert_eq!(doc.get(&control.header).unwrap().get_attr("aria-sort"), Some("ascending"));
    assert_eq!(doc.get(&control.header).unwrap().get_data("sorted"), Some("ASC"));

    let marked: Vec<_> = doc
        .query_all(&Selector::attr("data-sorted"))
        .into_iter()
        .map(|cell| cell.text_content().trim().to_string())
        .collect();
    assert_eq!(marked[1..], ["1957", "2023", "2024"]);
}

#[test]
fn test_click_on_label_bubbles_to_button() {
    let (mut doc, sorts) = loaded_page();
    let button = button_for(&sorts, "upload-date");
    let span = doc
        .get(&button)
        .and_then(|b| b.element_children().find(|c| c.tag == "span"))
        .map(|span| span.id.clone())
        .unwrap();

    click(&mut doc, &sorts, &span);
    assert_eq!(live_text(&doc), "Upload date is sorted down");
}

#[test]
fn test_unrelated_events_are_ignored() {
    let (mut doc, sorts) = loaded_page();
    let table = doc.get_element_by_id("xml-subs").unwrap().id.clone();

    let outcome = sorts.borrow_mut().handle_event(&mut doc, &Event::click(&table)).unwrap();
    assert!(outcome.is_none());

    let button = button_for(&sorts, "upload-date");
    let outcome = sorts.borrow_mut().handle_event(&mut doc, &Event::submit(&button)).unwrap();
    assert!(outcome.is_none());

    let outcome = sorts.borrow_mut().handle_event(&mut doc, &Event::click("nowhere")).unwrap();
    assert!(outcome.is_none());
    assert_eq!(live_text(&doc), "");
}

#[test]
fn test_click_without_live_region_still_sorts() {
    let (mut doc, sorts) = loaded_page();
    doc.remove("sort-order-live");
    let button = button_for(&sorts, "upload-date");

    let outcome = sorts
        .borrow_mut()
        .handle_event(&mut doc, &Event::click(&button))
        .unwrap()
        .unwrap();

    assert_eq!(outcome.announcement, "Upload date is sorted down");
    assert_eq!(column_texts(&doc, 1), ["8 Nov 2024", "27 Nov 2024", "12 Dec 2024"]);
}

#[test]
fn test_failed_sort_commits_nothing() {
    let (mut doc, sorts) = loaded_page();
    let control = sorts.borrow().control_for_column("upload-date").cloned().unwrap();
    doc.get_mut(&control.header).unwrap().remove_data("column");

    let err = sorts
        .borrow_mut()
        .handle_event(&mut doc, &Event::click(&control.button))
        .unwrap_err();

    assert_eq!(err, SortError::ColumnNotFound("upload-date".into()));
    let button = doc.get(&control.button).unwrap();
    assert!(button.get_data("query").unwrap().contains("sortOrder=ASC"));
    assert!(!doc.get(&control.header).unwrap().has_attr("aria-sort"));
    assert!(doc.query(&Selector::attr("data-sorted")).is_none());
    assert_eq!(live_text(&doc), "");
    assert_eq!(column_texts(&doc, 0), ["Failed", "Passed", "Passed"]);
}

// ============================================================================
// Requests
// ============================================================================

#[test]
fn test_handle_sort_request_leaves_live_region_to_caller() {
    let (mut doc, sorts) = loaded_page();
    let request = sorts
        .borrow()
        .control_for_column("upload-date")
        .map(SortRequest::from)
        .unwrap();

    let outcome = handle_sort_request(&mut doc, &SortConfig::default(), &request).unwrap();

    assert_eq!(outcome.column, "upload-date");
    assert_eq!(outcome.order, SortOrder::Descending);
    assert!(outcome.query.as_str().contains("sortOrder=DSC"));
    assert_eq!(outcome.announcement, "Upload date is sorted down");
    assert_eq!(live_text(&doc), "");
}

#[test]
fn test_request_for_unknown_button() {
    let (mut doc, _sorts) = loaded_page();
    let request = SortRequest {
        column: "upload-date".into(),
        header: "missing-header".into(),
        button: "missing-button".into(),
    };

    let err = handle_sort_request(&mut doc, &SortConfig::default(), &request).unwrap_err();
    assert_eq!(err, SortError::MissingElement("missing-button".into()));
}

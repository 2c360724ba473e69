use dpr_frontend::fixtures;
use dpr_frontend::{SubmitDecision, UploadConfig, UploadError, UploadSpinner};
use pagedom::{Event, Selector};

fn submit() -> Event {
    Event::submit("uploadForm")
}

#[test]
fn test_submit_with_file_shows_spinner() {
    let mut doc = fixtures::upload_page(Some("submission.xml"));
    let spinner = UploadSpinner::default();

    let decision = spinner.handle_event(&mut doc, &submit()).unwrap();
    assert_eq!(
        decision,
        Some(SubmitDecision::Resubmit {
            form: "uploadForm".into()
        })
    );

    let processing = doc.get_element_by_id("processing").unwrap();
    let ids: Vec<_> = processing.element_children().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["spinner-svg", "spinner-text"]);
    assert_eq!(
        doc.get_element_by_id("spinner-text").unwrap().text_content(),
        "Uploading your file"
    );
    assert!(doc.query(&Selector::tag("circle")).is_some());
}

#[test]
fn test_submit_with_file_clears_errors() {
    let mut doc = fixtures::upload_page(Some("submission.xml"));
    UploadSpinner::default().intercept_submit(&mut doc).unwrap();

    assert!(doc.query(&Selector::class("govuk-form-group--error")).is_none());
    assert!(doc.query(&Selector::class("govuk-form-group")).is_some());
    for id in ["file-input-error", "error-summary", "submit"] {
        assert!(doc.get_element_by_id(id).is_none(), "#{id} still present");
    }
}

#[test]
fn test_input_disabled_only_after_post() {
    let mut doc = fixtures::upload_page(Some("submission.xml"));
    let spinner = UploadSpinner::default();

    spinner.intercept_submit(&mut doc).unwrap();
    assert!(!doc.get_element_by_id("file-input").unwrap().has_attr("disabled"));

    spinner.complete_submit(&mut doc).unwrap();
    assert!(doc.get_element_by_id("file-input").unwrap().has_attr("disabled"));
}

#[test]
fn test_submit_without_file_is_native() {
    let mut doc = fixtures::upload_page(None);
    let before = pagedom::to_html(doc.body());

    let decision = UploadSpinner::default().handle_event(&mut doc, &submit()).unwrap();

    assert_eq!(decision, Some(SubmitDecision::Native));
    assert_eq!(pagedom::to_html(doc.body()), before);
}

#[test]
fn test_other_events_are_ignored() {
    let mut doc = fixtures::upload_page(Some("submission.xml"));
    let spinner = UploadSpinner::default();

    assert_eq!(spinner.handle_event(&mut doc, &Event::submit("searchForm")).unwrap(), None);
    assert_eq!(spinner.handle_event(&mut doc, &Event::click("uploadForm")).unwrap(), None);
    assert!(doc.get_element_by_id("error-summary").is_some());
}

#[test]
fn test_missing_file_input() {
    let mut doc = fixtures::upload_page(Some("submission.xml"));
    let spinner = UploadSpinner::new(UploadConfig::new().with_file_input_id("attachment"));

    let err = spinner.intercept_submit(&mut doc).unwrap_err();
    assert_eq!(err, UploadError::MissingElement("attachment".into()));
    assert_eq!(err.to_string(), "Element \"#attachment\" is not in the document.");
}

#[test]
fn test_custom_form_id() {
    let mut doc = fixtures::upload_page(Some("submission.xml"));
    let spinner = UploadSpinner::new(UploadConfig::new().with_form_id("searchForm"));

    assert_eq!(spinner.handle_event(&mut doc, &submit()).unwrap(), None);
    assert!(spinner
        .handle_event(&mut doc, &Event::submit("searchForm"))
        .unwrap()
        .is_some());
}

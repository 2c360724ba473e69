//! Sample pages mirroring the markup the service renders.
//!
//! Used by the demo binary and the tests.

use pagedom::{Document, Element};
use url::Url;

/// Location of the submissions page.
pub const SUBMISSIONS_URL: &str =
    "https://www.tax.service.gov.uk/digital-platform-reporting/submission/view";

const LINK_PREFIX: &str = "/digital-platform-reporting/submission/view?statuses%5B0%5D=SUCCESS&statuses%5B1%5D=REJECTED";

fn submissions_location() -> Url {
    Url::parse(SUBMISSIONS_URL).expect("Invalid fixture URL")
}

fn header(label: &str) -> Element {
    Element::new("th")
        .class("govuk-table__header")
        .attr("scope", "col")
        .with_text(label)
}

fn sortable_header(label: &str, column: &str, order: &str, sort_by: &str) -> Element {
    Element::new("th")
        .class("govuk-table__header")
        .data("column", column)
        .attr("scope", "col")
        .child(
            Element::new("a")
                .attr(
                    "href",
                    format!("{LINK_PREFIX}&sortOrder={order}&sortBy={sort_by}"),
                )
                .class("govuk-link--no-underline")
                .class("govuk-link--no-visited-state")
                .data("link", "sort-link")
                .with_text(format!("\n  {label}\n")),
        )
}

fn row(cells: &[&str]) -> Element {
    Element::new("tr").class("govuk-table__row").children(
        cells
            .iter()
            .map(|text| Element::new("td").class("govuk-table__cell").with_text(*text)),
    )
}

/// Body rows of the submissions table, in server order.
pub const SUBMISSION_ROWS: [[&str; 6]; 3] = [
    [
        "Failed",
        "27 Nov 2024",
        "Test digital platform operator organisation name 1",
        "1957",
        "SubmissionSample_removedAssumed",
        "Check errors",
    ],
    [
        "Passed",
        "8 Nov 2024",
        "Test digital platform operator organisation name 1",
        "2024",
        "GB2024GB-XEDPI2078675698TransportationRentalDeletionV001",
        "Go to confirmation",
    ],
    [
        "Passed",
        "12 Dec 2024",
        "Test digital platform operator organisation name 2",
        "2023",
        "GB2023GB-XEDPI2078675698V002",
        "Go to confirmation",
    ],
];

/// The submissions page as the server renders it, before enhancement.
///
/// "Upload date" links with `sortOrder=ASC` and "Reporting year" with
/// `sortOrder=DSC`; the page starts in the `Loading` state.
pub fn submissions_page() -> Document {
    let head = Element::new("thead").class("govuk-table__head").child(
        Element::new("tr")
            .class("govuk-table__row")
            .child(header("Status"))
            .child(sortable_header("Upload date", "upload-date", "ASC", "SUBMISSIONDATE"))
            .child(header("Platform operator"))
            .child(sortable_header("Reporting year", "reporting-year", "DSC", "REPORTINGYEAR"))
            .child(header("File name"))
            .child(header("Action")),
    );

    let body = Element::new("tbody")
        .class("govuk-table__body")
        .children(SUBMISSION_ROWS.iter().map(|cells| row(cells)));

    let table = Element::new("table")
        .id("xml-subs")
        .class("govuk-table")
        .data("module", "table-sorts")
        .child(head)
        .child(body);

    Document::new(Element::new("body").child(table).child(live_region()))
        .with_location(submissions_location())
        .loading()
}

/// The empty live region.
pub fn live_region() -> Element {
    Element::new("div")
        .id("sort-order-live")
        .class("govuk-visually-hidden")
        .attr("aria-live", "polite")
        .attr("role", "status")
}

/// A three-column table with two rows: `[Failed, 27 Nov 2024, 1957]` and
/// `[Passed, 8 Nov 2024, 2024]`. Fully loaded, no sort links.
pub fn status_table() -> Document {
    let head = Element::new("thead").child(
        Element::new("tr")
            .child(header_with_column("Status", "status"))
            .child(header_with_column("Upload date", "upload-date"))
            .child(header_with_column("Reporting year", "reporting-year")),
    );
    let body = Element::new("tbody")
        .child(row(&["Failed", "27 Nov 2024", "1957"]))
        .child(row(&["Passed", "8 Nov 2024", "2024"]));

    Document::new(
        Element::new("body").child(Element::new("table").class("govuk-table").child(head).child(body)),
    )
    .with_location(submissions_location())
}

fn header_with_column(label: &str, column: &str) -> Element {
    Element::new("th")
        .class("govuk-table__header")
        .data("column", column)
        .with_text(label)
}

/// The upload page with an optional selected file and a previous
/// validation error on screen.
pub fn upload_page(selected_file: Option<&str>) -> Document {
    let mut input = Element::new("input")
        .id("file-input")
        .class("govuk-file-upload")
        .attr("type", "file")
        .attr("name", "file");
    if let Some(file) = selected_file {
        input.set_attr("value", file);
    }

    let form = Element::new("form")
        .id("uploadForm")
        .attr("method", "POST")
        .attr("enctype", "multipart/form-data")
        .child(
            Element::new("input")
                .id("processingMessage")
                .attr("type", "hidden")
                .attr("value", "Uploading your file"),
        )
        .child(
            Element::new("div")
                .class("govuk-form-group")
                .class("govuk-form-group--error")
                .child(
                    Element::new("p")
                        .id("file-input-error")
                        .class("govuk-error-message")
                        .with_text("Select a file"),
                )
                .child(input),
        )
        .child(Element::new("div").id("processing"))
        .child(
            Element::new("button")
                .id("submit")
                .class("govuk-button")
                .with_text("Upload"),
        );

    Document::new(
        Element::new("body")
            .child(
                Element::new("div")
                    .id("error-summary")
                    .class("govuk-error-summary")
                    .with_text("There is a problem"),
            )
            .child(form),
    )
    .with_location(
        Url::parse("https://www.tax.service.gov.uk/digital-platform-reporting/submission/upload")
            .expect("Invalid fixture URL"),
    )
}

//! Start-up and click handling.

use std::cell::RefCell;
use std::rc::Rc;

use pagedom::{Document, Event, propagation_path};

use super::announce::{announce, announcement, mark_sorted_column};
use super::order::{OrderQuery, SortOrder};
use super::sorter::sort_table_by_column;
use super::sprite::install_sprite;
use super::upgrade::{QUERY_KEY, button_label, button_query, upgrade_link};
use crate::config::SortConfig;
use crate::error::SortError;

/// An upgraded sort button and the header it sorts by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortControl {
    pub button: String,
    pub header: String,
    pub column: String,
}

/// A request to toggle the sort of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub column: String,
    pub header: String,
    pub button: String,
}

impl From<&SortControl> for SortRequest {
    fn from(control: &SortControl) -> Self {
        Self {
            column: control.column.clone(),
            header: control.header.clone(),
            button: control.button.clone(),
        }
    }
}

/// Result of a handled sort request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub column: String,
    /// The order the table is now shown in.
    pub order: SortOrder,
    /// The button's order encoding after the toggle.
    pub query: OrderQuery,
    /// Text for the live region.
    pub announcement: String,
}

/// Toggle a column's sort and apply it to the document.
///
/// The next order is derived from the button's `data-query`, the table is
/// sorted with it, and only then is the new state committed: the button's
/// `data-query`, `aria-sort` and the `data-sorted` markers. A failing sort
/// therefore leaves the control and the table as they were. The live region
/// is left to the caller, which receives the text in the outcome.
pub fn handle_sort_request(
    doc: &mut Document,
    config: &SortConfig,
    request: &SortRequest,
) -> Result<SortOutcome, SortError> {
    let button = doc
        .get(&request.button)
        .ok_or_else(|| SortError::MissingElement(request.button.clone()))?;

    let label = button_label(button);
    let (order, query) = button_query(button).toggled();
    if !query.has_order_token() {
        log::warn!(
            "[handle_sort_request] {} has no sortOrder token in {:?}",
            request.column,
            query.as_str()
        );
    }

    let href = query.to_href(doc.location());
    sort_table_by_column(doc, config, &request.column, &href)?;

    if let Some(button) = doc.get_mut(&request.button) {
        button.set_data(QUERY_KEY, query.as_str());
    }
    mark_sorted_column(doc, config, &request.header, order);

    Ok(SortOutcome {
        column: request.column.clone(),
        order,
        query,
        announcement: announcement(&label, order),
    })
}

/// The sortable-table widget of one page.
///
/// Holds the controls wired during [`TableSorts::init`] and routes click
/// events to them.
#[derive(Debug, Default)]
pub struct TableSorts {
    config: SortConfig,
    controls: Vec<SortControl>,
}

impl TableSorts {
    pub fn new(config: SortConfig) -> Self {
        Self {
            config,
            controls: Vec::new(),
        }
    }

    /// Create the widget and initialise it once the document is ready.
    pub fn attach(doc: &mut Document, config: SortConfig) -> Rc<RefCell<Self>> {
        let widget = Rc::new(RefCell::new(Self::new(config)));
        let handle = Rc::clone(&widget);
        doc.ready(move |doc| {
            handle.borrow_mut().init(doc);
        });
        widget
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn controls(&self) -> &[SortControl] {
        &self.controls
    }

    pub fn control_for_column(&self, column: &str) -> Option<&SortControl> {
        self.controls.iter().find(|c| c.column == column)
    }

    /// Upgrade every sort link on the page. Returns how many were wired.
    ///
    /// Does nothing unless the `data-module` marker is in the page. Safe to
    /// call again: the sprite is only added once and links that were already
    /// upgraded are no longer found. A link outside a header, or under a
    /// header without a column identifier, is logged and left alone.
    pub fn init(&mut self, doc: &mut Document) -> usize {
        let marker = doc.query(&self.config.module_selector()).map(|m| m.id.clone());
        if !marker.is_some_and(|id| doc.is_in_page(&id)) {
            log::debug!("[init] no [data-module=\"{}\"] in page", self.config.module);
            return 0;
        }

        install_sprite(doc, &self.config);

        let mut wired = 0;
        for link_id in doc.query_ids(&self.config.sort_link_selector()) {
            let Some(header) = doc.closest(&link_id, &self.config.header_selector()) else {
                log::error!(
                    "Could not find the closest .{} for the link.",
                    self.config.header_class
                );
                continue;
            };

            let header_id = header.id.clone();
            let Some(column) = header
                .get_data(&self.config.column_key)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
            else {
                log::error!(
                    "Column header does not have a data-{} attribute.",
                    self.config.column_key
                );
                continue;
            };

            match upgrade_link(doc, &self.config, &link_id, &column) {
                Ok(button) => {
                    self.controls.push(SortControl {
                        button,
                        header: header_id,
                        column,
                    });
                    wired += 1;
                }
                Err(err) => log::error!("[init] could not upgrade {link_id}: {err}"),
            }
        }

        log::debug!("[init] wired {wired} sort controls");
        wired
    }

    /// The control an event's target belongs to, if any.
    pub fn request_for(&self, doc: &Document, target: &str) -> Option<SortRequest> {
        propagation_path(doc, target).iter().find_map(|id| {
            self.controls
                .iter()
                .find(|c| &c.button == id)
                .map(SortRequest::from)
        })
    }

    /// Handle a click on (or inside) a sort button.
    ///
    /// Returns `Ok(None)` for events the widget does not own. The announcement
    /// is written to the live region before returning.
    pub fn handle_event(
        &mut self,
        doc: &mut Document,
        event: &Event,
    ) -> Result<Option<SortOutcome>, SortError> {
        let Event::Click { target } = event else {
            return Ok(None);
        };
        let Some(request) = self.request_for(doc, target) else {
            return Ok(None);
        };

        let outcome = handle_sort_request(doc, &self.config, &request)?;
        announce(doc, &self.config, &outcome.announcement);
        Ok(Some(outcome))
    }
}

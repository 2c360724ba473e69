//! Markup contract configuration.

use pagedom::Selector;

/// Class names, attributes and element ids the table-sort widget looks for.
///
/// The defaults match the GOV.UK table markup the submissions pages render.
///
/// # Example
///
/// ```
/// use dpr_frontend::SortConfig;
///
/// let config = SortConfig::default()
///     .with_live_region_id("results-order-live")
///     .with_table_class("app-table");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// `data-module` value flagging that the page wants sortable tables.
    ///
    /// Default: `table-sorts`
    pub module: String,

    /// `data-link` value of server-rendered sort links.
    ///
    /// Default: `sort-link`
    pub sort_link: String,

    /// Class of the table to sort.
    pub table_class: String,
    /// Class of header cells.
    pub header_class: String,
    /// Class of rows, in both the head and the body.
    pub row_class: String,
    /// Class of body cells.
    pub cell_class: String,

    /// `data-*` key carrying a header's logical column identifier.
    ///
    /// Default: `column`
    pub column_key: String,

    /// `data-*` key marking cells of the sorted column.
    ///
    /// Default: `sorted`
    pub sorted_key: String,

    /// Classes given to upgraded sort buttons.
    pub button_classes: Vec<String>,

    /// Id of the live region receiving announcements.
    ///
    /// Default: `sort-order-live`
    pub live_region_id: String,

    /// Id of the injected icon sprite.
    ///
    /// Default: `SVGsprites`
    pub sprite_id: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            module: "table-sorts".to_string(),
            sort_link: "sort-link".to_string(),
            table_class: "govuk-table".to_string(),
            header_class: "govuk-table__header".to_string(),
            row_class: "govuk-table__row".to_string(),
            cell_class: "govuk-table__cell".to_string(),
            column_key: "column".to_string(),
            sorted_key: "sorted".to_string(),
            button_classes: vec![
                "govuk-button".to_string(),
                "govuk-button--secondary".to_string(),
            ],
            live_region_id: "sort-order-live".to_string(),
            sprite_id: "SVGsprites".to_string(),
        }
    }
}

impl SortConfig {
    /// Creates a config with the default GOV.UK markup contract.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the live region id.
    pub fn with_live_region_id(mut self, id: impl Into<String>) -> Self {
        self.live_region_id = id.into();
        self
    }

    /// Sets the table class.
    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }

    /// Sets the `data-module` value that enables the widget.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// Sets the classes of upgraded buttons.
    pub fn with_button_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.button_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn module_selector(&self) -> Selector {
        Selector::attr_eq("data-module", &self.module)
    }

    pub fn sort_link_selector(&self) -> Selector {
        Selector::attr_eq("data-link", &self.sort_link)
    }

    pub fn table_selector(&self) -> Selector {
        Selector::class(&self.table_class)
    }

    pub fn header_selector(&self) -> Selector {
        Selector::class(&self.header_class)
    }

    pub fn row_selector(&self) -> Selector {
        Selector::class(&self.row_class)
    }

    pub fn cell_selector(&self) -> Selector {
        Selector::class(&self.cell_class)
    }

    /// Cells and headers, the elements that may carry the sorted marker.
    pub fn marked_selector(&self) -> Selector {
        Selector::any([self.cell_selector(), self.header_selector()])
    }
}

/// Element ids the upload spinner works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// Default: `uploadForm`
    pub form_id: String,
    /// Default: `file-input`
    pub file_input_id: String,
    /// Container the spinner is drawn into. Default: `processing`
    pub processing_id: String,
    /// Hidden input holding the localised "processing" message.
    /// Default: `processingMessage`
    pub message_id: String,
    /// Class removed from every form group once the upload starts.
    pub error_class: String,
    /// Elements removed once the upload starts: the inline error, the
    /// error summary and the submit button.
    pub removed_ids: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            form_id: "uploadForm".to_string(),
            file_input_id: "file-input".to_string(),
            processing_id: "processing".to_string(),
            message_id: "processingMessage".to_string(),
            error_class: "govuk-form-group--error".to_string(),
            removed_ids: vec![
                "file-input-error".to_string(),
                "error-summary".to_string(),
                "submit".to_string(),
            ],
        }
    }
}

impl UploadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form_id(mut self, id: impl Into<String>) -> Self {
        self.form_id = id.into();
        self
    }

    pub fn with_file_input_id(mut self, id: impl Into<String>) -> Self {
        self.file_input_id = id.into();
        self
    }
}

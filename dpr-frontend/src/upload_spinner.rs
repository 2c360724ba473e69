//! Upload progress spinner.
//!
//! When the upload form is submitted with a file selected, the form is
//! replaced by a spinner and any previous validation errors are cleared
//! before the form is posted again. The file input is disabled only after
//! that second submission, since a disabled input is left out of the post.

use pagedom::{Document, Element, Event, Selector};

use crate::config::UploadConfig;
use crate::error::UploadError;

/// What the host should do with a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Nothing selected, let the browser submit as usual.
    Native,
    /// The submission was intercepted; post the form, then call
    /// [`UploadSpinner::complete_submit`].
    Resubmit { form: String },
}

#[derive(Debug, Clone, Default)]
pub struct UploadSpinner {
    config: UploadConfig,
}

impl UploadSpinner {
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// React to a submit of the upload form. Other events are ignored.
    pub fn handle_event(
        &self,
        doc: &mut Document,
        event: &Event,
    ) -> Result<Option<SubmitDecision>, UploadError> {
        match event {
            Event::Submit { target } if target == &self.config.form_id => {
                self.intercept_submit(doc).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Show the spinner if a file is selected.
    pub fn intercept_submit(&self, doc: &mut Document) -> Result<SubmitDecision, UploadError> {
        let input = doc
            .get_element_by_id(&self.config.file_input_id)
            .ok_or_else(|| UploadError::MissingElement(self.config.file_input_id.clone()))?;

        if input.get_attr("value").unwrap_or_default().is_empty() {
            return Ok(SubmitDecision::Native);
        }

        let message = match doc.get_element_by_id(&self.config.message_id) {
            Some(field) => field.get_attr("value").unwrap_or_default().to_string(),
            None => {
                log::warn!("[upload] #{} is missing", self.config.message_id);
                String::new()
            }
        };

        self.show_spinner(doc, &message);
        self.clear_errors(doc);

        log::debug!("[upload] intercepted submit of #{}", self.config.form_id);
        Ok(SubmitDecision::Resubmit {
            form: self.config.form_id.clone(),
        })
    }

    /// Disable the file input once the form has been posted.
    pub fn complete_submit(&self, doc: &mut Document) -> Result<(), UploadError> {
        let input = doc
            .get_mut(&self.config.file_input_id)
            .ok_or_else(|| UploadError::MissingElement(self.config.file_input_id.clone()))?;
        input.set_attr("disabled", "disabled");
        Ok(())
    }

    fn show_spinner(&self, doc: &mut Document, message: &str) {
        if doc.get_element_by_id(&self.config.processing_id).is_none() {
            log::debug!("[upload] no #{} container", self.config.processing_id);
            return;
        }

        doc.take_children(&self.config.processing_id);
        doc.append_child(&self.config.processing_id, spinner_svg());
        doc.append_child(
            &self.config.processing_id,
            Element::new("div").id("spinner-text").child(
                Element::new("p")
                    .attr("style", "float:left")
                    .with_text(message),
            ),
        );
    }

    fn clear_errors(&self, doc: &mut Document) {
        for id in doc.query_ids(&Selector::class(&self.config.error_class)) {
            if let Some(group) = doc.get_mut(&id) {
                group.remove_class(&self.config.error_class);
            }
        }

        for id in &self.config.removed_ids {
            if doc.get_element_by_id(id).is_some() {
                doc.remove(id);
            }
        }
    }
}

fn spinner_svg() -> Element {
    Element::new("div").id("spinner-svg").child(
        Element::new("svg")
            .class("ccms-loader")
            .attr("height", "100")
            .attr("width", "100")
            .child(
                Element::new("circle")
                    .attr("cx", "50")
                    .attr("cy", "50")
                    .attr("r", "40")
                    .attr("fill", "none"),
            ),
    )
}

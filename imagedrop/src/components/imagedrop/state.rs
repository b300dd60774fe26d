//! Component state for the image drop widget.
//!
//! Defines the state struct holding the widget's runtime data (configuration,
//! the transient file selection, the recorded filename, and DOM refs), plus
//! the derived UI state the view renders from.

use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use super::props::ImagedropProps;

/// Which region of the widget is visible, derived from the filename record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetUiState {
    /// No upload recorded; the instruction text is shown.
    Empty,
    /// A filename is recorded; the preview image is shown and new drop or
    /// double-click interactions are refused.
    Previewing,
}

/// Widget configuration, seeded from props and mutated only through the
/// setter messages. `upload_url` must be set before an upload is triggered;
/// this is a documented precondition, not defensively checked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetConfig {
    pub authorized_to_edit: bool,
    pub upload_url: String,
    /// Prepended to the returned filename when building the preview source.
    pub directory_path: String,
    /// Form field carrying the transaction id; appended only when both the
    /// field name and the id are set.
    pub transaction_field_name: Option<String>,
    pub transaction_id: Option<i64>,
    pub preview_width: String,
    pub preview_height: String,
}

impl WidgetConfig {
    pub fn from_props(props: &ImagedropProps) -> Self {
        Self {
            authorized_to_edit: props.authorized_to_edit,
            upload_url: props.upload_url.clone(),
            directory_path: props.directory_path.clone(),
            transaction_field_name: props.transaction_field_name.clone(),
            transaction_id: props.transaction_id,
            preview_width: props.preview_width.clone(),
            preview_height: props.preview_height.clone(),
        }
    }
}

/// Main state container for the image drop widget.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct Imagedrop {
    pub config: WidgetConfig,

    /// Files captured by the current interaction. Consumed by the next
    /// upload attempt and cleared either way.
    pub selection: Vec<File>,

    /// Filename returned by the last successful upload. The only state that
    /// survives across interactions.
    pub file_name: Option<String>,

    /// Reference to the widget's own `<form>` element, the base of the
    /// multipart payload.
    pub form_ref: NodeRef,

    /// Reference to the hidden file input.
    pub file_input_ref: NodeRef,
}

impl Imagedrop {
    pub fn new(props: &ImagedropProps) -> Self {
        Self {
            config: WidgetConfig::from_props(props),
            selection: Vec::new(),
            file_name: props.initial_file_name.clone(),
            form_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
        }
    }

    /// Current filename record, if an upload has completed.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn ui_state(&self) -> WidgetUiState {
        if self.file_name.is_some() {
            WidgetUiState::Previewing
        } else {
            WidgetUiState::Empty
        }
    }

    /// Clears the raw file input value so a cleared or replaced widget does
    /// not resubmit a stale file through the form payload.
    pub fn reset_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Imagedrop {
        Imagedrop::new(&ImagedropProps::default_for_tests())
    }

    #[test]
    fn file_name_round_trips() {
        let mut widget = widget();
        assert_eq!(widget.file_name(), None);

        widget.file_name = Some("photo_123.jpg".to_string());
        assert_eq!(widget.file_name(), Some("photo_123.jpg"));

        widget.file_name = None;
        assert_eq!(widget.file_name(), None);
    }

    #[test]
    fn ui_state_follows_file_name_record() {
        let mut widget = widget();
        assert_eq!(widget.ui_state(), WidgetUiState::Empty);

        widget.file_name = Some("a.jpg".to_string());
        assert_eq!(widget.ui_state(), WidgetUiState::Previewing);

        widget.file_name = None;
        assert_eq!(widget.ui_state(), WidgetUiState::Empty);
    }

    #[test]
    fn config_is_seeded_from_props() {
        let mut props = ImagedropProps::default_for_tests();
        props.authorized_to_edit = true;
        props.upload_url = "/upload".to_string();
        props.directory_path = "/images".to_string();
        props.transaction_field_name = Some("transactionId".to_string());
        props.transaction_id = Some(7);

        let widget = Imagedrop::new(&props);
        assert!(widget.config.authorized_to_edit);
        assert_eq!(widget.config.upload_url, "/upload");
        assert_eq!(widget.config.directory_path, "/images");
        assert_eq!(
            widget.config.transaction_field_name.as_deref(),
            Some("transactionId")
        );
        assert_eq!(widget.config.transaction_id, Some(7));
        assert_eq!(widget.config.preview_width, "100%");
        assert_eq!(widget.config.preview_height, "auto");
    }
}

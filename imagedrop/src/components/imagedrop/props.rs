//! Properties for the `Imagedrop` widget.
//!
//! The host page wires its collaborators in explicitly: `NodeRef`s for the
//! external fields the widget reads and writes, and callbacks for notices
//! and content-size changes. Nothing is looked up by document-wide id.

use yew::prelude::*;

use super::helpers;
use super::notice::WidgetNotice;

#[derive(Properties, PartialEq, Clone)]
pub struct ImagedropProps {
    /// Whether the current user may start uploads. Drop and double-click are
    /// refused when false.
    #[prop_or_default]
    pub authorized_to_edit: bool,

    /// Endpoint receiving the multipart POST. Must be set before the first
    /// upload fires.
    #[prop_or_default]
    pub upload_url: String,

    /// Base path prepended to the returned filename when building the
    /// preview image source.
    #[prop_or_default]
    pub directory_path: String,

    /// Form field name for the transaction id. The id is appended to the
    /// payload only when this is set.
    #[prop_or_default]
    pub transaction_field_name: Option<String>,

    /// Transaction id, coerced to an integer by the host.
    #[prop_or_default]
    pub transaction_id: Option<i64>,

    /// Input holding the anti-forgery token; its current value is sent as
    /// the `RequestVerificationToken` request header.
    #[prop_or_default]
    pub token_field_ref: NodeRef,

    /// Hidden input mirroring the uploaded filename for the host page.
    #[prop_or_default]
    pub file_name_field_ref: NodeRef,

    /// Filename to restore when the widget mounts with an image already
    /// uploaded; puts the widget straight into the previewing state.
    #[prop_or_default]
    pub initial_file_name: Option<String>,

    /// Inline width of the preview image.
    #[prop_or_else(|| "100%".to_string())]
    pub preview_width: String,

    /// Inline height of the preview image.
    #[prop_or_else(|| "auto".to_string())]
    pub preview_height: String,

    /// Receives every user-facing notice (authorization refusals, selection
    /// rejections, server failure messages). Defaults to a blocking
    /// `window.alert` with the notice's display text.
    #[prop_or_else(default_notifier)]
    pub on_notice: Callback<WidgetNotice>,

    /// Fired after the visible region switches between instructions and
    /// preview, so host layout can recalculate. Replaces the original
    /// synthetic window resize event.
    #[prop_or_default]
    pub on_content_size_changed: Callback<()>,
}

fn default_notifier() -> Callback<WidgetNotice> {
    Callback::from(|notice: WidgetNotice| helpers::alert(&notice.to_string()))
}

#[cfg(test)]
impl ImagedropProps {
    /// Baseline props for unit tests, matching what `#[prop_or_*]` yields
    /// when the host sets nothing.
    pub fn default_for_tests() -> Self {
        Self {
            authorized_to_edit: false,
            upload_url: String::new(),
            directory_path: String::new(),
            transaction_field_name: None,
            transaction_id: None,
            token_field_ref: NodeRef::default(),
            file_name_field_ref: NodeRef::default(),
            initial_file_name: None,
            preview_width: "100%".to_string(),
            preview_height: "auto".to_string(),
            on_notice: Callback::noop(),
            on_content_size_changed: Callback::noop(),
        }
    }
}

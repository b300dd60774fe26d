//! Update function for the image drop widget.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `Imagedrop` state, the `Context`,
//! and a `Msg`, mutates the state accordingly, and returns a `bool`
//! indicating whether the view should re-render.
//!
//! Key behaviors
//! - Pure setter messages assigning into the widget configuration.
//! - Interaction gating: drop and double-click are refused without edit
//!   rights or while a filename is already recorded; the file-input change
//!   path uploads regardless of the current state.
//! - Upload orchestration: validate the selection, build the multipart
//!   payload from the widget's form, POST it, and re-enter the component
//!   with the outcome as a message.
//! - Filename reconciliation: record the name, mirror it into the host's
//!   hidden field, reset the file input, blur, and notify the host that the
//!   visible region changed size.

use gloo_console::{error, log};
use web_sys::{FormData, HtmlFormElement, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers;
use super::messages::Msg;
use super::notice::WidgetNotice;
use super::selection::{validate_selection, SelectedFile};
use super::state::Imagedrop;
use super::upload;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (upload completion).
/// - Returns `true` to re-render the view, `false` when only side effects
///   occur.
pub fn update(component: &mut Imagedrop, ctx: &Context<Imagedrop>, msg: Msg) -> bool {
    match msg {
        Msg::SetAuthorizedToEdit(value) => {
            component.config.authorized_to_edit = value;
            false
        }
        Msg::SetUploadUrl(value) => {
            component.config.upload_url = value;
            false
        }
        Msg::SetDirectoryPath(value) => {
            component.config.directory_path = value;
            false
        }
        Msg::SetTransactionFieldName(value) => {
            component.config.transaction_field_name = Some(value);
            false
        }
        Msg::SetTransactionId(value) => {
            component.config.transaction_id = Some(value);
            false
        }
        Msg::Dropped(files) => {
            if let Err(notice) = entry_gate(component) {
                ctx.props().on_notice.emit(notice);
                return false;
            }
            component.selection = files;
            try_upload(component, ctx, true);
            false
        }
        Msg::DoubleClicked => {
            if let Err(notice) = entry_gate(component) {
                ctx.props().on_notice.emit(notice);
                return false;
            }
            if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FilesChosen(files) => {
            // The change path does not re-check the previewing gate; a file
            // picked through the native input validates and uploads even
            // while a filename is recorded.
            component.selection = files;
            try_upload(component, ctx, false);
            false
        }
        Msg::UploadFinished(result) => {
            match result {
                Ok(file_name) => {
                    log!("upload succeeded:", file_name.clone());
                    apply_file_name(component, ctx, Some(file_name));
                }
                Err(message) => {
                    error!("upload failed:", message.clone());
                    apply_file_name(component, ctx, None);
                    ctx.props().on_notice.emit(WidgetNotice::UploadFailed(message));
                }
            }
            true
        }
        Msg::SetFileName(file_name) => {
            apply_file_name(component, ctx, file_name);
            true
        }
    }
}

fn entry_gate(component: &Imagedrop) -> Result<(), WidgetNotice> {
    gate(
        component.config.authorized_to_edit,
        component.file_name.as_deref(),
    )
}

/// Gate for drop and double-click. A recorded filename keeps the widget in
/// the previewing state and refuses re-entry until it is cleared.
fn gate(authorized_to_edit: bool, file_name: Option<&str>) -> Result<(), WidgetNotice> {
    if !authorized_to_edit {
        return Err(WidgetNotice::NotAuthorized);
    }
    if file_name.is_some() {
        return Err(WidgetNotice::AlreadyUploaded);
    }
    Ok(())
}

/// Validates the pending selection, then builds and sends the multipart
/// POST. The selection is consumed either way; a rejection leaves the rest
/// of the state untouched.
///
/// Exactly one request is issued per call. Nothing here guards against a
/// second upload racing the first before a filename lands.
fn try_upload(component: &mut Imagedrop, ctx: &Context<Imagedrop>, via_drag_and_drop: bool) {
    let files = std::mem::take(&mut component.selection);

    let snapshot: Vec<SelectedFile> = files.iter().map(SelectedFile::from).collect();
    if let Err(err) = validate_selection(&snapshot) {
        ctx.props().on_notice.emit(WidgetNotice::Rejected(err));
        return;
    }

    let Some(form) = component.form_ref.cast::<HtmlFormElement>() else {
        return;
    };
    let Ok(form_data) = FormData::new_with_form(&form) else {
        return;
    };

    if via_drag_and_drop {
        // A dropped file list is not part of the form's own controls, unlike
        // the change path where the file input already carries the file.
        for file in &files {
            form_data
                .append_with_blob_and_filename(upload::FILES_FIELD, file, &file.name())
                .ok();
        }
    }

    if let (Some(field), Some(id)) = (
        component.config.transaction_field_name.as_deref(),
        component.config.transaction_id,
    ) {
        form_data.append_with_str(field, &id.to_string()).ok();
    }

    let token = ctx
        .props()
        .token_field_ref
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default();

    let upload_url = component.config.upload_url.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = upload::submit(&upload_url, &token, form_data).await;
        link.send_message(Msg::UploadFinished(result));
    });
}

/// Sole mutator of the visible region. Records the filename (or clears it),
/// mirrors it into the host's hidden field, resets the raw file input, drops
/// focus, and tells the host the content size changed.
fn apply_file_name(component: &mut Imagedrop, ctx: &Context<Imagedrop>, file_name: Option<String>) {
    if let Some(input) = ctx.props().file_name_field_ref.cast::<HtmlInputElement>() {
        input.set_value(file_name.as_deref().unwrap_or_default());
    }
    component.reset_file_input();
    component.file_name = file_name;

    helpers::blur_active_element();
    ctx.props().on_content_size_changed.emit(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_users_are_refused() {
        assert_eq!(gate(false, None), Err(WidgetNotice::NotAuthorized));
        assert_eq!(
            gate(false, Some("photo.jpg")),
            Err(WidgetNotice::NotAuthorized)
        );
    }

    #[test]
    fn recorded_filename_refuses_reentry() {
        assert_eq!(
            gate(true, Some("photo.jpg")),
            Err(WidgetNotice::AlreadyUploaded)
        );
    }

    #[test]
    fn authorized_empty_widget_passes_the_gate() {
        assert_eq!(gate(true, None), Ok(()));
    }
}

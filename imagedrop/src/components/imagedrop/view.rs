//! View rendering for the image drop widget.
//!
//! The widget renders its own `<form>` with a hidden file input, and swaps
//! between the instruction text and the preview image based on the derived
//! UI state. Drag events are consumed so the browser accepts the drop
//! instead of navigating to the file.

use web_sys::{DragEvent, Event, HtmlInputElement, MouseEvent};
use yew::prelude::*;

use super::helpers::collect_files;
use super::messages::Msg;
use super::state::{Imagedrop, WidgetUiState};

pub fn view(component: &Imagedrop, ctx: &Context<Imagedrop>) -> Html {
    let link = ctx.link();

    let ondragenter = Callback::from(|event: DragEvent| {
        event.stop_propagation();
        event.prevent_default();
    });
    let ondragover = Callback::from(|event: DragEvent| {
        event.stop_propagation();
        event.prevent_default();
        if let Some(data_transfer) = event.data_transfer() {
            data_transfer.set_drop_effect("copy");
        }
    });
    let ondrop = link.callback(|event: DragEvent| {
        event.stop_propagation();
        event.prevent_default();
        Msg::Dropped(collect_files(
            event.data_transfer().and_then(|dt| dt.files()),
        ))
    });
    let ondblclick = link.callback(|_: MouseEvent| Msg::DoubleClicked);
    let onchange = link.callback(|event: Event| {
        let input = event.target_unchecked_into::<HtmlInputElement>();
        Msg::FilesChosen(collect_files(input.files()))
    });

    html! {
        <form class="imagedrop" enctype="multipart/form-data" ref={component.form_ref.clone()}>
            <div class="drag-and-drop-area" {ondragenter} {ondragover} {ondrop} {ondblclick}>
                <input
                    type="file"
                    name="files"
                    accept="image/jpeg"
                    multiple=true
                    style="display: none"
                    ref={component.file_input_ref.clone()}
                    {onchange}
                />
                {
                    match component.ui_state() {
                        WidgetUiState::Empty => default_message(),
                        WidgetUiState::Previewing => preview(component),
                    }
                }
            </div>
        </form>
    }
}

fn default_message() -> Html {
    html! {
        <div class="default-message">
            <p>{"Drag and drop an image file, or double-click to select"}</p>
            <p>{"(.jpg file, up to 1MB)"}</p>
        </div>
    }
}

fn preview(component: &Imagedrop) -> Html {
    let file_name = component.file_name().unwrap_or_default();
    let src = format!("{}/{}", component.config.directory_path, file_name);
    let style = format!(
        "width: {}; height: {};",
        component.config.preview_width, component.config.preview_height
    );
    html! {
        <div class="preview-image">
            <img class="image" {src} {style} />
        </div>
    }
}

//! Drag-and-drop single-image upload widget for Yew.
//!
//! [`Imagedrop`] turns a form region into a drop target (and
//! double-click-to-select control) for exactly one `.jpg` file of at most
//! 1MB. A valid selection is posted as multipart form data to a configured
//! endpoint; on success the widget swaps its instruction text for a preview
//! image built from the returned filename.
//!
//! The host page injects its collaborators instead of being queried by id:
//! `NodeRef`s point the widget at the anti-forgery token field and the
//! hidden filename mirror field, and callbacks receive user-facing notices
//! and content-size changes.

pub mod components;

pub use components::imagedrop::{
    Imagedrop, ImagedropProps, Msg, SelectedFile, SelectionError, WidgetNotice, WidgetUiState,
};

//! User-facing notices the widget reports through its notifier callback.

use std::fmt;

use super::selection::SelectionError;

/// Everything the widget has to tell the user. Hosts receive these through
/// the `on_notice` prop and choose their own presentation; the default
/// notifier shows the display text in a blocking alert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetNotice {
    /// Drop or double-click from a user without edit rights.
    NotAuthorized,
    /// Drop or double-click while a filename is already recorded.
    AlreadyUploaded,
    /// The selection failed a validation rule.
    Rejected(SelectionError),
    /// The server or transport refused the upload.
    UploadFailed(String),
}

impl fmt::Display for WidgetNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetNotice::NotAuthorized => write!(f, "not authorized to edit"),
            WidgetNotice::AlreadyUploaded => write!(f, "already uploaded"),
            WidgetNotice::Rejected(err) => write!(f, "{err}"),
            // Shown verbatim so hosts can match on the server's message.
            WidgetNotice::UploadFailed(message) => write!(f, "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_matches_the_interactive_messages() {
        assert_eq!(
            WidgetNotice::NotAuthorized.to_string(),
            "not authorized to edit"
        );
        assert_eq!(WidgetNotice::AlreadyUploaded.to_string(), "already uploaded");
        assert_eq!(
            WidgetNotice::Rejected(SelectionError::TooLarge).to_string(),
            "file too large"
        );
    }

    #[test]
    fn server_message_is_passed_through_verbatim() {
        let notice = WidgetNotice::UploadFailed("duplicate filename".to_string());
        assert_eq!(notice.to_string(), "duplicate filename");
    }
}

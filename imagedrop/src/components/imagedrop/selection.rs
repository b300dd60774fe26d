//! Selection validation: the guard checks run before any upload is attempted.
//!
//! Validation operates on plain snapshots of the file attributes rather than
//! on `web_sys::File` handles, so the rules stay testable off-browser.

use thiserror::Error;
use web_sys::File;

/// Attributes of a chosen file, captured once per interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Media type as declared by the browser.
    pub mime_type: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

impl From<&File> for SelectedFile {
    fn from(file: &File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
        }
    }
}

/// Reasons a selection is refused, with the exact user-facing message as the
/// display text.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no file found")]
    Empty,
    #[error("multiple files not allowed")]
    Multiple,
    #[error("only jpg allowed")]
    UnsupportedType,
    #[error("file too large")]
    TooLarge,
}

const MAX_SIZE_MIB: f64 = 1.0;

/// Checks a selection before an upload is attempted, failing fast so a bad
/// request never reaches the network. Rules run in order and the first
/// failure wins:
///
/// 1. exactly one file must be present,
/// 2. the extension after the last `.` must be `.jpg` (case-insensitive) and
///    the declared media type must be `image/jpeg`,
/// 3. the size must not exceed 1MB.
pub fn validate_selection(files: &[SelectedFile]) -> Result<(), SelectionError> {
    if files.is_empty() {
        return Err(SelectionError::Empty);
    }
    if files.len() > 1 {
        return Err(SelectionError::Multiple);
    }

    let file = &files[0];
    let name = file.name.to_lowercase();
    let extension = name.rfind('.').map(|pos| &name[pos..]);
    if extension != Some(".jpg") || file.mime_type != "image/jpeg" {
        return Err(SelectionError::UnsupportedType);
    }

    let size_mib = file.size as f64 / 1024.0 / 1024.0;
    if size_mib > MAX_SIZE_MIB {
        return Err(SelectionError::TooLarge);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpg(size: u64) -> SelectedFile {
        SelectedFile::new("photo.jpg", "image/jpeg", size)
    }

    #[test]
    fn empty_selection_is_refused() {
        assert_eq!(validate_selection(&[]), Err(SelectionError::Empty));
    }

    #[test]
    fn multiple_files_are_refused() {
        let files = vec![jpg(1000), jpg(2000)];
        assert_eq!(validate_selection(&files), Err(SelectionError::Multiple));
    }

    #[test]
    fn valid_jpg_passes() {
        assert_eq!(validate_selection(&[jpg(500 * 1024)]), Ok(()));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let file = SelectedFile::new("PHOTO.JPG", "image/jpeg", 1000);
        assert_eq!(validate_selection(&[file]), Ok(()));
    }

    #[test]
    fn wrong_extension_is_refused() {
        for name in ["photo.png", "photo.jpeg", "photo.jpg.png", "photo"] {
            let file = SelectedFile::new(name, "image/jpeg", 1000);
            assert_eq!(
                validate_selection(&[file]),
                Err(SelectionError::UnsupportedType),
                "{name} should have been refused"
            );
        }
    }

    #[test]
    fn wrong_media_type_is_refused() {
        let file = SelectedFile::new("photo.jpg", "image/png", 1000);
        assert_eq!(
            validate_selection(&[file]),
            Err(SelectionError::UnsupportedType)
        );
    }

    #[test]
    fn size_limit_is_one_mebibyte_inclusive() {
        assert_eq!(validate_selection(&[jpg(1024 * 1024)]), Ok(()));
        assert_eq!(
            validate_selection(&[jpg(1024 * 1024 + 1)]),
            Err(SelectionError::TooLarge)
        );
        assert_eq!(
            validate_selection(&[jpg(2 * 1024 * 1024)]),
            Err(SelectionError::TooLarge)
        );
    }

    #[test]
    fn size_check_runs_after_type_check() {
        // An oversized png reports the type error, not the size error.
        let file = SelectedFile::new("big.png", "image/png", 5 * 1024 * 1024);
        assert_eq!(
            validate_selection(&[file]),
            Err(SelectionError::UnsupportedType)
        );
    }

    #[test]
    fn error_messages_match_the_user_facing_text() {
        assert_eq!(SelectionError::Empty.to_string(), "no file found");
        assert_eq!(
            SelectionError::Multiple.to_string(),
            "multiple files not allowed"
        );
        assert_eq!(SelectionError::UnsupportedType.to_string(), "only jpg allowed");
        assert_eq!(SelectionError::TooLarge.to_string(), "file too large");
    }
}

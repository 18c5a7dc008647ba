//! User-facing notifications for every session outcome.

use crate::error::{AffordanceError, SubmitError};
use quicklink_core::ValidationError;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A short notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    fn new(title: &str, description: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant,
        }
    }

    pub fn shortened() -> Self {
        Self::new("Success!", "URL shortened successfully", ToastVariant::Default)
    }

    pub fn copied() -> Self {
        Self::new("Copied!", "Short URL copied to clipboard", ToastVariant::Default)
    }

    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

impl Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

impl From<&SubmitError> for Toast {
    fn from(err: &SubmitError) -> Self {
        let error = |description: &str| Self::new("Error", description, ToastVariant::Destructive);
        match err {
            SubmitError::Validation(ValidationError::EmptyInput) => {
                error("Please enter a URL to shorten")
            }
            SubmitError::Validation(ValidationError::InvalidUrl(_)) => Self::new(
                "Invalid URL",
                "Please enter a valid URL (include http:// or https://)",
                ToastVariant::Destructive,
            ),
            SubmitError::InFlight => error("Please wait for the current URL to finish shortening"),
            SubmitError::Cancelled => error("Shortening was cancelled"),
            SubmitError::Shortener(e) => error(&format!("Failed to shorten URL: {e}")),
        }
    }
}

impl From<&AffordanceError> for Toast {
    fn from(err: &AffordanceError) -> Self {
        let description = match err {
            AffordanceError::ClipboardCopyFailed(_) => "Failed to copy URL",
            AffordanceError::NothingToCopy => "Shorten a URL before copying it",
            AffordanceError::NothingToOpen => "Shorten a URL before opening it",
            AffordanceError::OpenFailed(_) => "Failed to open URL",
        };
        Self::new("Error", description, ToastVariant::Destructive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;

    #[test]
    fn empty_and_invalid_input_read_differently() {
        let empty = Toast::from(&SubmitError::Validation(ValidationError::EmptyInput));
        let invalid = Toast::from(&SubmitError::Validation(ValidationError::InvalidUrl(
            "example.com".into(),
        )));

        assert_eq!(empty.title, "Error");
        assert_eq!(empty.description, "Please enter a URL to shorten");
        assert_eq!(invalid.title, "Invalid URL");
        assert_eq!(
            invalid.description,
            "Please enter a valid URL (include http:// or https://)"
        );
        assert!(empty.is_error() && invalid.is_error());
    }

    #[test]
    fn success_toasts() {
        assert_eq!(
            Toast::shortened().to_string(),
            "Success!: URL shortened successfully"
        );
        assert!(!Toast::copied().is_error());
    }

    #[test]
    fn copy_failure() {
        let toast = Toast::from(&AffordanceError::ClipboardCopyFailed(
            ClipboardError::Unavailable("no display".into()),
        ));
        assert_eq!(toast.description, "Failed to copy URL");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }
}

//! Try-on submission payload.

use crate::types::ImageFile;

/// The structured body returned by the upload service.
///
/// The shape is owned by the remote API, so it is carried as opaque JSON
/// and handed to the caller verbatim.
pub type SubmissionResponse = serde_json::Value;

/// A single try-on form submission.
///
/// One submission is constructed per call and discarded after use. The
/// email is forwarded exactly as entered - well-formedness is judged by the
/// remote service, not here - and the two images carry whatever the caller
/// selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryOnSubmission {
    /// Contact address for the try-on result. Unvalidated.
    pub email: String,
    /// The person photo.
    pub selfie: ImageFile,
    /// The outfit photo.
    pub outfit: ImageFile,
}

impl TryOnSubmission {
    /// Create a new submission.
    #[must_use]
    pub fn new(email: impl Into<String>, selfie: ImageFile, outfit: ImageFile) -> Self {
        Self {
            email: email.into(),
            selfie,
            outfit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str, bytes: Vec<u8>) -> ImageFile {
        ImageFile::new(name, "image/png", bytes)
    }

    #[test]
    fn test_new() {
        let submission = TryOnSubmission::new(
            "user@example.com",
            png("selfie.png", vec![1]),
            png("outfit.png", vec![2]),
        );
        assert_eq!(submission.email, "user@example.com");
        assert_eq!(submission.selfie.file_name(), "selfie.png");
        assert_eq!(submission.outfit.file_name(), "outfit.png");
    }

    #[test]
    fn test_empty_email_is_not_rejected() {
        let submission =
            TryOnSubmission::new("", png("selfie.png", vec![1]), png("outfit.png", vec![2]));
        assert_eq!(submission.email, "");
    }
}

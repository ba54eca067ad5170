//! Image file handle type.

/// An in-memory image file selected for submission.
///
/// Carries the file name, MIME content type, and raw bytes exactly as the
/// caller provided them. No validation is applied to the type, size, or
/// content - the remote upload service is the sole arbiter of acceptance,
/// so a zero-byte file or a bogus content type is a legal value here.
///
/// ## Examples
///
/// ```
/// use tryon_core::ImageFile;
///
/// let image = ImageFile::new("selfie.png", "image/png", vec![0x89, 0x50]);
/// assert_eq!(image.file_name(), "selfie.png");
/// assert_eq!(image.len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl ImageFile {
    /// Create a new image file handle.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Returns the file name as a string slice.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the MIME content type (e.g., `image/png`).
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the raw image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the size of the image in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the image holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the handle and returns the inner bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Omits the raw bytes so a payload can be logged without dumping images.
impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

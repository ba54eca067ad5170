//! Wire-level mapping from a submission to the upload endpoint's multipart
//! contract.
//!
//! The hosting API wants the outfit bytes twice: once under `outfitFile`
//! and again under its own `image` field. The duplication is the remote
//! contract's quirk, kept solely for compatibility and isolated here so a
//! contract change touches only this mapping.

use reqwest::multipart::{Form, Part};
use tryon_core::{ImageFile, TryOnSubmission};

/// Person photo field.
const FIELD_SELFIE: &str = "selfieFile";
/// Outfit photo field.
const FIELD_OUTFIT: &str = "outfitFile";
/// Contact address field.
const FIELD_EMAIL: &str = "email";
/// Duplicate outfit field. Fragile: tracks the remote contract, nothing in
/// this crate needs it.
const FIELD_IMAGE: &str = "image";

/// Build the multipart form for one submission.
///
/// Fields are appended in the order the original form sent them: selfie,
/// outfit, email, then the duplicated outfit under [`FIELD_IMAGE`].
///
/// # Errors
///
/// Returns error if an image carries a content type the transport cannot
/// parse as a MIME string.
pub(super) fn to_form(submission: &TryOnSubmission) -> Result<Form, reqwest::Error> {
    Ok(Form::new()
        .part(FIELD_SELFIE, image_part(&submission.selfie)?)
        .part(FIELD_OUTFIT, image_part(&submission.outfit)?)
        .text(FIELD_EMAIL, submission.email.clone())
        .part(FIELD_IMAGE, image_part(&submission.outfit)?))
}

fn image_part(image: &ImageFile) -> Result<Part, reqwest::Error> {
    Part::bytes(image.bytes().to_vec())
        .file_name(image.file_name().to_owned())
        .mime_str(image.content_type())
}

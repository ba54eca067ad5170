//! imgbb upload client for try-on form submissions.
//!
//! Posts a [`TryOnSubmission`] as a single multipart form to the hosting
//! API and hands back whatever JSON body the service returns.
//!
//! # API Reference
//!
//! - Endpoint: `POST {base_url}/1/upload?key=<access key>`
//! - Authentication: static access key via the `key` query parameter
//! - Body: `multipart/form-data` (field contract lives in the `wire` module)

mod wire;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, error, instrument};
use tryon_core::{SubmissionResponse, TryOnSubmission};

use crate::config::ImgbbConfig;

/// Path of the upload operation on the hosting API.
const UPLOAD_PATH: &str = "/1/upload";

/// Error returned when a try-on submission fails.
///
/// Transport failures, non-success statuses, and response-decode failures
/// all surface through this one type, unretried and unreclassified; the
/// underlying cause stays reachable via [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("upload request failed: {0}")]
pub struct UploadError(#[from] reqwest::Error);

/// Client for the image hosting upload API.
///
/// Cheaply cloneable; clones share one connection pool and no mutable
/// state, so concurrent submissions are fully independent of each other.
#[derive(Clone)]
pub struct ImgbbClient {
    inner: Arc<ImgbbClientInner>,
}

struct ImgbbClientInner {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl ImgbbClient {
    /// Create a new upload client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ImgbbConfig) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            inner: Arc::new(ImgbbClientInner {
                client,
                base_url: config.base_url.clone(),
                api_key: config.api_key.clone(),
            }),
        })
    }

    /// Submit a try-on form.
    ///
    /// Issues one `POST` carrying the submission's two images and email as
    /// a multipart body. A 2xx response is decoded as JSON and returned
    /// verbatim; any failure - connect error, non-success status, body that
    /// fails to decode - is logged once and propagated unchanged. No retry,
    /// no timeout beyond the transport's defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] wrapping whatever the transport reported.
    #[instrument(skip(self, submission), fields(email = %submission.email))]
    pub async fn submit(
        &self,
        submission: TryOnSubmission,
    ) -> Result<SubmissionResponse, UploadError> {
        debug!(payload = ?submission, "submitting try-on form");

        match self.execute(&submission).await {
            Ok(body) => {
                debug!(response = %body, "upload accepted");
                Ok(body)
            }
            Err(err) => {
                let err = redact(err);
                error!(error = %err, "upload failed");
                Err(err.into())
            }
        }
    }

    /// Send the wire-level request and decode the JSON body.
    async fn execute(
        &self,
        submission: &TryOnSubmission,
    ) -> Result<SubmissionResponse, reqwest::Error> {
        let url = format!("{}{UPLOAD_PATH}", self.inner.base_url);
        let form = wire::to_form(submission)?;

        let response = self
            .inner
            .client
            .post(&url)
            .query(&[("key", self.inner.api_key.expose_secret())])
            .multipart(form)
            .send()
            .await?;

        response.error_for_status()?.json().await
    }
}

/// Strip the query string from a transport error's URL; it carries the
/// access key.
fn redact(mut err: reqwest::Error) -> reqwest::Error {
    if let Some(url) = err.url_mut() {
        url.set_query(None);
    }
    err
}

impl std::fmt::Debug for ImgbbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImgbbClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

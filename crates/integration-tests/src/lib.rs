//! Integration test support for the try-on submission client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tryon-integration-tests
//!
//! # With client logs
//! TEST_LOG=1 RUST_LOG=debug cargo test -p tryon-integration-tests
//! ```
//!
//! The tests stand up a [`wiremock::MockServer`] in place of the hosting
//! API and point the client at it via `IMGBB_BASE_URL`-style injection, so
//! no real uploads ever leave the machine. [`parse_multipart`] decodes the
//! recorded request bodies for assertions on the wire-level field contract.

use std::sync::OnceLock;

use secrecy::SecretString;
use tracing_subscriber::EnvFilter;
use tryon_client::{ImgbbClient, ImgbbConfig};
use tryon_core::{ImageFile, TryOnSubmission};
use wiremock::{MockServer, Request};

/// Access key handed to the client under test. Never a real credential.
pub const TEST_API_KEY: &str = "0123456789abcdef0123456789abcdef";

static TRACING: OnceLock<()> = OnceLock::new();

/// Initialize test logging once per process.
///
/// Quiet by default; set `TEST_LOG` to see client output filtered through
/// `RUST_LOG`.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        if std::env::var("TEST_LOG").is_ok() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Start a mock upload service.
pub async fn spawn_upload_service() -> MockServer {
    init_tracing();
    MockServer::start().await
}

/// Build a client pointed at the mock upload service.
///
/// # Panics
///
/// Panics if the HTTP client fails to build.
#[must_use]
pub fn test_client(server: &MockServer) -> ImgbbClient {
    let config = ImgbbConfig::new(SecretString::from(TEST_API_KEY), server.uri());
    ImgbbClient::new(&config).expect("HTTP client builds")
}

/// Build a submission with the given email and image bytes.
#[must_use]
pub fn test_submission(email: &str, selfie_bytes: &[u8], outfit_bytes: &[u8]) -> TryOnSubmission {
    TryOnSubmission::new(
        email,
        ImageFile::new("selfie.png", "image/png", selfie_bytes.to_vec()),
        ImageFile::new("outfit.png", "image/png", outfit_bytes.to_vec()),
    )
}

/// One decoded field of a recorded `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartField {
    /// Field name from the part's `Content-Disposition` header.
    pub name: String,
    /// File name, present on binary parts.
    pub file_name: Option<String>,
    /// MIME type, present when the part carried a `Content-Type` header.
    pub content_type: Option<String>,
    /// Raw part body.
    pub body: Vec<u8>,
}

/// Decode the multipart body of a recorded request, in wire order.
///
/// # Panics
///
/// Panics if the request is not well-formed `multipart/form-data`; tests
/// treat that as a failed expectation, not an error to handle.
#[must_use]
pub fn parse_multipart(request: &Request) -> Vec<MultipartField> {
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .expect("upload request carries a content-type header");
    assert!(
        content_type.starts_with("multipart/form-data"),
        "expected multipart content type, got {content_type}"
    );
    let boundary = content_type
        .split("boundary=")
        .nth(1)
        .expect("content type names a boundary")
        .trim_matches('"');
    let delimiter = format!("--{boundary}");

    let mut fields = Vec::new();
    // The slice before the opening delimiter is the (empty) preamble.
    for segment in split_on(&request.body, delimiter.as_bytes())
        .into_iter()
        .skip(1)
    {
        if segment.starts_with(b"--") {
            // Closing delimiter.
            break;
        }
        let part = segment.strip_prefix(b"\r\n").unwrap_or(segment);
        let (raw_headers, raw_body) =
            split_once_on(part, b"\r\n\r\n").expect("multipart part separates headers from body");
        let body = raw_body.strip_suffix(b"\r\n").unwrap_or(raw_body).to_vec();

        let headers = String::from_utf8_lossy(raw_headers);
        let mut name = None;
        let mut file_name = None;
        let mut part_content_type = None;
        for line in headers.lines() {
            let lowered = line.to_lowercase();
            if lowered.starts_with("content-disposition:") {
                name = header_attr(line, "name");
                file_name = header_attr(line, "filename");
            } else if lowered.starts_with("content-type:") {
                part_content_type = line.split_once(':').map(|(_, value)| value.trim().to_string());
            }
        }

        fields.push(MultipartField {
            name: name.expect("part carries a field name"),
            file_name,
            content_type: part_content_type,
            body,
        });
    }
    fields
}

/// Look up a decoded field by name.
///
/// # Panics
///
/// Panics if the field is absent.
#[must_use]
pub fn field<'a>(fields: &'a [MultipartField], name: &str) -> &'a MultipartField {
    fields
        .iter()
        .find(|field| field.name == name)
        .unwrap_or_else(|| panic!("missing multipart field '{name}'"))
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn split_once_on<'a>(bytes: &'a [u8], needle: &[u8]) -> Option<(&'a [u8], &'a [u8])> {
    let at = find_subslice(bytes, needle)?;
    let (head, tail) = bytes.split_at(at);
    Some((head, tail.get(needle.len()..).unwrap_or_default()))
}

fn split_on<'a>(mut bytes: &'a [u8], needle: &[u8]) -> Vec<&'a [u8]> {
    let mut segments = Vec::new();
    while let Some((head, tail)) = split_once_on(bytes, needle) {
        segments.push(head);
        bytes = tail;
    }
    segments.push(bytes);
    segments
}

/// Pull a quoted attribute value out of a `Content-Disposition` line.
///
/// Matches ` attr="value"` with the leading space so `name` never matches
/// inside `filename`.
fn header_attr(line: &str, attr: &str) -> Option<String> {
    let marker = format!(" {attr}=\"");
    let start = line.find(&marker)? + marker.len();
    let rest = line.get(start..)?;
    let end = rest.find('"')?;
    rest.get(..end).map(ToString::to_string)
}

//! Try-on submission client.
//!
//! Thin client-side helper that packages two image files and an email
//! address into one multipart form and posts it to the image hosting API,
//! handing back the service's JSON response unmodified.
//!
//! # Example
//!
//! ```no_run
//! use tryon_client::{ImgbbClient, ImgbbConfig};
//! use tryon_core::{ImageFile, TryOnSubmission};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ImgbbConfig::from_env()?;
//! let client = ImgbbClient::new(&config)?;
//!
//! let submission = TryOnSubmission::new(
//!     "user@example.com",
//!     ImageFile::new("selfie.png", "image/png", std::fs::read("selfie.png")?),
//!     ImageFile::new("outfit.png", "image/png", std::fs::read("outfit.png")?),
//! );
//!
//! let response = client.submit(submission).await?;
//! tracing::info!(%response, "submitted");
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`] - Environment-loaded configuration (API key, base URL)
//! - [`services`] - Outbound service clients

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod services;

pub use config::{ConfigError, ImgbbConfig};
pub use services::imgbb::{ImgbbClient, UploadError};

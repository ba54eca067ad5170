//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `IMGBB_API_KEY` - Access key for the image hosting upload endpoint
//!
//! ## Optional
//! - `IMGBB_BASE_URL` - Upload service base URL (default: `https://api.imgbb.com`),
//!   overridable for staging or mock servers

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default base URL of the image hosting API.
pub const DEFAULT_BASE_URL: &str = "https://api.imgbb.com";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Image hosting API configuration.
///
/// The access key never appears as a source literal; it is injected from
/// the environment (or passed explicitly by the caller) and redacted from
/// `Debug` output.
#[derive(Clone)]
pub struct ImgbbConfig {
    /// Static access key for the upload endpoint
    pub api_key: SecretString,
    /// Base URL of the upload service (no trailing slash)
    pub base_url: String,
}

impl std::fmt::Debug for ImgbbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImgbbConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ImgbbConfig {
    /// Create a configuration from explicit values.
    ///
    /// Intended for tests and callers that manage their own secrets; no
    /// placeholder validation is applied here.
    #[must_use]
    pub fn new(api_key: SecretString, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: trim_base_url(base_url.into()),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `IMGBB_API_KEY` is missing or looks like a
    /// placeholder, or if `IMGBB_BASE_URL` is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = get_required_env("IMGBB_API_KEY")?;
        validate_secret("IMGBB_API_KEY", &api_key)?;

        let base_url = get_env_or_default("IMGBB_BASE_URL", DEFAULT_BASE_URL);
        Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("IMGBB_BASE_URL".to_string(), e.to_string()))?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            base_url: trim_base_url(base_url),
        })
    }
}

/// Read a required environment variable.
fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Read an environment variable with a fallback default.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Reject empty values and obvious placeholders left over from setup.
fn validate_secret(name: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InsecureSecret(
            name.to_string(),
            "value is empty".to_string(),
        ));
    }

    let lowered = value.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lowered.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                name.to_string(),
                format!("value contains placeholder pattern '{pattern}'"),
            ));
        }
    }

    Ok(())
}

/// Normalize away a trailing slash so path joins stay predictable.
fn trim_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, unsafe_code)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ImgbbConfig::new(SecretString::from("k"), "http://localhost:9000/");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ImgbbConfig::new(
            SecretString::from("1f3a5c7e9b2d4f6a8c0e1f3a5c7e9b2d"),
            DEFAULT_BASE_URL,
        );
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("1f3a5c7e"));
    }

    #[test]
    fn test_validate_secret_rejects_placeholders() {
        assert!(matches!(
            validate_secret("IMGBB_API_KEY", "changeme"),
            Err(ConfigError::InsecureSecret(..))
        ));
        assert!(matches!(
            validate_secret("IMGBB_API_KEY", "your-key-here"),
            Err(ConfigError::InsecureSecret(..))
        ));
        assert!(matches!(
            validate_secret("IMGBB_API_KEY", ""),
            Err(ConfigError::InsecureSecret(..))
        ));
        assert!(validate_secret("IMGBB_API_KEY", "1f3a5c7e9b2d4f6a8c0e1f3a5c7e9b2d").is_ok());
    }

    #[test]
    fn test_from_env() {
        // Single test covers the env-dependent paths to keep the
        // process-global variables race-free under the parallel runner.
        unsafe {
            std::env::remove_var("IMGBB_API_KEY");
            std::env::remove_var("IMGBB_BASE_URL");
        }
        assert!(matches!(
            ImgbbConfig::from_env(),
            Err(ConfigError::MissingEnvVar(_))
        ));

        unsafe {
            std::env::set_var("IMGBB_API_KEY", "1f3a5c7e9b2d4f6a8c0e1f3a5c7e9b2d");
        }
        let config = ImgbbConfig::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        unsafe {
            std::env::set_var("IMGBB_BASE_URL", "not a url");
        }
        assert!(matches!(
            ImgbbConfig::from_env(),
            Err(ConfigError::InvalidEnvVar(..))
        ));

        unsafe {
            std::env::set_var("IMGBB_BASE_URL", "http://localhost:9000/");
        }
        let config = ImgbbConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");

        unsafe {
            std::env::remove_var("IMGBB_API_KEY");
            std::env::remove_var("IMGBB_BASE_URL");
        }
    }
}

//! Client configuration.
//!
//! Service endpoints and the storage quota are fixed for release builds. The
//! `VIDVAULT_*` variables exist so development builds can point at local
//! services; every override is validated the same way the defaults are.

use std::env;

use crate::util::{is_http_url, normalize_text_option};
use crate::{Error, Result};

/// Production auth service.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://user-service-180924265462.us-central1.run.app";
/// Production storage service, including its `/api/storage` prefix.
pub const DEFAULT_STORAGE_BASE_URL: &str =
    "https://storage-service-180924265462.us-central1.run.app/api/storage";
/// Per-user storage ceiling in MB.
pub const DEFAULT_QUOTA_MB: f64 = 50.0;

const ENV_AUTH_URL: &str = "VIDVAULT_AUTH_URL";
const ENV_STORAGE_URL: &str = "VIDVAULT_STORAGE_URL";
const ENV_QUOTA_MB: &str = "VIDVAULT_QUOTA_MB";

/// Endpoints and limits used by the service clients.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the auth service (without `/auth/...`).
    pub auth_base_url: String,
    /// Base URL of the storage API (`.../api/storage`).
    pub storage_base_url: String,
    /// Storage ceiling in MB.
    pub quota_mb: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            storage_base_url: DEFAULT_STORAGE_BASE_URL.to_string(),
            quota_mb: DEFAULT_QUOTA_MB,
        }
    }
}

impl ClientConfig {
    /// Defaults, with any `VIDVAULT_*` environment overrides applied.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults with overrides read through `lookup`.
    ///
    /// Unset or blank values keep the default. Set-but-invalid values are an
    /// error rather than a silent fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = normalize_text_option(lookup(ENV_AUTH_URL)) {
            config.auth_base_url = normalize_base_url(&url, ENV_AUTH_URL)?;
        }
        if let Some(url) = normalize_text_option(lookup(ENV_STORAGE_URL)) {
            config.storage_base_url = normalize_base_url(&url, ENV_STORAGE_URL)?;
        }
        if let Some(raw) = normalize_text_option(lookup(ENV_QUOTA_MB)) {
            config.quota_mb = parse_quota(&raw)?;
        }

        Ok(config)
    }
}

/// Trim a base URL and require an http(s) scheme.
pub fn normalize_base_url(raw: &str, field: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(Error::InvalidConfiguration(format!(
            "{field} must not be empty"
        )));
    }
    if !is_http_url(base) {
        return Err(Error::InvalidConfiguration(format!(
            "{field} must include http:// or https://"
        )));
    }
    Ok(base.to_string())
}

fn parse_quota(raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(quota) if quota.is_finite() && quota > 0.0 => Ok(quota),
        _ => Err(Error::InvalidConfiguration(format!(
            "{ENV_QUOTA_MB} must be a positive number of megabytes, got '{raw}'"
        ))),
    }
}

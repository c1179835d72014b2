use std::time::Duration;

use crate::error::ContentError;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the content API.
///
/// The base URL is optional here: a missing URL is only reported when the
/// first request is attempted.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Content host, e.g. `https://content.example.com` (no `/api` suffix).
    pub base_url: Option<String>,
    /// Per-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl CmsConfig {
    /// Config pointing at `base_url` with default timeout and user agent.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default           |
    /// |----------------------------|-------------------|
    /// | `STRAPI_API_URL`           | unset             |
    /// | `CMS_REQUEST_TIMEOUT_SECS` | `30`              |
    /// | `CMS_USER_AGENT`           | `rawav/<version>` |
    ///
    /// An empty `STRAPI_API_URL` counts as unset.
    pub fn from_env() -> Result<Self, ContentError> {
        let base_url = std::env::var("STRAPI_API_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let request_timeout_secs = match std::env::var("CMS_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                ContentError::Config(format!(
                    "CMS_REQUEST_TIMEOUT_SECS must be a valid u64, got {raw:?}"
                ))
            })?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let user_agent = std::env::var("CMS_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Ok(Self {
            base_url,
            request_timeout_secs,
            user_agent,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The configured base URL without a trailing slash.
    pub fn require_base_url(&self) -> Result<&str, ContentError> {
        self.base_url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ContentError::Config("STRAPI_API_URL is not defined".into()))
    }
}

fn default_user_agent() -> String {
    format!("rawav/{}", env!("CARGO_PKG_VERSION"))
}

//! REST client for the CMS HTTP API.
//!
//! [`CmsClient::fetch_api`] is the single request path: it resolves the
//! endpoint against the configured host, attaches JSON headers, and turns
//! non-2xx responses into [`ContentError::Api`] using the CMS error
//! envelope. Response shapes are validated by the caller.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use rawav_core::media::MediaResolver;

use crate::config::CmsConfig;
use crate::error::{ContentError, ContentResult};

/// Per-request overrides.
///
/// Headers are merged over the defaults, so a caller-supplied
/// `Content-Type` wins.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: HeaderMap::new(),
        }
    }
}

impl RequestOptions {
    /// `POST` with a JSON body.
    pub fn post(body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            headers: HeaderMap::new(),
        }
    }
}

/// Error envelope returned by the CMS on non-2xx responses:
/// `{"error": {"status", "name", "message", "details"}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    status: Option<u16>,
    name: Option<String>,
    message: Option<String>,
    details: Option<serde_json::Value>,
}

/// HTTP client for one content host.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    config: CmsConfig,
}

impl CmsClient {
    /// Build a client with the configured timeout and user agent.
    ///
    /// A missing base URL is not an error here; it surfaces on the first
    /// request.
    pub fn new(config: CmsConfig) -> ContentResult<Self> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| ContentError::Config(format!("Invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ContentError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// Full URL for an API-relative endpoint.
    pub fn endpoint_url(&self, endpoint: &str) -> ContentResult<String> {
        let base = self.config.require_base_url()?;
        Ok(format!("{base}/api/{}", endpoint.trim_start_matches('/')))
    }

    /// Resolver for media paths on this content host.
    pub fn media(&self) -> ContentResult<MediaResolver> {
        Ok(MediaResolver::new(self.config.require_base_url()?))
    }

    /// Absolute URL for a media path; `""` when there is no image.
    pub fn media_url(&self, url: Option<&str>) -> ContentResult<String> {
        Ok(self.media()?.resolve_opt(url))
    }

    /// Issue a request against `<base>/api/<endpoint>` and decode the JSON
    /// body.
    ///
    /// `endpoint` must already carry any encoded query parameters.
    pub async fn fetch_api<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ContentResult<T> {
        let url = self.endpoint_url(endpoint)?;

        // Caller headers replace defaults by name; repeated values are kept.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        tracing::debug!(method = %options.method, url = %url, "Fetching from CMS");

        let mut request = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "CMS request failed");
            ContentError::Transport(e)
        })?;

        let response = Self::ensure_success(response).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::trace!(url = %url, body = %body, "Raw CMS response");

        serde_json::from_str(&body).map_err(|e| ContentError::Api {
            status,
            name: Some("DecodeError".into()),
            message: format!("Invalid JSON from {url}: {e}"),
            details: None,
        })
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a
    /// [`ContentError::Api`] built from the error envelope on failure.
    async fn ensure_success(response: reqwest::Response) -> ContentResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let envelope = serde_json::from_str::<ErrorEnvelope>(&body).ok();
        let upstream_status = envelope.as_ref().and_then(|e| e.error.status);
        let err = api_error(status, envelope);

        if let ContentError::Api {
            status,
            name,
            message,
            ..
        } = &err
        {
            tracing::error!(
                status,
                upstream_status = ?upstream_status,
                name = ?name,
                message = %message,
                "CMS API error"
            );
        }
        Err(err)
    }
}

fn api_error(status: reqwest::StatusCode, envelope: Option<ErrorEnvelope>) -> ContentError {
    let generic = format!(
        "API Error: {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
    .trim_end()
    .to_string();

    match envelope {
        Some(ErrorEnvelope { error }) => ContentError::Api {
            status: status.as_u16(),
            name: error.name,
            message: error.message.filter(|m| !m.is_empty()).unwrap_or(generic),
            details: error.details,
        },
        None => ContentError::Api {
            status: status.as_u16(),
            name: None,
            message: generic,
            details: None,
        },
    }
}

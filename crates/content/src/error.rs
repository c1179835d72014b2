use rawav_core::error::ValidationError;

/// Coarse failure classes callers render differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The content host is not (correctly) configured.
    Configuration,
    /// Network failure or a non-success HTTP status.
    Transport,
    /// A lookup matched nothing; render a not-found page.
    NotFound,
    /// The payload did not match the declared shape.
    Validation,
}

/// Errors from the content layer.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Missing or invalid configuration. Raised on first use.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The CMS answered with a non-2xx status.
    ///
    /// `message` is the upstream error message when the error envelope
    /// parsed, else `API Error: <status> <reason>`.
    #[error("{message}")]
    Api {
        status: u16,
        /// Upstream error class, e.g. `NotFoundError`.
        name: Option<String>,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// The HTTP request itself failed (network, DNS, TLS, timeout, body decoding).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A slug or id lookup returned no items.
    #[error("{resource} not found: {key}")]
    NotFound { resource: &'static str, key: String },

    /// The response did not match the schema of its content kind.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An outgoing submission failed local validation.
    #[error("Invalid submission: {0}")]
    InvalidSubmission(#[from] validator::ValidationErrors),
}

/// Convenience alias for accessor return values.
pub type ContentResult<T> = Result<T, ContentError>;

impl ContentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::Config(_) => ErrorKind::Configuration,
            ContentError::Api { .. } | ContentError::Transport(_) => ErrorKind::Transport,
            ContentError::NotFound { .. } => ErrorKind::NotFound,
            ContentError::Validation(_) | ContentError::InvalidSubmission(_) => {
                ErrorKind::Validation
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// HTTP status a page handler should answer with.
    pub fn page_status(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            _ => 500,
        }
    }
}

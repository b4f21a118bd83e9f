//! Error types for the forum client.

/// Error from forum API operations.
#[derive(Debug, thiserror::Error)]
pub enum ForumError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response body was not the expected JSON.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl ForumError {
    /// HTTP status returned by the server, if the request got that far.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpResponse { status, .. } => Some(*status),
            Self::HttpRequest(_) | Self::Json(_) => None,
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application-level errors
///
/// Every variant renders as a plain-text body. Upstream transport failures
/// share the 404 status with "not found" so clients see one failure shape
/// for anything the provider could not answer.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    MissingParameter(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UpstreamUnavailable(String),

    #[error("{0}")]
    NoMatches(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Prefixes the message of an upstream failure, e.g. `"Series not found: "`.
    ///
    /// Other variants pass through untouched.
    pub fn prefixed(self, prefix: &str) -> Self {
        match self {
            AppError::NotFound(msg) => AppError::NotFound(format!("{}: {}", prefix, msg)),
            AppError::UpstreamUnavailable(msg) => {
                AppError::UpstreamUnavailable(format!("{}: {}", prefix, msg))
            }
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::UpstreamUnavailable(_) | AppError::NoMatches(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error text with the request URL stripped, since it carries the API key
pub(crate) fn redacted(err: reqwest::Error) -> String {
    err.without_url().to_string()
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::warn!(error = %redacted(err), "Undecodable upstream response");
            AppError::UpstreamUnavailable("failed to decode OMDb response".to_string())
        } else {
            tracing::warn!(error = %redacted(err), "Upstream request failed");
            AppError::UpstreamUnavailable("failed to call OMDb API".to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

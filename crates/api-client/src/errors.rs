//! Error types for the backend API client.

use thiserror::Error;

/// Errors returned by the backend HTTP surface.
///
/// Variants map onto the dashboard's failure taxonomy: [`SessionExpired`]
/// is fatal for the current view and requires re-authentication; the other
/// variants degrade only the widget that initiated the fetch.
///
/// [`SessionExpired`]: ApiError::SessionExpired
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend rejected the session (HTTP 401/403) or the session probe
    /// came back non-OK.
    #[error("session expired or unauthorized")]
    SessionExpired,

    /// The backend answered with a non-success status other than 401/403.
    #[error("backend returned HTTP {status}")]
    Http { status: u16 },

    /// The request never completed (connection, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// True when the caller should redirect to re-authentication instead of
    /// retrying.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::MalformedResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

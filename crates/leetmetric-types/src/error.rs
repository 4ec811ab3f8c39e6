use serde::Serialize;
use std::fmt;

/// Pre-flight rejection of a raw username input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputError {
    /// Input was blank after trimming
    EmptyInput,

    /// Trimmed input is not 3-25 characters of `[A-Za-z0-9_-]`
    InvalidFormat,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyInput => write!(f, "username is empty"),
            InputError::InvalidFormat => write!(f, "username has an invalid format"),
        }
    }
}

impl std::error::Error for InputError {}

/// Request-time failure of a profile lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum LookupError {
    /// HTTP 404, or an API body reporting an unknown user
    UserNotFound,

    /// HTTP 429
    RateLimited,

    /// HTTP 503
    ServiceUnavailable,

    /// Any other non-2xx status
    UpstreamError(u16),

    /// Request deadline elapsed before a full response arrived
    Timeout,

    /// No response (connect or transport failure)
    NetworkError,

    /// Body was not a JSON object or carried wrongly typed fields
    InvalidResponse,
}

impl LookupError {
    /// Map a non-success HTTP status to its taxonomy entry
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => LookupError::UserNotFound,
            429 => LookupError::RateLimited,
            503 => LookupError::ServiceUnavailable,
            other => LookupError::UpstreamError(other),
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UserNotFound => write!(f, "user not found"),
            LookupError::RateLimited => write!(f, "rate limited by upstream"),
            LookupError::ServiceUnavailable => write!(f, "upstream service unavailable"),
            LookupError::UpstreamError(status) => write!(f, "upstream returned HTTP {}", status),
            LookupError::Timeout => write!(f, "request timed out"),
            LookupError::NetworkError => write!(f, "network error"),
            LookupError::InvalidResponse => write!(f, "invalid response body"),
        }
    }
}

impl std::error::Error for LookupError {}

//! Error types for response writing and typed application errors.

use std::error::Error as StdError;
use std::fmt;

use axum::http::StatusCode;
use thiserror::Error;

/// Boxed error that can cross thread boundaries.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An error that knows which HTTP status and message it should be rendered as.
pub trait ClassifiableError: StdError {
    /// Status code the error should be reported with.
    fn status_code(&self) -> StatusCode;

    /// Human readable message for the client. May be empty.
    fn message(&self) -> &str;
}

/// Downcasts an opaque error to a typed view when it is one concrete type.
pub(crate) type Classifier =
    for<'a> fn(&'a (dyn StdError + 'static)) -> Option<&'a dyn ClassifiableError>;

pub(crate) fn downcast_classifiable<'a, T: ClassifiableError + 'static>(
    err: &'a (dyn StdError + 'static),
) -> Option<&'a dyn ClassifiableError> {
    err.downcast_ref::<T>().map(|typed| typed as &dyn ClassifiableError)
}

/// Failures while writing a JSON response.
#[derive(Debug, Error)]
pub enum RespondError {
    /// The payload could not be encoded as JSON.
    #[error("failed to marshal payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response sink rejected the body bytes.
    #[error("failed to write bytes: {0}")]
    Write(#[source] std::io::Error),
}

impl ClassifiableError for RespondError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn message(&self) -> &str {
        match self {
            RespondError::Serialization(_) => "failed to marshal payload",
            RespondError::Write(_) => "failed to write bytes",
        }
    }
}

/// Application error carrying its own status code and client message.
///
/// Optionally wraps the underlying cause, which shows up in `Display`
/// and `source()` but never in `message()`.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    source: Option<BoxError>,
}

impl HttpError {
    /// Error with a status and client message, no cause.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            source: None,
        }
    }

    /// Wrap `source` with a status and client message.
    pub fn wrap(status: StatusCode, source: impl Into<BoxError>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Copy the classification of any typed error into an `HttpError`.
    pub fn from_classifiable(err: &dyn ClassifiableError) -> Self {
        Self::new(err.status_code(), err.message())
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 401 Unauthorized.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// 403 Forbidden.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// 404 Not Found.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 413 Payload Too Large.
    pub fn too_large(message: impl Into<String>) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, message)
    }

    /// 418 I'm a teapot.
    pub fn teapot(message: impl Into<String>) -> Self {
        Self::new(StatusCode::IM_A_TEAPOT, message)
    }

    /// 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = if self.message.is_empty() {
            self.status.canonical_reason().unwrap_or_default()
        } else {
            self.message.as_str()
        };
        match &self.source {
            Some(source) => write!(f, "{message}: {source}"),
            None => f.write_str(message),
        }
    }
}

impl StdError for HttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn StdError + 'static))
    }
}

impl ClassifiableError for HttpError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}

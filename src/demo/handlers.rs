use std::error::Error as StdError;
use std::fmt;
use std::io;

use axum::{extract::State, http::StatusCode};
use serde::Serialize;

use crate::http::{BoxError, ClassifiableError, HttpError, RespondError, Responder, ResponseBuffer};

#[derive(Serialize)]
pub struct Greeting {
    pub greeting: &'static str,
    pub version: &'static str,
}

/// Application-defined typed error, registered on the demo responder.
#[derive(Debug)]
pub struct RateLimited {
    pub retry_after_secs: u64,
}

impl fmt::Display for RateLimited {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rate limited, retry after {}s", self.retry_after_secs)
    }
}

impl StdError for RateLimited {}

impl ClassifiableError for RateLimited {
    fn status_code(&self) -> StatusCode {
        StatusCode::TOO_MANY_REQUESTS
    }

    fn message(&self) -> &str {
        "slow down"
    }
}

/// Log a failed write; the buffer still carries whatever status was committed.
fn finish(w: ResponseBuffer, result: Result<(), RespondError>) -> ResponseBuffer {
    if let Err(e) = result {
        tracing::error!(error = %e, status = ?w.status(), "Failed to write JSON response");
    }
    w
}

pub async fn hello(State(responder): State<Responder>) -> ResponseBuffer {
    let mut w = ResponseBuffer::new();
    let result = responder.ok(
        &mut w,
        &Greeting {
            greeting: "hello",
            version: env!("CARGO_PKG_VERSION"),
        },
    );
    finish(w, result)
}

/// Nil payload: `null` or an empty body depending on `return_nulls`.
pub async fn empty(State(responder): State<Responder>) -> ResponseBuffer {
    let mut w = ResponseBuffer::new();
    let result = responder.not_found(&mut w, &());
    finish(w, result)
}

pub async fn teapot(State(responder): State<Responder>) -> ResponseBuffer {
    let mut w = ResponseBuffer::new();
    let result = responder.respond_error(&mut w, &HttpError::teapot("short and stout"));
    finish(w, result)
}

/// Typed error with no message, rendered with the reason phrase.
pub async fn denied(State(responder): State<Responder>) -> ResponseBuffer {
    let mut w = ResponseBuffer::new();
    let result = responder.respond_error(&mut w, &HttpError::forbidden(""));
    finish(w, result)
}

/// Untyped error, rendered with the fallback status.
pub async fn broken(State(responder): State<Responder>) -> ResponseBuffer {
    let mut w = ResponseBuffer::new();
    let err = io::Error::new(io::ErrorKind::ConnectionRefused, "upstream refused connection");
    let result = responder.respond_error_fallback(&mut w, &err, StatusCode::SERVICE_UNAVAILABLE);
    finish(w, result)
}

/// Registered typed error behind a `Box<dyn Error>`, keeps its own status.
pub async fn limited(State(responder): State<Responder>) -> ResponseBuffer {
    let mut w = ResponseBuffer::new();
    let err: BoxError = Box::new(RateLimited { retry_after_secs: 30 });
    let result = responder.respond_error_fallback(&mut w, &*err, StatusCode::BAD_REQUEST);
    finish(w, result)
}

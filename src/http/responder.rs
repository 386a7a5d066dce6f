//! JSON responder.
//!
//! # Responsibilities
//! - Mark every reply as `application/json`
//! - Write the status, then the serialized payload
//! - Leave the body empty for nil payloads when nulls are disabled
//!
//! # Design Decisions
//! - A payload is nil when it serializes to JSON `null` (`()`, `None`, `Value::Null`)
//! - The status is written before serialization, so an encoding failure
//!   still leaves the chosen status on the response
//! - Failures are returned to the caller, never logged and dropped

use std::fmt;
use std::io;
use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use serde::Serialize;

use crate::config::RespondConfig;
use crate::http::errors::{downcast_classifiable, Classifier, ClassifiableError, RespondError};
use crate::http::writer::ResponseWriter;

const NULL_BODY: &[u8] = b"null";

/// Writes JSON replies according to a shared [`RespondConfig`].
#[derive(Clone, Default)]
pub struct Responder {
    config: Arc<RespondConfig>,
    classifiers: Arc<Vec<Classifier>>,
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("config", &self.config)
            .field("registered_classifiers", &self.classifiers.len())
            .finish()
    }
}

impl Responder {
    pub fn new(config: RespondConfig) -> Self {
        Self {
            config: Arc::new(config),
            classifiers: Arc::default(),
        }
    }

    pub fn config(&self) -> &RespondConfig {
        &self.config
    }

    /// Recognise `T` as a typed error in `respond_error` and
    /// `respond_error_fallback`, alongside the built-in types.
    ///
    /// Register every type before serving begins.
    pub fn with_classifiable<T: ClassifiableError + 'static>(mut self) -> Self {
        Arc::make_mut(&mut self.classifiers).push(downcast_classifiable::<T>);
        self
    }

    pub(crate) fn classifiers(&self) -> &[Classifier] {
        &self.classifiers
    }

    /// Serialize `payload` and write it with `status`.
    pub fn respond<W, T>(&self, w: &mut W, status: StatusCode, payload: &T) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize + ?Sized,
    {
        w.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        w.write_header(status);

        let bytes = serde_json::to_vec(payload)?;

        if bytes == NULL_BODY && !self.config.return_nulls {
            tracing::debug!(status = %status, "nil payload, body omitted");
            return Ok(());
        }

        let written = w.write(&bytes).map_err(RespondError::Write)?;
        if written < bytes.len() {
            return Err(RespondError::Write(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {written} of {} bytes", bytes.len()),
            )));
        }

        tracing::debug!(status = %status, bytes = written, "JSON response written");
        Ok(())
    }

    /// Respond with 200 OK.
    pub fn ok<W, T>(&self, w: &mut W, payload: &T) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize + ?Sized,
    {
        self.respond(w, StatusCode::OK, payload)
    }

    /// Respond with 400 Bad Request.
    pub fn bad_request<W, T>(&self, w: &mut W, payload: &T) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize + ?Sized,
    {
        self.respond(w, StatusCode::BAD_REQUEST, payload)
    }

    /// Respond with 401 Unauthorized.
    pub fn unauthorized<W, T>(&self, w: &mut W, payload: &T) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize + ?Sized,
    {
        self.respond(w, StatusCode::UNAUTHORIZED, payload)
    }

    /// Respond with 403 Forbidden.
    pub fn forbidden<W, T>(&self, w: &mut W, payload: &T) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize + ?Sized,
    {
        self.respond(w, StatusCode::FORBIDDEN, payload)
    }

    /// Respond with 404 Not Found.
    pub fn not_found<W, T>(&self, w: &mut W, payload: &T) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize + ?Sized,
    {
        self.respond(w, StatusCode::NOT_FOUND, payload)
    }

    /// Respond with 413 Payload Too Large.
    pub fn too_large<W, T>(&self, w: &mut W, payload: &T) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize + ?Sized,
    {
        self.respond(w, StatusCode::PAYLOAD_TOO_LARGE, payload)
    }

    /// Respond with 418 I'm a teapot.
    pub fn teapot<W, T>(&self, w: &mut W, payload: &T) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize + ?Sized,
    {
        self.respond(w, StatusCode::IM_A_TEAPOT, payload)
    }

    /// Respond with 500 Internal Server Error.
    pub fn internal_error<W, T>(&self, w: &mut W, payload: &T) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
        T: Serialize + ?Sized,
    {
        self.respond(w, StatusCode::INTERNAL_SERVER_ERROR, payload)
    }
}

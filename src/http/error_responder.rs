//! Error classification and rendering.
//!
//! ```text
//! err ──▶ classify ──┬─ typed  → (err.status_code(), err.message())
//!                    └─ plain  → (fallback, config.default_error_message)
//!     ──▶ empty message? → status reason phrase
//!     ──▶ ErrorResponse { message, rawError? }
//!     ──▶ Responder::respond
//! ```

use std::error::Error as StdError;

use axum::http::StatusCode;

use crate::http::errors::{downcast_classifiable, Classifier, ClassifiableError, HttpError, RespondError};
use crate::http::responder::Responder;
use crate::http::response::ErrorResponse;
use crate::http::writer::ResponseWriter;

const BUILT_IN: [Classifier; 2] = [
    downcast_classifiable::<HttpError>,
    downcast_classifiable::<RespondError>,
];

impl Responder {
    /// Typed view of an opaque error: built-in types first, then registered ones.
    fn classify<'a>(&self, err: &'a (dyn StdError + 'static)) -> Option<&'a dyn ClassifiableError> {
        BUILT_IN
            .iter()
            .chain(self.classifiers())
            .find_map(|classifier| classifier(err))
    }

    /// Render `err`, using the configured default status when it is untyped.
    pub fn respond_error<W>(&self, w: &mut W, err: &(dyn StdError + 'static)) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
    {
        self.respond_error_fallback(w, err, self.config().default_status())
    }

    /// Render `err`, using `fallback` as the status when it is untyped.
    ///
    /// [`HttpError`], [`RespondError`] and types registered with
    /// [`Responder::with_classifiable`] keep their own status and message;
    /// anything else gets `fallback` and the configured default message.
    pub fn respond_error_fallback<W>(
        &self,
        w: &mut W,
        err: &(dyn StdError + 'static),
        fallback: StatusCode,
    ) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
    {
        let (status, message) = match self.classify(err) {
            Some(typed) => (typed.status_code(), typed.message()),
            None => (fallback, self.config().default_error_message.as_str()),
        };
        self.render_error(w, status, message, err)
    }

    /// Render an error type that classifies itself.
    pub fn respond_classified_error<W>(&self, w: &mut W, err: &dyn ClassifiableError) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
    {
        self.render_error(w, err.status_code(), err.message(), err)
    }

    fn render_error<W, E>(&self, w: &mut W, status: StatusCode, message: &str, err: &E) -> Result<(), RespondError>
    where
        W: ResponseWriter + ?Sized,
        E: StdError + ?Sized,
    {
        let message = if message.is_empty() {
            status.canonical_reason().unwrap_or_default()
        } else {
            message
        };

        let mut body = ErrorResponse::new(message);
        if self.config().return_raw_error {
            body = body.with_raw_error(err.to_string());
        }

        self.respond(w, status, &body)
    }
}

//! JSON response helpers for HTTP servers.
//!
//! ```no_run
//! use json_respond::{HttpError, Responder, ResponseBuffer};
//!
//! let responder = Responder::default();
//! let mut w = ResponseBuffer::new();
//! responder.respond_error(&mut w, &HttpError::not_found("no such user"))?;
//! # Ok::<(), json_respond::RespondError>(())
//! ```

pub mod config;
#[cfg(feature = "demo")]
pub mod demo;
pub mod http;
pub mod observability;

pub use config::{RespondConfig, ServiceConfig};
pub use http::{
    ClassifiableError, ErrorResponse, HttpError, RespondError, Responder, ResponseBuffer,
    ResponseWriter,
};

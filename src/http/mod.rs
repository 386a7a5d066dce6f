//! JSON response subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → responder.rs (Content-Type, status, JSON body)
//!     → writer.rs (ResponseWriter sink, ResponseBuffer → axum Response)
//!
//! handler error
//!     → error_responder.rs (classify typed vs plain, pick status/message)
//!     → response.rs (ErrorResponse wire payload)
//!     → responder.rs
//! ```
//!
//! # Design Decisions
//! - Typed errors are a capability trait (`ClassifiableError`), not a base type
//! - Responder owns its config behind an `Arc`, no process-wide state
//! - Encoding and write failures are returned, never swallowed

pub mod error_responder;
pub mod errors;
pub mod responder;
pub mod response;
pub mod writer;

pub use errors::{BoxError, ClassifiableError, HttpError, RespondError};
pub use responder::Responder;
pub use response::ErrorResponse;
pub use writer::{ResponseBuffer, ResponseWriter};

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Responder and demo server produce:
//!     → tracing events (status, body size, superfluous writes)
//!     → logging.rs (subscriber: env filter + pretty/JSON formatter)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - `RUST_LOG` overrides the configured level

pub mod logging;

pub use logging::init_logging;

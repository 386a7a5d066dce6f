//! Response sink abstraction.
//!
//! # Responsibilities
//! - Collect headers, a single status line and body bytes for one response
//! - Convert the collected response into an axum [`Response`]
//!
//! # Design Decisions
//! - The status is committed once; later `write_header` calls are ignored
//! - Writing body bytes before a status commits 200 OK
//! - Headers are snapshotted when the status is committed

use std::io;

use axum::{
    body::Body,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

/// Destination for a single HTTP response.
pub trait ResponseWriter {
    /// Headers that will be sent when the status is written.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Commit the status line and the current headers.
    fn write_header(&mut self, status: StatusCode);

    /// Append body bytes, returning how many were accepted.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
}

/// In-memory [`ResponseWriter`] that turns into an axum response.
#[derive(Debug, Default)]
pub struct ResponseBuffer {
    pending_headers: HeaderMap,
    committed: Option<(StatusCode, HeaderMap)>,
    body: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed status, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.committed.as_ref().map(|(status, _)| *status)
    }

    /// Headers as they will be sent.
    pub fn headers(&self) -> &HeaderMap {
        match &self.committed {
            Some((_, headers)) => headers,
            None => &self.pending_headers,
        }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl ResponseWriter for ResponseBuffer {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.pending_headers
    }

    fn write_header(&mut self, status: StatusCode) {
        if let Some((committed, _)) = &self.committed {
            tracing::warn!(
                committed = %committed,
                ignored = %status,
                "superfluous write_header call"
            );
            return;
        }
        self.committed = Some((status, self.pending_headers.clone()));
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.committed.is_none() {
            self.write_header(StatusCode::OK);
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }
}

impl IntoResponse for ResponseBuffer {
    fn into_response(self) -> Response {
        let (status, headers) = self
            .committed
            .unwrap_or((StatusCode::OK, self.pending_headers));

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

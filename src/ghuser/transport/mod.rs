//! # Transport Layer
//!
//! The [`Transport`] trait is the seam between the lookup logic and the network.
//! A lookup issues exactly one GET per call and only needs the status code and
//! the raw body back, so that is all the trait exposes.
//!
//! ## Implementations
//!
//! - [`http::ReqwestTransport`]: production transport over `reqwest::blocking`
//! - [`memory::StubTransport`]: canned responses for tests, records every URL
//!   it was asked for
//!
//! The response body is read fully into an [`HttpResponse`] before `get`
//! returns. The underlying connection is owned by the implementation and
//! released when its response value is dropped, on every return path.

use crate::error::Result;
use reqwest::Url;

pub mod http;
pub mod memory;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstract interface for issuing a single blocking GET.
pub trait Transport {
    /// Fetch `url`. Any failure to reach the server or read the body is a
    /// [`GhUserError::Transport`](crate::error::GhUserError::Transport);
    /// HTTP error statuses are not.
    fn get(&self, url: &Url) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<HttpResponse> {
        (**self).get(url)
    }
}

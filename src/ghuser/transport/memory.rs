use super::{HttpResponse, Transport};
use crate::error::{GhUserError, Result};
use reqwest::Url;
use std::cell::RefCell;

/// In-memory transport that replays one canned outcome for every request.
///
/// Requested URLs are recorded so tests can assert on what was (or was not)
/// sent.
#[derive(Debug)]
pub struct StubTransport {
    outcome: std::result::Result<HttpResponse, String>,
    requests: RefCell<Vec<Url>>,
}

impl StubTransport {
    pub fn respond(response: HttpResponse) -> Self {
        Self {
            outcome: Ok(response),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn respond_json(body: &str) -> Self {
        Self::respond(HttpResponse::ok(body))
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for StubTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(url.clone());
        self.outcome.clone().map_err(GhUserError::Transport)
    }
}

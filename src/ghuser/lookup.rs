//! # User Lookup
//!
//! [`UserLookup`] turns an identifier into a [`Profile`]: it builds the request
//! URL, performs the GET through its [`Transport`] and decodes the body.
//!
//! It is generic over the transport so that tests run against
//! [`StubTransport`](crate::transport::memory::StubTransport) and never touch
//! the network. Like the rest of the library it performs no terminal I/O;
//! printing belongs to the CLI layer.
//!
//! The status code is deliberately not interpreted. A 404 whose body is valid
//! JSON decodes to a mostly-empty profile; the status is only logged.

use crate::error::{GhUserError, Result};
use crate::model::Profile;
use crate::transport::Transport;
use log::{debug, warn};
use reqwest::Url;

pub const GITHUB_API_BASE: &str = "https://api.github.com";

pub struct UserLookup<T: Transport> {
    transport: T,
    base: Url,
}

impl<T: Transport> UserLookup<T> {
    /// Lookup service against the public GitHub API.
    pub fn github(transport: T) -> Result<Self> {
        Self::new(transport, GITHUB_API_BASE)
    }

    pub fn new(transport: T, base: &str) -> Result<Self> {
        let base = Url::parse(base)
            .map_err(|e| GhUserError::Config(format!("invalid base URL {base:?}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(GhUserError::Config(format!(
                "base URL {base} cannot carry a path"
            )));
        }
        Ok(Self { transport, base })
    }

    /// `{base}/users/{user}`, with `user` percent-encoded as a single segment.
    pub fn user_url(&self, user: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| GhUserError::Config(format!("base URL {} has no path", self.base)))?
            .pop_if_empty()
            .push("users")
            .push(user);
        Ok(url)
    }

    pub fn fetch(&self, user: &str) -> Result<Profile> {
        let url = self.user_url(user)?;
        debug!("GET {}", url);

        let response = self.transport.get(&url)?;
        debug!("{} answered {}", url, response.status);
        if !response.is_success() {
            warn!("{} returned HTTP {}", url, response.status);
        }

        Ok(Profile::from_json(&response.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::StubTransport;
    use crate::transport::HttpResponse;

    const FACEBOOK: &str = r#"{"login":"facebook","name":"Facebook","followers":0,"following":0}"#;

    #[test]
    fn test_fetch_decodes_profile() {
        let stub = StubTransport::respond_json(FACEBOOK);
        let lookup = UserLookup::github(&stub).unwrap();

        let profile = lookup.fetch("facebook").unwrap();

        assert_eq!(profile.login, "facebook");
        assert_eq!(profile.name, "Facebook");
        assert_eq!(stub.request_count(), 1);
        assert_eq!(
            stub.requests()[0].as_str(),
            "https://api.github.com/users/facebook"
        );
    }

    #[test]
    fn test_user_is_single_encoded_segment() {
        let lookup = UserLookup::github(StubTransport::respond_json("{}")).unwrap();

        assert_eq!(
            lookup.user_url("a b").unwrap().as_str(),
            "https://api.github.com/users/a%20b"
        );
        assert_eq!(
            lookup.user_url("x/y").unwrap().as_str(),
            "https://api.github.com/users/x%2Fy"
        );
        let url = lookup.user_url("q?page=2#frag").unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_base_with_path_is_kept() {
        let lookup = UserLookup::new(
            StubTransport::respond_json("{}"),
            "http://127.0.0.1:8080/api/v3/",
        )
        .unwrap();
        assert_eq!(
            lookup.user_url("octocat").unwrap().as_str(),
            "http://127.0.0.1:8080/api/v3/users/octocat"
        );
    }

    #[test]
    fn test_invalid_base_rejected() {
        let err = UserLookup::new(StubTransport::respond_json("{}"), "not a url").err();
        assert!(matches!(err, Some(GhUserError::Config(_))));

        let err =
            UserLookup::new(StubTransport::respond_json("{}"), "mailto:me@example.com").err();
        assert!(matches!(err, Some(GhUserError::Config(_))));
    }

    #[test]
    fn test_transport_failure_is_returned() {
        let lookup = UserLookup::github(StubTransport::fail("connection refused")).unwrap();
        let err = lookup.fetch("facebook").unwrap_err();
        assert!(matches!(err, GhUserError::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let lookup = UserLookup::github(StubTransport::respond_json("not json")).unwrap();
        let err = lookup.fetch("facebook").unwrap_err();
        assert!(matches!(err, GhUserError::Decode(_)));
        assert!(err.to_string().starts_with("Erro ao decodificar resposta:"));
    }

    #[test]
    fn test_not_found_still_decodes() {
        let stub =
            StubTransport::respond(HttpResponse::new(404, r#"{"message":"Not Found"}"#));
        let lookup = UserLookup::github(stub).unwrap();
        assert_eq!(lookup.fetch("nobody").unwrap(), Profile::default());
    }

    #[test]
    fn test_fetch_is_repeatable() {
        let stub = StubTransport::respond_json(FACEBOOK);
        let lookup = UserLookup::github(&stub).unwrap();

        let first = lookup.fetch("facebook").unwrap();
        let second = lookup.fetch("facebook").unwrap();

        assert_eq!(first, second);
        assert_eq!(stub.requests()[0], stub.requests()[1]);
    }
}

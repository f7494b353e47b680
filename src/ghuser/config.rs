use crate::error::{GhUserError, Result};

/// Environment variable consulted when `--user` is not given.
pub const USER_ENV: &str = "GHUSER_USER";

const DEFAULT_USER: &str = "";

/// Resolved settings for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    user: String,
}

impl Settings {
    /// Resolve the user from the flag, then the environment, then the default.
    ///
    /// An empty value at any layer counts as unset and falls through to the
    /// next one. Anything else, whitespace included, is taken as given.
    pub fn resolve(flag: Option<String>, env: Option<String>) -> Result<Self> {
        let user = [flag, env, Some(DEFAULT_USER.to_string())]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
            .ok_or(GhUserError::MissingUser)?;
        Ok(Self { user })
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

// Rust guideline compliant 2026-10-19

//! Configuration for Sonarbrief.
//!
//! Both values are required and come from the process environment. The
//! resulting [`Config`] is passed explicitly to the client.

use crate::{Error, Result};
use std::fmt;

/// Base URL of the SonarCloud web API.
pub const SONAR_URL: &str = "https://sonarcloud.io/api";

/// Environment variable holding the API token.
pub const TOKEN_VAR: &str = "SONAR_TOKEN";

/// Environment variable holding the project key.
pub const PROJECT_VAR: &str = "PROJECT_KEY";

/// Connection settings for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Bearer token sent with every request.
    pub token: String,
    /// Project whose issues are fetched.
    pub project_key: String,
    /// API base URL without a trailing slash.
    pub base_url: String,
}

impl Config {
    /// Creates a configuration pointing at the SonarCloud API.
    pub fn new(token: impl Into<String>, project_key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            project_key: project_key.into(),
            base_url: SONAR_URL.to_string(),
        }
    }

    /// Replaces the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Loads configuration through a variable lookup, usually
    /// `std::env::var`.
    ///
    /// An empty value counts as missing. The token is checked first, so a run with neither value set reports
    /// the missing token.
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of the named variable, if set
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEnv`] naming the first missing value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = require(&lookup, TOKEN_VAR, "your-token-here")?;
        let project_key = require(&lookup, PROJECT_VAR, "your-project-key")?;
        Ok(Self::new(token, project_key))
    }
}

fn require<F>(lookup: &F, name: &'static str, hint: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingEnv { name, hint }),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("project_key", &self.project_key)
            .field("base_url", &self.base_url)
            .finish()
    }
}

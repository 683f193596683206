//! Remote API location.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASE_URL: &str = "https://expense-tracker-task-production.up.railway.app";

/// Name of the environment variable front-ends read the base URL from.
pub const BASE_URL_ENV: &str = "EXPENSE_API_BASE_URL";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL must start with http:// or https://, got `{0}`")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build a config for `base_url`, dropping any trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the URL is not http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
        if !has_host {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self { base_url: trimmed.to_owned() })
    }

    /// Config from an optional override, falling back to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the override is malformed.
    pub fn from_override(base_url: Option<&str>) -> Result<Self, ConfigError> {
        match base_url.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Self::new(raw),
            None => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `user/login` or `/user/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

//! API client configuration.

/// Base URL of the hosted Evonto API.
pub const DEFAULT_BASE_URL: &str = "https://evonto.onrender.com/api";

/// Which responses may replace the cached user profile when they carry a
/// rotated `authorization` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileCapture {
    /// Any response with a rotated token: its whole body becomes the profile.
    #[default]
    AnyResponse,
    /// Only `/login` and `/register` responses replace the profile; other
    /// endpoints just rotate the token.
    AuthEndpoints,
}

impl ProfileCapture {
    /// Parse `any` / `auth`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownProfileCapture`] for other values.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim() {
            "any" => Ok(Self::AnyResponse),
            "auth" => Ok(Self::AuthEndpoints),
            other => Err(ConfigError::UnknownProfileCapture(other.to_owned())),
        }
    }
}

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown profile capture mode '{0}' (expected 'any' or 'auth')")]
    UnknownProfileCapture(String),
}

/// Where requests go and how token rotation updates the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub profile_capture: ProfileCapture,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with the default capture policy.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            profile_capture: ProfileCapture::default(),
        }
    }

    #[must_use]
    pub fn with_profile_capture(mut self, profile_capture: ProfileCapture) -> Self {
        self.profile_capture = profile_capture;
        self
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `EVONTO_API_BASE_URL`: default [`DEFAULT_BASE_URL`]
    /// - `EVONTO_PROFILE_CAPTURE`: `any` (default) or `auth`
    ///
    /// # Errors
    ///
    /// Returns an error if `EVONTO_PROFILE_CAPTURE` holds an unknown mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("EVONTO_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let profile_capture = match std::env::var("EVONTO_PROFILE_CAPTURE") {
            Ok(raw) => ProfileCapture::parse(&raw)?,
            Err(_) => ProfileCapture::default(),
        };
        Ok(Self::new(&base_url).with_profile_capture(profile_capture))
    }

    /// Absolute URL for an API path such as `/events/my`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Whether a rotated token on a response to `path` should also replace
    /// the stored user profile.
    #[must_use]
    pub fn captures_profile_from(&self, path: &str) -> bool {
        match self.profile_capture {
            ProfileCapture::AnyResponse => true,
            ProfileCapture::AuthEndpoints => matches!(path, "/login" | "/register"),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! Backend endpoint configuration.

/// Where the backend lives.
///
/// The base URL is baked in at compile time from the `SINGERSREPO_API_URL`
/// environment variable, falling back to a local development server. Tests
/// construct their own config via [`ApiConfig::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("SINGERSREPO_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path relative to the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let config = ApiConfig::new("http://api.test");
        assert_eq!(config.endpoint("genres"), "http://api.test/genres");
        assert_eq!(config.endpoint("/genres"), "http://api.test/genres");
        assert_eq!(
            config.endpoint("genres/user/u1"),
            "http://api.test/genres/user/u1"
        );
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let config = ApiConfig::new("http://api.test/");
        assert_eq!(config.base_url(), "http://api.test");
        assert_eq!(config.endpoint("auth/login"), "http://api.test/auth/login");
    }
}

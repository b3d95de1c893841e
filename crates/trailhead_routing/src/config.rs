use std::time::Duration;

use url::Url;

use crate::error::RoutingError;

pub const DEFAULT_BASE_URL: &str = "http://yours.cs.ubc.ca/yours";
pub const DEFAULT_ROUTE_PATH: &str = "api/1.0/gosmore.php";
pub const DEFAULT_DIRECTIONS_PATH: &str = "gosmore-instructions.php";
pub const DEFAULT_USER_AGENT: &str = concat!("trailhead-routing/", env!("CARGO_PKG_VERSION"));

/// Where the routing service lives and how the HTTP transport talks to it.
#[derive(Debug, Clone)]
pub struct RoutingClientConfig {
    pub base_url: String,
    /// Path of the route endpoint, relative to `base_url`
    pub route_path: String,
    /// Path of the human-readable directions endpoint, relative to `base_url`
    pub directions_path: String,
    /// `None` leaves the transport's default in place
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for RoutingClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            route_path: DEFAULT_ROUTE_PATH.to_string(),
            directions_path: DEFAULT_DIRECTIONS_PATH.to_string(),
            connect_timeout: None,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl RoutingClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_route_path(mut self, path: impl Into<String>) -> Self {
        self.route_path = path.into();
        self
    }

    #[must_use]
    pub fn with_directions_path(mut self, path: impl Into<String>) -> Self {
        self.directions_path = path.into();
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn route_url(&self) -> Result<Url, RoutingError> {
        self.endpoint_url(&self.route_path)
    }

    pub fn directions_url(&self) -> Result<Url, RoutingError> {
        self.endpoint_url(&self.directions_path)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, RoutingError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        Ok(Url::parse(&url)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = RoutingClientConfig::default();

        assert_eq!(
            config.route_url().unwrap().as_str(),
            "http://yours.cs.ubc.ca/yours/api/1.0/gosmore.php"
        );
        assert_eq!(
            config.directions_url().unwrap().as_str(),
            "http://yours.cs.ubc.ca/yours/gosmore-instructions.php"
        );
    }

    #[test]
    fn test_slashes_are_normalized() {
        let config = RoutingClientConfig::new("http://localhost:8080/").with_route_path("/route");

        assert_eq!(
            config.route_url().unwrap().as_str(),
            "http://localhost:8080/route"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = RoutingClientConfig::new("not a url");

        assert!(matches!(
            config.route_url(),
            Err(RoutingError::InvalidUrl(_))
        ));
    }
}

//! Client configuration for NCBI E-utilities access
//!
//! NCBI asks every client to identify itself with a tool name and, ideally, a
//! contact email. An API key raises the allowed request rate from 3 to 10
//! requests per second.

use std::time::Duration;

use crate::rate_limit::RateLimiter;

/// Default E-utilities endpoint
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default tool name reported to NCBI
pub const DEFAULT_TOOL: &str = "drugdev-search";

/// Configuration for [`PaperSearchClient`](crate::PaperSearchClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// NCBI API key (raises the rate limit to 10 requests/second)
    pub api_key: Option<String>,
    /// Contact email sent with every request
    pub email: Option<String>,
    /// Tool name sent with every request
    pub tool: Option<String>,
    /// Override for the E-utilities base URL (used by tests and mirrors)
    pub base_url: Option<String>,
    /// Explicit requests-per-second limit, overriding the NCBI presets
    pub rate_limit: Option<f64>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with NCBI defaults
    ///
    /// # Example
    ///
    /// ```
    /// use drugdev_search::ClientConfig;
    ///
    /// let config = ClientConfig::new();
    /// assert!(config.api_key.is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            api_key: None,
            email: None,
            tool: None,
            base_url: None,
            rate_limit: None,
            timeout: Duration::from_secs(30),
            user_agent: None,
        }
    }

    /// Set the NCBI API key
    ///
    /// # Example
    ///
    /// ```
    /// use drugdev_search::ClientConfig;
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@university.edu");
    /// assert_eq!(config.effective_rate_limit(), 10.0);
    /// ```
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the contact email
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the tool name
    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Point the client at a different E-utilities base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the requests-per-second limit
    pub fn with_rate_limit(mut self, rate: f64) -> Self {
        self.rate_limit = Some(rate);
        self
    }

    /// Set the HTTP timeout in seconds
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }

    /// Set a custom User-Agent
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Base URL without a trailing slash
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    pub fn effective_user_agent(&self) -> String {
        match &self.user_agent {
            Some(agent) => agent.clone(),
            None => format!("{}/{}", self.effective_tool(), env!("CARGO_PKG_VERSION")),
        }
    }

    /// Requests per second, from the override or the NCBI preset
    pub fn effective_rate_limit(&self) -> f64 {
        match (self.rate_limit, &self.api_key) {
            (Some(rate), _) => rate,
            (None, Some(_)) => 10.0,
            (None, None) => 3.0,
        }
    }

    /// Query parameters identifying this client to NCBI
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(key) = &self.api_key {
            params.push(("api_key".to_string(), key.clone()));
        }
        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }
        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }

    pub fn create_rate_limiter(&self) -> RateLimiter {
        RateLimiter::new(self.effective_rate_limit())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

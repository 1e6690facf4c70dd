//! Configuration for the Holiday and Event API client

use crate::http::ApiProvider;
use secrecy::SecretString;
use std::time::Duration;

/// Default timeout for a whole request, including reading the body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of redirects followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration for the client.
///
/// Usually assembled through [`Client::builder`](crate::Client::builder) or
/// loaded with [`ClientConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Gateway the API is reached through
    pub provider: Option<ApiProvider>,

    /// API key for the selected gateway
    pub api_key: Option<SecretString>,

    /// Override for the gateway's base URL (proxies, tests)
    pub base_url: Option<String>,

    /// Timeout for a whole request
    pub timeout: Duration,

    /// Timeout for establishing a connection
    pub connect_timeout: Duration,

    /// Maximum number of redirects to follow
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            provider: None,
            api_key: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration for a gateway and key.
    pub fn new(provider: ApiProvider, api_key: impl Into<String>) -> Self {
        Self {
            provider: Some(provider),
            api_key: Some(SecretString::new(api_key.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    /// This will look for:
    /// - `HOLIDAY_API_PROVIDER` (`apilayer` or `rapidapi`)
    /// - `HOLIDAY_API_KEY`
    /// - `HOLIDAY_API_BASE_URL`
    /// - `HOLIDAY_API_TIMEOUT` (seconds)
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProviderRequired`](crate::Error::ProviderRequired) if
    /// `HOLIDAY_API_PROVIDER` is set to an unrecognized gateway.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(provider) = env::var("HOLIDAY_API_PROVIDER") {
            config.provider = Some(provider.parse()?);
        }

        if let Ok(api_key) = env::var("HOLIDAY_API_KEY") {
            config.api_key = Some(SecretString::new(api_key.into_boxed_str()));
        }

        if let Ok(base_url) = env::var("HOLIDAY_API_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(timeout_str) = env::var("HOLIDAY_API_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.parse::<u64>()
        {
            config.timeout = Duration::from_secs(timeout_secs);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.provider.is_some() {
            self.provider = other.provider;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        if other.connect_timeout != DEFAULT_CONNECT_TIMEOUT {
            self.connect_timeout = other.connect_timeout;
        }
        if other.max_redirects != DEFAULT_MAX_REDIRECTS {
            self.max_redirects = other.max_redirects;
        }

        self
    }
}

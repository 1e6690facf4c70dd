//! Main client implementation for the Holiday and Event API

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::{
    PLATFORM_VERSION, USER_AGENT, VERSION,
    config::ClientConfig,
    context::RequestContext,
    error::{Error, Result},
    http::{ApiProvider, Method, RequestBuilder},
    types::{
        GetEventInfoRequest, GetEventInfoResponse, GetEventsRequest, GetEventsResponse,
        SearchRequest, SearchResponse, StandardResponse,
    },
    validation::{validate_event_info_request, validate_search_request},
};

/// Query parameters, kept sorted by name so URLs are stable.
pub(crate) type Query = BTreeMap<&'static str, String>;

/// Client for the Holiday and Event API.
///
/// Holds the gateway, the API key and a pooled HTTP client. All state is
/// immutable after construction, so one client can be cloned and shared
/// freely across tasks.
///
/// # Example
///
/// ```rust,no_run
/// use holiday_event_api::{ApiProvider, Client, GetEventsRequest, RequestContext};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(ApiProvider::ApiLayer, "<your API key>")?;
/// let events = client
///     .get_events(&RequestContext::new(), &GetEventsRequest::default())
///     .await?;
///
/// println!("Today is {}!", events.events[0].name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    /// HTTP client for making requests
    http_client: reqwest::Client,
    /// Gateway the API is reached through
    provider: ApiProvider,
    /// API key for the gateway
    api_key: SecretString,
    /// Base URL operation paths are appended to
    base_url: Url,
    /// Timeout for a whole request
    timeout: Duration,
}

impl Client {
    /// Create a new client for a gateway and API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ApiKeyRequired`] when `api_key` is empty, or
    /// [`Error::HttpClient`] if the HTTP client cannot be initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use holiday_event_api::{ApiProvider, Client};
    ///
    /// let client = Client::new(ApiProvider::RapidApi, "abc123")?;
    /// assert_eq!(client.provider(), ApiProvider::RapidApi);
    ///
    /// let err = Client::new(ApiProvider::ApiLayer, "").unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "please provide a valid API key. Get one at https://apilayer.com/marketplace/checkiday-api#pricing"
    /// );
    /// # Ok::<(), holiday_event_api::Error>(())
    /// ```
    pub fn new(provider: ApiProvider, api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(provider, api_key))
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object.
    ///
    /// # Errors
    ///
    /// - [`Error::ProviderRequired`] when no gateway is configured
    /// - [`Error::ApiKeyRequired`] when the key is missing or empty
    /// - [`Error::InvalidUrl`] when a base URL override is empty or not http(s)
    /// - [`Error::HttpClient`] if the HTTP client cannot be initialized
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let provider = config.provider.ok_or(Error::ProviderRequired)?;

        let api_key = config
            .api_key
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or(Error::ApiKeyRequired {
                source_url: provider.api_key_source(),
            })?;

        let base_url = match config.base_url {
            Some(base_url) => parse_base_url(&base_url)?,
            None => provider.base_url(),
        };

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        tracing::debug!(
            provider = %provider,
            base_url = %base_url,
            timeout_ms = config.timeout.as_millis(),
            "Created Holiday and Event API client"
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                http_client,
                provider,
                api_key,
                base_url,
                timeout: config.timeout,
            }),
        })
    }

    /// Gets the Events for the provided Date.
    ///
    /// `adult` is always sent; `timezone` and `date` only when non-empty, so
    /// the API falls back to America/Chicago and today.
    pub async fn get_events(
        &self,
        ctx: &RequestContext,
        request: &GetEventsRequest,
    ) -> Result<GetEventsResponse> {
        self.request(ctx, "events", events_query(request)).await
    }

    /// Gets the Event Info for the provided Event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EventIdRequired`] without touching the network when
    /// `request.id` is empty.
    pub async fn get_event_info(
        &self,
        ctx: &RequestContext,
        request: &GetEventInfoRequest,
    ) -> Result<GetEventInfoResponse> {
        validate_event_info_request(request)?;
        self.request(ctx, "event", event_info_query(request)).await
    }

    /// Searches for Events with the given criteria.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SearchQueryRequired`] without touching the network
    /// when `request.query` is empty.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        request: &SearchRequest,
    ) -> Result<SearchResponse> {
        validate_search_request(request)?;
        self.request(ctx, "search", search_query(request)).await
    }

    /// Gets the API Client Version.
    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// The gateway this client talks to.
    pub fn provider(&self) -> ApiProvider {
        self.inner.provider
    }

    /// Base URL operation paths are appended to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    #[instrument(level = "debug", skip(self, ctx, params), fields(provider = %self.inner.provider))]
    async fn request<R>(&self, ctx: &RequestContext, path: &str, params: Query) -> Result<R>
    where
        R: DeserializeOwned + StandardResponse,
    {
        let response = self.build_request(path, &params)?.send(ctx).await?;

        let mut result: R = response.parse_result()?;
        result.set_rate_limit(self.inner.provider.extract_rate_limit(response.headers()));

        Ok(result)
    }

    /// Assemble a GET request with the gateway's auth headers and the client's
    /// identification headers.
    pub(crate) fn build_request(&self, path: &str, params: &Query) -> Result<RequestBuilder> {
        let url = self.endpoint(path, params)?;

        let mut builder = RequestBuilder::new(Method::GET, url)
            .with_client(self.inner.http_client.clone())
            .timeout(self.inner.timeout);

        self.inner
            .provider
            .attach_request_headers(builder.headers_mut(), self.inner.api_key.expose_secret())?;

        builder
            .try_header("user-agent", USER_AGENT)?
            .try_header("x-platform-version", PLATFORM_VERSION)
    }

    fn endpoint(&self, path: &str, params: &Query) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::InvalidUrl(format!("{} cannot be a base URL", self.inner.base_url))
            })?
            .pop_if_empty()
            .push(path);

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }

        Ok(url)
    }
}

pub(crate) fn events_query(request: &GetEventsRequest) -> Query {
    let mut params = Query::new();
    params.insert("adult", request.adult.to_string());

    if let Some(timezone) = non_empty(&request.timezone) {
        params.insert("timezone", timezone.to_string());
    }
    if let Some(date) = non_empty(&request.date) {
        params.insert("date", date.to_string());
    }

    params
}

pub(crate) fn event_info_query(request: &GetEventInfoRequest) -> Query {
    let mut params = Query::new();
    params.insert("id", request.id.clone());

    // Zero means "server default"
    if let Some(start) = request.start.filter(|year| *year != 0) {
        params.insert("start", start.to_string());
    }
    if let Some(end) = request.end.filter(|year| *year != 0) {
        params.insert("end", end.to_string());
    }

    params
}

pub(crate) fn search_query(request: &SearchRequest) -> Query {
    let mut params = Query::new();
    params.insert("adult", request.adult.to_string());
    params.insert("query", request.query.clone());
    params
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    if base_url.trim().is_empty() {
        return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
    }

    let url: Url = base_url
        .parse()
        .map_err(|e| Error::InvalidUrl(format!("{}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidUrl(format!(
            "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
            scheme
        ))),
    }
}

/// Builder for creating a configured Client.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Start from an existing configuration, e.g. one loaded from the environment.
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Set the gateway the API is reached through.
    pub fn provider(mut self, provider: ApiProvider) -> Self {
        self.config.provider = Some(provider);
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Override the gateway's base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the timeout for a whole request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the timeout for establishing a connection.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the maximum number of redirects to follow.
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.config.max_redirects = max_redirects;
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}

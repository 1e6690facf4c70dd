//! Upstream API gateways
//!
//! The Holiday and Event API is sold through more than one marketplace. Every
//! gateway speaks the same API but disagrees on transport details: where the
//! API lives, which header carries the key, and which headers report quota.
//! [`ApiProvider`] keeps those details out of the client.

use crate::{
    error::{Error, Result},
    types::RateLimit,
};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use url::Url;

const RAPIDAPI_HOST: &str = "checkiday.p.rapidapi.com";

/// The marketplace gateway used to reach the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiProvider {
    /// <https://apilayer.com/marketplace/checkiday-api>
    ApiLayer,

    /// <https://rapidapi.com/westy92-llc-westy92-llc-default/api/checkiday>
    RapidApi,
}

impl ApiProvider {
    /// Every supported gateway.
    pub const ALL: [ApiProvider; 2] = [ApiProvider::ApiLayer, ApiProvider::RapidApi];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ApiProvider::ApiLayer => "apilayer",
            ApiProvider::RapidApi => "rapidapi",
        }
    }

    /// Where to get an API key for this gateway.
    pub fn api_key_source(self) -> &'static str {
        match self {
            ApiProvider::ApiLayer => "https://apilayer.com/marketplace/checkiday-api#pricing",
            ApiProvider::RapidApi => {
                "https://rapidapi.com/westy92-llc-westy92-llc-default/api/checkiday/pricing"
            }
        }
    }

    /// Base URL that operation paths are appended to.
    pub fn base_url(self) -> Url {
        let raw = match self {
            ApiProvider::ApiLayer => "https://api.apilayer.com/checkiday/",
            ApiProvider::RapidApi => "https://checkiday.p.rapidapi.com/",
        };

        // Both literals are valid absolute URLs.
        Url::parse(raw).unwrap_or_else(|e| unreachable!("invalid provider base URL {raw}: {e}"))
    }

    /// Add the gateway's authentication headers to an outgoing request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestBuild`] if the key cannot be sent as a header value.
    pub fn attach_request_headers(self, headers: &mut HeaderMap, api_key: &str) -> Result<()> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| Error::RequestBuild(format!("invalid API key header value: {e}")))?;
        key.set_sensitive(true);

        match self {
            ApiProvider::ApiLayer => {
                headers.insert(HeaderName::from_static("apikey"), key);
            }
            ApiProvider::RapidApi => {
                headers.insert(HeaderName::from_static("x-rapidapi-key"), key);
                headers.insert(
                    HeaderName::from_static("x-rapidapi-host"),
                    HeaderValue::from_static(RAPIDAPI_HOST),
                );
            }
        }

        Ok(())
    }

    /// Read the quota headers of a response.
    ///
    /// Missing or non-numeric values count as zero.
    pub fn extract_rate_limit(self, headers: &HeaderMap) -> RateLimit {
        let (limit, remaining) = match self {
            ApiProvider::ApiLayer => (
                "x-ratelimit-limit-month",
                "x-ratelimit-remaining-month",
            ),
            ApiProvider::RapidApi => (
                "x-ratelimit-requests-limit",
                "x-ratelimit-requests-remaining",
            ),
        };

        RateLimit {
            limit: parse_header_i64(headers, limit),
            remaining: parse_header_i64(headers, remaining),
        }
    }
}

impl fmt::Display for ApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ApiProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ApiProvider::ALL
            .into_iter()
            .find(|provider| provider.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(Error::ProviderRequired)
    }
}

fn parse_header_i64(headers: &HeaderMap, name: &str) -> i64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_default()
}

//! Response envelopes for the three API operations
//!
//! Every envelope embeds a [`RateLimit`] which is never part of the JSON
//! body: the client fills it in from the provider's response headers.

use super::event::null_as_default;
use super::{EventInfo, EventSummary, RateLimit};
use serde::{Deserialize, Serialize};

/// Access to the rate limit carried by every response envelope.
pub trait StandardResponse {
    /// The API plan's current rate limit and status.
    fn rate_limit(&self) -> RateLimit;

    /// Attach the rate limit read from the response headers.
    fn set_rate_limit(&mut self, rate_limit: RateLimit);
}

macro_rules! impl_standard_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl StandardResponse for $ty {
                fn rate_limit(&self) -> RateLimit {
                    self.rate_limit
                }

                fn set_rate_limit(&mut self, rate_limit: RateLimit) {
                    self.rate_limit = rate_limit;
                }
            }
        )+
    };
}

/// The response returned by [`Client::get_events`](crate::Client::get_events).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetEventsResponse {
    /// The API plan's current rate limit and status
    #[serde(skip)]
    pub rate_limit: RateLimit,

    /// Whether Adult entries can be included
    #[serde(deserialize_with = "null_as_default")]
    pub adult: bool,

    /// The Date string
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,

    /// The Timezone used to calculate the Date's Events
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,

    /// The Date's Events
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<EventSummary>,

    /// Multi-day Events that start on Date
    #[serde(deserialize_with = "null_as_default")]
    pub multiday_starting: Vec<EventSummary>,

    /// Multi-day Events that are continuing their observance on Date
    #[serde(deserialize_with = "null_as_default")]
    pub multiday_ongoing: Vec<EventSummary>,
}

/// The response returned by [`Client::get_event_info`](crate::Client::get_event_info).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetEventInfoResponse {
    /// The API plan's current rate limit and status
    #[serde(skip)]
    pub rate_limit: RateLimit,

    /// The Event Info
    #[serde(deserialize_with = "null_as_default")]
    pub event: EventInfo,
}

/// The response returned by [`Client::search`](crate::Client::search).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// The API plan's current rate limit and status
    #[serde(skip)]
    pub rate_limit: RateLimit,

    /// The search query
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,

    /// Whether Adult entries can be included
    #[serde(deserialize_with = "null_as_default")]
    pub adult: bool,

    /// The found Events
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<EventSummary>,
}

impl_standard_response!(GetEventsResponse, GetEventInfoResponse, SearchResponse);

//! Request parameters for the three API operations

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Request parameters for [`Client::get_events`](crate::Client::get_events).
///
/// Every field is optional; `GetEventsRequest::default()` asks for today's
/// events in the API's default timezone without adult entries.
///
/// # Example
///
/// ```rust
/// use holiday_event_api::GetEventsRequest;
///
/// let request = GetEventsRequest::builder()
///     .date("7/16/1992")
///     .timezone("America/New_York")
///     .adult(true)
///     .build()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into))]
pub struct GetEventsRequest {
    /// Date to get the events for. Defaults to today.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub date: Option<String>,

    /// Include events that may be unsafe for viewing at work or by children.
    pub adult: bool,

    /// IANA Time Zone for calculating dates and times. Defaults to America/Chicago.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub timezone: Option<String>,
}

impl GetEventsRequest {
    /// Create a builder for this request.
    pub fn builder() -> GetEventsRequestBuilder {
        GetEventsRequestBuilder::default()
    }
}

/// Request parameters for [`Client::get_event_info`](crate::Client::get_event_info).
///
/// `start` and `end` bound the years of the returned occurrences. Leaving
/// them unset (or zero) lets the API pick its defaults: two years prior and
/// three years ahead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into))]
pub struct GetEventInfoRequest {
    /// The ID of the requested Event.
    pub id: String,

    /// The starting range of returned occurrences.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub start: Option<i32>,

    /// The ending range of returned occurrences.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(into, strip_option))]
    pub end: Option<i32>,
}

impl GetEventInfoRequest {
    /// Create a request for a single event with the default occurrence range.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Create a builder for this request.
    pub fn builder() -> GetEventInfoRequestBuilder {
        GetEventInfoRequestBuilder::default()
    }
}

/// Request parameters for [`Client::search`](crate::Client::search).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into))]
pub struct SearchRequest {
    /// The search query. Must be at least 3 characters long.
    pub query: String,

    /// Include events that may be unsafe for viewing at work or by children.
    pub adult: bool,
}

impl SearchRequest {
    /// Create a search request that excludes adult entries.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            adult: false,
        }
    }

    /// Create a builder for this request.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }
}

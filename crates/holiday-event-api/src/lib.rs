//! # Holiday and Event API
//!
//! Rust client for the Holiday and Event API (Checkiday), reachable through
//! either of two API gateways:
//! - APILayer (`apikey` header)
//! - RapidAPI (`X-RapidAPI-Key` / `X-RapidAPI-Host` headers)
//!
//! Every call returns typed data together with the gateway's monthly
//! [`RateLimit`] quota, and can be cancelled or bounded by a deadline
//! through a [`RequestContext`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use holiday_event_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ApiProvider::ApiLayer, "<your API key>")?;
//!     let ctx = RequestContext::new();
//!
//!     let events = client.get_events(&ctx, &GetEventsRequest::default()).await?;
//!     println!("Today is {}!", events.events[0].name);
//!
//!     let info = client
//!         .get_event_info(&ctx, &GetEventInfoRequest::new(&events.events[0].id))
//!         .await?;
//!     println!("Hashtags: {:?}", info.event.hashtags);
//!
//!     println!(
//!         "Rate limit remaining: {}/{} (month)",
//!         info.rate_limit.remaining, info.rate_limit.limit
//!     );
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use context::RequestContext;
pub use error::{Error, Result};
pub use http::ApiProvider;
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod observability;
pub mod types;
pub mod validation;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use holiday_event_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ApiProvider, Client, ClientConfig, Error, RequestContext, Result,
        types::{
            EventInfo, EventSummary, GetEventInfoRequest, GetEventInfoResponse, GetEventsRequest,
            GetEventsResponse, RateLimit, SearchRequest, SearchResponse, StandardResponse,
        },
    };
}

/// Client version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Value of the `User-Agent` header sent with every request
pub const USER_AGENT: &str = concat!("HolidayApiRust/", env!("CARGO_PKG_VERSION"));

/// Value of the `X-Platform-Version` header: the compiler this crate was built with
pub const PLATFORM_VERSION: &str = env!("HOLIDAY_API_RUSTC_VERSION");

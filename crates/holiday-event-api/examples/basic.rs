//! Basic Holiday and Event API example
//!
//! Looks up today's events, fetches details for the first one and runs a
//! search.
//!
//! ## Prerequisites
//!
//! A FREE API key from <https://apilayer.com/marketplace/checkiday-api#pricing>
//! (or a RapidAPI key with `HOLIDAY_API_PROVIDER=rapidapi`).
//!
//! ## Usage
//!
//! ```bash
//! export HOLIDAY_API_PROVIDER=apilayer
//! export HOLIDAY_API_KEY=<your API key>
//! RUST_LOG=holiday_event_api=debug cargo run --example basic
//! ```

use std::time::Duration;

use holiday_event_api::{
    Client, ClientConfig, GetEventInfoRequest, GetEventsRequest, RequestContext, SearchRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for debugging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let client = match ClientConfig::from_env().and_then(Client::from_config) {
        Ok(client) => client,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let ctx = RequestContext::new().with_timeout(Duration::from_secs(30));

    // Get Events for a given Date
    let events = match client
        .get_events(
            &ctx,
            // These parameters are the defaults but can be specified:
            // date: Some("today"), timezone: Some("America/Chicago"), adult: false
            &GetEventsRequest::default(),
        )
        .await
    {
        Ok(events) => events,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let Some(event) = events.events.first() else {
        println!("No events today.");
        return Ok(());
    };
    println!(
        "Today is {}! Find more information at: {}.",
        event.name, event.url
    );
    println!(
        "Rate limit remaining: {}/{} (billing cycle).",
        events.rate_limit.remaining, events.rate_limit.limit
    );

    // Get Event Information
    // start and end can be set to calculate the range of occurrences
    let event_info = client
        .get_event_info(&ctx, &GetEventInfoRequest::new(&event.id))
        .await?;
    println!("The Event's hashtags are {:?}.", event_info.event.hashtags);

    // Search for Events
    let query = "pizza day";
    let search = client.search(&ctx, &SearchRequest::new(query)).await?;
    if let Some(first) = search.events.first() {
        println!(
            "Found {} events, including {}, that match the query \"{}\".",
            search.events.len(),
            first.name,
            query
        );
    }

    Ok(())
}

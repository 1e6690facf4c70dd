//! Integration tests for the three API operations using wiremock
//!
//! Every test runs against a local mock gateway loaded with recorded
//! responses from `tests/fixtures/responses`.

mod common;

use holiday_event_api::{
    ApiProvider, GetEventInfoRequest, GetEventsRequest, PLATFORM_VERSION, RateLimit,
    RequestContext, SearchRequest, USER_AGENT,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture(name: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "application/json")
        .set_body_string(common::load_response_fixture(name))
}

// ===== Request Headers =====

#[rstest]
#[case(ApiProvider::ApiLayer)]
#[case(ApiProvider::RapidApi)]
#[tokio::test]
async fn test_sends_identification_headers(#[case] provider: ApiProvider) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("events")))
        .and(header("user-agent", USER_AGENT))
        .and(header("x-platform-version", PLATFORM_VERSION))
        .respond_with(fixture("getEvents-default"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, provider);
    client
        .get_events(&RequestContext::new(), &GetEventsRequest::default())
        .await
        .expect("Request failed");

    mock_server.verify().await;
}

#[tokio::test]
async fn test_apilayer_auth_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("events")))
        .and(header("apikey", common::test_api_key().as_str()))
        .respond_with(fixture("getEvents-default"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::ApiLayer);
    client
        .get_events(&RequestContext::new(), &GetEventsRequest::default())
        .await
        .expect("Request failed");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-rapidapi-key").is_none());
    assert!(requests[0].headers.get("x-rapidapi-host").is_none());
}

#[tokio::test]
async fn test_rapidapi_auth_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("events")))
        .and(header("x-rapidapi-key", common::test_api_key().as_str()))
        .and(header("x-rapidapi-host", "checkiday.p.rapidapi.com"))
        .respond_with(fixture("getEvents-default"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::RapidApi);
    client
        .get_events(&RequestContext::new(), &GetEventsRequest::default())
        .await
        .expect("Request failed");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("apikey").is_none());
}

// ===== Rate Limits =====

#[rstest]
#[case(ApiProvider::ApiLayer, "X-RateLimit-Limit-Month", "X-RateLimit-Remaining-Month")]
#[case(ApiProvider::RapidApi, "X-RateLimit-Requests-Limit", "X-RateLimit-Requests-Remaining")]
#[tokio::test]
async fn test_reports_rate_limit(
    #[case] provider: ApiProvider,
    #[case] limit_header: &str,
    #[case] remaining_header: &str,
) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("events")))
        .respond_with(
            fixture("getEvents-default")
                .insert_header(limit_header, "100")
                .insert_header(remaining_header, "88"),
        )
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, provider);
    let result = client
        .get_events(&RequestContext::new(), &GetEventsRequest::default())
        .await
        .expect("Request failed");

    assert_eq!(
        result.rate_limit,
        RateLimit {
            limit: 100,
            remaining: 88,
        }
    );
    assert_eq!(result.rate_limit.used(), 12);
}

#[tokio::test]
async fn test_missing_rate_limit_headers_are_zero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("events")))
        .respond_with(
            fixture("getEvents-default")
                // Headers of the other gateway are ignored
                .insert_header("X-RateLimit-Requests-Limit", "100")
                .insert_header("X-RateLimit-Remaining-Month", "not a number"),
        )
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::ApiLayer);
    let result = client
        .get_events(&RequestContext::new(), &GetEventsRequest::default())
        .await
        .expect("Request failed");

    assert_eq!(result.rate_limit, RateLimit::default());
}

// ===== Decoding =====

/// Fixture JSON as the client is expected to decode it: `null` becomes the
/// field's empty value.
fn expected_json(name: &str) -> Value {
    fn normalize(value: Value) -> Value {
        match value {
            Value::Null => Value::from(0),
            Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
            Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, normalize(value)))
                    .collect(),
            ),
            other => other,
        }
    }

    normalize(serde_json::from_str(&common::load_response_fixture(name)).unwrap())
}

#[rstest]
#[case("getEvents-default")]
#[case("getEvents-parameters")]
#[tokio::test]
async fn test_get_events_decodes_every_field(#[case] fixture_name: &str) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("events")))
        .respond_with(fixture(fixture_name))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::ApiLayer);
    let result = client
        .get_events(&RequestContext::new(), &GetEventsRequest::default())
        .await
        .expect("Request failed");

    assert_eq!(serde_json::to_value(&result).unwrap(), expected_json(fixture_name));
}

#[tokio::test]
async fn test_get_event_info_decodes_every_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("event")))
        .respond_with(fixture("getEventInfo"))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::RapidApi);
    let result = client
        .get_event_info(
            &RequestContext::new(),
            &GetEventInfoRequest::new("f90b893ea04939d7456f30c54f68d7b4"),
        )
        .await
        .expect("Request failed");

    assert_eq!(serde_json::to_value(&result).unwrap(), expected_json("getEventInfo"));
}

#[rstest]
#[case("search-default")]
#[case("search-parameters")]
#[tokio::test]
async fn test_search_decodes_every_field(#[case] fixture_name: &str) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("search")))
        .respond_with(fixture(fixture_name))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::ApiLayer);
    let result = client
        .search(&RequestContext::new(), &SearchRequest::new("zucchini"))
        .await
        .expect("Request failed");

    assert_eq!(serde_json::to_value(&result).unwrap(), expected_json(fixture_name));
}

// ===== getEvents =====

#[tokio::test]
async fn test_get_events_with_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("events")))
        .and(query_param("adult", "false"))
        .and(query_param_is_missing("timezone"))
        .and(query_param_is_missing("date"))
        .respond_with(fixture("getEvents-default"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::ApiLayer);
    let result = client
        .get_events(&RequestContext::new(), &GetEventsRequest::default())
        .await
        .expect("Request failed");

    assert!(!result.adult);
    assert_eq!(result.timezone, "America/Chicago");
    assert_eq!(result.events.len(), 2);
    assert_eq!(result.multiday_starting.len(), 1);
    assert_eq!(result.multiday_ongoing.len(), 2);

    let event = &result.events[0];
    assert_eq!(event.id, "b80630ae75c35f34c0526173dd999cfc");
    assert_eq!(event.name, "Cinco de Mayo");
    assert_eq!(
        event.url,
        "https://www.checkiday.com/b80630ae75c35f34c0526173dd999cfc/cinco-de-mayo"
    );

    mock_server.verify().await;
}

#[tokio::test]
async fn test_get_events_with_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("events")))
        .and(query_param("adult", "true"))
        .and(query_param("timezone", "America/New_York"))
        .and(query_param("date", "7/16/1992"))
        .respond_with(fixture("getEvents-parameters"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = GetEventsRequest::builder()
        .date("7/16/1992")
        .adult(true)
        .timezone("America/New_York")
        .build()
        .expect("Failed to build request");

    let client = common::client_for(&mock_server, ApiProvider::ApiLayer);
    let result = client
        .get_events(&RequestContext::new(), &request)
        .await
        .expect("Request failed");

    assert!(result.adult);
    assert_eq!(result.timezone, "America/New_York");
    assert_eq!(result.events.len(), 2);
    assert_eq!(result.multiday_starting.len(), 0);
    assert_eq!(result.multiday_ongoing.len(), 1);

    let event = &result.events[0];
    assert_eq!(event.id, "6ebb6fd5e483de2fde33969a6c398472");
    assert_eq!(event.name, "Get to Know Your Customers Day");
    assert_eq!(
        event.url,
        "https://www.checkiday.com/6ebb6fd5e483de2fde33969a6c398472/get-to-know-your-customers-day"
    );
}

// ===== getEventInfo =====

#[tokio::test]
async fn test_get_event_info_with_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("event")))
        .and(query_param("id", "f90b893ea04939d7456f30c54f68d7b4"))
        .and(query_param_is_missing("start"))
        .and(query_param_is_missing("end"))
        .respond_with(fixture("getEventInfo"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::RapidApi);
    let result = client
        .get_event_info(
            &RequestContext::new(),
            &GetEventInfoRequest::new("f90b893ea04939d7456f30c54f68d7b4"),
        )
        .await
        .expect("Request failed");

    let event = &result.event;
    assert_eq!(event.id(), "f90b893ea04939d7456f30c54f68d7b4");
    assert_eq!(event.hashtags.len(), 2);
    assert_eq!(event.alternate_names[0].name, "World Cat Day");
    assert_eq!(event.alternate_names[0].last_year, 0);
    assert_eq!(event.patterns[0].observed, "annually on August 8th");
    assert_eq!(event.founders[0].name, "International Fund for Animal Welfare");
    assert!(event.image.large.ends_with("kittens-555822.jpg"));
    assert!(event.description.html.starts_with("<p>"));
    assert_eq!(
        event.sources,
        vec!["https://www.source1.com", "https://www.source2.com"]
    );
    assert_eq!(event.how_to_observe.text, "Spend time with a cat.");
    assert_eq!(
        event.patterns[0].observed_markdown,
        "annually on [August 8th](https://www.checkiday.com/8/8)"
    );
    assert_eq!(event.patterns[0].length, 1);
}

#[tokio::test]
async fn test_get_event_info_with_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("event")))
        .and(query_param("id", "f90b893ea04939d7456f30c54f68d7b4"))
        .and(query_param("start", "2002"))
        .and(query_param("end", "2003"))
        .respond_with(fixture("getEventInfo-parameters"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = GetEventInfoRequest::builder()
        .id("f90b893ea04939d7456f30c54f68d7b4")
        .start(2002)
        .end(2003)
        .build()
        .expect("Failed to build request");

    let client = common::client_for(&mock_server, ApiProvider::ApiLayer);
    let result = client
        .get_event_info(&RequestContext::new(), &request)
        .await
        .expect("Request failed");

    let occurrences = &result.event.occurrences;
    assert_eq!(occurrences.len(), 2);
    assert_eq!(occurrences[0].date, "08/08/2002");
    assert_eq!(occurrences[0].length, 1);
}

#[tokio::test]
async fn test_get_event_info_invalid_event() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("event")))
        .and(query_param("id", "hi"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"Event not found."}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::ApiLayer);
    let err = client
        .get_event_info(&RequestContext::new(), &GetEventInfoRequest::new("hi"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Event not found.");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

// ===== search =====

#[tokio::test]
async fn test_search_with_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("search")))
        .and(query_param("query", "zucchini"))
        .and(query_param("adult", "false"))
        .respond_with(fixture("search-default"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::ApiLayer);
    let result = client
        .search(&RequestContext::new(), &SearchRequest::new("zucchini"))
        .await
        .expect("Request failed");

    assert_eq!(result.query, "zucchini");
    assert!(!result.adult);
    assert_eq!(result.events.len(), 3);

    let event = &result.events[0];
    assert_eq!(event.id, "cc81cbd8730098456f85f69798cbc867");
    assert_eq!(event.name, "National Zucchini Bread Day");
    assert_eq!(
        event.url,
        "https://www.checkiday.com/cc81cbd8730098456f85f69798cbc867/national-zucchini-bread-day"
    );
}

#[tokio::test]
async fn test_search_with_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("search")))
        .and(query_param("query", "porch day"))
        .and(query_param("adult", "true"))
        .respond_with(fixture("search-parameters"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = SearchRequest::builder()
        .query("porch day")
        .adult(true)
        .build()
        .expect("Failed to build request");

    let client = common::client_for(&mock_server, ApiProvider::RapidApi);
    let result = client
        .search(&RequestContext::new(), &request)
        .await
        .expect("Request failed");

    assert_eq!(result.query, "porch day");
    assert!(result.adult);
    assert_eq!(result.events.len(), 1);

    let event = &result.events[0];
    assert_eq!(event.id, "61363236f06e4eb8e4e14e5925c2503d");
    assert_eq!(event.name, "Sneak Some Zucchini Onto Your Neighbor's Porch Day");
    assert_eq!(
        event.url,
        "https://www.checkiday.com/61363236f06e4eb8e4e14e5925c2503d/sneak-some-zucchini-onto-your-neighbors-porch-day"
    );
}

#[tokio::test]
async fn test_search_short_query_error_is_passed_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("search")))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"error":"Please enter a longer search term."}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::ApiLayer);
    let err = client
        .search(&RequestContext::new(), &SearchRequest::new("a"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Please enter a longer search term.");
}

// ===== Concurrency =====

#[tokio::test]
async fn test_shared_client_serves_concurrent_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(common::api_path("events")))
        .respond_with(fixture("getEvents-default"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(common::api_path("event")))
        .respond_with(fixture("getEventInfo"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(common::api_path("search")))
        .respond_with(fixture("search-default"))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server, ApiProvider::ApiLayer);
    let ctx = RequestContext::new();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let client = client.clone();
        let ctx = ctx.clone();
        handles.push(tokio::spawn(async move {
            let events_request = GetEventsRequest::default();
            let info_request = GetEventInfoRequest::new("f90b893ea04939d7456f30c54f68d7b4");
            let search_request = SearchRequest::new("zucchini");
            let (events, info, search) = tokio::join!(
                client.get_events(&ctx, &events_request),
                client.get_event_info(&ctx, &info_request),
                client.search(&ctx, &search_request),
            );
            (events.is_ok(), info.is_ok(), search.is_ok())
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), (true, true, true));
    }

    assert_eq!(mock_server.received_requests().await.unwrap().len(), 12);
}

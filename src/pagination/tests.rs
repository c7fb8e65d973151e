//! Tests for the pagination module

use super::*;
use crate::error::Error;
use crate::http::testing::MockTransport;
use crate::params::ParamSet;
use crate::resource::{Instance, ResourceList};
use crate::template::Solution;
use crate::test_support::{legacy_page, meta_page, version, Widget, WidgetFilters, BASE_URL};
use futures::StreamExt;
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use test_case::test_case;

fn widgets(transport: &MockTransport) -> ResourceList<Widget> {
    ResourceList::new(version(transport), Solution::new().with("shopSid", "SH1")).unwrap()
}

fn sids(records: &[Instance<Widget>]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.sid.clone().unwrap_or_default())
        .collect()
}

const NEXT_2: &str = "/v1/Shops/SH1/Widgets?PageSize=2&Page=1&PageToken=PA1";
const NEXT_3: &str = "/v1/Shops/SH1/Widgets?PageSize=2&Page=2&PageToken=PA2";

// ============================================================================
// Read Limits
// ============================================================================

#[test_case(None, None, None, None ; "nothing given")]
#[test_case(Some(10), None, Some(10), Some(1) ; "limit only")]
#[test_case(None, Some(20), Some(20), None ; "page size only")]
#[test_case(Some(100), Some(20), Some(20), Some(5) ; "page size below limit")]
#[test_case(Some(15), Some(20), Some(15), Some(1) ; "limit below page size")]
#[test_case(Some(25), Some(10), Some(10), Some(3) ; "partial last page")]
#[test_case(Some(5000), None, Some(5000), Some(1) ; "page size not capped")]
#[test_case(Some(0), Some(20), None, Some(0) ; "zero limit")]
#[test_case(Some(10), Some(0), Some(10), Some(1) ; "zero page size")]
fn test_read_limits(
    limit: Option<u64>,
    page_size: Option<u64>,
    expected_size: Option<u64>,
    expected_pages: Option<u64>,
) {
    let limits = ReadLimits::new(limit, page_size);
    assert_eq!(limits.limit, limit);
    assert_eq!(limits.page_size, expected_size);
    assert_eq!(limits.page_limit, expected_pages);
}

#[test]
fn test_page_options_params() {
    let options = PageOptions {
        page_size: Some(20),
        page_number: Some(2),
        page_token: Some("PT1".to_string()),
        filters: WidgetFilters {
            name: Some("bolt".to_string()),
        },
    };
    let params = options.to_params();
    let pairs: Vec<(&str, &str)> = params.iter().collect();

    assert_eq!(
        pairs,
        vec![
            ("Name", "bolt"),
            ("PageToken", "PT1"),
            ("Page", "2"),
            ("PageSize", "20")
        ]
    );
    assert!(PageOptions::<WidgetFilters>::default().to_params().is_empty());
}

#[test]
fn test_stream_state() {
    let mut state = StreamState::new(ReadLimits::new(Some(3), Some(2)));
    assert_eq!(state.current_page, 1);
    assert!(!state.done);
    assert!(!state.page_limit_reached());

    state.current_page = 2;
    state.delivered = 3;
    assert!(state.page_limit_reached());
    assert!(state.limit_reached());

    state.finish();
    assert!(state.done);
}

// ============================================================================
// Call Shapes
// ============================================================================

#[test]
fn test_each_args_bare_consumer() {
    let args: EachArgs<Widget, WidgetFilters> = EachArgs::consumer(|_, _| {});
    let (options, _, done) = args.resolve().unwrap();
    assert!(options.limit.is_none());
    assert!(done.is_none());
}

#[test]
fn test_each_args_missing_consumer() {
    let args: EachArgs<Widget, WidgetFilters> =
        EachArgs::options(EachOptions::new(ListOptions::new().limit(5)));
    let err = args.resolve().err().unwrap();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "Validation error: Callback function must be provided"
    );
}

#[tokio::test]
async fn test_each_args_callback_overrides_positional() {
    let transport = MockTransport::new();
    transport.push_json(200, legacy_page(&["WG1"], None));

    let hits = Arc::new(Mutex::new(Vec::new()));
    let from_options = hits.clone();
    let positional = hits.clone();

    let options = EachOptions::new(ListOptions::new()).callback(move |_, _| {
        from_options.lock().unwrap().push("options");
    });
    widgets(&transport)
        .each(EachArgs::with_options(options, move |_, _| {
            positional.lock().unwrap().push("positional");
        }))
        .await
        .unwrap();

    assert_eq!(*hits.lock().unwrap(), vec!["options"]);
}

// ============================================================================
// Page
// ============================================================================

#[tokio::test]
async fn test_page_metadata_legacy() {
    let transport = MockTransport::new();
    transport.push_json(200, legacy_page(&["WG1", "WG2"], Some(NEXT_2)));

    let page = widgets(&transport)
        .page(PageOptions::default())
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.page_number(), Some(0));
    assert_eq!(page.page_size(), Some(2));
    assert_eq!(
        page.next_page_url(),
        Some(format!("{BASE_URL}{NEXT_2}").as_str())
    );
    assert!(page.previous_page_url().is_none());
    assert_eq!(page.solution().get("shopSid"), Some("SH1"));
    assert_eq!(page.records()[1].solution().get("shopSid"), Some("SH1"));
}

#[tokio::test]
async fn test_page_metadata_meta() {
    let transport = MockTransport::new();
    let next = format!("{BASE_URL}/v1/Shops/SH1/Widgets?PageSize=50&Page=1&PageToken=PA1");
    transport.push_json(200, meta_page(&["WG1"], Some(&next)));

    let page = widgets(&transport)
        .page(PageOptions::default())
        .await
        .unwrap();

    assert_eq!(page.next_page_url(), Some(next.as_str()));
    assert_eq!(page.page_size(), Some(50));
    assert!(page.first_page_url().is_some());
}

#[tokio::test]
async fn test_get_instance_carries_page_solution() {
    let transport = MockTransport::new();
    transport.push_json(200, legacy_page(&["WG1"], None));

    let page = widgets(&transport)
        .page(PageOptions::default())
        .await
        .unwrap();
    let widget = page
        .get_instance(&serde_json::json!({"sid": "WG7", "name": "spare"}))
        .unwrap();

    assert_eq!(widget.sid.as_deref(), Some("WG7"));
    assert_eq!(widget.name.as_deref(), Some("spare"));
    assert_eq!(widget.solution().get("shopSid"), Some("SH1"));
    assert_eq!(widget.context().unwrap().uri(), "/Shops/SH1/Widgets/WG7");
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_page_twice_issues_two_requests() {
    let transport = MockTransport::new();
    transport
        .push_json(200, legacy_page(&["WG1"], Some(NEXT_2)))
        .push_json(200, legacy_page(&["WG9"], None));
    let list = widgets(&transport);

    let first = list.page(PageOptions::default()).await.unwrap();
    let second = list.page(PageOptions::default()).await.unwrap();

    assert_eq!(transport.request_count(), 2);
    assert_eq!(sids(first.records()), vec!["WG1"]);
    assert_eq!(sids(second.records()), vec!["WG9"]);
}

#[tokio::test]
async fn test_page_never_consults_limit() {
    let transport = MockTransport::new();
    transport.push_json(200, legacy_page(&["WG1", "WG2", "WG3"], Some(NEXT_2)));

    let page = widgets(&transport)
        .page(PageOptions {
            page_number: Some(4),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.len(), 3);
    let requests = transport.requests();
    assert_eq!(requests[0].params.get("Page"), Some("4"));
    assert_eq!(requests[0].params.get("PageSize"), None);
}

#[tokio::test]
async fn test_next_and_previous_page() {
    let transport = MockTransport::new();
    let mut second = legacy_page(&["WG3"], None);
    second["previous_page_uri"] = "/v1/Shops/SH1/Widgets?Page=0".into();
    transport
        .push_json(200, legacy_page(&["WG1", "WG2"], Some(NEXT_2)))
        .push_json(200, second)
        .push_json(200, legacy_page(&["WG1", "WG2"], Some(NEXT_2)));

    let list = widgets(&transport);
    let first = list.page(PageOptions::default()).await.unwrap();
    assert!(first.previous_page().await.unwrap().is_none());

    let next = first.next_page().await.unwrap().unwrap();
    assert_eq!(sids(next.records()), vec!["WG3"]);
    assert!(next.next_page().await.unwrap().is_none());

    let back = next.previous_page().await.unwrap().unwrap();
    assert_eq!(back.len(), 2);

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{BASE_URL}/v1/Shops/SH1/Widgets"),
            format!("{BASE_URL}{NEXT_2}"),
            format!("{BASE_URL}/v1/Shops/SH1/Widgets?Page=0"),
        ]
    );
}

#[tokio::test]
async fn test_get_page_by_url() {
    let transport = MockTransport::new();
    transport.push_json(200, meta_page(&["WG7"], None));

    let url = format!("{BASE_URL}/v1/Shops/SH1/Widgets?PageToken=PA7");
    let page = widgets(&transport).get_page(&url).await.unwrap();

    assert_eq!(sids(page.records()), vec!["WG7"]);
    assert_eq!(transport.requests()[0].url, url);
}

#[tokio::test]
async fn test_page_without_records_is_decode_error() {
    let transport = MockTransport::new();
    transport.push_json(200, serde_json::json!({"page": 0, "next_page_uri": null}));

    let err = widgets(&transport)
        .page(PageOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

// ============================================================================
// Streaming
// ============================================================================

#[tokio::test]
async fn test_limit_bounds_records_and_fetches() {
    let transport = MockTransport::new();
    transport
        .push_json(200, legacy_page(&["WG1", "WG2"], Some(NEXT_2)))
        .push_json(200, legacy_page(&["WG3", "WG4"], Some(NEXT_3)))
        .push_json(
            200,
            legacy_page(&["WG5", "WG6"], Some("/v1/Shops/SH1/Widgets?Page=3")),
        );

    let records = widgets(&transport)
        .list(ListOptions::new().limit(5).page_size(2))
        .await
        .unwrap();

    assert_eq!(sids(&records), vec!["WG1", "WG2", "WG3", "WG4", "WG5"]);
    assert_eq!(transport.request_count(), 3);
    assert_eq!(transport.requests()[0].params.get("PageSize"), Some("2"));
}

#[tokio::test]
async fn test_limit_caps_oversized_page() {
    let transport = MockTransport::new();
    transport.push_json(
        200,
        legacy_page(&["WG1", "WG2", "WG3", "WG4", "WG5"], Some(NEXT_2)),
    );

    let records = widgets(&transport)
        .list(ListOptions::new().limit(3))
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(transport.request_count(), 1);
    assert_eq!(transport.requests()[0].params.get("PageSize"), Some("3"));
}

#[tokio::test]
async fn test_limit_above_total() {
    let transport = MockTransport::new();
    transport
        .push_json(200, legacy_page(&["WG1", "WG2"], Some(NEXT_2)))
        .push_json(200, legacy_page(&["WG3"], None));

    let records = widgets(&transport)
        .list(ListOptions::new().limit(10).page_size(2))
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_unbounded_walks_all_pages_in_order() {
    let transport = MockTransport::new();
    transport
        .push_json(200, legacy_page(&["WG1", "WG2"], Some(NEXT_2)))
        .push_json(200, legacy_page(&["WG3", "WG4"], Some(NEXT_3)))
        .push_json(200, legacy_page(&["WG5"], None));

    let records = widgets(&transport)
        .list(ListOptions::new())
        .await
        .unwrap();

    assert_eq!(sids(&records), vec!["WG1", "WG2", "WG3", "WG4", "WG5"]);
    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{BASE_URL}/v1/Shops/SH1/Widgets"),
            format!("{BASE_URL}{NEXT_2}"),
            format!("{BASE_URL}{NEXT_3}"),
        ]
    );
    assert!(transport.requests()[0].params.is_empty());
}

#[tokio::test]
async fn test_meta_pagination_follows_next_page_url() {
    let transport = MockTransport::new();
    let next = format!("{BASE_URL}/v1/Shops/SH1/Widgets?PageSize=50&Page=1&PageToken=PA1");
    transport
        .push_json(200, meta_page(&["WG1"], Some(&next)))
        .push_json(200, meta_page(&["WG2"], None));

    let records = widgets(&transport)
        .list(ListOptions::new())
        .await
        .unwrap();

    assert_eq!(sids(&records), vec!["WG1", "WG2"]);
    assert_eq!(transport.requests()[1].url, next);
}

#[tokio::test]
async fn test_single_record_single_request() {
    let transport = MockTransport::new();
    transport.push_json(200, legacy_page(&["WG1"], None));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    widgets(&transport)
        .each(EachArgs::consumer(move |record: Instance<Widget>, _| {
            sink.lock().unwrap().push(record.sid.clone());
        }))
        .await
        .unwrap();

    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_consumer_stop_ends_stream() {
    let transport = MockTransport::new();
    transport
        .push_json(200, legacy_page(&["WG1", "WG2"], Some(NEXT_2)))
        .push_json(200, legacy_page(&["WG3", "WG4"], Some(NEXT_3)))
        .push_json(200, legacy_page(&["WG5", "WG6"], None));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    widgets(&transport)
        .each(EachArgs::consumer(move |record: Instance<Widget>, control| {
            let mut seen = sink.lock().unwrap();
            seen.push(record.sid.clone().unwrap_or_default());
            if seen.len() == 3 {
                control.stop();
            }
        }))
        .await
        .unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["WG1", "WG2", "WG3"]);
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_failed_page_discards_partial_list() {
    let transport = MockTransport::new();
    transport
        .push_json(200, legacy_page(&["WG1", "WG2"], Some(NEXT_2)))
        .push_json(500, serde_json::json!({"message": "Internal error", "code": 20500}))
        .push_json(200, legacy_page(&["WG5"], None));

    let err = widgets(&transport)
        .list(ListOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_failure_reported_once_through_done() {
    let transport = MockTransport::new();
    transport
        .push_json(200, legacy_page(&["WG1"], Some(NEXT_2)))
        .push_failure("connection reset");

    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let sink = outcomes.clone();
    let delivered = Arc::new(Mutex::new(0));
    let counter = delivered.clone();

    let options = EachOptions::new(ListOptions::new()).done(move |err| {
        sink.lock().unwrap().push(err.map(ToString::to_string));
    });
    let result = widgets(&transport)
        .each(EachArgs::with_options(options, move |_, _| {
            *counter.lock().unwrap() += 1;
        }))
        .await;

    assert!(result.unwrap_err().is_transport());
    assert_eq!(*delivered.lock().unwrap(), 1);
    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].as_deref().unwrap().contains("connection reset"));
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_zero_limit_fetches_once_delivers_nothing() {
    let transport = MockTransport::new();
    transport.push_json(200, legacy_page(&["WG1", "WG2"], Some(NEXT_2)));

    let records = widgets(&transport)
        .list(ListOptions::new().limit(0).page_size(20))
        .await
        .unwrap();

    assert!(records.is_empty());
    assert_eq!(transport.request_count(), 1);
    assert_eq!(transport.requests()[0].params.get("PageSize"), None);
}

#[tokio::test]
async fn test_filters_sent_on_first_page_only() {
    let transport = MockTransport::new();
    transport
        .push_json(200, legacy_page(&["WG1"], Some(NEXT_2)))
        .push_json(200, legacy_page(&["WG2"], None));

    let options = ListOptions::new().filters(WidgetFilters {
        name: Some("bolt".to_string()),
    });
    widgets(&transport).list(options).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].params.get("Name"), Some("bolt"));
    assert!(requests[1].params.is_empty());
}

#[tokio::test]
async fn test_each_with_validates_synchronously() {
    let transport = MockTransport::new();

    let result = widgets(&transport).each_with(EachArgs::options(EachOptions::default()));

    assert!(result.err().unwrap().is_validation());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_each_missing_consumer_fails_before_any_request() {
    let transport = MockTransport::new();

    let err = widgets(&transport)
        .each(EachArgs::options(EachOptions::default()))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_each_with_reports_success_through_done() {
    let transport = MockTransport::new();
    transport.push_json(200, legacy_page(&["WG1", "WG2"], None));

    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let sink = outcomes.clone();
    let options = EachOptions::new(ListOptions::new())
        .callback(|_, _| {})
        .done(move |err| sink.lock().unwrap().push(err.is_none()));

    let future = widgets(&transport)
        .each_with(EachArgs::options(options))
        .unwrap();
    assert_eq!(transport.request_count(), 0);

    future.await;
    assert_eq!(*outcomes.lock().unwrap(), vec![true]);
}

#[tokio::test]
async fn test_stream_yields_in_order() {
    let transport = MockTransport::new();
    transport
        .push_json(200, legacy_page(&["WG1", "WG2"], Some(NEXT_2)))
        .push_json(200, legacy_page(&["WG3"], None));

    let records: Vec<_> = widgets(&transport)
        .stream(ListOptions::new())
        .collect()
        .await;

    let sids: Vec<String> = records
        .into_iter()
        .map(|r| r.unwrap().sid.clone().unwrap_or_default())
        .collect();
    assert_eq!(sids, vec!["WG1", "WG2", "WG3"]);
}

#[tokio::test]
async fn test_dropping_stream_stops_fetching() {
    let transport = MockTransport::new();
    transport
        .push_json(200, legacy_page(&["WG1", "WG2"], Some(NEXT_2)))
        .push_json(200, legacy_page(&["WG3"], None));

    let mut stream = widgets(&transport).stream(ListOptions::new());
    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first.sid.as_deref(), Some("WG1"));
    drop(stream);

    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_stream_ends_after_error() {
    let transport = MockTransport::new();
    transport.push_json(403, serde_json::json!({"message": "Forbidden"}));

    let mut stream = widgets(&transport).stream(ListOptions::new().limit(10));
    assert_eq!(stream.next().await.unwrap().unwrap_err().status(), Some(403));
    assert!(stream.next().await.is_none());
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_stream_is_lazy() {
    let transport = MockTransport::new();
    let _stream = widgets(&transport).stream(ListOptions::new());
    assert_eq!(transport.request_count(), 0);
}

/// Integration tests for the application layer
mod test_utilities;

use nvd_query::prelude::*;
use serde_json::json;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use test_utilities::mocks::*;

fn use_case(
    transport: &MockNvdTransport,
    pacer: &MockRequestPacer,
    reporter: &MockProgressReporter,
    options: &ClientOptions,
) -> SearchNvdUseCase<MockNvdTransport, MockRequestPacer, MockProgressReporter> {
    SearchNvdUseCase::new(transport.clone(), pacer.clone(), reporter.clone(), options)
}

fn keyword_search(limit: i64) -> CveSearchQuery {
    CveSearchQuery {
        keyword_search: Some("openssl".to_string()),
        limit,
        ..CveSearchQuery::default()
    }
}

#[test]
fn test_multi_page_cve_search_happy_path() {
    let transport = MockNvdTransport::new()
        .with_page(cve_page(0, 2000, 5000, 2000))
        .with_page(cve_page(2000, 2000, 5000, 2000))
        .with_page(cve_page(4000, 2000, 5000, 1000));
    let pacer = MockRequestPacer::new();
    let reporter = MockProgressReporter::new();

    let response = use_case(&transport, &pacer, &reporter, &ClientOptions::default())
        .search_cves(&keyword_search(4500))
        .unwrap();

    assert_eq!(response.record_count, 4500);
    assert_eq!(response.pages_fetched, 3);
    assert_eq!(response.records().len(), 4500);
    assert_eq!(response.records()[0]["cve"]["id"], "CVE-2024-00000");
    assert_eq!(response.records()[4499]["cve"]["id"], "CVE-2024-04499");
    // Metadata describes the first page, not the merged result
    assert_eq!(response.document["totalResults"], 5000);
    assert_eq!(response.document["startIndex"], 0);
    assert_eq!(response.document["format"], "NVD_CVE");

    let requests = transport.get_requests();
    assert_eq!(requests.len(), 3);
    assert!(!requests[0].contains("startIndex"));
    assert!(requests[1].contains("startIndex=2000"));
    assert!(requests[2].contains("startIndex=4000"));
    assert!(requests.iter().all(|r| r.contains("keywordSearch=openssl")));
    assert!(requests.iter().all(|r| r.contains("resultsPerPage=2000")));

    assert_eq!(pacer.get_pauses(), vec![Duration::from_secs(6); 3]);
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Completed:")));
}

#[test]
fn test_small_limit_issues_single_request() {
    let transport = MockNvdTransport::new().with_page(cve_page(0, 20, 900, 20));
    let pacer = MockRequestPacer::new();
    let reporter = MockProgressReporter::new();

    let response = use_case(&transport, &pacer, &reporter, &ClientOptions::default())
        .search_cves(&keyword_search(20))
        .unwrap();

    assert_eq!(response.record_count, 20);
    assert_eq!(transport.request_count(), 1);
    assert!(transport.get_requests()[0].contains("resultsPerPage=20"));
    assert_eq!(pacer.pause_count(), 1);
    assert_eq!(reporter.message_count(), 0);
}

#[test]
fn test_get_cve_sends_api_key_and_custom_delay() {
    let transport = MockNvdTransport::new().with_page(cve_page(0, 1, 1, 1));
    let pacer = MockRequestPacer::new();
    let reporter = MockProgressReporter::new();
    let options = ClientOptions::new(Some("secret".to_string()), Some(0.6), None).unwrap();

    use_case(&transport, &pacer, &reporter, &options)
        .get_cve("CVE-2024-00000")
        .unwrap();

    assert_eq!(
        transport.get_requests()[0],
        "https://services.nvd.nist.gov/rest/json/cves/2.0?cveId=CVE-2024-00000&resultsPerPage=2000"
    );
    assert_eq!(transport.header_of(0, "apiKey").as_deref(), Some("secret"));
    assert_eq!(
        transport.header_of(0, "content-type").as_deref(),
        Some("application/json")
    );
    assert_eq!(pacer.get_pauses(), vec![Duration::from_millis(600)]);
}

#[test]
fn test_cpe_search_merges_products() {
    let transport = MockNvdTransport::new()
        .with_page(cpe_page(0, 2000, 2600, 2000))
        .with_page(cpe_page(2000, 2000, 2600, 600));
    let pacer = MockRequestPacer::new();
    let reporter = MockProgressReporter::new();
    let query = CpeSearchQuery {
        cpe_match_string: Some("cpe:2.3:a:vendor:product".to_string()),
        limit: 3000,
        ..CpeSearchQuery::default()
    };

    let response = use_case(&transport, &pacer, &reporter, &ClientOptions::default())
        .search_cpes(&query)
        .unwrap();

    assert_eq!(response.target, SearchTarget::Cpes);
    assert_eq!(response.record_count, 2600);
    let requests = transport.get_requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].starts_with("https://services.nvd.nist.gov/rest/json/cpes/2.0?"));
    assert!(requests[0].contains("cpeMatchString=cpe%3A2.3%3Aa%3Avendor%3Aproduct"));
}

#[test]
fn test_invalid_query_sends_no_request() {
    let transport = MockNvdTransport::new();
    let pacer = MockRequestPacer::new();
    let reporter = MockProgressReporter::new();
    let query = CveSearchQuery {
        pub_start_date: Some("2024-01-01 00:00".to_string()),
        ..CveSearchQuery::default()
    };

    let err = use_case(&transport, &pacer, &reporter, &ClientOptions::default())
        .search_cves(&query)
        .unwrap_err();

    assert_eq!(err.to_string(), "--pub-start and --pub-end must be used together");
    assert_eq!(transport.request_count(), 0);
    assert_eq!(pacer.pause_count(), 0);
}

#[test]
fn test_failure_on_follow_up_page_discards_partial_results() {
    let transport = MockNvdTransport::new()
        .with_page(cve_page(0, 2000, 6000, 2000))
        .with_status(503, "Service Unavailable");
    let pacer = MockRequestPacer::new();
    let reporter = MockProgressReporter::new();

    let err = use_case(&transport, &pacer, &reporter, &ClientOptions::default())
        .search_cves(&keyword_search(6000))
        .unwrap_err();

    match err.downcast_ref::<NvdError>() {
        Some(NvdError::HttpStatus { status, body }) => {
            assert_eq!(*status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(transport.request_count(), 2);
    assert_eq!(pacer.pause_count(), 1);
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Error:") && m.contains("startIndex=2000")));
}

#[test]
fn test_transport_failure_on_second_page() {
    let transport = MockNvdTransport::new()
        .with_page(cve_page(0, 2000, 4500, 2000))
        .with_failure("connection reset by peer");
    let pacer = MockRequestPacer::new();
    let reporter = MockProgressReporter::new();

    let err = use_case(&transport, &pacer, &reporter, &ClientOptions::default())
        .search_cves(&keyword_search(4500))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<NvdError>(),
        Some(NvdError::Transport { details }) if details == "connection reset by peer"
    ));
    assert_eq!(transport.request_count(), 2);
    assert!(transport.get_requests()[1].contains("startIndex=2000"));
    assert_eq!(pacer.pause_count(), 1);
}

#[test]
fn test_api_message_is_rejection() {
    let transport = MockNvdTransport::new().with_page(json!({
        "message": "Invalid apiKey",
        "totalResults": 0
    }));
    let pacer = MockRequestPacer::new();
    let reporter = MockProgressReporter::new();

    let err = use_case(&transport, &pacer, &reporter, &ClientOptions::default())
        .get_cve("CVE-2024-00001")
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<NvdError>(),
        Some(NvdError::ApiRejected { message }) if message == "Invalid apiKey"
    ));
    assert_eq!(pacer.pause_count(), 0);
}

#[test]
fn test_pre_set_cancel_flag_stops_before_first_request() {
    let transport = MockNvdTransport::new();
    let pacer = MockRequestPacer::new();
    let reporter = MockProgressReporter::new();
    let cancel = Arc::new(AtomicBool::new(true));

    let err = use_case(&transport, &pacer, &reporter, &ClientOptions::default())
        .with_cancel_flag(cancel)
        .search_cves(&keyword_search(5000))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<NvdError>(),
        Some(NvdError::Cancelled { start_index: 0 })
    ));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_merged_result_as_jsonl_file() {
    let transport = MockNvdTransport::new()
        .with_page(cve_page(0, 2000, 2003, 2000))
        .with_page(cve_page(2000, 2000, 2003, 3));
    let pacer = MockRequestPacer::new();
    let reporter = MockProgressReporter::new();

    let response = use_case(&transport, &pacer, &reporter, &ClientOptions::default())
        .search_cves(&keyword_search(2003))
        .unwrap();

    let output = JsonLinesFormatter::new().format(&response).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cves.jsonl");
    FileSystemWriter::new(path.clone()).present(&output).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2003);
    assert_eq!(lines[0], r#"{"id":"CVE-2024-00000"}"#);
    assert_eq!(lines[2002], r#"{"id":"CVE-2024-02002"}"#);
}

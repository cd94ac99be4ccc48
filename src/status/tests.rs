//! Unit tests for the status module.

use super::*;

// ============================================================================
// Content kind classification
// ============================================================================

#[test]
fn test_classify_json_with_charset() {
    assert_eq!(
        ContentKind::classify(Some("application/json; charset=utf-8")),
        ContentKind::Json
    );
    assert_eq!(
        ContentKind::classify(Some("application/vnd.api+json")),
        ContentKind::Json
    );
}

#[test]
fn test_classify_feed_kinds() {
    assert_eq!(ContentKind::classify(Some("application/rss+xml")), ContentKind::Feed);
    assert_eq!(ContentKind::classify(Some("text/xml")), ContentKind::Feed);
    assert_eq!(ContentKind::classify(Some("application/atom+xml")), ContentKind::Feed);
}

#[test]
fn test_classify_defaults_to_html() {
    assert_eq!(ContentKind::classify(Some("text/html")), ContentKind::Html);
    assert_eq!(ContentKind::classify(Some("text/plain")), ContentKind::Html);
    assert_eq!(ContentKind::classify(None), ContentKind::Html);
}

// ============================================================================
// JSON normalizer
// ============================================================================

#[test]
fn test_json_operational_with_description() {
    let body = r#"{"status": "operational", "status_description": "All systems go"}"#;
    assert_eq!(
        normalize_json(body),
        StatusResult::new(Severity::Ok, "All systems go")
    );
}

#[test]
fn test_json_major_outage() {
    let body = r#"{"status": "major", "status_description": "Critical outage"}"#;
    assert_eq!(
        normalize_json(body),
        StatusResult::new(Severity::Major, "Critical outage")
    );
}

#[test]
fn test_json_missing_description_uses_fallback() {
    let result = normalize_json(r#"{"status": "degraded_performance"}"#);
    assert_eq!(result.level, Severity::Warning);
    assert_eq!(result.message, MSG_STATUS_RECEIVED);

    let result = normalize_json(r#"{"status": "ok", "status_description": ""}"#);
    assert_eq!(result.message, MSG_STATUS_RECEIVED);
}

#[test]
fn test_json_missing_status() {
    let result = normalize_json(r#"{"page": {"name": "Example"}}"#);
    assert_eq!(result, StatusResult::new(Severity::Unknown, MSG_UNKNOWN_JSON));
}

#[test]
fn test_json_malformed_body() {
    assert_eq!(normalize_json("not json").level, Severity::Unknown);
    assert_eq!(normalize_json("[1, 2, 3]").message, MSG_UNKNOWN_JSON);
    assert_eq!(normalize_json(r#"{"status": 3}"#).message, MSG_UNKNOWN_JSON);
}

#[test]
fn test_json_unrecognized_vendor_status() {
    let result = normalize_json(r#"{"status": "under_maintenance"}"#);
    assert_eq!(result.level, Severity::Unknown);
    assert_eq!(result.message, MSG_STATUS_RECEIVED);
}

#[test]
fn test_json_payload_variant() {
    let payload = SourcePayload::classify(
        ContentKind::Json,
        r#"{"status": "minor", "status_description": "Slow", "extra": true}"#,
    );
    assert_eq!(
        payload,
        SourcePayload::Json {
            status: "minor".to_string(),
            description: Some("Slow".to_string()),
        }
    );
}

// ============================================================================
// Feed normalizer
// ============================================================================

#[test]
fn test_feed_with_item_is_incident() {
    let body = "<rss><channel><item><title>Outage</title></item></channel></rss>";
    assert_eq!(
        normalize_feed(body),
        StatusResult::new(Severity::Warning, MSG_RSS_INCIDENT)
    );
}

#[test]
fn test_feed_without_items_is_ok() {
    let body = "<rss><channel><title>Status</title></channel></rss>";
    assert_eq!(
        normalize_feed(body),
        StatusResult::new(Severity::Ok, MSG_NO_INCIDENTS)
    );
}

#[test]
fn test_feed_item_with_attributes() {
    let body = r#"<rss><channel><item id="1"></item></channel></rss>"#;
    assert_eq!(normalize_feed(body).level, Severity::Warning);
}

// ============================================================================
// HTML/text normalizer
// ============================================================================

#[test]
fn test_text_without_keywords() {
    let body = "<html><body><h1>All good here</h1></body></html>";
    assert_eq!(
        normalize_text(body),
        StatusResult::new(Severity::Ok, MSG_LOOKS_OPERATIONAL)
    );
}

#[test]
fn test_text_keywords_case_insensitive() {
    for body in [
        "<p>DEGRADED performance</p>",
        "Ongoing Incident",
        "partial outage in eu-west",
    ] {
        assert_eq!(
            normalize_text(body),
            StatusResult::new(Severity::Warning, MSG_POSSIBLE_DEGRADATION),
            "body: {}",
            body
        );
    }
}

#[test]
fn test_normalize_body_dispatch() {
    let json = normalize_body(Some("application/json"), r#"{"status":"down"}"#);
    assert_eq!(json.level, Severity::Major);

    let feed = normalize_body(Some("application/rss+xml"), "<item>");
    assert_eq!(feed.message, MSG_RSS_INCIDENT);

    // JSON-looking body served as HTML is scanned as text
    let html = normalize_body(Some("text/html"), r#"{"status":"down"}"#);
    assert_eq!(html.message, MSG_LOOKS_OPERATIONAL);
}

// ============================================================================
// StatusResult / errors
// ============================================================================

#[test]
fn test_unreachable_result() {
    let result = StatusResult::unreachable();
    assert_eq!(result.level, Severity::Unknown);
    assert_eq!(result.message, "Unreachable / offline");
}

#[test]
fn test_status_result_serde() {
    let result = StatusResult::new(Severity::Warning, "Possible degradation");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["level"], "warning");
    assert_eq!(json["message"], "Possible degradation");
}

#[test]
fn test_fetch_error_display() {
    assert_eq!(
        FetchError::Timeout(8000).to_string(),
        "request timeout after 8000ms"
    );
    assert_eq!(FetchError::HttpError(503).to_string(), "HTTP error: 503");
    assert_eq!(
        FetchError::ConnectionFailed("refused".to_string()).to_string(),
        "connection failed: refused"
    );
}

#[test]
fn test_default_fetch_timeout() {
    assert_eq!(FETCH_TIMEOUT, std::time::Duration::from_secs(8));
    assert_eq!(HttpStatusFetcher::new().timeout(), FETCH_TIMEOUT);
}

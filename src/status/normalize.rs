//! Normalization of status payloads into a [`StatusResult`].
//!
//! A response body is first classified into a [`SourcePayload`] according to
//! its declared content kind, then reduced to a severity and message. None of
//! these steps can fail; malformed input lands on a documented fallback.

use super::severity::{map_severity, Severity};
use super::StatusResult;
use serde::Deserialize;

pub const MSG_UNKNOWN_JSON: &str = "Unknown JSON format";
pub const MSG_STATUS_RECEIVED: &str = "Status received";
pub const MSG_RSS_INCIDENT: &str = "Recent RSS incident";
pub const MSG_NO_INCIDENTS: &str = "No recent incidents";
pub const MSG_POSSIBLE_DEGRADATION: &str = "Possible degradation";
pub const MSG_LOOKS_OPERATIONAL: &str = "Looks operational";

/// Marker whose presence in a feed body is read as an active incident.
const FEED_ITEM_MARKER: &str = "<item";

/// Keywords that flag a plain page as degraded.
const INCIDENT_KEYWORDS: &[&str] = &["degrad", "incident", "partial"];

/// Declared kind of a status response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    Feed,
    Html,
}

impl ContentKind {
    /// Classify a `Content-Type` value.
    ///
    /// Substring based so that parameters such as `; charset=utf-8` and
    /// vendor types like `application/vnd.api+json` still match.
    pub fn classify(content_type: Option<&str>) -> Self {
        let ct = content_type.unwrap_or_default().to_lowercase();
        if ct.contains("json") {
            ContentKind::Json
        } else if ct.contains("xml") || ct.contains("rss") || ct.contains("atom") {
            ContentKind::Feed
        } else {
            ContentKind::Html
        }
    }
}

/// JSON status document, e.g. `{"status": "operational", "status_description": "..."}`
#[derive(Debug, Deserialize)]
struct JsonStatusDocument {
    status: String,
    #[serde(default)]
    status_description: Option<String>,
}

/// A response body classified by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePayload {
    /// JSON object with a string `status`
    Json {
        status: String,
        description: Option<String>,
    },
    /// JSON content that does not carry a usable `status`
    UnrecognizedJson,
    /// Feed or XML document
    Feed { has_items: bool },
    /// Any other text, usually an HTML status page
    Text(String),
}

impl SourcePayload {
    pub fn classify(kind: ContentKind, body: &str) -> Self {
        match kind {
            ContentKind::Json => match serde_json::from_str::<JsonStatusDocument>(body) {
                Ok(doc) => SourcePayload::Json {
                    status: doc.status,
                    description: doc.status_description,
                },
                Err(_) => SourcePayload::UnrecognizedJson,
            },
            ContentKind::Feed => SourcePayload::Feed {
                has_items: body.contains(FEED_ITEM_MARKER),
            },
            ContentKind::Html => SourcePayload::Text(body.to_string()),
        }
    }

    /// Reduce the payload to a status.
    pub fn normalize(&self) -> StatusResult {
        match self {
            SourcePayload::Json {
                status,
                description,
            } => {
                let message = description
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .unwrap_or(MSG_STATUS_RECEIVED);
                StatusResult::new(map_severity(status), message)
            }
            SourcePayload::UnrecognizedJson => {
                StatusResult::new(Severity::Unknown, MSG_UNKNOWN_JSON)
            }
            SourcePayload::Feed { has_items: true } => {
                StatusResult::new(Severity::Warning, MSG_RSS_INCIDENT)
            }
            SourcePayload::Feed { has_items: false } => {
                StatusResult::new(Severity::Ok, MSG_NO_INCIDENTS)
            }
            SourcePayload::Text(body) => normalize_text(body),
        }
    }
}

/// Normalize a JSON status body.
pub fn normalize_json(body: &str) -> StatusResult {
    SourcePayload::classify(ContentKind::Json, body).normalize()
}

/// Normalize a feed body.
///
/// Any item in the feed counts as an active incident. Most real feeds always
/// carry items, so this reports `warning` far more often than a proper feed
/// reader would.
pub fn normalize_feed(body: &str) -> StatusResult {
    SourcePayload::classify(ContentKind::Feed, body).normalize()
}

/// Normalize a plain text or HTML body by keyword scan.
pub fn normalize_text(body: &str) -> StatusResult {
    let lower = body.to_lowercase();
    if INCIDENT_KEYWORDS.iter().any(|k| lower.contains(k)) {
        StatusResult::new(Severity::Warning, MSG_POSSIBLE_DEGRADATION)
    } else {
        StatusResult::new(Severity::Ok, MSG_LOOKS_OPERATIONAL)
    }
}

/// Classify and normalize a response body in one step.
pub fn normalize_body(content_type: Option<&str>, body: &str) -> StatusResult {
    SourcePayload::classify(ContentKind::classify(content_type), body).normalize()
}

//! Severity mapping for vendor status vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical severity of a status source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Major,
    Unknown,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Warning => "warning",
            Severity::Major => "major",
            Severity::Unknown => "unknown",
        }
    }

    /// Color bucket used when rendering this severity.
    pub fn color(&self) -> DisplayColor {
        display_color(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(Severity::Ok),
            "warning" => Ok(Severity::Warning),
            "major" => Ok(Severity::Major),
            "unknown" => Ok(Severity::Unknown),
            _ => Err(format!("Invalid severity: {}", s)),
        }
    }
}

const OK_TERMS: &[&str] = &["operational", "ok"];
const WARNING_TERMS: &[&str] = &["partial", "minor", "degrad"];
const MAJOR_TERMS: &[&str] = &["major", "down", "critical"];

/// Map a vendor status string onto the severity scale.
///
/// Matching is case-insensitive substring containment, checked tier by tier:
/// ok, then warning, then major. The first tier with a hit wins, so
/// `"operational, minor delays"` is `Ok`.
pub fn map_severity(vendor_status: &str) -> Severity {
    let status = vendor_status.to_lowercase();
    let contains_any = |terms: &[&str]| terms.iter().any(|t| status.contains(t));

    if contains_any(OK_TERMS) {
        Severity::Ok
    } else if contains_any(WARNING_TERMS) {
        Severity::Warning
    } else if contains_any(MAJOR_TERMS) {
        Severity::Major
    } else {
        Severity::Unknown
    }
}

/// Rendering bucket for a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Ok,
    Warn,
    Down,
    Unknown,
}

/// Map a status value to its display color.
///
/// Unlike [`map_severity`] this is an exact match on the lower-cased value and
/// has no bearing on notifications.
pub fn display_color(status: &str) -> DisplayColor {
    match status.to_lowercase().as_str() {
        "ok" | "operational" => DisplayColor::Ok,
        "warning" | "minor" | "degraded" => DisplayColor::Warn,
        "major" | "down" | "critical" => DisplayColor::Down,
        _ => DisplayColor::Unknown,
    }
}

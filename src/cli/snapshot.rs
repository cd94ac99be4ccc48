//! Snapshot command implementation

use crate::app::Dashboard;
use crate::cli::output::{format_snapshot, format_snapshot_json};
use crate::cli::{SnapshotDecodeArgs, SnapshotExportArgs};
use crate::snapshot::PublicSnapshot;

/// Handle `statuswatch snapshot export`
pub fn handle_snapshot_export(
    args: &SnapshotExportArgs,
    dashboard: &Dashboard,
) -> Result<String, Box<dyn std::error::Error>> {
    let snapshot = dashboard.snapshot();
    let encoded = if args.fragment {
        snapshot.url_fragment()?
    } else {
        snapshot.encode()?
    };
    Ok(encoded)
}

/// Handle `statuswatch snapshot decode`
pub fn handle_snapshot_decode(
    args: &SnapshotDecodeArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let snapshot = PublicSnapshot::decode(&args.payload)?;
    if args.json {
        Ok(format_snapshot_json(&snapshot))
    } else {
        Ok(format_snapshot(&snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::{source, test_dashboard};
    use crate::status::Severity;
    use std::path::PathBuf;

    #[test]
    fn test_export_then_decode_fragment() {
        let dashboard = test_dashboard(
            vec![source("payments", true), source("legacy", false)],
            "{}",
        );
        dashboard
            .events
            .record_history("payments", "Payments", Severity::Warning, "Slow");

        let fragment = handle_snapshot_export(
            &SnapshotExportArgs {
                fragment: true,
                config: PathBuf::from("unused.toml"),
            },
            &dashboard,
        )
        .unwrap();
        assert!(fragment.starts_with("#public="));

        let output = handle_snapshot_decode(&SnapshotDecodeArgs {
            payload: fragment,
            json: true,
        })
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["widgets"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["history"][0]["message"], "Slow");
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = handle_snapshot_decode(&SnapshotDecodeArgs {
            payload: "%%%".to_string(),
            json: false,
        });
        assert!(result.is_err());
    }
}

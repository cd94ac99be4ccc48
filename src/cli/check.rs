//! Check command implementation

use crate::app::Dashboard;
use crate::cli::output::{format_counts, format_widgets_json, format_widgets_table};
use crate::cli::CheckArgs;

/// Handle `statuswatch check`: one refresh pass, then print the widgets.
pub async fn handle_check(
    args: &CheckArgs,
    dashboard: &Dashboard,
) -> Result<String, Box<dyn std::error::Error>> {
    let orchestrator = &dashboard.orchestrator;

    let counts = match args.source {
        Some(ref id) => {
            orchestrator.refresh_one(id).await?;
            orchestrator.recompute_counts()
        }
        None => orchestrator.refresh_all().await.counts,
    };

    let widgets: Vec<_> = orchestrator
        .widgets()
        .into_iter()
        .filter(|w| args.source.as_ref().map_or(true, |id| &w.source.id == id))
        .collect();

    if args.json {
        Ok(format_widgets_json(&widgets, &counts))
    } else {
        Ok(format!(
            "{}\n{}",
            format_widgets_table(&widgets),
            format_counts(&counts)
        ))
    }
}

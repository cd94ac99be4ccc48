//! Sources command implementation

use crate::cli::output::{format_sources_json, format_sources_table};
use crate::cli::{SourcesAddArgs, SourcesListArgs, SourcesToggleArgs};
use crate::config::StatusSourceConfig;
use crate::registry::SourceRegistry;

/// Handle sources list command
pub fn handle_sources_list(
    args: &SourcesListArgs,
    registry: &SourceRegistry,
) -> Result<String, Box<dyn std::error::Error>> {
    let sources = if args.enabled {
        registry.get_enabled_sources()
    } else {
        registry.get_all_sources()
    };

    if args.json {
        Ok(format_sources_json(&sources))
    } else {
        Ok(format_sources_table(&sources))
    }
}

/// Handle sources add command
pub fn handle_sources_add(
    args: &SourcesAddArgs,
    registry: &SourceRegistry,
) -> Result<String, Box<dyn std::error::Error>> {
    let url = reqwest::Url::parse(&args.api).map_err(|e| format!("Invalid URL: {}", e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("Unsupported URL scheme: {}", url.scheme()).into());
    }

    let source = StatusSourceConfig {
        id: args.id.clone(),
        name: args.name.clone().unwrap_or_else(|| args.id.clone()),
        api: args.api.clone(),
        page: args.page.clone().unwrap_or_default(),
        enabled: true,
        env: args.env.clone(),
        category: args.category.clone(),
    };

    registry.add_custom_source(source)?;
    Ok(format!("Added source '{}' ({})", args.id, args.api))
}

/// Handle sources toggle command
pub fn handle_sources_toggle(
    args: &SourcesToggleArgs,
    registry: &SourceRegistry,
) -> Result<String, Box<dyn std::error::Error>> {
    let source = registry.toggle_source(&args.id)?;
    let state = if source.enabled { "enabled" } else { "disabled" };
    Ok(format!("Source '{}' {}", source.id, state))
}

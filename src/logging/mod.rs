//! Tracing setup.
//!
//! Builds the `EnvFilter` directives from [`LoggingConfig`] and installs a
//! pretty or JSON subscriber.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build filter directives string from LoggingConfig
///
/// The result has the form `"base_level,statuswatch::component=level,..."`.
/// Components are sorted so the output is stable.
///
/// # Examples
///
/// ```
/// use statuswatch::config::{LogFormat, LoggingConfig};
/// use statuswatch::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("refresh".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Pretty,
///     component_levels: Some(component_levels),
/// };
///
/// assert_eq!(build_filter_directives(&config), "info,statuswatch::refresh=debug");
/// ```
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        let mut components: Vec<_> = component_levels.iter().collect();
        components.sort();
        for (component, level) in components {
            filter_str.push_str(&format!(",statuswatch::{}={}", component, level));
        }
    }

    filter_str
}

/// Initialize tracing based on configuration.
///
/// `RUST_LOG`, when set, takes precedence over the configured levels.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = build_filter_directives(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}

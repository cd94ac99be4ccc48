//! Config command handlers

use crate::cli::ConfigInitArgs;
use std::fs;

const EXAMPLE_CONFIG: &str = include_str!("../../statuswatch.example.toml");

/// Handle `statuswatch config init` command
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<String, Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        )
        .into());
    }

    fs::write(&args.output, EXAMPLE_CONFIG)?;

    Ok(format!(
        "✓ Configuration file created: {}\n  Add your status sources under [[sources]].",
        args.output.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatusWatchConfig;

    #[test]
    fn test_config_init_creates_loadable_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("statuswatch.toml");

        let args = ConfigInitArgs {
            output: output_path.clone(),
            force: false,
        };
        handle_config_init(&args).unwrap();

        let config = StatusWatchConfig::load(Some(&output_path)).unwrap();
        config.validate().unwrap();
        assert!(!config.sources.is_empty());
    }

    #[test]
    fn test_config_init_no_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("statuswatch.toml");
        std::fs::write(&output_path, "existing").unwrap();

        let args = ConfigInitArgs {
            output: output_path.clone(),
            force: false,
        };

        assert!(handle_config_init(&args).is_err());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content, "existing");
    }

    #[test]
    fn test_config_init_force_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("statuswatch.toml");
        std::fs::write(&output_path, "old content").unwrap();

        let args = ConfigInitArgs {
            output: output_path.clone(),
            force: true,
        };
        handle_config_init(&args).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[server]"));
    }
}

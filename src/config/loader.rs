use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::Config;
use crate::utils::error::{BoxResult, RustocError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 2] = ["_toc.yml", "_toc.yaml"];

/// Load configuration from a config file, falling back to defaults.
///
/// When no explicit file is given, the source directory is searched for
/// the well-known names in `CONFIG_FILES`.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_file: Option<&PathBuf>,
) -> BoxResult<Config> {
    let config_path = match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(RustocError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
                .into());
            }
            Some(path.clone())
        }
        None => find_default_config_file(&source_dir),
    };

    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let content = fs::read_to_string(&path).map_err(|e| {
                RustocError::Config(format!(
                    "Failed to read configuration file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            parse_yaml_config(&content)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    validate_config(&config)?;
    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file in the source directory
fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.exists())
}

fn parse_yaml_config(content: &str) -> BoxResult<Config> {
    let config: Config = serde_yaml::from_str(content)
        .map_err(|e| RustocError::Config(format!("Failed to parse YAML configuration: {}", e)))?;
    Ok(config)
}

/// Reject level ranges the outline cannot represent
pub fn validate_config(config: &Config) -> BoxResult<()> {
    if !(2..=6).contains(&config.min_level) || !(2..=6).contains(&config.max_level) {
        return Err(RustocError::Config(format!(
            "Heading levels must be between 2 and 6 (got {}..{})",
            config.min_level, config.max_level
        ))
        .into());
    }
    if config.min_level > config.max_level {
        return Err(RustocError::Config(format!(
            "min_level ({}) cannot be greater than max_level ({})",
            config.min_level, config.max_level
        ))
        .into());
    }
    if config.container_id.trim().is_empty() {
        return Err(RustocError::Config("container_id cannot be empty".to_string()).into());
    }
    if !matches!(config.format.as_str(), "html" | "markdown" | "md" | "json") {
        return Err(RustocError::Config(format!(
            "Unknown output format '{}' (expected html, markdown or json)",
            config.format
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::OutlineMode;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.container_id, "toc");
        assert_eq!(config.mode, OutlineMode::Nested);
        assert_eq!(config.min_level, 2);
        assert_eq!(config.max_level, 6);
        assert_eq!(config.format, "html");
    }

    #[test]
    fn test_format_comes_from_config_file() {
        let config = parse_yaml_config("format: json\n").unwrap();
        assert_eq!(config.format, "json");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config = Config {
            format: "xml".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = "container_id: outline\nmode: flat\nmax_level: 4\n";
        let config = parse_yaml_config(yaml).unwrap();

        assert_eq!(config.container_id, "outline");
        assert_eq!(config.mode, OutlineMode::Flat);
        assert_eq!(config.min_level, 2);
        assert_eq!(config.max_level, 4);
    }

    #[test]
    fn test_validate_rejects_inverted_levels() {
        let config = Config {
            min_level: 5,
            max_level: 3,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_levels() {
        let config = Config {
            min_level: 1,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }
}

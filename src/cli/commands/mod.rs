mod inject;
mod print;

pub use inject::handle_inject_command;
pub use print::handle_print_command;

use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::outline::{self, Heading, OutlineMode, OutlineNode};
use crate::utils::error::{BoxResult, RustocError};

/// Merge CLI flag overrides into the loaded configuration
fn resolve_config(
    source_dir: &Path,
    config_file: Option<&PathBuf>,
    mode: Option<&String>,
    container_id: Option<&String>,
    min_level: Option<usize>,
    max_level: Option<usize>,
) -> BoxResult<Config> {
    let mut config = config::load_config(source_dir, config_file)?;

    if let Some(mode) = mode {
        config.mode = mode.parse::<OutlineMode>().map_err(RustocError::Config)?;
    }
    if let Some(id) = container_id {
        config.container_id = id.clone();
    }
    if let Some(level) = min_level {
        config.min_level = level;
    }
    if let Some(level) = max_level {
        config.max_level = level;
    }

    config::validate_config(&config)?;
    Ok(config)
}

/// Build the outline forest for the configured mode and level range
fn build_forest(mut headings: Vec<Heading>, config: &Config) -> Vec<OutlineNode> {
    headings.retain(|h| (config.min_level..=config.max_level).contains(&h.level));
    match config.mode {
        OutlineMode::Nested => outline::build_outline(&headings),
        OutlineMode::Flat => outline::build_flat_outline(&headings),
    }
}

/// Directory to search for a default config file, given the input path
fn config_search_dir(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.to_path_buf()
    } else {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(level: usize, id: &str, text: &str) -> Heading {
        Heading {
            level,
            id: Some(id.to_string()),
            text: text.to_string(),
        }
    }

    fn headings() -> Vec<Heading> {
        vec![h(2, "a", "A"), h(3, "b", "B"), h(5, "c", "C")]
    }

    #[test]
    fn test_build_forest_respects_level_range() {
        let config = Config {
            max_level: 3,
            ..Config::default()
        };
        let forest = build_forest(headings(), &config);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].anchor, "#a");
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].anchor, "#b");
    }

    #[test]
    fn test_build_forest_flat_mode() {
        let config = Config {
            mode: OutlineMode::Flat,
            ..Config::default()
        };
        let forest = build_forest(headings(), &config);

        assert_eq!(forest.len(), 3);
        assert!(forest.iter().all(|n| n.children.is_empty()));
        assert_eq!(forest[1].label, "b");
    }
}

use serde::{Deserialize, Serialize};

use crate::outline::OutlineMode;

/// Tool configuration, loadable from a `_toc.yml` file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Id of the container element the outline is injected into
    #[serde(default = "default_container_id")]
    pub container_id: String,

    /// Outline shape to produce
    #[serde(default = "default_mode")]
    pub mode: OutlineMode,

    /// Shallowest heading rank to include (h2 = 2)
    #[serde(default = "default_min_level")]
    pub min_level: usize,

    /// Deepest heading rank to include
    #[serde(default = "default_max_level")]
    pub max_level: usize,

    /// Output format for printed outlines: html, markdown or json
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            mode: default_mode(),
            min_level: default_min_level(),
            max_level: default_max_level(),
            format: default_format(),
        }
    }
}

fn default_container_id() -> String {
    "toc".to_string()
}

fn default_mode() -> OutlineMode {
    OutlineMode::Nested
}

fn default_min_level() -> usize {
    2
}

fn default_max_level() -> usize {
    6
}

fn default_format() -> String {
    "html".to_string()
}

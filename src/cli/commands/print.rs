use log::error;
use std::fs;
use std::path::Path;

use crate::cli::types::Commands;
use crate::config::Config;
use crate::headings;
use crate::render;
use crate::utils::error::{BoxResult, RustocError};

/// Handle the print command
pub fn handle_print_command(command: &Commands) {
    if let Commands::Print {
        path,
        format,
        mode,
        min_level,
        max_level,
        config,
    } = command
    {
        let mut config = match super::resolve_config(
            &super::config_search_dir(path),
            config.as_ref(),
            mode.as_ref(),
            None,
            *min_level,
            *max_level,
        ) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load config: {}", e);
                return;
            }
        };
        if let Some(format) = format {
            config.format = format.clone();
        }

        match print_outline(path, &config) {
            Ok(output) => println!("{}", output),
            Err(e) => error!("Failed to build outline for {}: {}", path.display(), e),
        }
    }
}

fn print_outline(path: &Path, config: &Config) -> BoxResult<String> {
    let content = fs::read_to_string(path)?;

    let headings = if is_markdown(path) {
        headings::extract_markdown_headings(&content)?
    } else {
        headings::extract_headings(&content)?
    };
    let forest = super::build_forest(headings, config);

    match config.format.as_str() {
        "html" => Ok(render::render_html(&forest)),
        "markdown" | "md" => Ok(render::render_markdown(&forest)),
        "json" => Ok(serde_json::to_string_pretty(&forest)?),
        other => Err(RustocError::Generic(format!(
            "unknown output format '{}' (expected html, markdown or json)",
            other
        ))
        .into()),
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map_or(false, |ext| ext == "md" || ext == "markdown")
}

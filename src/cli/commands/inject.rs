use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cli::types::Commands;
use crate::config::Config;
use crate::headings;
use crate::inject;
use crate::render;
use crate::utils::error::BoxResult;

/// Handle the inject command
pub fn handle_inject_command(command: &Commands) {
    if let Commands::Inject {
        path,
        destination,
        mode,
        container_id,
        min_level,
        max_level,
        config,
    } = command
    {
        let config = match super::resolve_config(
            &super::config_search_dir(path),
            config.as_ref(),
            mode.as_ref(),
            container_id.as_ref(),
            *min_level,
            *max_level,
        ) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load config: {}", e);
                return;
            }
        };

        if path.is_dir() {
            let processed = process_directory(path, destination.as_deref(), &config);
            info!("Injected outline into {} file(s)", processed);
        } else {
            let dest = destination
                .as_ref()
                .map(|d| resolve_single_destination(path, d));
            match process_file(path, dest.as_deref(), &config) {
                Ok(_) => info!("Injected outline into {}", path.display()),
                Err(e) => error!("Failed to process {}: {}", path.display(), e),
            }
        }
    }
}

/// Process every HTML file under `path`, returning how many succeeded
fn process_directory(path: &Path, destination: Option<&Path>, config: &Config) -> usize {
    let mut processed = 0usize;
    for entry in WalkDir::new(path) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!("Failed to read directory entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_html(entry.path()) {
            continue;
        }
        // Mirror the source layout under the destination, if set
        let dest = destination.map(|d| {
            d.join(
                entry
                    .path()
                    .strip_prefix(path)
                    .unwrap_or_else(|_| entry.path()),
            )
        });
        match process_file(entry.path(), dest.as_deref(), config) {
            Ok(_) => processed += 1,
            Err(e) => error!("Failed to process {}: {}", entry.path().display(), e),
        }
    }
    processed
}

/// Output path for a single-file input. A directory destination receives
/// the source file's name; anything else is taken as the output file.
fn resolve_single_destination(source: &Path, destination: &Path) -> PathBuf {
    if destination.is_dir() {
        match source.file_name() {
            Some(name) => destination.join(name),
            None => destination.to_path_buf(),
        }
    } else {
        destination.to_path_buf()
    }
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map_or(false, |ext| ext == "html" || ext == "htm")
}

/// Build the outline for one document and rewrite it with the outline
/// injected. `dest` of `None` rewrites the file in place.
fn process_file(path: &Path, dest: Option<&Path>, config: &Config) -> BoxResult<()> {
    let html = fs::read_to_string(path)?;
    let headings = headings::extract_headings(&html)?;
    debug!("{}: {} heading(s) found", path.display(), headings.len());

    let forest = super::build_forest(headings, config);
    let markup = render::render_html(&forest);
    let rewritten = inject::inject_toc(&html, &markup, &config.container_id)?;

    let out_path = dest.unwrap_or(path);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out_path, rewritten)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rustoc-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_directory_destination_receives_source_file_name() {
        let dir = temp_dir("single-dest");

        let dest = resolve_single_destination(Path::new("pages/doc.html"), &dir);
        assert_eq!(dest, dir.join("doc.html"));

        // A non-directory destination is the output file itself
        let out_file = dir.join("out.html");
        let dest = resolve_single_destination(Path::new("doc.html"), &out_file);
        assert_eq!(dest, out_file);
    }

    #[test]
    fn test_process_directory_mirrors_layout_and_skips_non_html() {
        let src = temp_dir("walk-src");
        let dst = temp_dir("walk-dst");
        fs::create_dir_all(src.join("sub")).unwrap();
        fs::write(
            src.join("sub/page.html"),
            "<div id=\"toc\"></div><h2 id=\"a\">A</h2>",
        )
        .unwrap();
        fs::write(src.join("notes.txt"), "not html").unwrap();

        let processed = process_directory(&src, Some(&dst), &Config::default());

        assert_eq!(processed, 1);
        let rewritten = fs::read_to_string(dst.join("sub/page.html")).unwrap();
        assert!(rewritten.contains("<li><a href=\"#a\">A</a></li>"));
        assert!(!dst.join("notes.txt").exists());
    }
}

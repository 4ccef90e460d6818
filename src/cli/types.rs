use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "rustoc")]
#[command(about = "Table-of-contents generator and injector for rendered HTML", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build the outline and inject it into each document's container element
    #[command(alias = "i")]
    Inject {
        /// HTML file, or directory to process recursively
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Write output here instead of in place; a directory receives
        /// the source file name (or mirrors the source layout)
        #[arg(short, long, value_name = "PATH")]
        destination: Option<PathBuf>,

        /// Outline shape: nested or flat
        #[arg(short, long, value_name = "MODE")]
        mode: Option<String>,

        /// Id of the container element (defaults to "toc")
        #[arg(long, value_name = "ID")]
        container_id: Option<String>,

        /// Shallowest heading rank to include
        #[arg(long, value_name = "LEVEL")]
        min_level: Option<usize>,

        /// Deepest heading rank to include
        #[arg(long, value_name = "LEVEL")]
        max_level: Option<usize>,

        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,
    },

    /// Print the outline for a document without modifying it
    #[command(alias = "p")]
    Print {
        /// HTML or Markdown file to read
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Output format: html, markdown or json (defaults to the
        /// configured format, or html)
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,

        /// Outline shape: nested or flat
        #[arg(short, long, value_name = "MODE")]
        mode: Option<String>,

        /// Shallowest heading rank to include
        #[arg(long, value_name = "LEVEL")]
        min_level: Option<usize>,

        /// Deepest heading rank to include
        #[arg(long, value_name = "LEVEL")]
        max_level: Option<usize>,

        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,
    },
}

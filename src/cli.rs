// src/cli.rs

//! CLI definitions for the scormpack builder
//!
//! Command-line interface definitions using clap. Command execution
//! lives in `main.rs`; flags mirror the config file fields and override
//! them when both are given.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scormpack")]
#[command(version)]
#[command(about = "Build distributable SCORM packages from a content directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a SCORM package
    Build {
        /// TOML config file with course metadata
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Course title
        #[arg(long)]
        title: Option<String>,

        /// Unique course identifier written to the manifest root
        #[arg(long)]
        identifier: Option<String>,

        /// SCORM version: 1.2, 2004.3 or 2004.4
        #[arg(short = 'V', long)]
        scorm_version: Option<String>,

        /// Directory containing the course content
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory (must not exist yet)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Passing score threshold, 0-100 (default 80)
        #[arg(long)]
        mastery_score: Option<u32>,

        /// Launch page relative to the source root (default index.html)
        #[arg(long)]
        starting_page: Option<String>,

        /// Organization name shown by the LMS
        #[arg(long)]
        organization: Option<String>,

        /// Root directory of the per-version XSD bundles
        /// (default: definitionFiles/ next to the executable)
        #[arg(long)]
        definitions: Option<PathBuf>,
    },

    /// List the supported SCORM versions
    Versions,
}

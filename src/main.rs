// src/main.rs

use anyhow::Result;
use clap::Parser;
use scormpack::{DefinitionSource, PackageConfig, PackageOptions, Packager, VersionTag};
use std::path::PathBuf;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            config,
            title,
            identifier,
            scorm_version,
            source,
            destination,
            mastery_score,
            starting_page,
            organization,
            definitions,
        } => {
            let mut opts = match config {
                Some(path) => PackageOptions::from_file(&path)?,
                None => PackageOptions::default(),
            };

            // CLI flags win over config file values
            merge(&mut opts.title, title);
            merge(&mut opts.identifier, identifier);
            merge(&mut opts.version, scorm_version);
            merge(&mut opts.source, source);
            merge(&mut opts.destination, destination);
            merge(&mut opts.mastery_score, mastery_score);
            merge(&mut opts.starting_page, starting_page);
            merge(&mut opts.organization, organization);

            let config = PackageConfig::from_options(opts)?;
            let definitions = resolve_definitions(definitions)?;

            let destination = config.destination.clone();
            Packager::new(config, definitions).build()?;
            println!("Package written to {}", destination.display());
            Ok(())
        }
        Commands::Versions => {
            for tag in VersionTag::all() {
                println!("{:10} SCORM {}", tag.token(), tag.label());
            }
            Ok(())
        }
    }
}

fn merge<T>(slot: &mut Option<T>, flag: Option<T>) {
    if flag.is_some() {
        *slot = flag;
    }
}

fn resolve_definitions(flag: Option<PathBuf>) -> Result<DefinitionSource> {
    match flag {
        Some(path) => Ok(DefinitionSource::new(path)),
        None => Ok(DefinitionSource::install_default()?),
    }
}

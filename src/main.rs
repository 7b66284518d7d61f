//! nblink - a build-time notebook-to-site content linker.

mod build;
mod cli;
mod config;
mod logger;
mod notebook;
mod pipeline;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Build { .. } => build_site(config),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: every field has a default, so the
/// tool runs against a bare notebook directory without any setup.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

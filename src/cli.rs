//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nblink notebook linker CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Notebook source directory (relative to project root)
    #[arg(short, long)]
    pub notebooks: Option<PathBuf>,

    /// Output directory (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: nblink.toml)
    #[arg(short = 'C', long, default_value = "nblink.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Link notebooks into the output directory and emit page files
    Build {
        /// Clear the output directory completely before building
        #[arg(long)]
        clean: bool,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}

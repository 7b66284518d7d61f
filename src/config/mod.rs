//! Pipeline configuration management for `nblink.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Site metadata (title of the cover page)        |
//! | `[build]`   | Source/destination paths, url prefix, clean    |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Python Data Science Handbook"
//!
//! [build]
//! notebooks = "notebooks"
//! output = "content"
//! url_prefix = "/PythonDataScienceHandbook"
//! ```

mod build;
pub mod defaults;
mod error;
pub mod paths;

pub use build::BuildConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use error::ConfigError;
use paths::PathResolver;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// [base] Section
// ============================================================================

/// `[base]` section in nblink.toml - basic site metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, emitted as the cover page's title.
    pub title: String,
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing nblink.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Path resolver for destination directories and site URLs.
    pub fn paths(&self) -> PathResolver<'_> {
        PathResolver::new(&self.build.output, &self.build.url_prefix)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());
        self.set_root(&root);
        self.update_path_with_root(&root);

        match &cli.command {
            Commands::Build { clean } => {
                if *clean {
                    self.build.clean = true;
                }
            }
        }

        // trailing '/' would double up when urls are joined
        while self.build.url_prefix.ends_with('/') {
            self.build.url_prefix.pop();
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.build.notebooks, cli.notebooks.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path and all directory paths
        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.notebooks = Self::normalize_path(&root.join(&self.build.notebooks));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.build.url_prefix;
        if !prefix.is_empty() && !prefix.starts_with('/') {
            bail!(ConfigError::Validation(
                "[build.url_prefix] must start with `/`".into()
            ));
        }

        // the output directory is cleared destructively; refuse to point it
        // at the source
        if self.build.notebooks == self.build.output {
            bail!(ConfigError::Validation(
                "[build.notebooks] and [build.output] must be different directories".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "My Handbook"

            [build]
            notebooks = "nb"
            output = "site"
            url_prefix = "/handbook"
        "#,
        )
        .unwrap();

        assert_eq!(config.base.title, "My Handbook");
        assert_eq!(config.build.notebooks, PathBuf::from("nb"));
        assert_eq!(config.build.output, PathBuf::from("site"));
        assert_eq!(config.build.url_prefix, "/handbook");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str(
            r#"
            [base
            title = "broken"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.base.title, "");
        assert_eq!(config.build.notebooks, PathBuf::from("notebooks"));
        assert_eq!(config.build.output, PathBuf::from("content"));
        assert_eq!(config.build.url_prefix, "");
        assert!(!config.build.clean);
    }

    #[test]
    fn test_empty_sections_take_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.build.output, PathBuf::from("content"));
        assert_eq!(config.base.title, "");
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = SiteConfig::from_str(
            r#"
            [unknown_section]
            field = "value"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_build_field_rejection() {
        let result = SiteConfig::from_str(
            r#"
            [build]
            figures = "figs"
        "#,
        );
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_validate_rejects_relative_prefix() {
        let mut config = SiteConfig::default();
        config.build.url_prefix = "handbook".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_empty_prefix() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_output_equal_to_source() {
        let mut config = SiteConfig::default();
        config.build.notebooks = PathBuf::from("/site/nb");
        config.build.output = PathBuf::from("/site/nb");
        assert!(config.validate().is_err());
    }
}

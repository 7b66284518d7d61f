//! `[build]` section configuration.
//!
//! Contains the pipeline's source and destination paths and the url prefix
//! applied to rewritten links.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in nblink.toml - pipeline paths and behavior.
///
/// # Example
/// ```toml
/// [build]
/// notebooks = "notebooks"                    # Source directory
/// output = "content"                         # Destination directory
/// url_prefix = "/PythonDataScienceHandbook"  # Site-relative link prefix
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Notebook source directory. Its `figures/` subdirectory holds the
    /// figure assets that get copied to the destination.
    #[serde(default = "defaults::build::notebooks")]
    #[educe(Default = defaults::build::notebooks())]
    pub notebooks: PathBuf,

    /// Destination directory; receives `notebooks/`, `pages/` and `figures/`.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Site-relative prefix for rewritten links. Empty means links resolve
    /// from the site root.
    #[serde(default = "defaults::build::url_prefix")]
    #[educe(Default = defaults::build::url_prefix())]
    pub url_prefix: String,

    /// Clear the destination directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_full() {
        let config: SiteConfig = toml::from_str(
            r#"
            [build]
            notebooks = "book/notebooks"
            output = "website/content"
            url_prefix = "/book"
            clean = true
        "#,
        )
        .unwrap();

        assert_eq!(config.build.notebooks, PathBuf::from("book/notebooks"));
        assert_eq!(config.build.output, PathBuf::from("website/content"));
        assert_eq!(config.build.url_prefix, "/book");
        assert!(config.build.clean);
    }

    #[test]
    fn test_build_config_partial() {
        let config: SiteConfig = toml::from_str(
            r#"
            [build]
            url_prefix = "/docs"
        "#,
        )
        .unwrap();

        // unspecified fields fall back to defaults
        assert_eq!(config.build.notebooks, PathBuf::from("notebooks"));
        assert_eq!(config.build.output, PathBuf::from("content"));
        assert_eq!(config.build.url_prefix, "/docs");
        assert!(!config.build.clean);
    }
}

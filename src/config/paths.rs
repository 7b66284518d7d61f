//! Centralized destination-path and site-URL resolution.
//!
//! This module provides a single source of truth for where outputs land and
//! how rewritten links are formed, eliminating manual prefix handling
//! throughout the pipeline.
//!
//! # Architecture
//!
//! ```text
//! SiteConfig
//!     │
//!     └── paths() → PathResolver
//!                       │
//!                       ├── notebooks_dir()     → <output>/notebooks
//!                       ├── pages_dir()         → <output>/pages
//!                       ├── figures_dir()       → <output>/figures
//!                       └── url_for_rel_path()  → <prefix>/path/to/file
//! ```

use std::path::{Path, PathBuf};

/// Destination subdirectory for transformed notebooks.
pub const NOTEBOOKS_SEGMENT: &str = "notebooks";

/// Destination subdirectory for page descriptor files.
pub const PAGES_SEGMENT: &str = "pages";

/// Figure subdirectory name, both under the source notebook directory and
/// under the destination.
pub const FIGURES_SEGMENT: &str = "figures";

/// Resolves destination directories and site-relative URLs.
///
/// The url prefix is either empty or `/`-prefixed without a trailing `/`
/// (config normalization guarantees this).
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    /// Destination root directory
    output: &'a Path,
    /// Site-relative URL prefix for rewritten links
    prefix: &'a str,
}

impl<'a> PathResolver<'a> {
    /// Create a new PathResolver from config paths.
    #[inline]
    pub const fn new(output: &'a Path, prefix: &'a str) -> Self {
        Self { output, prefix }
    }

    /// Where transformed notebooks are written.
    #[inline]
    pub fn notebooks_dir(&self) -> PathBuf {
        self.output.join(NOTEBOOKS_SEGMENT)
    }

    /// Where page descriptor files are written.
    #[inline]
    pub fn pages_dir(&self) -> PathBuf {
        self.output.join(PAGES_SEGMENT)
    }

    /// Where the figure tree is copied.
    #[inline]
    pub fn figures_dir(&self) -> PathBuf {
        self.output.join(FIGURES_SEGMENT)
    }

    /// Check if a url prefix is set (non-empty).
    #[inline]
    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }

    /// Site URL for a path relative to the destination root.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // With prefix "/book":
    /// paths.url_for_rel_path("pages/01-intro.html") → "/book/pages/01-intro.html"
    ///
    /// // Without prefix:
    /// paths.url_for_rel_path("figures/plot1.png") → "/figures/plot1.png"
    /// ```
    pub fn url_for_rel_path<P: AsRef<Path>>(&self, rel_path: P) -> String {
        let path_str = rel_path.as_ref().to_string_lossy().replace('\\', "/");
        if self.has_prefix() {
            format!("{}/{path_str}", self.prefix)
        } else {
            format!("/{path_str}")
        }
    }
}

//! The notebook linking pipeline.
//!
//! One-shot batch pass over a directory of notebooks:
//!
//! ```text
//! collect_notebooks() ──► RewriteTables::build() ──► transform()
//!        │                        │                      │
//!        ▼                        ▼                      ▼
//!   sorted names          filename → URL maps     notebook + page file
//! ```
//!
//! - **rewrite**: lookup tables and literal-substring link rewriting
//! - **transform**: per-notebook cell reordering and title extraction
//! - **page**: page descriptor files for the downstream site generator
//! - **figures**: destructive copy of the figure asset tree

pub mod error;
pub mod figures;
pub mod page;
pub mod rewrite;
pub mod transform;

pub use error::TransformError;

use anyhow::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Extension of source documents.
pub const NOTEBOOK_EXT: &str = "ipynb";

/// The cover document, handled specially by the transformer.
pub const INDEX_NOTEBOOK: &str = "Index.ipynb";

/// Collect notebook filenames from the source directory.
///
/// Flat listing (subdirectories such as `figures/` are not descended into),
/// filtered to the notebook extension, sorted lexicographically so every run
/// processes documents in the same order.
pub fn collect_notebooks(dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_owned))
        .filter(|name| !IGNORED_FILES.contains(&name.as_str()))
        .filter(|name| {
            Path::new(name)
                .extension()
                .is_some_and(|ext| ext == NOTEBOOK_EXT)
        })
        .collect();
    names.sort();
    Ok(names)
}

/// Lowercased filename stem: the document's site identifier.
pub fn slug(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_slug_lowercases_stem() {
        assert_eq!(slug("Index.ipynb"), "index");
        assert_eq!(slug("01-Intro.ipynb"), "01-intro");
        assert_eq!(slug("02.00-NumPy.ipynb"), "02.00-numpy");
    }

    #[test]
    fn test_slug_without_extension() {
        assert_eq!(slug("README"), "readme");
    }

    #[test]
    fn test_collect_notebooks_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("02-Two.ipynb"), "{}").unwrap();
        fs::write(dir.path().join("01-One.ipynb"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("figures")).unwrap();
        fs::write(dir.path().join("figures").join("Deep.ipynb"), "{}").unwrap();

        let names = collect_notebooks(dir.path()).unwrap();
        // flat, extension-filtered, sorted
        assert_eq!(names, vec!["01-One.ipynb", "02-Two.ipynb"]);
    }

    #[test]
    fn test_collect_notebooks_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(collect_notebooks(&missing).is_err());
    }
}

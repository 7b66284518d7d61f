//! Figure tree copying.
//!
//! The destination figures directory is destructively replaced on every run
//! so stale figures never survive a rebuild.

use anyhow::{Context, Result};
use std::{fs, path::Path};
use walkdir::WalkDir;

/// Delete `dest` if present, then recursively copy `src` into it.
///
/// A missing `src` propagates as a generic error after `dest` has already
/// been cleared, matching the abort-and-rerun failure model.
pub fn replace_figure_tree(src: &Path, dest: &Path) -> Result<()> {
    if dest.exists() {
        fs::remove_dir_all(dest).with_context(|| {
            format!("Failed to clear figures directory: {}", dest.display())
        })?;
    }

    for entry in WalkDir::new(src) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src)?;
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Failed to copy figure: {}", entry.path().display())
            })?;
        }
    }

    Ok(())
}

//! Cross-reference rewrite tables.
//!
//! Two lookup tables turn internal references into site URLs:
//!
//! | Key                  | Value                          |
//! |----------------------|--------------------------------|
//! | `02-Intro.ipynb`     | `<prefix>/pages/02-intro.html` |
//! | `figures/plot1.png`  | `<prefix>/figures/plot1.png`   |
//!
//! Application is literal substring replacement; the policy lives behind
//! [`rewrite_text`] so a token-aware variant could replace it without
//! touching the rest of the pipeline.

use crate::config::paths::{FIGURES_SEGMENT, PAGES_SEGMENT, PathResolver};
use crate::pipeline::slug;
use anyhow::{Context, Result};
use std::{collections::BTreeMap, fs, path::Path};

/// Literal replacement pairs; ordered so application is deterministic.
pub type RewriteTable = BTreeMap<String, String>;

/// Both lookup tables used by the transformer.
#[derive(Debug, Default)]
pub struct RewriteTables {
    /// notebook filename → site page URL
    pub documents: RewriteTable,
    /// `figures/<entry>` → site figure URL
    pub figures: RewriteTable,
}

impl RewriteTables {
    /// Build the document table from the source filenames and the figure
    /// table from the direct entries of the (already copied) destination
    /// figures directory.
    ///
    /// Figure enumeration is non-recursive: references in narrative text use
    /// the flat `figures/<name>` form.
    pub fn build(
        notebooks: &[String],
        figures_dir: &Path,
        paths: &PathResolver<'_>,
    ) -> Result<Self> {
        let documents = notebooks
            .iter()
            .map(|name| {
                let url =
                    paths.url_for_rel_path(format!("{PAGES_SEGMENT}/{}.html", slug(name)));
                (name.clone(), url)
            })
            .collect();

        let mut figures = RewriteTable::new();
        let entries = fs::read_dir(figures_dir).with_context(|| {
            format!("Failed to list figures directory: {}", figures_dir.display())
        })?;
        for entry in entries {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            let reference = format!("{FIGURES_SEGMENT}/{name}");
            figures.insert(reference.clone(), paths.url_for_rel_path(reference));
        }

        Ok(Self { documents, figures })
    }

    /// Apply both tables to one piece of narrative text.
    pub fn rewrite(&self, text: &str) -> String {
        let text = rewrite_text(text, &self.documents);
        rewrite_text(&text, &self.figures)
    }
}

/// Replace every occurrence of each key with its mapped value.
///
/// Replacement is literal substring substitution, not pattern matching: a key
/// that happens to be a substring of unrelated prose is rewritten too.
pub fn rewrite_text(text: &str, table: &RewriteTable) -> String {
    let mut out = text.to_owned();
    for (from, to) in table {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

//! Pipeline orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── collect_notebooks()    ──► sorted source listing
//!     │
//!     ├── replace_figure_tree()  ──► destructive figures copy
//!     │
//!     ├── RewriteTables::build() ──► filename → URL lookup tables
//!     │
//!     └── per notebook: transform() ──► write notebook + page file
//! ```
//!
//! Processing is sequential and ordered by filename, so repeated runs over
//! unchanged input produce byte-identical output sets.

use crate::{
    config::SiteConfig,
    config::paths::FIGURES_SEGMENT,
    log,
    notebook::Notebook,
    pipeline::{
        collect_notebooks, figures::replace_figure_tree, rewrite::RewriteTables, slug,
        transform::transform,
    },
};
use anyhow::{Context, Result};
use std::{collections::BTreeMap, fs, path::Path};

/// Run the whole linking pass.
///
/// A failed run may leave outputs from earlier-processed notebooks in place
/// next to an already-replaced figures directory; any non-zero exit means
/// "fix and rerun".
pub fn build_site(config: &'static SiteConfig) -> Result<()> {
    let paths = config.paths();
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }

    let notebooks = collect_notebooks(&config.build.notebooks)?;
    log!("notebooks"; "found {} documents", notebooks.len());
    warn_on_slug_collisions(&notebooks);

    let figures_src = config.build.notebooks.join(FIGURES_SEGMENT);
    replace_figure_tree(&figures_src, &paths.figures_dir())?;

    let tables = RewriteTables::build(&notebooks, &paths.figures_dir(), &paths)?;

    fs::create_dir_all(paths.notebooks_dir())?;
    fs::create_dir_all(paths.pages_dir())?;

    for name in &notebooks {
        log!("notebook"; "{name}");

        let source = config.build.notebooks.join(name);
        let mut doc = Notebook::from_path(&source)?;
        let page = transform(&mut doc, name, &source, config, &tables)?;

        doc.write_to(&paths.notebooks_dir().join(name))?;
        page.write_to(&paths.pages_dir())?;
    }

    log_build_result(output)?;

    Ok(())
}

/// Two filenames lowercasing to the same stem silently overwrite each other's
/// page file and link target; keep that behavior but say so.
fn warn_on_slug_collisions(notebooks: &[String]) {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for name in notebooks {
        if let Some(first) = seen.insert(slug(name), name) {
            log!("warn"; "`{first}` and `{name}` share slug `{}`; the later one wins", slug(name));
        }
    }
}

/// Log build result based on output directory contents
fn log_build_result(output: &Path) -> Result<()> {
    let file_count = fs::read_dir(output)?.filter_map(Result::ok).count();

    if file_count == 0 {
        log!("warn"; "output is empty, check if the source has .ipynb files");
    } else {
        log!("build"; "done");
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

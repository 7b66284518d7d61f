//! Per-notebook transformation.
//!
//! Converts one source notebook into its site-ready form:
//!
//! 1. For non-index notebooks, the heading in the third cell becomes the
//!    page title and is promoted above the preceding front matter.
//! 2. Every narrative cell has internal references rewritten to site URLs.
//!
//! The cover document (`Index.ipynb`) keeps its cell order and takes the
//! configured site title instead.

use crate::config::SiteConfig;
use crate::notebook::Notebook;
use crate::pipeline::page::{CellRange, PageDescriptor, TemplateKind};
use crate::pipeline::rewrite::RewriteTables;
use crate::pipeline::{INDEX_NOTEBOOK, TransformError, slug};
use anyhow::Result;
use std::path::Path;

/// Heading marker that must open a title cell.
const TITLE_MARKER: char = '#';

/// Index of the cell expected to hold a section title.
const TITLE_CELL: usize = 2;

/// Transform one notebook in place and describe the page wrapping it.
pub fn transform(
    doc: &mut Notebook,
    filename: &str,
    source: &Path,
    config: &SiteConfig,
    tables: &RewriteTables,
) -> Result<PageDescriptor> {
    let descriptor = if filename == INDEX_NOTEBOOK {
        // the first cell is build-only front matter; everything after it is
        // shown as-is
        PageDescriptor {
            title: config.base.title.clone(),
            slug: slug(filename),
            template: TemplateKind::Page,
            notebook_file: filename.to_owned(),
            cells: CellRange::from(1),
        }
    } else {
        let title = extract_title(doc, source)?;

        // put nav below title: [A, B, C] -> [C, A, B]
        doc.cells[..=TITLE_CELL].rotate_right(1);

        PageDescriptor {
            title,
            slug: slug(filename),
            template: TemplateKind::BookSection,
            notebook_file: filename.to_owned(),
            cells: CellRange::from(2),
        }
    };

    for cell in doc.cells.iter_mut().filter(|cell| cell.is_markdown()) {
        cell.source.apply(|text| tables.rewrite(text));
    }

    Ok(descriptor)
}

/// Extract the display title from the third cell.
///
/// The cell must hold exactly one line (a trailing newline is tolerated)
/// starting with `#`; the title is that line with the markers and
/// surrounding whitespace stripped. Anything else aborts the run.
fn extract_title(doc: &Notebook, source: &Path) -> Result<String, TransformError> {
    let malformed = || TransformError::MalformedTitleCell(source.to_path_buf());

    let cell = doc.cells.get(TITLE_CELL).ok_or_else(malformed)?;
    let text = cell.source.text();
    let line = text.strip_suffix('\n').unwrap_or(&text);

    if !line.starts_with(TITLE_MARKER) || line.contains('\n') {
        return Err(malformed());
    }

    Ok(line.trim_start_matches(TITLE_MARKER).trim().to_owned())
}

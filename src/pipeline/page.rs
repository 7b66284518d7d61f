//! Page descriptor emission.
//!
//! Each transformed notebook gets a small page file instructing the
//! downstream site generator how to embed it:
//!
//! ```text
//! title: Introduction
//! slug: 01-intro
//! Template: booksection
//!
//! {% notebook notebooks/01-Intro.ipynb cells[2:] %}
//! ```

use anyhow::{Context, Result};
use std::{fmt, fs, path::Path};

/// Extension of emitted page files.
const PAGE_EXT: &str = "md";

/// Template tag consumed by the downstream site generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Generic standalone page (the cover document).
    Page,
    /// Numbered book section.
    BookSection,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page => write!(f, "page"),
            Self::BookSection => write!(f, "booksection"),
        }
    }
}

/// Half-open cell range: every cell from `start` to the end of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: usize,
}

impl From<usize> for CellRange {
    fn from(start: usize) -> Self {
        Self { start }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.start)
    }
}

/// Everything the site generator needs to wrap one notebook.
#[derive(Debug, Clone)]
pub struct PageDescriptor {
    pub title: String,
    pub slug: String,
    pub template: TemplateKind,
    pub notebook_file: String,
    pub cells: CellRange,
}

impl PageDescriptor {
    /// Render the page file body.
    pub fn render(&self) -> String {
        format!(
            "title: {title}\nslug: {slug}\nTemplate: {template}\n\n\
             {{% notebook notebooks/{file} cells[{cells}] %}}\n",
            title = self.title,
            slug = self.slug,
            template = self.template,
            file = self.notebook_file,
            cells = self.cells,
        )
    }

    /// Write the page file into the pages directory as `<slug>.md`.
    pub fn write_to(&self, pages_dir: &Path) -> Result<()> {
        let path = pages_dir.join(format!("{}.{PAGE_EXT}", self.slug));
        fs::write(&path, self.render())
            .with_context(|| format!("Failed to write page file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_kind_display() {
        assert_eq!(TemplateKind::Page.to_string(), "page");
        assert_eq!(TemplateKind::BookSection.to_string(), "booksection");
    }

    #[test]
    fn test_cell_range_display() {
        assert_eq!(CellRange::from(1).to_string(), "1:");
        assert_eq!(CellRange::from(2).to_string(), "2:");
    }

    #[test]
    fn test_render_exact_body() {
        let page = PageDescriptor {
            title: "Introduction".into(),
            slug: "01-intro".into(),
            template: TemplateKind::BookSection,
            notebook_file: "01-Intro.ipynb".into(),
            cells: CellRange::from(2),
        };

        assert_eq!(
            page.render(),
            "title: Introduction\n\
             slug: 01-intro\n\
             Template: booksection\n\
             \n\
             {% notebook notebooks/01-Intro.ipynb cells[2:] %}\n"
        );
    }

    #[test]
    fn test_write_to_uses_slug_filename() {
        let dir = tempfile::tempdir().unwrap();
        let page = PageDescriptor {
            title: "My Handbook".into(),
            slug: "index".into(),
            template: TemplateKind::Page,
            notebook_file: "Index.ipynb".into(),
            cells: CellRange::from(1),
        };
        page.write_to(dir.path()).unwrap();

        let written = std::fs::read_to_string(dir.path().join("index.md")).unwrap();
        assert!(written.starts_with("title: My Handbook\n"));
        assert!(written.contains("Template: page\n"));
        assert!(written.ends_with("{% notebook notebooks/Index.ipynb cells[1:] %}\n"));
    }
}

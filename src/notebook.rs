//! Minimal nbformat document model.
//!
//! Only `cells`, `cell_type` and `source` are interpreted; every other field
//! of the document and of each cell is carried through untouched, so a
//! read → transform → write round trip preserves the rest of the notebook.
//!
//! Cell `source` may be stored either as a single string or as a list of
//! line strings (nbformat allows both); the stored shape survives the round
//! trip.

use crate::pipeline::TransformError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{borrow::Cow, fs, path::Path};

/// Cell kind of narrative cells; the only kind the pipeline rewrites.
pub const MARKDOWN_CELL: &str = "markdown";

/// A notebook document: an ordered sequence of cells plus opaque metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,

    /// Untouched remainder of the document (nbformat version, metadata, ...)
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A single cell: its kind, its text, and whatever else it carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: String,
    pub source: SourceText,

    /// Untouched remainder of the cell (execution counts, outputs, ...)
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Cell {
    /// Narrative cells are the only ones inspected or modified.
    pub fn is_markdown(&self) -> bool {
        self.cell_type == MARKDOWN_CELL
    }
}

/// Cell source as stored by nbformat: a single string or a list of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceText {
    Text(String),
    Lines(Vec<String>),
}

impl SourceText {
    /// The cell's full text.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Lines(lines) => Cow::Owned(lines.concat()),
        }
    }

    /// Apply a text transformation, preserving the stored shape.
    ///
    /// For the line-array shape the transformation runs per line; replacement
    /// keys never contain newlines, so this matches whole-text replacement.
    pub fn apply(&mut self, f: impl Fn(&str) -> String) {
        match self {
            Self::Text(text) => *text = f(text),
            Self::Lines(lines) => {
                for line in lines.iter_mut() {
                    *line = f(line);
                }
            }
        }
    }
}

impl Notebook {
    /// Read and parse a notebook file.
    ///
    /// IO failures propagate as generic errors; a JSON document that does not
    /// fit the cell model is a typed [`TransformError::Notebook`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read notebook: {}", path.display()))?;
        let notebook = serde_json::from_str(&raw)
            .map_err(|err| TransformError::Notebook(path.to_path_buf(), err))?;
        Ok(notebook)
    }

    /// Serialize the notebook to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs::write(path, json)
            .with_context(|| format!("Failed to write notebook: {}", path.display()))
    }
}

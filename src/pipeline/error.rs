//! Pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while transforming a notebook.
///
/// Everything else (missing directories, IO, permissions) propagates as
/// generic errors; these are the kinds tests and callers assert on.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to parse notebook `{0}`")]
    Notebook(PathBuf, #[source] serde_json::Error),

    #[error("title not found in third cell of `{0}`")]
    MalformedTitleCell(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_title_display_names_the_file() {
        let err = TransformError::MalformedTitleCell(PathBuf::from("03-Broken.ipynb"));
        let display = format!("{err}");
        assert!(display.contains("third cell"));
        assert!(display.contains("03-Broken.ipynb"));
    }
}

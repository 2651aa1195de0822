//! Error type
//!
//! Tokenizing and the indentation assists never fail: every input has a token stream and
//! every heuristic falls back to leaving the text alone. Errors only come from the edges of
//! the crate: loading configuration, reading sources, serializing output, and rows asked for
//! on the command line that the file does not have.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FocusError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row} out of range (file has {lines} lines)")]
    RowOutOfRange { row: usize, lines: usize },
}

impl FocusError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FocusError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Read a source file, attaching its path to any failure.
pub fn read_source(path: impl Into<PathBuf>) -> Result<String, FocusError> {
    let path = path.into();
    std::fs::read_to_string(&path).map_err(|source| FocusError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_names_path() {
        let err = read_source("does/not/exist.focus").unwrap_err();
        assert!(matches!(err, FocusError::Io { .. }));
        assert!(err.to_string().starts_with("cannot read does/not/exist.focus: "));
    }

    #[test]
    fn test_row_out_of_range_message() {
        let err = FocusError::RowOutOfRange { row: 7, lines: 3 };
        assert_eq!(err.to_string(), "row 7 out of range (file has 3 lines)");
    }

    #[test]
    fn test_json_error_converts() {
        let err: FocusError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(err.to_string().starts_with("json: "));
    }
}

// Typed errors for the file-facing nodes
// Display text is exactly what the host shows to the user

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextToolsError {
    #[error("No file specified")]
    NoFileSpecified,

    #[error("No file path specified")]
    NoFilePathSpecified,

    /// Missing file addressed by a full path
    #[error("File not found: {0}")]
    NotFound(String),

    /// Missing file addressed by folder + name (validation message)
    #[error("File not found: {file} in {folder} folder")]
    NotFoundInFolder { file: String, folder: String },

    #[error("Path is not a file: {0}")]
    NotAFile(String),

    #[error("Invalid file type. Only .txt, .json, and .md files are supported")]
    UnsupportedExtension,

    #[error("Error loading file: {0}")]
    Load(#[source] io::Error),

    #[error("Error saving file: {0}")]
    Save(#[source] io::Error),

    #[error("Error saving file: {0}")]
    Prefix(String),

    #[error("Unknown {kind} '{label}'. Expected one of: {expected}")]
    UnknownLabel {
        kind: &'static str,
        label: String,
        expected: String,
    },
}

impl TextToolsError {
    pub(crate) fn unknown_label(kind: &'static str, label: &str, expected: &[&str]) -> Self {
        Self::UnknownLabel {
            kind,
            label: label.to_string(),
            expected: expected.join(", "),
        }
    }
}

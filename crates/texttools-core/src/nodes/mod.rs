//! Host-facing node wrappers.
//!
//! Each node takes the inputs the workflow host sends (deserialized from
//! JSON) and produces a [`NodeOutput`]: the returned values plus an
//! optional UI payload.

pub mod files;
pub mod merge;
pub mod text;

use crate::writers::SavedFile;
use serde::Serialize;

pub use files::{LoadTextInputs, LoadTextPathInputs, SaveTextInputs};
pub use merge::{MergeTextInputs, MergeTextMultiInputs};
pub use text::{EditorInputs, ViewerInputs};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiPayload>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub result: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UiPayload {
    /// Text shown inside the node
    Text { text: Vec<String> },
    /// Files written by the save node
    TextFiles { text_files: Vec<SavedFile> },
}

impl NodeOutput {
    /// Single returned string, no UI update
    pub fn value(text: impl Into<String>) -> Self {
        Self {
            ui: None,
            result: vec![text.into()],
        }
    }

    /// Returned string that is also displayed in the node
    pub fn shown(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            ui: Some(UiPayload::Text {
                text: vec![text.clone()],
            }),
            result: vec![text],
        }
    }

    pub fn saved(files: Vec<SavedFile>) -> Self {
        Self {
            ui: Some(UiPayload::TextFiles { text_files: files }),
            result: Vec::new(),
        }
    }

    /// First returned value, if any
    pub fn text(&self) -> Option<&str> {
        self.result.first().map(String::as_str)
    }
}

// Node registry: type ids and display names the host registers, plus dispatch

use crate::config::HostDirs;
use crate::nodes::{
    EditorInputs, LoadTextInputs, LoadTextPathInputs, MergeTextInputs, MergeTextMultiInputs,
    NodeOutput, SaveTextInputs, ViewerInputs,
};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Viewer,
    Editor,
    LoadText,
    LoadTextFromPath,
    SaveTextFile,
    MergeText,
    MergeTextMulti,
}

impl NodeKind {
    /// Registration order
    pub const ALL: [Self; 7] = [
        Self::Viewer,
        Self::Editor,
        Self::LoadText,
        Self::LoadTextFromPath,
        Self::SaveTextFile,
        Self::MergeText,
        Self::MergeTextMulti,
    ];

    pub fn type_id(self) -> &'static str {
        match self {
            Self::Viewer => "Text Tools Viewer-SG",
            Self::Editor => "Text Tools Editor-SG",
            Self::LoadText => "Text Tools Load Text-SG",
            Self::LoadTextFromPath => "Text Tools Load Text FilePath-SG",
            Self::SaveTextFile => "Text Tools Save Text File-SG",
            Self::MergeText => "Text Tools Merge Text-SG",
            Self::MergeTextMulti => "Text Tools Merge Text Multi-SG",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Viewer => "Text Tools 🧾 Viewer-SG",
            Self::Editor => "Text Tools 🪶 Editor-SG",
            Self::LoadText => "Text Tools Load Text Json md-SG",
            Self::LoadTextFromPath => "Text Tools Load Text json md From Anywhere (FilePath)-SG",
            Self::SaveTextFile => "Text Tools Save Text json md File-SG",
            Self::MergeText => "Text Tools Merge Text-SG",
            Self::MergeTextMulti => "Text Tools Merge Text Multi-SG",
        }
    }

    pub fn category(self) -> &'static str {
        match self {
            Self::Viewer | Self::Editor => "text/utils",
            Self::LoadText | Self::LoadTextFromPath | Self::SaveTextFile => "utils",
            Self::MergeText | Self::MergeTextMulti => "text",
        }
    }

    pub fn return_names(self) -> &'static [&'static str] {
        match self {
            Self::Viewer | Self::Editor => &["text"],
            Self::LoadText | Self::LoadTextFromPath => &["text_content"],
            Self::SaveTextFile => &[],
            Self::MergeText | Self::MergeTextMulti => &["merged_text"],
        }
    }

    pub fn is_output_node(self) -> bool {
        !matches!(self, Self::MergeText | Self::MergeTextMulti)
    }

    pub fn from_type_id(type_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.type_id() == type_id)
    }
}

fn parse_inputs<T: DeserializeOwned>(kind: NodeKind, inputs: serde_json::Value) -> Result<T> {
    serde_json::from_value(inputs)
        .with_context(|| format!("Invalid inputs for node '{}'", kind.type_id()))
}

/// Run one node the way the host would: validate (where the node defines
/// validation), then execute
pub fn execute(kind: NodeKind, inputs: serde_json::Value, dirs: &HostDirs) -> Result<NodeOutput> {
    tracing::debug!(node = kind.type_id(), "executing node");

    let output = match kind {
        NodeKind::Viewer => parse_inputs::<ViewerInputs>(kind, inputs)?.run(),
        NodeKind::Editor => parse_inputs::<EditorInputs>(kind, inputs)?.run(),
        NodeKind::LoadText => {
            let inputs = parse_inputs::<LoadTextInputs>(kind, inputs)?;
            inputs.validate(dirs)?;
            inputs.run(dirs)
        }
        NodeKind::LoadTextFromPath => {
            let inputs = parse_inputs::<LoadTextPathInputs>(kind, inputs)?;
            inputs.validate()?;
            inputs.run()
        }
        NodeKind::SaveTextFile => {
            parse_inputs::<SaveTextInputs>(kind, inputs)?.run(dirs, &chrono::Local::now())?
        }
        NodeKind::MergeText => parse_inputs::<MergeTextInputs>(kind, inputs)?.run()?,
        NodeKind::MergeTextMulti => parse_inputs::<MergeTextMultiInputs>(kind, inputs)?.run()?,
    };

    Ok(output)
}

// Viewer and editor nodes: pass text through and show it in the node

use super::NodeOutput;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ViewerInputs {
    pub text: String,
}

impl ViewerInputs {
    pub fn run(&self) -> NodeOutput {
        view(&self.text)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorInputs {
    #[serde(default)]
    pub text: String,
    /// Connected upstream text; replaces the editor content when present
    #[serde(default)]
    pub text_input: Option<String>,
}

impl EditorInputs {
    pub fn run(&self) -> NodeOutput {
        edit(&self.text, self.text_input.as_deref())
    }
}

pub fn view(text: &str) -> NodeOutput {
    NodeOutput::shown(text)
}

pub fn edit(text: &str, text_input: Option<&str>) -> NodeOutput {
    NodeOutput::shown(text_input.unwrap_or(text))
}

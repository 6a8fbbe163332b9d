// Load Text, Load Text FilePath and Save Text File nodes

use super::NodeOutput;
use crate::config::HostDirs;
use crate::error::TextToolsError;
use crate::loader::{self, LoadFolder};
use crate::writers::text_file::{save_text, FileFormat, SaveRequest, DEFAULT_PREFIX};
use chrono::{DateTime, TimeZone};
use serde::Deserialize;
use std::fmt::Display;
use std::time::SystemTime;

fn default_folder() -> String {
    LoadFolder::Input.label().to_string()
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_format() -> String {
    FileFormat::Txt.extension().to_string()
}

fn default_pretty_json() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadTextInputs {
    #[serde(default = "default_folder")]
    pub folder: String,
    #[serde(default)]
    pub file: String,
    /// Help text shown in the node; ignored
    #[serde(default)]
    pub info_text: String,
}

impl LoadTextInputs {
    fn folder(&self) -> LoadFolder {
        LoadFolder::from_label_lossy(&self.folder)
    }

    pub fn validate(&self, dirs: &HostDirs) -> Result<(), TextToolsError> {
        loader::validate_folder_file(dirs, self.folder(), &self.file)
    }

    pub fn run(&self, dirs: &HostDirs) -> NodeOutput {
        NodeOutput::value(loader::load_folder_file(dirs, self.folder(), &self.file))
    }

    pub fn changed(&self, dirs: &HostDirs) -> Option<SystemTime> {
        loader::folder_change_marker(dirs, self.folder(), &self.file)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadTextPathInputs {
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub info_text: String,
}

impl LoadTextPathInputs {
    pub fn validate(&self) -> Result<(), TextToolsError> {
        loader::validate_path(&self.file_path).map(|_| ())
    }

    pub fn run(&self) -> NodeOutput {
        NodeOutput::value(loader::load_path(&self.file_path))
    }

    pub fn changed(&self) -> Option<SystemTime> {
        loader::path_change_marker(&self.file_path)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveTextInputs {
    pub text: String,
    #[serde(default = "default_prefix")]
    pub filename_prefix: String,
    #[serde(default = "default_format")]
    pub file_format: String,
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

impl SaveTextInputs {
    /// Write the file and report it to the UI. Write failures are logged
    /// and reported as an empty file list.
    pub fn run<Tz>(&self, dirs: &HostDirs, now: &DateTime<Tz>) -> Result<NodeOutput, TextToolsError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let request = SaveRequest {
            text: &self.text,
            filename_prefix: &self.filename_prefix,
            format: self.file_format.parse()?,
            pretty_json: self.pretty_json,
        };

        let files = match save_text(&dirs.output, &request, now) {
            Ok(saved) => vec![saved],
            Err(e) => {
                tracing::error!("{}", e);
                Vec::new()
            }
        };

        Ok(NodeOutput::saved(files))
    }
}

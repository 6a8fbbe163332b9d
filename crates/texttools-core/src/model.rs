use serde::{Deserialize, Serialize};

/// Fully resolved configuration (all defaults applied)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub paths: Paths,
    pub save: SaveDefaults,
    pub merge: MergeDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paths {
    pub root: String,
    pub input: String,
    pub output: String,
    pub temp: String,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            input: "input".to_string(),
            output: "output".to_string(),
            temp: "temp".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveDefaults {
    #[serde(rename = "filenamePrefix")]
    pub filename_prefix: String,
    #[serde(rename = "fileFormat")]
    pub file_format: String,
    #[serde(rename = "prettyJson")]
    pub pretty_json: bool,
}

impl Default for SaveDefaults {
    fn default() -> Self {
        Self {
            filename_prefix: crate::writers::text_file::DEFAULT_PREFIX.to_string(),
            file_format: "txt".to_string(),
            pretty_json: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeDefaults {
    pub separator: String,
}

impl Default for MergeDefaults {
    fn default() -> Self {
        Self {
            separator: crate::merge::DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: Paths::default(),
            save: SaveDefaults::default(),
            merge: MergeDefaults::default(),
        }
    }
}

/// One config file as written on disk; every field optional so that
/// user and local files can override only what they need
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub paths: Option<PartialPaths>,
    pub save: Option<PartialSave>,
    pub merge: Option<PartialMerge>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PartialPaths {
    pub root: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub temp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSave {
    #[serde(rename = "filenamePrefix")]
    pub filename_prefix: Option<String>,
    #[serde(rename = "fileFormat")]
    pub file_format: Option<String>,
    #[serde(rename = "prettyJson")]
    pub pretty_json: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PartialMerge {
    pub separator: Option<String>,
}

// Load .txt/.json/.md files from the host folders or from an arbitrary path

use crate::config::HostDirs;
use crate::error::TextToolsError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::SystemTime;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = [".txt", ".json", ".md"];

/// Folder choices offered by the folder loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadFolder {
    /// Directory the host runs from
    ComfyuiRoot,
    #[default]
    Input,
    Output,
    /// `text` subfolder of the output directory
    OutputText,
    Temp,
}

impl LoadFolder {
    pub const ALL: [Self; 5] = [
        Self::ComfyuiRoot,
        Self::Input,
        Self::Output,
        Self::OutputText,
        Self::Temp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ComfyuiRoot => "comfyui_root",
            Self::Input => "input",
            Self::Output => "output",
            Self::OutputText => "output_text",
            Self::Temp => "temp",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    /// Unknown labels resolve to the input folder
    pub fn from_label_lossy(label: &str) -> Self {
        Self::from_label(label).unwrap_or_default()
    }

    pub fn path(self, dirs: &HostDirs) -> PathBuf {
        match self {
            Self::ComfyuiRoot => dirs.root.clone(),
            Self::Input => dirs.input.clone(),
            Self::Output => dirs.output.clone(),
            Self::OutputText => dirs.output.join("text"),
            Self::Temp => dirs.temp.clone(),
        }
    }
}

impl FromStr for LoadFolder {
    type Err = TextToolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            let labels: Vec<&str> = Self::ALL.iter().map(|f| f.label()).collect();
            TextToolsError::unknown_label("folder", s, &labels)
        })
    }
}

pub fn is_supported(name: &str) -> bool {
    SUPPORTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Re-indent JSON with two spaces, keeping key order and non-ASCII text.
/// Returns `None` when `content` is not valid JSON.
pub fn pretty_print_json(content: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(content).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

fn decode(path: &Path) -> Result<String, TextToolsError> {
    let content = fs::read_to_string(path).map_err(TextToolsError::Load)?;

    if path.to_string_lossy().ends_with(".json") {
        if let Some(pretty) = pretty_print_json(&content) {
            return Ok(pretty);
        }
        tracing::debug!(path = %path.display(), "not valid JSON, returning raw text");
    }

    Ok(content)
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

// ---------------------------------------------------------------------------
// Folder loader
// ---------------------------------------------------------------------------

/// Supported files directly inside `folder`, sorted by name
pub fn list_text_files(dirs: &HostDirs, folder: LoadFolder) -> Vec<String> {
    let base = folder.path(dirs);
    if !base.exists() {
        return Vec::new();
    }

    let entries = match fs::read_dir(&base) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(folder = %base.display(), "Failed to list folder: {}", e);
            return Vec::new();
        }
    };

    let mut files: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| is_supported(name))
        .collect();

    files.sort();
    files
}

/// Body of the folder-listing response sent to the file picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileListResponse {
    pub files: Vec<String>,
    pub success: bool,
}

pub fn list_files_response(dirs: &HostDirs, folder_label: &str) -> FileListResponse {
    FileListResponse {
        files: list_text_files(dirs, LoadFolder::from_label_lossy(folder_label)),
        success: true,
    }
}

pub fn validate_folder_file(
    dirs: &HostDirs,
    folder: LoadFolder,
    file: &str,
) -> Result<(), TextToolsError> {
    if file.is_empty() {
        return Err(TextToolsError::NoFileSpecified);
    }

    if !folder.path(dirs).join(file).exists() {
        return Err(TextToolsError::NotFoundInFolder {
            file: file.to_string(),
            folder: folder.label().to_string(),
        });
    }

    if !is_supported(file) {
        return Err(TextToolsError::UnsupportedExtension);
    }

    Ok(())
}

pub fn read_folder_file(
    dirs: &HostDirs,
    folder: LoadFolder,
    file: &str,
) -> Result<String, TextToolsError> {
    if file.is_empty() {
        return Err(TextToolsError::NoFileSpecified);
    }

    let target = folder.path(dirs).join(file);
    if !target.exists() {
        return Err(TextToolsError::NotFound(target.display().to_string()));
    }

    decode(&target)
}

/// Node behavior: file content, or the failure message as the output text
pub fn load_folder_file(dirs: &HostDirs, folder: LoadFolder, file: &str) -> String {
    read_folder_file(dirs, folder, file).unwrap_or_else(|e| {
        tracing::warn!(folder = folder.label(), file, "{}", e);
        e.to_string()
    })
}

/// Modification time used by the host to decide whether to re-run.
/// `None` means "always re-run".
pub fn folder_change_marker(dirs: &HostDirs, folder: LoadFolder, file: &str) -> Option<SystemTime> {
    if file.is_empty() {
        return None;
    }
    modified(&folder.path(dirs).join(file))
}

// ---------------------------------------------------------------------------
// Path loader
// ---------------------------------------------------------------------------

/// Trim whitespace, then any surrounding double and single quotes
/// (as left by "Copy as path")
pub fn clean_path_input(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim_matches('\'')
}

pub fn validate_path(raw: &str) -> Result<PathBuf, TextToolsError> {
    let path = check_path(raw)?;
    let name = path.to_string_lossy();
    if !is_supported(&name) {
        return Err(TextToolsError::UnsupportedExtension);
    }
    Ok(path)
}

fn check_path(raw: &str) -> Result<PathBuf, TextToolsError> {
    if raw.trim().is_empty() {
        return Err(TextToolsError::NoFilePathSpecified);
    }

    let cleaned = clean_path_input(raw);
    let path = PathBuf::from(cleaned);

    if !path.exists() {
        return Err(TextToolsError::NotFound(cleaned.to_string()));
    }
    if !path.is_file() {
        return Err(TextToolsError::NotAFile(cleaned.to_string()));
    }

    Ok(path)
}

pub fn read_path(raw: &str) -> Result<String, TextToolsError> {
    let path = check_path(raw)?;
    decode(&path)
}

/// Node behavior: file content, or the failure message as the output text
pub fn load_path(raw: &str) -> String {
    read_path(raw).unwrap_or_else(|e| {
        tracing::warn!(path = raw, "{}", e);
        e.to_string()
    })
}

pub fn path_change_marker(raw: &str) -> Option<SystemTime> {
    if raw.trim().is_empty() {
        return None;
    }
    modified(Path::new(clean_path_input(raw)))
}

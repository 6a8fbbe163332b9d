// Write text to the output directory as <prefix>_<counter>.<ext>

use crate::error::TextToolsError;
use crate::loader::pretty_print_json;
use crate::writers::filename::expand_prefix;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::str::FromStr;

pub const DEFAULT_PREFIX: &str = "ComfyUI_text";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    #[default]
    Txt,
    Json,
    Md,
}

impl FileFormat {
    pub const ALL: [Self; 3] = [Self::Txt, Self::Json, Self::Md];

    /// Label and file extension (without the dot)
    pub fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Json => "json",
            Self::Md => "md",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == label)
    }
}

impl Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FileFormat {
    type Err = TextToolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
            .ok_or_else(|| TextToolsError::unknown_label("file format", s, &["txt", "json", "md"]))
    }
}

/// Entry reported back to the host UI for every written file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedFile {
    pub filename: String,
    pub subfolder: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone)]
pub struct SaveRequest<'a> {
    pub text: &'a str,
    pub filename_prefix: &'a str,
    pub format: FileFormat,
    pub pretty_json: bool,
}

impl<'a> SaveRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            filename_prefix: DEFAULT_PREFIX,
            format: FileFormat::Txt,
            pretty_json: true,
        }
    }
}

/// Split "a/b/name" into ("a/b", "name"). Both `/` and the platform
/// separator are accepted; a prefix without separators has no subfolder.
pub fn split_prefix(prefix: &str) -> (String, String) {
    let normalized = prefix.replace('/', &MAIN_SEPARATOR.to_string());
    match normalized.rsplit_once(MAIN_SEPARATOR) {
        Some((dir, base)) => {
            let trimmed = dir.trim_end_matches(MAIN_SEPARATOR);
            let dir = if trimmed.is_empty() { dir } else { trimmed };
            (dir.to_string(), base.to_string())
        }
        None => (String::new(), normalized),
    }
}

/// First `<base>_NNNNN.<ext>` in `dir` that does not exist yet, counting from 1
pub fn next_available(dir: &Path, base: &str, format: FileFormat) -> (String, PathBuf) {
    let mut counter: u64 = 1;
    loop {
        let filename = format!("{}_{:05}.{}", base, counter, format.extension());
        let path = dir.join(&filename);
        if !path.exists() {
            return (filename, path);
        }
        counter += 1;
    }
}

/// Expand the prefix, pick the next free filename under `output_dir` and write
pub fn save_text<Tz>(
    output_dir: &Path,
    request: &SaveRequest<'_>,
    now: &DateTime<Tz>,
) -> Result<SavedFile, TextToolsError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let prefix = expand_prefix(request.filename_prefix, now)?;
    let (subfolder, base) = split_prefix(&prefix);

    let target_dir = if subfolder.is_empty() {
        output_dir.to_path_buf()
    } else {
        let dir = output_dir.join(&subfolder);
        fs::create_dir_all(&dir).map_err(TextToolsError::Save)?;
        dir
    };

    let (filename, path) = next_available(&target_dir, &base, request.format);

    let content = if request.format == FileFormat::Json && request.pretty_json {
        pretty_print_json(request.text).unwrap_or_else(|| request.text.to_string())
    } else {
        request.text.to_string()
    };

    fs::write(&path, content).map_err(TextToolsError::Save)?;
    tracing::info!(path = %path.display(), "saved text file");

    Ok(SavedFile {
        filename,
        subfolder,
        kind: "output".to_string(),
    })
}

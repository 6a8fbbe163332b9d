use crate::model::{Config, PartialConfig};
use crate::writers::text_file::FileFormat;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-level config directory, relative to the working directory
pub const CONFIG_DIR: &str = ".texttools";

/// Load a single config file on top of the built-in defaults
pub fn load_config(path: &Path) -> Result<Config> {
    let partial = load_single_config(path)?;
    validate_and_convert(merge_configs(vec![partial]))
}

/// Load config with precedence:
/// 1. User config (~/.texttools/config.toml) - lowest priority
/// 2. Project config (.texttools/config.toml) - medium priority
/// 3. Local config (.texttools/config.local.toml) - highest priority
///
/// Every file is optional; built-in defaults fill whatever none of them set.
pub fn load_config_with_precedence() -> Result<Config> {
    let home = dirs::home_dir();
    load_config_from(Path::new("."), home.as_deref())
}

/// Same as [`load_config_with_precedence`] with explicit project and home directories
pub fn load_config_from(project_dir: &Path, home_dir: Option<&Path>) -> Result<Config> {
    let mut configs = Vec::new();

    // 1. Try user config
    if let Some(home_dir) = home_dir {
        let user_config = home_dir.join(CONFIG_DIR).join("config.toml");
        if user_config.exists() {
            match load_single_config(&user_config) {
                Ok(cfg) => configs.push(cfg),
                Err(e) => tracing::warn!("Failed to load user config: {:#}", e),
            }
        }
    }

    // 2. Project config
    let project_config = project_dir.join(CONFIG_DIR).join("config.toml");
    if project_config.exists() {
        configs.push(load_single_config(&project_config)?);
    }

    // 3. Try local config (optional override)
    let local_config = project_dir.join(CONFIG_DIR).join("config.local.toml");
    if local_config.exists() {
        match load_single_config(&local_config) {
            Ok(cfg) => configs.push(cfg),
            Err(e) => tracing::warn!("Failed to load local config: {:#}", e),
        }
    }

    tracing::debug!(files = configs.len(), "loaded config files");
    validate_and_convert(merge_configs(configs))
}

fn load_single_config(path: &Path) -> Result<PartialConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: PartialConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}

/// Later configs override earlier ones, field by field
fn merge_configs(configs: Vec<PartialConfig>) -> PartialConfig {
    let mut merged = PartialConfig::default();

    for cfg in configs {
        if let Some(new_paths) = cfg.paths {
            let paths = merged.paths.get_or_insert_with(Default::default);
            if new_paths.root.is_some() {
                paths.root = new_paths.root;
            }
            if new_paths.input.is_some() {
                paths.input = new_paths.input;
            }
            if new_paths.output.is_some() {
                paths.output = new_paths.output;
            }
            if new_paths.temp.is_some() {
                paths.temp = new_paths.temp;
            }
        }

        if let Some(new_save) = cfg.save {
            let save = merged.save.get_or_insert_with(Default::default);
            if new_save.filename_prefix.is_some() {
                save.filename_prefix = new_save.filename_prefix;
            }
            if new_save.file_format.is_some() {
                save.file_format = new_save.file_format;
            }
            if new_save.pretty_json.is_some() {
                save.pretty_json = new_save.pretty_json;
            }
        }

        if let Some(new_merge) = cfg.merge {
            let merge = merged.merge.get_or_insert_with(Default::default);
            if new_merge.separator.is_some() {
                merge.separator = new_merge.separator;
            }
        }
    }

    merged
}

/// Fill defaults and check values that must name a known choice
fn validate_and_convert(partial: PartialConfig) -> Result<Config> {
    let mut config = Config::default();

    if let Some(paths) = partial.paths {
        if let Some(root) = paths.root {
            config.paths.root = root;
        }
        if let Some(input) = paths.input {
            config.paths.input = input;
        }
        if let Some(output) = paths.output {
            config.paths.output = output;
        }
        if let Some(temp) = paths.temp {
            config.paths.temp = temp;
        }
    }

    if let Some(save) = partial.save {
        if let Some(prefix) = save.filename_prefix {
            config.save.filename_prefix = prefix;
        }
        if let Some(format) = save.file_format {
            format
                .parse::<FileFormat>()
                .with_context(|| "Invalid value for save.fileFormat")?;
            config.save.file_format = format;
        }
        if let Some(pretty) = save.pretty_json {
            config.save.pretty_json = pretty;
        }
    }

    if let Some(merge) = partial.merge {
        if let Some(separator) = merge.separator {
            config.merge.separator = separator;
        }
    }

    Ok(config)
}

/// Host directories the load and save nodes work against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDirs {
    pub root: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub temp: PathBuf,
}

impl HostDirs {
    /// Resolve `root` against `base` and the other directories against `root`
    pub fn from_config(config: &Config, base: &Path) -> Self {
        let root = base.join(&config.paths.root);
        Self {
            input: root.join(&config.paths.input),
            output: root.join(&config.paths.output),
            temp: root.join(&config.paths.temp),
            root,
        }
    }

    /// Default layout under `root`: input/, output/, temp/
    pub fn under(root: &Path) -> Self {
        Self::from_config(&Config::default(), root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_any_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config_from(tmp.path(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_host_dirs_resolve_relative_to_root() {
        let mut config = Config::default();
        config.paths.root = "comfy".to_string();
        config.paths.output = "/abs/out".to_string();

        let dirs = HostDirs::from_config(&config, Path::new("/base"));
        assert_eq!(dirs.root, PathBuf::from("/base/comfy"));
        assert_eq!(dirs.input, PathBuf::from("/base/comfy/input"));
        assert_eq!(dirs.output, PathBuf::from("/abs/out"));
        assert_eq!(dirs.temp, PathBuf::from("/base/comfy/temp"));
    }

    #[test]
    fn test_invalid_file_format_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[save]\nfileFormat = \"pdf\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown file format 'pdf'"));
    }
}

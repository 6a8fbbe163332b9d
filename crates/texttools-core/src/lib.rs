pub mod config;
pub mod error;
pub mod loader;
pub mod merge;
pub mod model;
pub mod nodes;
pub mod ordering;
pub mod placement;
pub mod registry;
pub mod writers;

pub use error::TextToolsError;
pub use merge::{merge_two, Fragment, MultiMerge, TwoTextOrder};
pub use ordering::TextOrder;
pub use placement::{place_separators, SeparatorPlacement};

use anyhow::{Context, Result};
use config::HostDirs;
use std::path::Path;

fn host_dirs(config: &model::Config) -> HostDirs {
    HostDirs::from_config(config, Path::new("."))
}

/// Merge two texts and print the result
pub fn cmd_merge(
    text1: Option<&str>,
    text2: Option<&str>,
    order: &str,
    separator: Option<&str>,
    insert_separator: &str,
) -> Result<()> {
    let config = config::load_config_with_precedence()?;

    let order: TwoTextOrder = order.parse()?;
    let separator = separator.unwrap_or(&config.merge.separator);
    let placement = SeparatorPlacement::from_label_lossy(insert_separator);

    println!("{}", merge_two(text1, text2, order, separator, placement));
    Ok(())
}

/// Options for [`cmd_merge_multi`], mirroring the multi-text node inputs
#[derive(Debug, Clone, Default)]
pub struct MultiMergeArgs {
    pub text_order: String,
    pub custom_order: String,
    pub separator: Option<String>,
    pub insert_separator: String,
    /// Slot texts as "N=VALUE"
    pub texts: Vec<String>,
    /// 1-based slots to disable
    pub disabled: Vec<usize>,
}

/// Build the multi-text request from CLI arguments
pub fn build_multi_merge(args: &MultiMergeArgs, default_separator: &str) -> Result<MultiMerge> {
    let mut request = MultiMerge {
        order: args.text_order.parse()?,
        custom_order: args.custom_order.clone(),
        separator: args
            .separator
            .clone()
            .unwrap_or_else(|| default_separator.to_string()),
        placement: SeparatorPlacement::from_label_lossy(&args.insert_separator),
        ..MultiMerge::default()
    };

    for text_arg in &args.texts {
        let Some((slot, value)) = text_arg.split_once('=') else {
            anyhow::bail!("Invalid text format '{}'. Expected N=VALUE", text_arg);
        };
        let index: usize = slot
            .trim()
            .parse()
            .with_context(|| format!("Invalid slot '{}' in '{}'", slot, text_arg))?;
        let fragment = request.slot_mut(index).ok_or_else(|| {
            anyhow::anyhow!(
                "Slot {} out of range (1-{})",
                index,
                ordering::MAX_FRAGMENTS
            )
        })?;
        fragment.text = value.to_string();
    }

    for &index in &args.disabled {
        let fragment = request.slot_mut(index).ok_or_else(|| {
            anyhow::anyhow!(
                "Slot {} out of range (1-{})",
                index,
                ordering::MAX_FRAGMENTS
            )
        })?;
        fragment.enabled = false;
    }

    Ok(request)
}

/// Merge up to five texts and print the result
pub fn cmd_merge_multi(args: &MultiMergeArgs) -> Result<()> {
    let config = config::load_config_with_precedence()?;
    let request = build_multi_merge(args, &config.merge.separator)?;
    println!("{}", request.merge());
    Ok(())
}

fn print_node_output(output: &nodes::NodeOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else {
        println!("{}", output.text().unwrap_or_default());
    }
    Ok(())
}

/// Viewer node: print the text unchanged
pub fn cmd_view(text: &str, json: bool) -> Result<()> {
    print_node_output(&nodes::text::view(text), json)
}

/// Editor node: connected input wins over the editor text
pub fn cmd_edit(text: Option<&str>, input: Option<&str>, json: bool) -> Result<()> {
    print_node_output(&nodes::text::edit(text.unwrap_or_default(), input), json)
}

/// Print the file-picker listing for a folder as JSON
pub fn cmd_list(folder: &str) -> Result<()> {
    let config = config::load_config_with_precedence()?;
    let response = loader::list_files_response(&host_dirs(&config), folder);
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

/// Load a file from one of the host folders and print its content
pub fn cmd_load(folder: &str, file: &str) -> Result<()> {
    let config = config::load_config_with_precedence()?;
    let dirs = host_dirs(&config);
    let folder: loader::LoadFolder = folder.parse()?;

    loader::validate_folder_file(&dirs, folder, file)?;
    println!("{}", loader::load_folder_file(&dirs, folder, file));
    Ok(())
}

/// Load a file from an arbitrary path and print its content
pub fn cmd_load_path(path: &str) -> Result<()> {
    loader::validate_path(path)?;
    println!("{}", loader::load_path(path));
    Ok(())
}

/// Save text into the output folder with an auto-numbered filename
pub fn cmd_save(
    text: &str,
    prefix: Option<&str>,
    format: Option<&str>,
    pretty_json: Option<bool>,
) -> Result<()> {
    use owo_colors::OwoColorize;

    let config = config::load_config_with_precedence()?;
    let dirs = host_dirs(&config);

    let format = format.unwrap_or(&config.save.file_format);
    let request = writers::SaveRequest {
        text,
        filename_prefix: prefix.unwrap_or(&config.save.filename_prefix),
        format: format.parse()?,
        pretty_json: pretty_json.unwrap_or(config.save.pretty_json),
    };

    std::fs::create_dir_all(&dirs.output).with_context(|| {
        format!("Failed to create output directory {}", dirs.output.display())
    })?;

    let saved = writers::save_text(&dirs.output, &request, &chrono::Local::now())?;
    let path = dirs.output.join(&saved.subfolder).join(&saved.filename);

    println!(
        "{} {} {}",
        "✓".bright_green(),
        "Saved".green().bold(),
        path.display().to_string().bright_white()
    );
    Ok(())
}

/// Run any registered node with JSON inputs and print its JSON output
pub fn cmd_run(type_id: &str, inputs: &str) -> Result<()> {
    let kind = registry::NodeKind::from_type_id(type_id).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown node type '{}'. Run 'texttools nodes' to list them.",
            type_id
        )
    })?;
    let inputs: serde_json::Value =
        serde_json::from_str(inputs).with_context(|| "Failed to parse node inputs as JSON")?;

    let config = config::load_config_with_precedence()?;
    let output = registry::execute(kind, inputs, &host_dirs(&config))?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// List registered nodes
pub fn cmd_nodes() -> Result<()> {
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{Cell, Row, Table};

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Type", "Display name", "Category", "Returns"]);

    for kind in registry::NodeKind::ALL {
        let returns = kind.return_names().join(", ");
        table.add_row(Row::from(vec![
            Cell::new(kind.type_id()).fg(comfy_table::Color::Cyan),
            Cell::new(kind.display_name()).fg(comfy_table::Color::White),
            Cell::new(kind.category()),
            Cell::new(if returns.is_empty() { "-".to_string() } else { returns }),
        ]));
    }

    println!("{}", table);
    Ok(())
}

/// Show resolved directories and save defaults
pub fn cmd_status() -> Result<()> {
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{Cell, Row, Table};
    use owo_colors::OwoColorize;

    println!();
    println!("{} {}", "▸".bright_cyan(), "text-tools Status".bright_cyan().bold());
    println!();

    let project_config = Path::new(config::CONFIG_DIR).join("config.toml");
    if !project_config.exists() {
        println!(
            "   {} no {} found, using defaults",
            "•".bright_black(),
            project_config.display().to_string().bright_white()
        );
        println!();
    }

    let config = config::load_config_with_precedence()?;
    let dirs = host_dirs(&config);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    for folder in loader::LoadFolder::ALL {
        let path = folder.path(&dirs);
        let (state, color) = if path.is_dir() {
            let count = loader::list_text_files(&dirs, folder).len();
            (format!("{} text file(s)", count), comfy_table::Color::Green)
        } else {
            ("missing".to_string(), comfy_table::Color::Yellow)
        };
        table.add_row(Row::from(vec![
            Cell::new(folder.label()).fg(comfy_table::Color::Cyan),
            Cell::new(path.display().to_string()).fg(comfy_table::Color::White),
            Cell::new(state).fg(color),
        ]));
    }

    table.add_row(Row::from(vec![
        Cell::new("save").fg(comfy_table::Color::Cyan),
        Cell::new(format!(
            "{}_NNNNN.{}",
            config.save.filename_prefix, config.save.file_format
        ))
        .fg(comfy_table::Color::White),
        Cell::new(if config.save.pretty_json { "pretty json" } else { "raw json" }),
    ]));

    println!("{}", table);
    println!();
    Ok(())
}

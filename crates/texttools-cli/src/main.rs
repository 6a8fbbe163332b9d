mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;

#[derive(Parser)]
#[command(name = "texttools", version, about = "Text tools CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge two texts
    Merge {
        text1: Option<String>,
        text2: Option<String>,
        /// "Text1 + Text2" or "Text2 + Text1"
        #[arg(long, default_value = "Text1 + Text2")]
        order: String,
        /// Separator (defaults to the configured one)
        #[arg(long)]
        separator: Option<String>,
        /// Separator placement label, e.g. "Between"
        #[arg(long, default_value = "None")]
        insert_separator: String,
    },
    /// Merge up to five texts with enable flags and ordering
    MergeMulti {
        /// "Sequential" or "Custom"
        #[arg(long, default_value = "Sequential")]
        text_order: String,
        /// Comma-separated 1-based slot indices used with Custom order
        #[arg(long, default_value = "1,2,3")]
        custom_order: String,
        #[arg(long)]
        separator: Option<String>,
        #[arg(long, default_value = "Before, Between, After")]
        insert_separator: String,
        /// Slot text in N=VALUE format (can be specified multiple times)
        #[arg(long = "text", value_name = "N=VALUE")]
        texts: Vec<String>,
        /// Disable a slot (can be specified multiple times)
        #[arg(long = "disable", value_name = "N")]
        disabled: Vec<usize>,
    },
    /// Show a text unchanged
    View {
        text: String,
        /// Print the node output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Editor: a connected input replaces the edited text
    Edit {
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        input: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List loadable text files in a folder
    List {
        #[arg(long, default_value = "input")]
        folder: String,
    },
    /// Load a text file from a host folder
    Load {
        #[arg(long, default_value = "input")]
        folder: String,
        file: String,
    },
    /// Load a text file from any path
    LoadPath { path: String },
    /// Save text to the output folder (reads stdin when no text is given)
    Save {
        text: Option<String>,
        #[arg(long)]
        prefix: Option<String>,
        /// txt, json or md
        #[arg(long)]
        format: Option<String>,
        #[arg(long)]
        no_pretty_json: bool,
    },
    /// Run a node by type id with JSON inputs
    Run {
        type_id: String,
        #[arg(long, default_value = "{}")]
        inputs: String,
    },
    /// List registered nodes
    Nodes,
    /// Show resolved folders and save defaults
    Status,
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.cmd {
        Command::Merge{text1, text2, order, separator, insert_separator} => {
            texttools_core::cmd_merge(
                text1.as_deref(),
                text2.as_deref(),
                &order,
                separator.as_deref(),
                &insert_separator,
            )?
        }
        Command::MergeMulti{text_order, custom_order, separator, insert_separator, texts, disabled} => {
            let args = texttools_core::MultiMergeArgs {
                text_order,
                custom_order,
                separator,
                insert_separator,
                texts,
                disabled,
            };
            texttools_core::cmd_merge_multi(&args)?
        }
        Command::View{text, json} => texttools_core::cmd_view(&text, json)?,
        Command::Edit{text, input, json} => texttools_core::cmd_edit(text.as_deref(), input.as_deref(), json)?,
        Command::List{folder} => texttools_core::cmd_list(&folder)?,
        Command::Load{folder, file} => texttools_core::cmd_load(&folder, &file)?,
        Command::LoadPath{path} => texttools_core::cmd_load_path(&path)?,
        Command::Save{text, prefix, format, no_pretty_json} => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let pretty = if no_pretty_json { Some(false) } else { None };
            texttools_core::cmd_save(&text, prefix.as_deref(), format.as_deref(), pretty)?
        }
        Command::Run{type_id, inputs} => texttools_core::cmd_run(&type_id, &inputs)?,
        Command::Nodes => texttools_core::cmd_nodes()?,
        Command::Status => texttools_core::cmd_status()?,
    }
    Ok(())
}

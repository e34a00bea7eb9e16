//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use qa_checklist::config::AppConfig;
use qa_checklist::core::models::ItemId;
use qa_checklist::core::services::PolicyKind;
use qa_checklist::output::OutputMode;

/// qa-checklist - Manual QA checklist with PDF export
#[derive(Parser, Debug)]
#[command(
    name = "qa-checklist",
    version,
    about = "Manual QA checklist for EMV payment applications",
    long_about = "Fill in the EMV application test checklist and export it as a PDF.\n\n\
                  Items are addressed by id (<section>.<item>, see `list`).\n\
                  Unchecked items need a note unless the validation policy says otherwise."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./qa-checklist.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter qa-checklist.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List checklist sections and item ids
    List {
        /// Checklist definition file (TOML)
        #[arg(short, long)]
        definition: Option<PathBuf>,
    },

    /// Fill in the checklist and export it as PDF
    Export(ExportArgs),

    /// Show version
    Version,
}

/// Arguments of the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// QA operator name (required)
    #[arg(short, long, default_value = "")]
    pub operator: String,

    /// Terminal hardware version
    #[arg(long)]
    pub hardware: Option<String>,

    /// Terminal firmware version
    #[arg(long)]
    pub firmware: Option<String>,

    /// Payment application version
    #[arg(long = "app-version")]
    pub app_version: Option<String>,

    /// Mark an item as passed (repeatable), e.g. --check 1.2
    #[arg(short, long = "check")]
    pub checks: Vec<ItemId>,

    /// Mark every item as passed
    #[arg(long)]
    pub all: bool,

    /// Attach a note to an item (repeatable), e.g. --note 2.4="declined as expected"
    #[arg(short, long = "note", value_parser = parse_note)]
    pub notes: Vec<(ItemId, String)>,

    /// Validation policy: require-note-if-unchecked, always-pass
    #[arg(short, long)]
    pub policy: Option<PolicyKind>,

    /// Checklist definition file (TOML)
    #[arg(short, long)]
    pub definition: Option<PathBuf>,

    /// Directory to write the PDF into
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Skip the public address lookup
    #[arg(long)]
    pub offline: bool,

    /// Print the rendered layout as JSON instead of writing a PDF (no address lookup)
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_note(raw: &str) -> Result<(ItemId, String), String> {
    let (id, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("Invalid note: {raw}. Use <section>.<item>=<text>"))?;
    Ok((id.parse()?, text.to_string()))
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::List { definition }) => {
            let config = AppConfig::load(cli.config.as_deref())?;
            commands::list(definition.as_deref(), &config, output_mode)
        },
        Some(Command::Export(args)) => {
            let config = AppConfig::load(cli.config.as_deref())?;
            commands::export(args, &config, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("qa-checklist v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("qa-checklist v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'qa-checklist --help' for usage");
                println!("Run 'qa-checklist list' to see the checklist");
            }
            Ok(())
        },
    }
}

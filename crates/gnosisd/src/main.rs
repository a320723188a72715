//! Command line front end for the gnosis paper importer.
//!
//! This crate provides a CLI tool for importing academic papers using the `gnosis` library.
//! It supports operations like:
//! - Configuration and catalog initialization
//! - Importing a paper from the URL of its page
//! - Batch imports from a file of URLs
//! - Keyword search across catalog titles
//!
//! # Usage
//!
//! ```bash
//! # Write a configuration and create the catalog
//! gnosis init
//!
//! # Extract a paper and save it without prompting
//! gnosis import https://arxiv.org/abs/1706.03762 --save
//!
//! # Import every URL listed in a file
//! gnosis batch reading-list.txt --save
//!
//! # Search the catalog
//! gnosis search attention transformer
//!
//! # Show one paper with its authors
//! gnosis show 1
//! ```
//!
//! Output is colored when attached to a terminal, and saving asks for confirmation
//! unless `--save`, `--no-save` or `--accept-defaults` decides it. Logging detail is
//! raised with repeated `-v` flags or through `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use gnosis::{
  config::Config,
  database::{Database, StoredPaper},
  draft::PaperDraft,
  error::GnosisError,
  extract::{Extraction, Extractor},
  person::PersonName,
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Import academic papers from their web pages into a local catalog")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the default platform-specific
  /// config directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

impl Cli {
  /// Location of the configuration file in use.
  fn config_path(&self) -> PathBuf { self.config.clone().unwrap_or_else(Config::default_path) }
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set. Logs go to stderr so they never mix with
/// command output.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Runs the parsed command against the loaded configuration.
async fn run<I: UserInteraction>(cli: &Cli, interaction: &I) -> Result<()> {
  let config_path = cli.config_path();
  let config = || -> Result<Config> {
    let config = Config::load_or_default(&config_path)?;
    trace!("Using configuration {config:?}");
    Ok(config)
  };

  match cli.command.clone() {
    Commands::Init(init_args) => init(interaction, &config_path, init_args).await,
    Commands::Import(import_args) => import(interaction, &config()?, import_args).await,
    Commands::Batch(batch_args) => batch(interaction, &config()?, batch_args).await,
    Commands::Search(search_args) => search(interaction, &config()?, search_args).await,
    Commands::Show(show_args) => show(interaction, &config()?, show_args).await,
  }
}

/// Entry point for the gnosis CLI application
///
/// Parses the command line, sets up logging and executes the requested command.
/// Any failure is reported with its user-facing message and the process exits
/// with status 1.
#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let interaction = Terminal::new(cli.accept_defaults);
  if let Err(e) = run(&cli, &interaction).await {
    debug!("Command failed: {e:?}");
    // Reporting itself can only fail if stderr is gone
    let _ = interaction.reply(ResponseContent::Error(&e));
    std::process::exit(1);
  }
}

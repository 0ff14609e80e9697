//! bookfolio CLI
//!
//! Read a portfolio laid out as a book, one page at a time, in the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use bookfolio::catalog::Catalog;
use bookfolio::config::Config;
use bookfolio::error::{BookError, Result};
use bookfolio::logging;
use bookfolio::report::{format_contents, format_defects, format_page};
use bookfolio::tui;
use bookfolio::types::{OutputFormat, Page, PageOrder};

#[derive(Parser)]
#[command(name = "bookfolio")]
#[command(about = "Read a portfolio as an interactive book in the terminal")]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/bookfolio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the book (default)
    Read(ReadArgs),

    /// Print the table of contents
    Contents {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print one page's content
    Page {
        /// Page slug, e.g. project-compiler
        slug: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Check that every link in the book leads to a page
    Check {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(clap::Args, Default)]
struct ReadArgs {
    /// Page to open on (default: cover)
    #[arg(long)]
    start: Option<String>,

    /// Turn pages without animation
    #[arg(long)]
    no_animation: bool,

    /// How long the cover stays up before opening to the index
    #[arg(long)]
    cover_delay_ms: Option<u64>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = load_config(cli.config).and_then(|config| {
        match cli.command.unwrap_or(Commands::Read(ReadArgs::default())) {
            Commands::Read(args) => cmd_read(config, args),
            Commands::Contents { format } => cmd_contents(format.into()),
            Commands::Page { slug, format } => cmd_page(&slug, format.into()),
            Commands::Check { format } => cmd_check(format.into()),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(&path),
        None => Config::load(),
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

fn cmd_read(mut config: Config, args: ReadArgs) -> Result<()> {
    if let Some(slug) = args.start {
        config.start_page = slug.parse()?;
    }
    if args.no_animation {
        config.motion.enabled = false;
    }
    if let Some(ms) = args.cover_delay_ms {
        config.cover_delay_ms = ms;
    }

    if let Some(path) = logging::init(&config.log)? {
        info!(log = %path.display(), start = %config.start_page, "logging started");
    }

    let catalog = Catalog::builtin();
    for defect in catalog.integrity_defects(&PageOrder::canonical()) {
        warn!(%defect, "catalog integrity");
    }

    tui::run::run(&config, catalog)
}

fn cmd_contents(format: OutputFormat) -> Result<()> {
    let out = format_contents(&Catalog::builtin(), &PageOrder::canonical(), format)?;
    print!("{}", out);
    Ok(())
}

fn cmd_page(slug: &str, format: OutputFormat) -> Result<()> {
    let page: Page = slug.parse()?;
    let catalog = Catalog::builtin();
    let record = catalog
        .record(page)
        .ok_or_else(|| BookError::UnknownPage(slug.to_string()))?;
    print!("{}", format_page(record, format)?);
    Ok(())
}

fn cmd_check(format: OutputFormat) -> Result<()> {
    let defects = Catalog::builtin().integrity_defects(&PageOrder::canonical());
    print!("{}", format_defects(&defects, format)?);

    if defects.is_empty() {
        Ok(())
    } else {
        Err(BookError::Integrity(defects.len()))
    }
}

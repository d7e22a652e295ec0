mod cmd;
mod logging;
mod picker;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mdcarve_core::config::ReplacementPolicy;

#[derive(Debug, Parser)]
#[command(name = "mdc", version, about = "Carve markdown sections into other documents")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract the selected byte range into another document
    Selection(SelectionArgs),

    /// Extract the section of the heading at or above the cursor line
    Heading(HeadingArgs),

    /// Extract the heading's section including nested sub-headings;
    /// the cursor line must itself be a heading
    HeadingRecursive(HeadingArgs),

    /// List the headings of a document
    Headings(HeadingsArgs),

    /// Validate configuration and print resolved settings
    Doctor,
}

#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// Source markdown file
    #[arg(long)]
    pub source: PathBuf,

    /// Selection start, byte offset into the source
    #[arg(long)]
    pub start: usize,

    /// Selection end, byte offset into the source
    #[arg(long)]
    pub end: usize,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Debug, Args)]
pub struct HeadingArgs {
    /// Source markdown file
    #[arg(long)]
    pub source: PathBuf,

    /// Cursor line in the source, 1-based
    #[arg(long)]
    pub line: usize,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Destination markdown file; picked interactively when omitted
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Directory scanned for destination candidates
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Override the configured replacement marker
    #[arg(long, value_enum)]
    pub replacement: Option<ReplacementArg>,

    /// Report the destination position after extracting, as an editor
    /// would when opening the destination file
    #[arg(long)]
    pub open: bool,
}

#[derive(Debug, Args)]
pub struct HeadingsArgs {
    /// Markdown file to inspect
    #[arg(long)]
    pub source: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReplacementArg {
    Link,
    Embed,
    None,
}

impl From<ReplacementArg> for ReplacementPolicy {
    fn from(value: ReplacementArg) -> Self {
        match value {
            ReplacementArg::Link => ReplacementPolicy::Link,
            ReplacementArg::Embed => ReplacementPolicy::Embed,
            ReplacementArg::None => ReplacementPolicy::None,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Selection(args) => cmd::extract::run_selection(cli.config.as_deref(), &args),
        Commands::Heading(args) => {
            cmd::extract::run_heading(cli.config.as_deref(), &args, false)
        }
        Commands::HeadingRecursive(args) => {
            cmd::extract::run_heading(cli.config.as_deref(), &args, true)
        }
        Commands::Headings(args) => cmd::headings::run(&args),
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref()),
    }
}

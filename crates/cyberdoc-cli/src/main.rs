mod cmd;
mod output;
mod platform;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, ValueArgs};
use cyberdoc_core::types::ViewKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cyberdoc",
    about = "Fill cybersecurity document templates and export them as Markdown",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .cyberdoc/)
    #[arg(long, global = true, env = "CYBERDOC_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .cyberdoc/ with a default config and a templates directory
    Init,

    /// List templates, most recently updated first
    List,

    /// Show a template's metadata and variables
    Show { id: String },

    /// List required variables that are still blank
    Check {
        id: String,
        #[command(flatten)]
        values: ValueArgs,
    },

    /// Render a template with the given values
    Render {
        id: String,
        /// Projection to print: raw, visual or report
        #[arg(long, default_value = "visual")]
        view: ViewKind,
        #[command(flatten)]
        values: ValueArgs,
    },

    /// Save the rendered document as a Markdown file
    Export {
        id: String,
        /// Output directory (default: export.dir from config)
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        values: ValueArgs,
    },

    /// Copy the rendered document to the clipboard
    Copy {
        id: String,
        /// Copy the template source with placeholders instead
        #[arg(long)]
        raw: bool,
        #[command(flatten)]
        values: ValueArgs,
    },

    /// Open the document report in the system viewer for printing
    Print {
        id: String,
        #[command(flatten)]
        values: ValueArgs,
    },

    /// Inspect and validate the configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved project root");

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::List => cmd::list::run(&root, cli.json),
        Commands::Show { id } => cmd::show::run(&root, &id, cli.json),
        Commands::Check { id, values } => cmd::check::run(&root, &id, &values, cli.json),
        Commands::Render { id, view, values } => {
            cmd::render::run(&root, &id, view, &values, cli.json)
        }
        Commands::Export { id, out, values } => {
            cmd::export::download(&root, &id, out, &values, cli.json)
        }
        Commands::Copy { id, raw, values } => cmd::export::copy(&root, &id, raw, &values, cli.json),
        Commands::Print { id, values } => cmd::print::run(&root, &id, &values, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

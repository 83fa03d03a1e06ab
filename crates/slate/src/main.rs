//! slate CLI - Region-based page composition.
//!
//! Provides commands for:
//! - `render`: Compose a stored page's regions into HTML
//! - `content`: Print the raw stored document for a page
//! - `paths`: Show the storage paths probed for a page
//! - `outline`: List a page's region tree

mod commands;
mod error;
mod output;

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CommonArgs, ContentArgs, OutlineArgs, PathsArgs, RenderArgs};
use error::CliError;
use output::Output;

/// slate - Region-based page composition.
#[derive(Parser)]
#[command(name = "slate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a page's regions into HTML.
    Render(RenderArgs),
    /// Print the stored document for a page.
    Content(ContentArgs),
    /// Show the storage paths probed for a page.
    Paths(PathsArgs),
    /// List a page's region tree.
    Outline(OutlineArgs),
}

impl Commands {
    fn common(&self) -> &CommonArgs {
        match self {
            Self::Render(args) => &args.common,
            Self::Content(args) => &args.common,
            Self::Paths(args) => &args.common,
            Self::Outline(args) => &args.common,
        }
    }

    fn execute(self, out: &mut dyn Write) -> Result<(), CliError> {
        match self {
            Self::Render(args) => args.execute(out),
            Self::Content(args) => args.execute(out),
            Self::Paths(args) => args.execute(out),
            Self::Outline(args) => args.execute(out),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.common().verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    match cli.command.execute(&mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

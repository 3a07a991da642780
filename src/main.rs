//! Shell-backed directory listings and folder opening.
//!
//! Run `shelltree tree` to print the OS tree utility's output, `shelltree
//! list` for a scripting-shell listing (optionally filtered by extension),
//! and `shelltree open <path>` to show a folder in the file explorer.

mod config;
mod core;
mod shell;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::core::executor::{CommandExecutor, CommandOutput};
use crate::shell::explorer;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Shell-backed directory listings")]
struct Cli {
    /// Root directory listings are anchored to
    /// (defaults to the configured root, then `.`).
    #[arg(long)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the directory tree via the native `tree` utility.
    Tree,
    /// List every path under the root via the scripting shell.
    List {
        /// Only include files with these extensions (e.g. `.txt`).
        #[arg(long = "ext")]
        extensions: Vec<String>,
    },
    /// Open a folder in the system file explorer.
    Open {
        /// Folder to open.
        path: PathBuf,
    },
}

// ───────────────────────────────────────── main ─────────────

fn main() -> ExitCode {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let user_config = config::AppConfig::load();

    let root = cli
        .root
        .or(user_config.default_root)
        .unwrap_or_else(|| PathBuf::from("."));
    let executor = CommandExecutor::new(root);
    tracing::debug!(root = %executor.root_path().display(), "listings anchored");

    match cli.command {
        Command::Tree => emit(executor.tree_native()),
        Command::List { extensions } => {
            let extensions = if extensions.is_empty() {
                user_config.extensions
            } else {
                extensions
            };
            emit(executor.tree_script_filtered(&extensions))
        }
        Command::Open { path } => {
            if explorer::open_folder(&path) {
                ExitCode::SUCCESS
            } else {
                eprintln!("could not open folder: {}", path.display());
                ExitCode::FAILURE
            }
        }
    }
}

/// Print a command's output pair: listing text to stdout, failure text to
/// stderr.  A non-empty stderr slot maps to a non-zero exit code.
fn emit(output: CommandOutput) -> ExitCode {
    print!("{}", output.stdout);
    if output.stderr.is_empty() {
        ExitCode::SUCCESS
    } else {
        eprint!("{}", output.stderr);
        ExitCode::FAILURE
    }
}
